//! Session entity - the opaque handle correlating anonymous requests

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Server-side session record kept by a [`crate::SessionStore`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub last_seen_at: DateTime<Utc>,
}

impl Session {
    pub fn new(id: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: id.into(),
            created_at: now,
            last_seen_at: now,
        }
    }

    /// Mark the session as used by the current request
    pub fn touch(&mut self) {
        self.last_seen_at = Utc::now();
    }
}
