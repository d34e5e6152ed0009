//! In-process session store used when Redis is not configured

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use dashmap::DashMap;
use std::sync::Arc;

use blurb_core::entities::Session;
use blurb_core::traits::{RepoResult, SessionStore};

use super::new_session_id;

/// Sessions with a sliding expiry, held in a dashmap
#[derive(Debug, Clone)]
pub struct MemorySessionStore {
    sessions: Arc<DashMap<String, (Session, DateTime<Utc>)>>,
    ttl: Duration,
}

impl MemorySessionStore {
    pub fn new(ttl_secs: i64) -> Self {
        Self {
            sessions: Arc::new(DashMap::new()),
            ttl: Duration::seconds(ttl_secs),
        }
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Drop every session whose expiry has passed
    pub fn sweep_expired(&self) -> usize {
        let now = Utc::now();
        let before = self.sessions.len();
        self.sessions.retain(|_, (_, expires_at)| *expires_at > now);
        before.saturating_sub(self.sessions.len())
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn create(&self) -> RepoResult<Session> {
        self.sweep_expired();
        let session = Session::new(new_session_id());
        self.set(&session).await?;
        Ok(session)
    }

    async fn get(&self, id: &str) -> RepoResult<Option<Session>> {
        let now = Utc::now();
        let found = self
            .sessions
            .get(id)
            .map(|entry| (entry.0.clone(), entry.1));

        match found {
            Some((session, expires_at)) if expires_at > now => Ok(Some(session)),
            Some(_) => {
                self.sessions.remove(id);
                Ok(None)
            }
            None => Ok(None),
        }
    }

    async fn set(&self, session: &Session) -> RepoResult<()> {
        let expires_at = Utc::now() + self.ttl;
        self.sessions
            .insert(session.id.clone(), (session.clone(), expires_at));
        Ok(())
    }
}
