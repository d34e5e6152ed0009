//! In-memory implementation of UserRepository

use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::Arc;

use blurb_core::entities::User;
use blurb_core::traits::{RepoResult, UserRepository};

/// Users keyed by session id
#[derive(Clone, Default)]
pub struct MemoryUserRepository {
    users: Arc<DashMap<String, User>>,
}

impl MemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

#[async_trait]
impl UserRepository for MemoryUserRepository {
    async fn find_by_session(&self, session_id: &str) -> RepoResult<Option<User>> {
        Ok(self.users.get(session_id).map(|entry| entry.value().clone()))
    }

    async fn save(&self, user: &User) -> RepoResult<()> {
        self.users.insert(user.session_id.clone(), user.clone());
        Ok(())
    }
}
