//! Redis-backed session store.
//!
//! Each session lives under `session:{id}` as JSON. Every `set` rewrites
//! the key with a fresh TTL, so active sessions slide forward.

use async_trait::async_trait;
use tracing::instrument;

use blurb_core::entities::Session;
use blurb_core::error::DomainError;
use blurb_core::traits::{RepoResult, SessionStore};

use crate::pool::{RedisPool, RedisPoolError};

use super::new_session_id;

/// Key prefix for sessions
const SESSION_PREFIX: &str = "session:";

fn session_key(id: &str) -> String {
    format!("{SESSION_PREFIX}{id}")
}

fn map_cache_error(e: RedisPoolError) -> DomainError {
    DomainError::CacheError(e.to_string())
}

/// Session store backed by Redis
#[derive(Debug, Clone)]
pub struct RedisSessionStore {
    pool: RedisPool,
    ttl_secs: u64,
}

impl RedisSessionStore {
    pub fn new(pool: RedisPool, ttl_secs: u64) -> Self {
        Self { pool, ttl_secs }
    }
}

#[async_trait]
impl SessionStore for RedisSessionStore {
    #[instrument(skip(self))]
    async fn create(&self) -> RepoResult<Session> {
        let session = Session::new(new_session_id());
        self.set(&session).await?;
        tracing::debug!(session_id = %session.id, "Session created");
        Ok(session)
    }

    #[instrument(skip(self))]
    async fn get(&self, id: &str) -> RepoResult<Option<Session>> {
        self.pool
            .get_value(&session_key(id))
            .await
            .map_err(map_cache_error)
    }

    #[instrument(skip(self, session), fields(session_id = %session.id))]
    async fn set(&self, session: &Session) -> RepoResult<()> {
        self.pool
            .set(&session_key(&session.id), session, Some(self.ttl_secs))
            .await
            .map_err(map_cache_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_key() {
        assert_eq!(session_key("abc"), "session:abc");
    }
}
