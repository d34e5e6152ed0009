//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation (PostgreSQL, Redis, or in-process memory).

use async_trait::async_trait;

use crate::entities::{Article, Session, User};
use crate::error::DomainError;
use crate::value_objects::{ReactionKind, Snowflake, TimeWindow};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find the reader bound to a session id
    async fn find_by_session(&self, session_id: &str) -> RepoResult<Option<User>>;

    /// Insert or fully overwrite the user keyed by its session id
    async fn save(&self, user: &User) -> RepoResult<()>;
}

// ============================================================================
// Article Repository
// ============================================================================

#[async_trait]
pub trait ArticleRepository: Send + Sync {
    /// Find article by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Article>>;

    /// Articles created inside the window, newest first
    async fn find_in_window(&self, window: &TimeWindow) -> RepoResult<Vec<Article>>;

    /// Persist a new article
    async fn create(&self, article: &Article) -> RepoResult<()>;

    /// Atomically bump one counter and return the updated article.
    ///
    /// Returns `DomainError::ArticleNotFound` when the id is unknown.
    async fn increment_reaction(&self, id: Snowflake, kind: ReactionKind) -> RepoResult<Article>;
}

// ============================================================================
// Session Store
// ============================================================================

#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Mint and persist a brand new session
    async fn create(&self) -> RepoResult<Session>;

    /// Look up a live session; expired or unknown ids yield `None`
    async fn get(&self, id: &str) -> RepoResult<Option<Session>>;

    /// Save the session, refreshing its expiry
    async fn set(&self, session: &Session) -> RepoResult<()>;
}
