//! Service context - dependency container for services
//!
//! Holds the repositories, the session store, upload storage, and the id
//! generator. Backends are trait objects so the same services run against
//! PostgreSQL/Redis in production and in-memory stores in tests.

use std::sync::Arc;

use blurb_core::traits::{ArticleRepository, SessionStore, UserRepository};
use blurb_core::{Snowflake, SnowflakeGenerator};

use crate::storage::UploadStore;

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
#[derive(Clone)]
pub struct ServiceContext {
    user_repo: Arc<dyn UserRepository>,
    article_repo: Arc<dyn ArticleRepository>,
    session_store: Arc<dyn SessionStore>,
    upload_store: Arc<UploadStore>,
    snowflake_generator: Arc<SnowflakeGenerator>,
    author_password: Arc<str>,
}

impl ServiceContext {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        article_repo: Arc<dyn ArticleRepository>,
        session_store: Arc<dyn SessionStore>,
        upload_store: Arc<UploadStore>,
        snowflake_generator: Arc<SnowflakeGenerator>,
        author_password: Arc<str>,
    ) -> Self {
        Self {
            user_repo,
            article_repo,
            session_store,
            upload_store,
            snowflake_generator,
            author_password,
        }
    }

    // === Repositories ===

    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    pub fn article_repo(&self) -> &dyn ArticleRepository {
        self.article_repo.as_ref()
    }

    // === Sessions & uploads ===

    pub fn session_store(&self) -> &dyn SessionStore {
        self.session_store.as_ref()
    }

    pub fn upload_store(&self) -> &UploadStore {
        self.upload_store.as_ref()
    }

    // === Ids & secrets ===

    /// Generate a new Snowflake ID
    pub fn generate_id(&self) -> Snowflake {
        self.snowflake_generator.generate()
    }

    /// Plain equality against the shared author password
    pub fn is_author_password(&self, candidate: &str) -> bool {
        *self.author_password == *candidate
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .field("upload_store", &self.upload_store)
            .field("worker_id", &self.snowflake_generator.worker_id())
            .finish_non_exhaustive()
    }
}

/// Builder for creating ServiceContext with custom configuration
#[derive(Default)]
pub struct ServiceContextBuilder {
    user_repo: Option<Arc<dyn UserRepository>>,
    article_repo: Option<Arc<dyn ArticleRepository>>,
    session_store: Option<Arc<dyn SessionStore>>,
    upload_store: Option<Arc<UploadStore>>,
    snowflake_generator: Option<Arc<SnowflakeGenerator>>,
    author_password: Option<Arc<str>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn article_repo(mut self, repo: Arc<dyn ArticleRepository>) -> Self {
        self.article_repo = Some(repo);
        self
    }

    pub fn session_store(mut self, store: Arc<dyn SessionStore>) -> Self {
        self.session_store = Some(store);
        self
    }

    pub fn upload_store(mut self, store: Arc<UploadStore>) -> Self {
        self.upload_store = Some(store);
        self
    }

    pub fn snowflake_generator(mut self, generator: Arc<SnowflakeGenerator>) -> Self {
        self.snowflake_generator = Some(generator);
        self
    }

    pub fn author_password(mut self, password: impl Into<Arc<str>>) -> Self {
        self.author_password = Some(password.into());
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.user_repo.ok_or_else(|| ServiceError::validation("user_repo is required"))?,
            self.article_repo.ok_or_else(|| ServiceError::validation("article_repo is required"))?,
            self.session_store.ok_or_else(|| ServiceError::validation("session_store is required"))?,
            self.upload_store.ok_or_else(|| ServiceError::validation("upload_store is required"))?,
            self.snowflake_generator
                .ok_or_else(|| ServiceError::validation("snowflake_generator is required"))?,
            self.author_password
                .ok_or_else(|| ServiceError::validation("author_password is required"))?,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::test_support::{test_context, PASSWORD};

    #[test]
    fn test_build_requires_dependencies() {
        let err = ServiceContextBuilder::new().build().unwrap_err();
        assert!(err.to_string().contains("user_repo is required"));
    }

    #[tokio::test]
    async fn test_author_password_is_exact() {
        let t = test_context().await;
        assert!(t.ctx.is_author_password(PASSWORD));
        assert!(!t.ctx.is_author_password("correct horse "));
        assert!(!t.ctx.is_author_password(""));
    }
}
