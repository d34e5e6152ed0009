//! In-memory implementation of ArticleRepository

use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::Arc;

use blurb_core::entities::Article;
use blurb_core::error::DomainError;
use blurb_core::traits::{ArticleRepository, RepoResult};
use blurb_core::value_objects::{ReactionKind, Snowflake, TimeWindow};

/// Articles keyed by id
///
/// Counter bumps hold the entry's shard lock, so concurrent increments on
/// one article never lose an update.
#[derive(Clone, Default)]
pub struct MemoryArticleRepository {
    articles: Arc<DashMap<Snowflake, Article>>,
}

impl MemoryArticleRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }
}

#[async_trait]
impl ArticleRepository for MemoryArticleRepository {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Article>> {
        Ok(self.articles.get(&id).map(|entry| entry.value().clone()))
    }

    async fn find_in_window(&self, window: &TimeWindow) -> RepoResult<Vec<Article>> {
        let mut found: Vec<Article> = self
            .articles
            .iter()
            .filter(|entry| window.contains(entry.created_at))
            .map(|entry| entry.value().clone())
            .collect();
        found.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(found)
    }

    async fn create(&self, article: &Article) -> RepoResult<()> {
        self.articles.insert(article.id, article.clone());
        Ok(())
    }

    async fn increment_reaction(&self, id: Snowflake, kind: ReactionKind) -> RepoResult<Article> {
        let mut entry = self
            .articles
            .get_mut(&id)
            .ok_or(DomainError::ArticleNotFound(id))?;
        entry.increment(kind);
        Ok(entry.value().clone())
    }
}
