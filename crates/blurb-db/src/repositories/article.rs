//! PostgreSQL implementation of ArticleRepository

use async_trait::async_trait;
use sqlx::types::Json;
use sqlx::PgPool;
use tracing::instrument;

use blurb_core::entities::Article;
use blurb_core::error::DomainError;
use blurb_core::traits::{ArticleRepository, RepoResult};
use blurb_core::value_objects::{ReactionKind, Snowflake, TimeWindow};

use crate::mappers::blurb_models;
use crate::models::ArticleModel;

use super::error::map_db_error;

/// PostgreSQL implementation of ArticleRepository
#[derive(Clone)]
pub struct PgArticleRepository {
    pool: PgPool,
}

impl PgArticleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ArticleRepository for PgArticleRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Article>> {
        let result = sqlx::query_as::<_, ArticleModel>(
            r#"
            SELECT id, title, content, image_url, pro_blurbs, con_blurbs, likes, dislikes, created_at
            FROM articles
            WHERE id = $1
            "#,
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Article::from))
    }

    #[instrument(skip(self))]
    async fn find_in_window(&self, window: &TimeWindow) -> RepoResult<Vec<Article>> {
        let results = sqlx::query_as::<_, ArticleModel>(
            r#"
            SELECT id, title, content, image_url, pro_blurbs, con_blurbs, likes, dislikes, created_at
            FROM articles
            WHERE created_at >= $1 AND created_at <= $2
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .bind(window.start)
        .bind(window.end)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Article::from).collect())
    }

    #[instrument(skip(self, article), fields(article_id = %article.id))]
    async fn create(&self, article: &Article) -> RepoResult<()> {
        sqlx::query(
            r#"
            INSERT INTO articles (id, title, content, image_url, pro_blurbs, con_blurbs, likes, dislikes, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(article.id.into_inner())
        .bind(&article.title)
        .bind(&article.content)
        .bind(&article.image_url)
        .bind(Json(blurb_models(&article.pro_blurbs)))
        .bind(Json(blurb_models(&article.con_blurbs)))
        .bind(article.likes)
        .bind(article.dislikes)
        .bind(article.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn increment_reaction(&self, id: Snowflake, kind: ReactionKind) -> RepoResult<Article> {
        // The column name comes from a closed enum, never from input
        let query = match kind {
            ReactionKind::Like => {
                r#"
                UPDATE articles SET likes = likes + 1
                WHERE id = $1
                RETURNING id, title, content, image_url, pro_blurbs, con_blurbs, likes, dislikes, created_at
                "#
            }
            ReactionKind::Dislike => {
                r#"
                UPDATE articles SET dislikes = dislikes + 1
                WHERE id = $1
                RETURNING id, title, content, image_url, pro_blurbs, con_blurbs, likes, dislikes, created_at
                "#
            }
        };

        sqlx::query_as::<_, ArticleModel>(query)
            .bind(id.into_inner())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?
            .map(Article::from)
            .ok_or(DomainError::ArticleNotFound(id))
    }
}
