//! PostgreSQL implementation of UserRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use blurb_core::entities::User;
use blurb_core::traits::{RepoResult, UserRepository};
use blurb_core::value_objects::Snowflake;

use crate::models::UserModel;

use super::error::map_db_error;

/// PostgreSQL implementation of UserRepository
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    #[instrument(skip(self))]
    async fn find_by_session(&self, session_id: &str) -> RepoResult<Option<User>> {
        let result = sqlx::query_as::<_, UserModel>(
            r#"
            SELECT session_id, liked, disliked, created_at, updated_at
            FROM users
            WHERE session_id = $1
            "#,
        )
        .bind(session_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(User::from))
    }

    #[instrument(skip(self, user), fields(session_id = %user.session_id))]
    async fn save(&self, user: &User) -> RepoResult<()> {
        let liked: Vec<i64> = user.liked.iter().copied().map(Snowflake::into_inner).collect();
        let disliked: Vec<i64> = user.disliked.iter().copied().map(Snowflake::into_inner).collect();

        sqlx::query(
            r#"
            INSERT INTO users (session_id, liked, disliked, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (session_id) DO UPDATE
            SET liked = EXCLUDED.liked,
                disliked = EXCLUDED.disliked,
                updated_at = EXCLUDED.updated_at
            "#,
        )
        .bind(&user.session_id)
        .bind(&liked)
        .bind(&disliked)
        .bind(user.created_at)
        .bind(user.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }
}
