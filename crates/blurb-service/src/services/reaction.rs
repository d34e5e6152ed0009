//! Reaction service
//!
//! Records likes and dislikes. Reactions are not deduplicated and the two
//! sets are not kept exclusive: each call appends and counts again.

use blurb_core::error::DomainError;
use blurb_core::{ReactionKind, Snowflake};
use tracing::{info, instrument};

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::user::UserService;

/// Reaction service
pub struct ReactionService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ReactionService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Record a reaction from the session's reader.
    ///
    /// Unknown articles fail with `ArticleNotFound` before anything is
    /// written. Otherwise the user's set is saved first, then the article's
    /// counter is bumped atomically.
    #[instrument(skip(self))]
    pub async fn react(
        &self,
        session_id: &str,
        article_id: Snowflake,
        kind: ReactionKind,
    ) -> ServiceResult<()> {
        let mut user = UserService::new(self.ctx).resolve(session_id).await?;

        if self.ctx.article_repo().find_by_id(article_id).await?.is_none() {
            return Err(DomainError::ArticleNotFound(article_id).into());
        }

        user.record(kind, article_id);
        self.ctx.user_repo().save(&user).await?;

        let article = self
            .ctx
            .article_repo()
            .increment_reaction(article_id, kind)
            .await?;

        info!(
            article_id = %article_id,
            reaction = %kind,
            likes = article.likes,
            dislikes = article.dislikes,
            "Reaction recorded"
        );

        Ok(())
    }
}
