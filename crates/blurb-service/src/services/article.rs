//! Article service
//!
//! Lists articles annotated with the reader's status, and publishes new
//! articles uploaded by the author.

use blurb_core::entities::{Article, Blurb};
use blurb_core::error::DomainError;
use blurb_core::TimeWindow;
use tracing::{debug, info, instrument};
use validator::Validate;

use crate::dto::{ArticleResponse, ArticlesResponse, NewArticleRequest, UploadedFile};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::user::UserService;

/// Article service
pub struct ArticleService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ArticleService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Articles created inside `window`, newest first, each tagged with the
    /// session's like/dislike status.
    ///
    /// The reader is saved on every call, so a first visit creates the row.
    #[instrument(skip(self))]
    pub async fn list_articles(
        &self,
        session_id: &str,
        window: TimeWindow,
    ) -> ServiceResult<ArticlesResponse> {
        let user = UserService::new(self.ctx).resolve(session_id).await?;
        let articles = self.ctx.article_repo().find_in_window(&window).await?;
        self.ctx.user_repo().save(&user).await?;

        debug!(count = articles.len(), "Articles listed");

        let articles = articles
            .iter()
            .map(|article| ArticleResponse::from(article).with_status(user.status_of(article.id)))
            .collect();
        Ok(ArticlesResponse { articles })
    }

    /// Publish an author upload.
    ///
    /// The password is checked before anything else; a mismatch leaves no
    /// files and no rows behind.
    #[instrument(skip(self, request), fields(title = %request.title))]
    pub async fn create_article(&self, request: NewArticleRequest) -> ServiceResult<ArticleResponse> {
        if !self.ctx.is_author_password(&request.password) {
            return Err(DomainError::AuthorPasswordMismatch.into());
        }
        request.validate()?;

        if !request.tags.is_empty() {
            debug!(tags = ?request.tags, "Ignoring article tags");
        }

        let cover = request
            .cover
            .as_ref()
            .ok_or_else(|| ServiceError::validation("A cover image is required"))?;
        let files: Vec<&UploadedFile> = std::iter::once(cover)
            .chain(&request.pro_images)
            .chain(&request.con_images)
            .collect();

        let mut urls = self.ctx.upload_store().save_all(&files).await?.into_iter();

        let image_url = urls
            .next()
            .ok_or_else(|| ServiceError::internal("cover upload produced no url"))?;
        let pro_blurbs = pair_blurbs(&request.pro_blurbs, urls.by_ref().take(request.pro_images.len()));
        let con_blurbs = pair_blurbs(&request.con_blurbs, urls);

        let article = Article::new(
            self.ctx.generate_id(),
            request.title,
            request.content,
            image_url,
            pro_blurbs,
            con_blurbs,
        );
        self.ctx.article_repo().create(&article).await?;

        info!(article_id = %article.id, "Article published");

        Ok(ArticleResponse::from(&article))
    }
}

/// Blurb text `i` goes with image `i`
fn pair_blurbs(texts: &[String], urls: impl Iterator<Item = String>) -> Vec<Blurb> {
    texts
        .iter()
        .zip(urls)
        .map(|(text, url)| Blurb::new(url, text.as_str()))
        .collect()
}
