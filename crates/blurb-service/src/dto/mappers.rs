//! Entity to DTO mappers

use blurb_core::entities::{Article, Blurb};
use blurb_core::ArticleStatus;

use super::responses::{ArticleResponse, BlurbResponse};

impl From<&Blurb> for BlurbResponse {
    fn from(blurb: &Blurb) -> Self {
        Self {
            image_url: blurb.image_url.clone(),
            content: blurb.content.clone(),
        }
    }
}

impl From<&Article> for ArticleResponse {
    fn from(article: &Article) -> Self {
        Self {
            id: article.id,
            title: article.title.clone(),
            content: article.content.clone(),
            image_url: article.image_url.clone(),
            pro_blurbs: article.pro_blurbs.iter().map(BlurbResponse::from).collect(),
            con_blurbs: article.con_blurbs.iter().map(BlurbResponse::from).collect(),
            likes: article.likes,
            dislikes: article.dislikes,
            created_at: article.created_at,
            status: None,
        }
    }
}

impl From<Article> for ArticleResponse {
    fn from(article: Article) -> Self {
        Self::from(&article)
    }
}

impl ArticleResponse {
    #[must_use]
    pub fn with_status(mut self, status: ArticleStatus) -> Self {
        self.status = Some(status);
        self
    }
}
