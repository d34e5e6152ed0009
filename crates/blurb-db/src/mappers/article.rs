//! Article entity <-> model mapper

use blurb_core::entities::{Article, Blurb};
use blurb_core::value_objects::Snowflake;

use crate::models::{ArticleModel, BlurbModel};

impl From<BlurbModel> for Blurb {
    fn from(model: BlurbModel) -> Self {
        Blurb {
            image_url: model.image_url,
            content: model.content,
        }
    }
}

impl From<&Blurb> for BlurbModel {
    fn from(blurb: &Blurb) -> Self {
        BlurbModel {
            image_url: blurb.image_url.clone(),
            content: blurb.content.clone(),
        }
    }
}

impl From<ArticleModel> for Article {
    fn from(model: ArticleModel) -> Self {
        Article {
            id: Snowflake::new(model.id),
            title: model.title,
            content: model.content,
            image_url: model.image_url,
            pro_blurbs: model.pro_blurbs.0.into_iter().map(Blurb::from).collect(),
            con_blurbs: model.con_blurbs.0.into_iter().map(Blurb::from).collect(),
            likes: model.likes,
            dislikes: model.dislikes,
            created_at: model.created_at,
        }
    }
}

/// Blurbs as they are stored in the JSONB columns
pub fn blurb_models(blurbs: &[Blurb]) -> Vec<BlurbModel> {
    blurbs.iter().map(BlurbModel::from).collect()
}
