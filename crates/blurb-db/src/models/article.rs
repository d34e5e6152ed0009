//! Article database model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;

/// One element of the `pro_blurbs` / `con_blurbs` JSONB arrays
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlurbModel {
    pub image_url: String,
    pub content: String,
}

/// Database model for articles table
#[derive(Debug, Clone, FromRow)]
pub struct ArticleModel {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub image_url: String,
    pub pro_blurbs: Json<Vec<BlurbModel>>,
    pub con_blurbs: Json<Vec<BlurbModel>>,
    pub likes: i64,
    pub dislikes: i64,
    pub created_at: DateTime<Utc>,
}
