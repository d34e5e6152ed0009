//! Response DTOs for API endpoints
//!
//! Field names follow the front end's JSON (`_id`, `imageURL`, camelCase).
//! Snowflake IDs are serialized as strings for JavaScript compatibility.

use blurb_core::{ArticleStatus, Snowflake};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// `{ "result": "ok" }`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResultResponse {
    pub result: String,
}

impl ResultResponse {
    pub fn ok() -> Self {
        Self {
            result: "ok".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BlurbResponse {
    #[serde(rename = "imageURL")]
    pub image_url: String,
    pub content: String,
}

/// Article as shown to a reader, with that reader's status when known
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleResponse {
    #[serde(rename = "_id")]
    pub id: Snowflake,
    pub title: String,
    pub content: String,
    #[serde(rename = "imageURL")]
    pub image_url: String,
    pub pro_blurbs: Vec<BlurbResponse>,
    pub con_blurbs: Vec<BlurbResponse>,
    pub likes: i64,
    pub dislikes: i64,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub status: Option<ArticleStatus>,
}

/// `GET /api/articles`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticlesResponse {
    pub articles: Vec<ArticleResponse>,
}

/// `POST /api/articles`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedArticleResponse {
    pub result: String,
    pub article: ArticleResponse,
}

impl CreatedArticleResponse {
    pub fn ok(article: ArticleResponse) -> Self {
        Self {
            result: "ok".to_string(),
            article,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}
