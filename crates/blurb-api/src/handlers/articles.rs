//! Article handlers
//!
//! Reading the article list and author uploads.

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use blurb_service::dto::{ArticlesQuery, ArticlesResponse, CreatedArticleResponse};
use blurb_service::ArticleService;
use chrono::Utc;

use crate::extractors::{ArticleForm, CurrentSession};
use crate::response::{ApiError, ApiResult};
use crate::state::AppState;

/// List articles for the current reader
///
/// GET /api/articles?starting=&until=
pub async fn list_articles(
    State(state): State<AppState>,
    session: CurrentSession,
    query: Result<Query<ArticlesQuery>, QueryRejection>,
) -> ApiResult<Json<ArticlesResponse>> {
    let Query(query) = query.map_err(|e| ApiError::invalid_query(e.body_text()))?;
    let window = query.window(Utc::now())?;

    let service = ArticleService::new(state.service_context());
    let response = service.list_articles(session.id(), window).await?;
    Ok(Json(response))
}

/// Publish an article
///
/// POST /api/articles (multipart/form-data)
pub async fn create_article(
    State(state): State<AppState>,
    ArticleForm(request): ArticleForm,
) -> ApiResult<Json<CreatedArticleResponse>> {
    let service = ArticleService::new(state.service_context());
    let article = service.create_article(request).await?;
    Ok(Json(CreatedArticleResponse::ok(article)))
}
