//! Route definitions

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{articles, health, pages, reactions};
use crate::state::AppState;

/// Routes that run behind the session layer
pub fn session_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(pages::index))
        .nest("/api", api_routes())
}

/// Health check routes (no session)
pub fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(health::health_check))
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/articles",
            get(articles::list_articles).post(articles::create_article),
        )
        .route("/like", post(reactions::like))
        .route("/dislike", post(reactions::dislike))
}
