//! Front page

use std::path::Path;

use axum::{extract::State, response::Html};
use blurb_common::AppError;

use crate::extractors::CurrentSession;
use crate::response::{ApiError, ApiResult};
use crate::state::AppState;

/// GET /
///
/// Serves `index.html` from the public directory. Going through the session
/// layer means a first visit leaves with a session cookie.
pub async fn index(State(state): State<AppState>, _session: CurrentSession) -> ApiResult<Html<String>> {
    let path = Path::new(&state.config().storage.public_dir).join("index.html");
    match tokio::fs::read_to_string(&path).await {
        Ok(page) => Ok(Html(page)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            Err(AppError::not_found("index.html").into())
        }
        Err(e) => Err(ApiError::internal(e)),
    }
}
