//! Reaction handlers

use axum::{extract::State, Json};
use blurb_core::ReactionKind;
use blurb_service::dto::{ReactionRequest, ResultResponse};
use blurb_service::ReactionService;

use crate::extractors::{CurrentSession, JsonBody};
use crate::response::ApiResult;
use crate::state::AppState;

/// POST /api/like
pub async fn like(
    State(state): State<AppState>,
    session: CurrentSession,
    JsonBody(request): JsonBody<ReactionRequest>,
) -> ApiResult<Json<ResultResponse>> {
    react(&state, &session, &request, ReactionKind::Like).await
}

/// POST /api/dislike
pub async fn dislike(
    State(state): State<AppState>,
    session: CurrentSession,
    JsonBody(request): JsonBody<ReactionRequest>,
) -> ApiResult<Json<ResultResponse>> {
    react(&state, &session, &request, ReactionKind::Dislike).await
}

async fn react(
    state: &AppState,
    session: &CurrentSession,
    request: &ReactionRequest,
    kind: ReactionKind,
) -> ApiResult<Json<ResultResponse>> {
    ReactionService::new(state.service_context())
        .react(session.id(), request.article.id, kind)
        .await?;
    Ok(Json(ResultResponse::ok()))
}
