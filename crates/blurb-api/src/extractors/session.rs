//! Session extractor
//!
//! Reads the session the session middleware attached to the request.

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use blurb_core::Session;

use crate::response::ApiError;

/// Session of the current request
#[derive(Debug, Clone)]
pub struct CurrentSession(pub Session);

impl CurrentSession {
    pub fn id(&self) -> &str {
        &self.0.id
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for CurrentSession
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Session>()
            .cloned()
            .map(CurrentSession)
            .ok_or_else(|| ApiError::internal(anyhow::anyhow!("request has no session attached")))
    }
}
