//! Session middleware
//!
//! Every request through this layer carries a session. The cookie holds a
//! signed token naming the session id; the record lives in the configured
//! `SessionStore`, which decides how long a session lives. A missing or
//! tampered cookie, or a session the store no longer knows, starts a fresh
//! session and sets a new cookie. Known sessions are saved back on every
//! request, and their cookie is re-signed once half its lifetime has passed.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use blurb_common::AppError;
use blurb_core::Session;
use tracing::{debug, info};

use crate::response::ApiError;
use crate::state::AppState;

pub async fn resolve_session(
    State(state): State<AppState>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let store = state.service_context().session_store();
    let cookie_name = state.config().session.cookie_name.as_str();

    let existing = match jar
        .get(cookie_name)
        .and_then(|cookie| cookie_session_id(&state, cookie.value()))
    {
        Some((sid, stale)) => store.get(&sid).await?.map(|session| (session, stale)),
        None => None,
    };

    let (mut session, is_new, stale) = match existing {
        Some((session, stale)) => (session, false, stale),
        None => {
            let session = store.create().await?;
            info!(session_id = %session.id, "Session started");
            (session, true, false)
        }
    };

    session.touch();
    store.set(&session).await?;

    let cookie = if is_new || stale {
        if stale {
            debug!(session_id = %session.id, "Renewing session cookie");
        }
        Some(session_cookie(&state, &session)?)
    } else {
        None
    };

    request.extensions_mut().insert(session);
    let response = next.run(request).await;

    Ok(match cookie {
        Some(cookie) => (jar.add(cookie), response).into_response(),
        None => response,
    })
}

/// Session id named by a cookie value, and whether the cookie should be
/// re-signed
fn cookie_session_id(state: &AppState, value: &str) -> Option<(String, bool)> {
    let tokens = state.tokens();
    let decoded = match tokens.decode(value) {
        Ok(claims) => Ok((claims.needs_refresh(), claims)),
        Err(AppError::TokenExpired) => tokens.decode_expired(value).map(|claims| (true, claims)),
        Err(e) => Err(e),
    };

    match decoded {
        Ok((stale, claims)) => Some((claims.sid, stale)),
        Err(e) => {
            debug!(error = %e, "Discarding session cookie");
            None
        }
    }
}

/// HttpOnly, SameSite=Lax browser-session cookie; the token carries its own
/// expiry
fn session_cookie(state: &AppState, session: &Session) -> Result<Cookie<'static>, ApiError> {
    let token = state.tokens().encode(&session.id)?;
    Ok(Cookie::build((state.config().session.cookie_name.clone(), token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build())
}
