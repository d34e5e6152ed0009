//! Server setup and initialization
//!
//! Provides the application builder and the HTTP/HTTPS runners.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{extract::DefaultBodyLimit, middleware::from_fn_with_state, Router};
use axum_server::tls_rustls::RustlsConfig;
use blurb_cache::{MemorySessionStore, RedisPool, RedisSessionStore};
use blurb_common::{AppConfig, AppError, AppResult, TlsConfig};
use blurb_core::{ArticleRepository, SessionStore, SnowflakeGenerator, UserRepository};
use blurb_db::{
    create_pool, run_migrations, MemoryArticleRepository, MemoryUserRepository,
    PgArticleRepository, PgUserRepository, PoolConfig,
};
use blurb_service::{ServiceContextBuilder, UploadStore};
use tokio::net::TcpListener;
use tower_http::services::ServeDir;
use tracing::{info, warn};

use crate::middleware::{apply_middleware, resolve_session};
use crate::routes::{health_routes, session_routes};
use crate::state::AppState;

/// URL prefix under which uploads are served from the public directory
pub const UPLOAD_URL_PREFIX: &str = "/uploads";

/// Build the complete Axum application with all routes and middleware
///
/// Anything no route matches is served from the public directory, outside
/// the session layer.
pub fn create_app(state: AppState) -> Router {
    let config = state.config();
    let public_dir = ServeDir::new(&config.storage.public_dir);

    let router = session_routes()
        .route_layer(from_fn_with_state(state.clone(), resolve_session))
        .merge(health_routes())
        .fallback_service(public_dir)
        .layer(DefaultBodyLimit::max(config.storage.max_body_bytes()));

    let router = apply_middleware(router, &config.cors);
    router.with_state(state)
}

/// Initialize all dependencies and create AppState
///
/// Without `database` the repositories live in memory; without `redis`
/// so do the sessions.
pub async fn create_app_state(config: AppConfig) -> AppResult<AppState> {
    let (user_repo, article_repo) = create_repositories(&config).await?;
    let session_store = create_session_store(&config).await?;

    let upload_store = UploadStore::open(&config.storage.upload_dir, UPLOAD_URL_PREFIX)
        .await
        .map_err(|e| AppError::Storage(format!("{}: {e}", config.storage.upload_dir)))?;

    let snowflake_generator = Arc::new(SnowflakeGenerator::new(config.snowflake.worker_id));

    let service_context = ServiceContextBuilder::new()
        .user_repo(user_repo)
        .article_repo(article_repo)
        .session_store(session_store)
        .upload_store(Arc::new(upload_store))
        .snowflake_generator(snowflake_generator)
        .author_password(config.password.as_str())
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    Ok(AppState::new(service_context, config))
}

async fn create_repositories(
    config: &AppConfig,
) -> AppResult<(Arc<dyn UserRepository>, Arc<dyn ArticleRepository>)> {
    let Some(database) = &config.database else {
        warn!("No database configured, users and articles are kept in memory");
        return Ok((
            Arc::new(MemoryUserRepository::new()),
            Arc::new(MemoryArticleRepository::new()),
        ));
    };

    info!("Connecting to PostgreSQL...");
    let pool = create_pool(&PoolConfig::from(database))
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    run_migrations(&pool)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    Ok((
        Arc::new(PgUserRepository::new(pool.clone())),
        Arc::new(PgArticleRepository::new(pool)),
    ))
}

async fn create_session_store(config: &AppConfig) -> AppResult<Arc<dyn SessionStore>> {
    let ttl_secs = config.session.ttl_secs;

    let Some(redis) = &config.redis else {
        warn!("No Redis configured, sessions are kept in memory");
        return Ok(Arc::new(MemorySessionStore::new(ttl_secs)));
    };

    info!("Connecting to Redis...");
    let pool = RedisPool::from_config(redis).map_err(|e| AppError::Cache(e.to_string()))?;
    pool.health_check()
        .await
        .map_err(|e| AppError::Cache(e.to_string()))?;
    info!("Redis connection established");
    Ok(Arc::new(RedisSessionStore::new(pool, ttl_secs.max(0) as u64)))
}

/// Run the plain HTTP listener
pub async fn run_server(app: Router, addr: SocketAddr) -> AppResult<()> {
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {addr}: {e}")))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Config(format!("Server error: {e}")))
}

/// Run the HTTPS listener with PEM key and certificate files
pub async fn run_tls_server(app: Router, addr: SocketAddr, tls: &TlsConfig) -> AppResult<()> {
    let rustls = RustlsConfig::from_pem_file(&tls.cert, &tls.key)
        .await
        .map_err(|e| AppError::Config(format!("Failed to load TLS material: {e}")))?;

    info!("Server listening on https://{}", addr);

    axum_server::bind_rustls(addr, rustls)
        .serve(app.into_make_service())
        .await
        .map_err(|e| AppError::Config(format!("TLS server error: {e}")))
}

/// Run the complete server with configuration
///
/// HTTP is always served. In production HTTPS is served alongside it.
pub async fn run(config: AppConfig) -> AppResult<()> {
    let http_addr = parse_addr(&config.http_address())?;
    let https = match (config.https_address(), config.tls.clone()) {
        (Some(addr), Some(tls)) => Some((parse_addr(&addr)?, tls)),
        _ => None,
    };

    let state = create_app_state(config).await?;
    let app = create_app(state);

    match https {
        Some((https_addr, tls)) => {
            tokio::try_join!(
                run_server(app.clone(), http_addr),
                run_tls_server(app, https_addr, &tls)
            )?;
            Ok(())
        }
        None => run_server(app, http_addr).await,
    }
}

fn parse_addr(raw: &str) -> AppResult<SocketAddr> {
    raw.parse()
        .map_err(|e| AppError::Config(format!("Invalid listen address {raw}: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use blurb_common::{Environment, SessionTokenService};
    use serde_json::Value;
    use tempfile::TempDir;
    use tower::ServiceExt;

    async fn test_state() -> (AppState, TempDir) {
        let public = tempfile::tempdir().unwrap();
        std::fs::write(public.path().join("index.html"), "<h1>blurb</h1>").unwrap();
        let json = serde_json::json!({
            "secret": "router-secret",
            "password": "pw",
            "storage": {
                "public_dir": public.path(),
                "upload_dir": public.path().join("uploads"),
            }
        })
        .to_string();
        let config = AppConfig::from_json(&json, Some(Environment::Development)).unwrap();
        (create_app_state(config).await.unwrap(), public)
    }

    async fn test_app() -> (Router, TempDir) {
        let (state, public) = test_state().await;
        (create_app(state), public)
    }

    fn set_cookie_token(response: &axum::response::Response) -> Option<String> {
        let cookie = response.headers().get(header::SET_COOKIE)?.to_str().ok()?;
        let pair = cookie.split(';').next()?;
        pair.strip_prefix("blurb.sid=").map(str::to_string)
    }

    async fn list_with_cookie(app: Router, token: &str) -> axum::response::Response {
        app.oneshot(
            Request::get("/api/articles")
                .header(header::COOKIE, format!("blurb.sid={token}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap()
    }

    async fn json_body(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health_has_no_session_cookie() {
        let (app, _public) = test_app().await;
        let response = app
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().get(header::SET_COOKIE).is_none());
        assert!(response.headers().get("x-request-id").is_some());
        assert_eq!(json_body(response).await["status"], "ok");
    }

    #[tokio::test]
    async fn test_index_sets_session_cookie() {
        let (app, _public) = test_app().await;
        let response = app
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let cookie = response
            .headers()
            .get(header::SET_COOKIE)
            .and_then(|v| v.to_str().ok())
            .unwrap()
            .to_string();
        assert!(cookie.starts_with("blurb.sid="));
        assert!(cookie.contains("HttpOnly"));
        assert!(cookie.contains("SameSite=Lax"));
    }

    #[tokio::test]
    async fn test_fresh_cookie_is_not_reissued() {
        let (state, _public) = test_state().await;
        let session = state.service_context().session_store().create().await.unwrap();
        let token = state.tokens().encode(&session.id).unwrap();

        let response = list_with_cookie(create_app(state), &token).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert!(set_cookie_token(&response).is_none());
    }

    #[tokio::test]
    async fn test_expired_cookie_for_live_session_is_renewed() {
        let (state, _public) = test_state().await;
        let session = state.service_context().session_store().create().await.unwrap();
        let token = SessionTokenService::new("router-secret", -120)
            .encode(&session.id)
            .unwrap();

        let response = list_with_cookie(create_app(state.clone()), &token).await;

        assert_eq!(response.status(), StatusCode::OK);
        let renewed = set_cookie_token(&response).expect("cookie should be re-signed");
        let claims = state.tokens().decode(&renewed).unwrap();
        assert_eq!(claims.sid, session.id);
        assert!(!claims.needs_refresh());
    }

    #[tokio::test]
    async fn test_expired_cookie_for_unknown_session_starts_fresh() {
        let (state, _public) = test_state().await;
        let token = SessionTokenService::new("router-secret", -120)
            .encode("long-gone")
            .unwrap();

        let response = list_with_cookie(create_app(state.clone()), &token).await;

        let replacement = set_cookie_token(&response).unwrap();
        assert_ne!(state.tokens().decode(&replacement).unwrap().sid, "long-gone");
    }

    #[tokio::test]
    async fn test_empty_article_list() {
        let (app, _public) = test_app().await;
        let response = app
            .oneshot(Request::get("/api/articles").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await, serde_json::json!({ "articles": [] }));
    }

    #[tokio::test]
    async fn test_bad_timestamp_is_400() {
        let (app, _public) = test_app().await;
        let response = app
            .oneshot(
                Request::get("/api/articles?starting=yesterday-ish")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json_body(response).await["error"]["code"], "INVALID_TIMESTAMP");
    }

    #[tokio::test]
    async fn test_like_unknown_article_is_404() {
        let (app, _public) = test_app().await;
        let response = app
            .oneshot(
                Request::post("/api/like")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{"article":{"_id":"12345"}}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(json_body(response).await["error"]["code"], "UNKNOWN_ARTICLE");
    }

    #[tokio::test]
    async fn test_malformed_reaction_body_is_400() {
        let (app, _public) = test_app().await;
        let response = app
            .oneshot(
                Request::post("/api/dislike")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{"article":"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json_body(response).await["error"]["code"], "INVALID_BODY");
    }

    #[tokio::test]
    async fn test_static_files_are_served() {
        let (app, public) = test_app().await;
        std::fs::write(public.path().join("uploads").join("f4240.png"), b"png").unwrap();

        let response = app
            .oneshot(Request::get("/uploads/f4240.png").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().get(header::SET_COOKIE).is_none());
    }
}
