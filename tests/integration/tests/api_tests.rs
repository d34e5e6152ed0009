//! API Integration Tests
//!
//! Each test starts the full server on an ephemeral port with in-memory
//! storage, so no external services are needed.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use blurb_core::ArticleStatus;
use blurb_service::dto::{
    ArticleResponse, ArticlesResponse, CreatedArticleResponse, HealthResponse, ResultResponse,
};
use integration_tests::{
    assert_json, assert_status, reaction_body, session_client, set_cookie_value, TestServer,
    UploadForm,
};
use reqwest::StatusCode;
use serde_json::Value;

const COOKIE: &str = "blurb.sid";

async fn publish(server: &TestServer, title: &str) -> ArticleResponse {
    let response = server.upload(UploadForm::valid(title).build()).await.unwrap();
    let created: CreatedArticleResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(created.result, "ok");
    created.article
}

async fn list(server: &TestServer) -> ArticlesResponse {
    let response = server.get("/api/articles").await.unwrap();
    assert_json(response, StatusCode::OK).await.unwrap()
}

// ============================================================================
// Health and pages
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.unwrap();
    let health: HealthResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(health.status, "ok");
}

#[tokio::test]
async fn test_index_starts_a_session() {
    let server = TestServer::start().await.unwrap();

    let response = server.get("/").await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(set_cookie_value(&response, COOKIE).is_some());
    assert!(response.text().await.unwrap().contains("<title>blurb</title>"));

    // The cookie jar now carries the session, so no new cookie is issued
    let again = server.get("/").await.unwrap();
    assert!(set_cookie_value(&again, COOKIE).is_none());
}

// ============================================================================
// Sessions and reactions
// ============================================================================

#[tokio::test]
async fn test_session_cookie_round_trips() {
    let server = TestServer::start().await.unwrap();
    let article = publish(&server, "Round trip").await;

    let response = server
        .post("/api/like", &reaction_body(&article.id.to_string()))
        .await
        .unwrap();
    let result: ResultResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(result, ResultResponse::ok());

    let listed = list(&server).await;
    assert_eq!(listed.articles[0].status, Some(ArticleStatus::Liked));
    assert_eq!(listed.articles[0].likes, 1);
}

#[tokio::test]
async fn test_other_visitors_see_neutral() {
    let server = TestServer::start().await.unwrap();
    let article = publish(&server, "Neutral").await;
    server
        .post("/api/dislike", &reaction_body(&article.id.to_string()))
        .await
        .unwrap();

    let stranger = session_client().unwrap();
    let listed: ArticlesResponse = stranger
        .get(server.url("/api/articles"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(listed.articles[0].status, Some(ArticleStatus::Neutral));
    assert_eq!(listed.articles[0].dislikes, 1);
}

#[tokio::test]
async fn test_tampered_cookie_starts_fresh_session() {
    let server = TestServer::start().await.unwrap();
    let article = publish(&server, "Tamper").await;

    // No cookie store: every Set-Cookie is visible and nothing is resent
    let plain = reqwest::Client::new();
    let response = plain
        .post(server.url("/api/like"))
        .json(&reaction_body(&article.id.to_string()))
        .send()
        .await
        .unwrap();
    let token = set_cookie_value(&response, COOKIE).expect("first request sets a cookie");

    // Flip the first character of the signature
    let split = token.rfind('.').unwrap() + 1;
    let mut tampered = token.clone();
    let replacement = if tampered[split..].starts_with('A') { "B" } else { "A" };
    tampered.replace_range(split..=split, replacement);

    let response = plain
        .get(server.url("/api/articles"))
        .header(reqwest::header::COOKIE, format!("{COOKIE}={tampered}"))
        .send()
        .await
        .unwrap();

    let fresh = set_cookie_value(&response, COOKIE).expect("tampered cookie is replaced");
    assert_ne!(fresh, token);
    let listed: ArticlesResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(listed.articles[0].status, Some(ArticleStatus::Neutral));
    assert_eq!(listed.articles[0].likes, 1);
}

#[tokio::test]
async fn test_like_then_dislike_reports_liked() {
    let server = TestServer::start().await.unwrap();
    let article = publish(&server, "Both").await;
    let body = reaction_body(&article.id.to_string());

    for path in ["/api/like", "/api/dislike", "/api/like"] {
        assert_status(server.post(path, &body).await.unwrap(), StatusCode::OK)
            .await
            .unwrap();
    }

    let listed = list(&server).await;
    let shown = &listed.articles[0];
    assert_eq!(shown.status, Some(ArticleStatus::Liked));
    assert_eq!((shown.likes, shown.dislikes), (2, 1));
}

#[tokio::test]
async fn test_react_unknown_article_is_404() {
    let server = TestServer::start().await.unwrap();
    let response = server.post("/api/like", &reaction_body("424242")).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"]["code"], "UNKNOWN_ARTICLE");
}

#[tokio::test]
async fn test_react_with_numeric_id() {
    let server = TestServer::start().await.unwrap();
    let article = publish(&server, "Numeric").await;

    let body = serde_json::json!({ "article": { "_id": article.id.into_inner() } });
    assert_status(server.post("/api/like", &body).await.unwrap(), StatusCode::OK)
        .await
        .unwrap();
}

// ============================================================================
// Listing
// ============================================================================

#[tokio::test]
async fn test_list_is_newest_first_and_windowed() {
    let server = TestServer::start().await.unwrap();
    let first = publish(&server, "First").await;
    let second = publish(&server, "Second").await;

    let listed = list(&server).await;
    let ids: Vec<_> = listed.articles.iter().map(|a| a.id).collect();
    assert_eq!(ids, vec![second.id, first.id]);

    let response = server
        .get("/api/articles?starting=2999-01-01")
        .await
        .unwrap();
    let future: ArticlesResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(future.articles.is_empty());

    let response = server
        .get("/api/articles?until=2018-01-01T00:00:00Z")
        .await
        .unwrap();
    let past: ArticlesResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(past.articles.is_empty());
}

#[tokio::test]
async fn test_list_rejects_bad_timestamp() {
    let server = TestServer::start().await.unwrap();
    let response = server.get("/api/articles?until=soon").await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

// ============================================================================
// Uploads
// ============================================================================

#[tokio::test]
async fn test_upload_publishes_and_serves_images() {
    let server = TestServer::start().await.unwrap();
    let article = publish(&server, "Published").await;

    assert_eq!((article.likes, article.dislikes), (0, 0));
    assert_eq!(article.pro_blurbs.len(), 2);
    assert_eq!(article.con_blurbs.len(), 1);
    assert_eq!(article.pro_blurbs[1].content, "Faster");
    assert_eq!(server.upload_count(), 4);

    let image = server.get(&article.pro_blurbs[1].image_url).await.unwrap();
    assert_eq!(image.status(), StatusCode::OK);
    assert_eq!(image.bytes().await.unwrap().as_ref(), b"pro-1");

    let con = &article.con_blurbs[0].image_url;
    assert!(con.starts_with("/uploads/") && con.ends_with(".gif"));
}

#[tokio::test]
async fn test_upload_accepts_bare_field_names() {
    let server = TestServer::start().await.unwrap();
    let response = server
        .upload(UploadForm::valid("Bare").bare_names().build())
        .await
        .unwrap();

    let created: CreatedArticleResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(created.article.pro_blurbs.len(), 2);
}

#[tokio::test]
async fn test_upload_wrong_password_is_403() {
    let server = TestServer::start().await.unwrap();
    let response = server
        .upload(UploadForm::valid("Denied").password("nope").build())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"]["code"], "FORBIDDEN");
    assert_eq!(server.upload_count(), 0);
    assert!(list(&server).await.articles.is_empty());
}

#[tokio::test]
async fn test_upload_count_mismatch_is_400() {
    let server = TestServer::start().await.unwrap();
    let mut form = UploadForm::valid("Mismatch");
    form.con.clear();
    let form = form
        .build()
        .text("conBlurbs[]", "A blurb without an image");

    let response = server.upload(form).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(server.upload_count(), 0);
}

#[tokio::test]
async fn test_upload_rejects_non_image() {
    let server = TestServer::start().await.unwrap();
    let response = server
        .upload(UploadForm::valid("Text").cover_mime("text/plain").build())
        .await
        .unwrap();

    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(server.upload_count(), 0);
}
