//! Test helpers for integration tests
//!
//! Provides the test server and response assertions.

use std::net::SocketAddr;
use std::path::Path;
use std::time::Duration;

use anyhow::Result;
use blurb_api::{create_app, create_app_state};
use blurb_common::{AppConfig, Environment};
use reqwest::{multipart::Form, Client, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use tempfile::TempDir;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Author password the test server accepts
pub const AUTHOR_PASSWORD: &str = "integration-password";

/// Running server plus a cookie-keeping client
pub struct TestServer {
    pub addr: SocketAddr,
    /// Client that keeps its session cookie between requests
    pub client: Client,
    public_dir: TempDir,
    _handle: JoinHandle<()>,
}

impl TestServer {
    pub async fn start() -> Result<Self> {
        let public_dir = tempfile::tempdir()?;
        std::fs::write(
            public_dir.path().join("index.html"),
            "<!doctype html><title>blurb</title>",
        )?;

        let config = test_config(public_dir.path())?;
        let state = create_app_state(config).await?;
        let app = create_app(state);

        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = listener.local_addr()?;

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        Ok(Self {
            addr,
            client: session_client()?,
            public_dir,
            _handle: handle,
        })
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url(), path)
    }

    pub fn upload_dir(&self) -> std::path::PathBuf {
        self.public_dir.path().join("uploads")
    }

    /// Number of files written to the upload directory
    pub fn upload_count(&self) -> usize {
        std::fs::read_dir(self.upload_dir()).map_or(0, Iterator::count)
    }

    pub async fn get(&self, path: &str) -> Result<Response> {
        Ok(self.client.get(self.url(path)).send().await?)
    }

    pub async fn post<T: Serialize>(&self, path: &str, body: &T) -> Result<Response> {
        Ok(self.client.post(self.url(path)).json(body).send().await?)
    }

    /// POST a multipart form to `/api/articles`
    pub async fn upload(&self, form: Form) -> Result<Response> {
        Ok(self
            .client
            .post(self.url("/api/articles"))
            .multipart(form)
            .send()
            .await?)
    }
}

/// A client with its own cookie store, i.e. a separate visitor
pub fn session_client() -> Result<Client> {
    Ok(Client::builder()
        .cookie_store(true)
        .timeout(Duration::from_secs(10))
        .build()?)
}

/// Development config pointing all storage at `public_dir`
pub fn test_config(public_dir: &Path) -> Result<AppConfig> {
    let json = serde_json::json!({
        "secret": "integration-secret",
        "password": AUTHOR_PASSWORD,
        "storage": {
            "public_dir": public_dir,
            "upload_dir": public_dir.join("uploads"),
        }
    })
    .to_string();

    AppConfig::from_json(&json, Some(Environment::Development))
        .map_err(|e| anyhow::anyhow!("Config error: {e}"))
}

/// The value of the named cookie in a response's `Set-Cookie` headers
pub fn set_cookie_value(response: &Response, name: &str) -> Option<String> {
    let prefix = format!("{name}=");
    response
        .headers()
        .get_all(reqwest::header::SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .find_map(|cookie| {
            cookie
                .strip_prefix(&prefix)
                .map(|rest| rest.split(';').next().unwrap_or_default().to_string())
        })
}

/// Assert response status and parse JSON body
pub async fn assert_json<T: DeserializeOwned>(
    response: Response,
    expected_status: StatusCode,
) -> Result<T> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!("Expected status {expected_status}, got {status}. Body: {body}");
    }
    Ok(response.json().await?)
}

/// Assert response status without parsing body
pub async fn assert_status(response: Response, expected_status: StatusCode) -> Result<()> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!("Expected status {expected_status}, got {status}. Body: {body}");
    }
    Ok(())
}
