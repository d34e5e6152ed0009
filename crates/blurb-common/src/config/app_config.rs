//! Application configuration structs
//!
//! Configuration is read from a JSON file (path in `BLURB_CONFIG`, default
//! `config.json`) and then overridden by `BLURB__*` environment variables,
//! e.g. `BLURB__DATABASE__URL` or `BLURB__SESSION__TTL_SECS`. `APP_ENV`
//! selects the environment.

use config::{Config, Environment as EnvSource, File, FileFormat};
use serde::Deserialize;
use std::env;

const DEFAULT_CONFIG_PATH: &str = "config.json";
const ENV_PREFIX: &str = "BLURB";
/// 100 years
const MAX_SESSION_TTL_SECS: i64 = 100 * 365 * 24 * 60 * 60;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub app: AppSettings,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub tls: Option<TlsConfig>,
    /// Top-level spelling of `tls.key`
    #[serde(default)]
    key: Option<String>,
    /// Top-level spelling of `tls.cert`
    #[serde(default)]
    cert: Option<String>,
    /// Signing key for session cookies
    pub secret: String,
    /// Shared author password for article uploads
    pub password: String,
    #[serde(default)]
    pub database: Option<DatabaseConfig>,
    #[serde(default)]
    pub redis: Option<RedisConfig>,
    #[serde(default)]
    pub cors: CorsConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub snowflake: SnowflakeConfig,
}

/// General application settings
#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_app_name")]
    pub name: String,
    #[serde(default)]
    pub env: Environment,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            name: default_app_name(),
            env: Environment::default(),
        }
    }
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl Environment {
    /// Anything other than `production`/`prod` is treated as development
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            _ => Self::Development,
        }
    }

    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

/// Listener configuration
///
/// Ports left unset fall back to the environment defaults: 8000 in
/// development; 80 and 443 in production.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default)]
    pub http_port: Option<u16>,
    #[serde(default)]
    pub https_port: Option<u16>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            http_port: None,
            https_port: None,
        }
    }
}

/// TLS key and certificate paths (PEM)
#[derive(Debug, Clone, Deserialize)]
pub struct TlsConfig {
    pub key: String,
    pub cert: String,
}

/// Database configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
}

/// Redis configuration
#[derive(Debug, Clone, Deserialize)]
pub struct RedisConfig {
    pub url: String,
    #[serde(default = "default_redis_max_connections")]
    pub max_connections: u32,
}

/// CORS configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CorsConfig {
    #[serde(default = "default_allowed_origins")]
    pub allowed_origins: Vec<String>,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: default_allowed_origins(),
        }
    }
}

/// Static files and uploads
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_public_dir")]
    pub public_dir: String,
    #[serde(default = "default_upload_dir")]
    pub upload_dir: String,
    #[serde(default = "default_max_file_size")]
    pub max_file_size_mb: u32,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            public_dir: default_public_dir(),
            upload_dir: default_upload_dir(),
            max_file_size_mb: default_max_file_size(),
        }
    }
}

impl StorageConfig {
    pub fn max_body_bytes(&self) -> usize {
        self.max_file_size_mb as usize * 1024 * 1024
    }
}

/// Session cookie configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,
    #[serde(default = "default_session_ttl")]
    pub ttl_secs: i64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cookie_name: default_cookie_name(),
            ttl_secs: default_session_ttl(),
        }
    }
}

/// Snowflake ID generator configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SnowflakeConfig {
    #[serde(default)]
    pub worker_id: u16,
}

// Default value functions
fn default_app_name() -> String {
    "blurb".to_string()
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_max_connections() -> u32 {
    20
}

fn default_min_connections() -> u32 {
    2
}

fn default_redis_max_connections() -> u32 {
    10
}

fn default_allowed_origins() -> Vec<String> {
    vec!["http://localhost:3000".to_string()]
}

fn default_public_dir() -> String {
    "./public".to_string()
}

fn default_upload_dir() -> String {
    "./public/uploads".to_string()
}

fn default_max_file_size() -> u32 {
    10
}

fn default_cookie_name() -> String {
    "blurb.sid".to_string()
}

fn default_session_ttl() -> i64 {
    2_592_000 // 30 days
}

impl AppConfig {
    /// Load configuration from the JSON file and `BLURB__*` overrides
    ///
    /// # Errors
    /// Returns an error if required keys are missing or production is
    /// configured without TLS material
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let path = env::var("BLURB_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        let settings = Config::builder()
            .add_source(File::new(&path, FileFormat::Json).required(false))
            .add_source(
                EnvSource::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let app_env = env::var("APP_ENV").ok().map(|raw| Environment::parse(&raw));
        Self::from_settings(settings, app_env)
    }

    /// Build a configuration from an in-memory JSON document
    pub fn from_json(json: &str, app_env: Option<Environment>) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from_str(json, FileFormat::Json))
            .build()?;
        Self::from_settings(settings, app_env)
    }

    fn from_settings(settings: Config, app_env: Option<Environment>) -> Result<Self, ConfigError> {
        let mut config: Self = settings.try_deserialize()?;
        if let Some(app_env) = app_env {
            config.app.env = app_env;
        }
        if config.tls.is_none() {
            if let (Some(key), Some(cert)) = (config.key.take(), config.cert.take()) {
                config.tls = Some(TlsConfig { key, cert });
            }
        }
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.secret.is_empty() {
            return Err(ConfigError::MissingVar("secret"));
        }
        if self.password.is_empty() {
            return Err(ConfigError::MissingVar("password"));
        }
        if self.app.env.is_production() && self.tls.is_none() {
            return Err(ConfigError::MissingVar("tls"));
        }
        if !(1..=MAX_SESSION_TTL_SECS).contains(&self.session.ttl_secs) {
            return Err(ConfigError::InvalidValue(
                "session.ttl_secs",
                self.session.ttl_secs.to_string(),
            ));
        }
        if self.snowflake.worker_id >= 1024 {
            return Err(ConfigError::InvalidValue(
                "snowflake.worker_id",
                self.snowflake.worker_id.to_string(),
            ));
        }
        Ok(())
    }

    pub fn http_port(&self) -> u16 {
        self.server.http_port.unwrap_or(if self.app.env.is_production() {
            80
        } else {
            8000
        })
    }

    /// HTTPS is only served in production
    pub fn https_port(&self) -> Option<u16> {
        if self.app.env.is_production() {
            Some(self.server.https_port.unwrap_or(443))
        } else {
            None
        }
    }

    #[must_use]
    pub fn http_address(&self) -> String {
        format!("{}:{}", self.server.host, self.http_port())
    }

    #[must_use]
    pub fn https_address(&self) -> Option<String> {
        self.https_port()
            .map(|port| format!("{}:{}", self.server.host, port))
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("Missing required configuration key: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}
