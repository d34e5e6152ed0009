//! # blurb-common
//!
//! Shared utilities including configuration, error handling, the session
//! cookie codec, and telemetry.

pub mod auth;
pub mod config;
pub mod error;
pub mod telemetry;

// Re-export commonly used types at crate root
pub use auth::{SessionClaims, SessionTokenService};
pub use config::{
    AppConfig, AppSettings, ConfigError, CorsConfig, DatabaseConfig, Environment, RedisConfig,
    ServerConfig, SessionConfig, SnowflakeConfig, StorageConfig, TlsConfig,
};
pub use error::{AppError, AppResult};
pub use telemetry::{try_init_tracing, try_init_tracing_with_config, TracingConfig, TracingError};
