//! Application state
//!
//! Holds the shared state for the Axum application: the service context,
//! the configuration, and the session cookie codec.

use std::sync::Arc;

use blurb_common::{AppConfig, SessionTokenService};
use blurb_service::ServiceContext;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    service_context: Arc<ServiceContext>,
    config: Arc<AppConfig>,
    tokens: SessionTokenService,
}

impl AppState {
    pub fn new(service_context: ServiceContext, config: AppConfig) -> Self {
        let tokens = SessionTokenService::new(&config.secret, config.session.ttl_secs);
        Self {
            service_context: Arc::new(service_context),
            config: Arc::new(config),
            tokens,
        }
    }

    pub fn service_context(&self) -> &ServiceContext {
        &self.service_context
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Session cookie signer
    pub fn tokens(&self) -> &SessionTokenService {
        &self.tokens
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("service_context", &self.service_context)
            .field("config", &"AppConfig")
            .finish()
    }
}
