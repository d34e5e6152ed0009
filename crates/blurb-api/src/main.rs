//! Blurb API server entry point
//!
//! Run with:
//! ```bash
//! cargo run -p blurb-api
//! ```
//!
//! Configuration is read from `config.json` (or `BLURB_CONFIG`) and
//! `BLURB__*` environment variables.

use blurb_common::{try_init_tracing_with_config, AppConfig, TracingConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    let tracing_config = if config.app.env.is_production() {
        TracingConfig::production()
    } else {
        TracingConfig::development()
    };
    if let Err(e) = try_init_tracing_with_config(tracing_config) {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    if let Err(e) = run(config).await {
        error!(error = %e, "Server failed");
        std::process::exit(1);
    }
}

async fn run(config: AppConfig) -> anyhow::Result<()> {
    info!(
        env = ?config.app.env,
        http = %config.http_address(),
        https = ?config.https_address(),
        "Configuration loaded"
    );

    blurb_api::run(config).await?;

    Ok(())
}
