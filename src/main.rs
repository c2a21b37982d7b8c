//! Ψ-Analyzer — Binary Entrypoint
//! Boots the Axum HTTP server on Shuttle: `.env`, tracing, config, router.

use psi_analyzer::config::AppConfig;
use shuttle_axum::ShuttleAxum;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Compact tracing logs, dev environments only (see `AppConfig::dev_log`).
fn enable_dev_tracing(cfg: &AppConfig) {
    if !cfg.dev_log {
        return;
    }

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("psi_analyzer=info,analyze=debug,warn"));

    // The Shuttle runtime may already own the global subscriber.
    if let Err(e) = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact())
        .try_init()
    {
        tracing::warn!(error = %e, "dev tracing not installed; global subscriber already set");
    }
}

#[shuttle_runtime::main]
async fn axum() -> ShuttleAxum {
    // Load .env in local/dev; no-op in prod environments.
    let _ = dotenvy::dotenv();

    let cfg = AppConfig::from_env()?;
    enable_dev_tracing(&cfg);

    let router = psi_analyzer::build_app(&cfg)?;
    Ok(router.into())
}
