// src/lib.rs
// Public library surface for integration tests (and potential reuse).

pub mod api;
pub mod config;
pub mod decision;
pub mod engine;
pub mod error;
pub mod lexicon;
pub mod metrics;
pub mod sentiment;

// ---- Re-exports for stable public API ----
pub use crate::api::{create_router, AppState};
pub use crate::decision::{AnalysisResult, Trigger, TriggerType};
pub use crate::sentiment::{FeatureResult, SentimentAnalyzer};

use axum::Router;
use tracing::info;

use crate::config::AppConfig;
use crate::metrics::Metrics;

/// Build the full application router from the environment.
pub async fn app() -> anyhow::Result<Router> {
    let cfg = AppConfig::from_env()?;
    build_app(&cfg)
}

/// Build the router from an explicit config: `/health`, `/analyze`, and `/metrics`
/// when debug routes are enabled.
pub fn build_app(cfg: &AppConfig) -> anyhow::Result<Router> {
    info!(
        positive_cues = cfg.lexicon.positive().len(),
        negative_cues = cfg.lexicon.negative().len(),
        debug_routes = cfg.debug_routes,
        "Ψ-Analyzer router ready"
    );

    let router = api::create_router(AppState::new(cfg.lexicon.clone()));
    if !cfg.debug_routes {
        return Ok(router);
    }

    let metrics = Metrics::init(&cfg.lexicon)?;
    Ok(router.merge(metrics.router()))
}
