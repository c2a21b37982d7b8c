use anyhow::Result;
use axum::{routing::get, Router};
use metrics::{counter, gauge, histogram};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use once_cell::sync::OnceCell;

use crate::decision::TriggerType;
use crate::lexicon::Lexicon;

static HANDLE: OnceCell<PrometheusHandle> = OnceCell::new();

pub struct Metrics {
    pub handle: PrometheusHandle,
}

impl Metrics {
    /// Install the Prometheus recorder (once per process) and publish lexicon sizes.
    /// Later calls reuse the installed recorder, so routers can be rebuilt in tests.
    pub fn init(lexicon: &Lexicon) -> Result<Self> {
        let handle = HANDLE
            .get_or_try_init(|| PrometheusBuilder::new().install_recorder())?
            .clone();

        gauge!("psi_lexicon_cues", "polarity" => "positive").set(lexicon.positive().len() as f64);
        gauge!("psi_lexicon_cues", "polarity" => "negative").set(lexicon.negative().len() as f64);

        Ok(Self { handle })
    }

    /// Returns a router exposing `/metrics` with the Prometheus exposition format.
    pub fn router(&self) -> Router {
        let handle = self.handle.clone();
        Router::new().route(
            "/metrics",
            get(move || {
                let h = handle.clone();
                async move { h.render() }
            }),
        )
    }
}

// Recording is a no-op until a recorder is installed.

pub fn record_analysis(kind: TriggerType, elapsed_ms: f64) {
    counter!("psi_analyze_requests_total", "trigger" => kind.as_str()).increment(1);
    histogram!("psi_analyze_duration_ms").record(elapsed_ms);
}

pub fn record_rejection(reason: &'static str) {
    counter!("psi_analyze_rejected_total", "reason" => reason).increment(1);
}

pub fn record_failure() {
    counter!("psi_analyze_failures_total").increment(1);
}
