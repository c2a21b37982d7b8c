use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::{rejection::JsonRejection, State},
    routing::{get, post},
    Json, Router,
};
use serde_json::Value;
use tower_http::cors::CorsLayer;
use tracing::{debug, error, warn};

use crate::decision::AnalysisResult;
use crate::error::{ApiError, ApiResult};
use crate::lexicon::Lexicon;
use crate::metrics;
use crate::sentiment::SentimentAnalyzer;

#[derive(Clone)]
pub struct AppState {
    analyzer: Arc<SentimentAnalyzer>,
}

impl AppState {
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Self {
            analyzer: Arc::new(SentimentAnalyzer::with_lexicon(lexicon)),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            analyzer: Arc::new(SentimentAnalyzer::new()),
        }
    }
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "OK" }))
        .route("/analyze", post(analyze))
        .layer(CorsLayer::very_permissive())
        .with_state(state)
}

#[derive(serde::Deserialize)]
struct AnalyzeReq {
    #[serde(default)]
    text: Option<Value>,
}

async fn analyze(
    State(state): State<AppState>,
    payload: Result<Json<AnalyzeReq>, JsonRejection>,
) -> ApiResult<Json<AnalysisResult>> {
    let text = match payload {
        Ok(Json(req)) => input_text(req.text),
        Err(rej) => Err(ApiError::ComputationFailure(rej.body_text())),
    }
    .map_err(rejected)?;

    // Never log raw text.
    let id = anon_hash(&text);
    let started = Instant::now();
    let analyzer = state.analyzer.clone();

    let result = run_blocking(move || analyzer.analyze(&text))
        .await
        .map_err(rejected)?;

    let elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;
    metrics::record_analysis(result.trigger.kind, elapsed_ms);
    debug!(
        target: "analyze",
        %id,
        trigger = result.trigger.kind.as_str(),
        strength = result.trigger.strength,
        pos = result.positive_membership,
        neg = result.negative_membership,
        "analysis complete"
    );

    Ok(Json(result))
}

/// Falsy `text` (absent, null, "", 0, false, [], {}) is missing input.
/// Any other non-string value cannot be scored and is a backend failure.
fn input_text(raw: Option<Value>) -> ApiResult<String> {
    match raw {
        Some(Value::String(s)) if !s.is_empty() => Ok(s),
        None | Some(Value::Null) | Some(Value::String(_)) => Err(ApiError::MissingInput),
        Some(Value::Bool(false)) => Err(ApiError::MissingInput),
        Some(Value::Number(n)) if n.as_f64() == Some(0.0) => Err(ApiError::MissingInput),
        Some(Value::Array(a)) if a.is_empty() => Err(ApiError::MissingInput),
        Some(Value::Object(o)) if o.is_empty() => Err(ApiError::MissingInput),
        Some(other) => Err(ApiError::ComputationFailure(format!(
            "text must be a string, got {}",
            json_type(&other)
        ))),
    }
}

fn json_type(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn rejected(err: ApiError) -> ApiError {
    match &err {
        ApiError::MissingInput => {
            metrics::record_rejection(err.kind());
            warn!(target: "analyze", kind = err.kind(), "request rejected: {err}");
        }
        ApiError::ComputationFailure(_) => {
            metrics::record_failure();
            error!(target: "analyze", error = %err, "analysis failed");
        }
    }
    err
}

/// Run the core on the blocking pool; a panic surfaces as `ComputationFailure`.
pub(crate) async fn run_blocking<F, T>(f: F) -> ApiResult<T>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| ApiError::ComputationFailure(e.to_string()))
}

/// Short, stable, anonymized id for log lines (first 6 bytes of SHA-256, hex).
pub(crate) fn anon_hash(text: &str) -> String {
    use sha2::{Digest, Sha256};
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    let digest = hasher.finalize();
    let mut out = String::with_capacity(12);
    for b in digest.iter().take(6) {
        use std::fmt::Write as _;
        let _ = write!(&mut out, "{:02x}", b);
    }
    out
}
