// src/error.rs
//! HTTP-facing error taxonomy. Every variant renders as `{"error": "..."}`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    /// `text` absent or falsy (null, "", 0, false, [], {}). The core never runs.
    #[error("[SYSTEM_ERROR] E401: NO INPUT DATA RECEIVED.")]
    MissingInput,

    /// Unexpected failure while reading the request or running the core.
    #[error("[SYSTEM_ERROR] E500: BACKEND FAILURE - {0}")]
    ComputationFailure(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingInput => StatusCode::BAD_REQUEST,
            ApiError::ComputationFailure(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Short label for logs and metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::MissingInput => "missing_input",
            ApiError::ComputationFailure(_) => "computation_failure",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses_and_messages() {
        assert_eq!(ApiError::MissingInput.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiError::MissingInput.to_string(),
            "[SYSTEM_ERROR] E401: NO INPUT DATA RECEIVED."
        );
        let e = ApiError::ComputationFailure("worker panicked".into());
        assert_eq!(e.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            e.to_string(),
            "[SYSTEM_ERROR] E500: BACKEND FAILURE - worker panicked"
        );
    }
}
