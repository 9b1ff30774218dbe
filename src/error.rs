use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;
use tracing::{error, warn};

use crate::relay::FALLBACK_TEXT;

/// Failure taxonomy for the relay endpoint. Validation errors are the
/// caller's to fix; upstream failures are contained here and surfaced
/// as a distinguishable 502 carrying the fixed fallback text.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Query is required")]
    QueryRequired,
    #[error("Query is too long")]
    QueryTooLong { max: usize },
    #[error("upstream provider failure")]
    Upstream(#[source] anyhow::Error),
    #[error("internal error")]
    Internal(#[source] anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::QueryRequired => {
                (StatusCode::BAD_REQUEST, "Query is required".to_string())
            }
            ApiError::QueryTooLong { max } => {
                warn!("Rejected over-length query (max {} chars)", max);
                (StatusCode::BAD_REQUEST, "Query is too long".to_string())
            }
            ApiError::Upstream(source) => {
                let detail: String = source.to_string().chars().take(200).collect();
                warn!("Upstream provider failure: {}", detail);
                (StatusCode::BAD_GATEWAY, FALLBACK_TEXT.to_string())
            }
            ApiError::Internal(source) => {
                error!("Internal error in legal-chat API: {:#}", source);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_maps_to_400() {
        let response = ApiError::QueryRequired.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn upstream_error_maps_to_502() {
        let response = ApiError::Upstream(anyhow::anyhow!("connection refused")).into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn internal_error_maps_to_500() {
        let response = ApiError::Internal(anyhow::anyhow!("boom")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
