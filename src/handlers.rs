use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub query: String,
    #[serde(default = "default_language")]
    pub language: String,
}

fn default_language() -> String {
    "en".to_string()
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub response: String,
}

/// POST /api/legal-chat
pub async fn legal_chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, ApiError> {
    let query = request.query.trim();
    if query.is_empty() {
        return Err(ApiError::QueryRequired);
    }
    let max = state.config.system_config.max_query_chars;
    if query.chars().count() > max {
        return Err(ApiError::QueryTooLong { max });
    }

    let response = state
        .relay
        .answer(query, &request.language)
        .await
        .map_err(ApiError::Upstream)?;

    Ok(Json(ChatResponse { response }))
}

pub async fn method_not_allowed() -> (StatusCode, Json<Value>) {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(json!({"error": "Method not allowed"})),
    )
}

pub async fn health_check() -> Json<Value> {
    Json(json!({"status": "ok"}))
}
