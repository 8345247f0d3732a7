//! Chat endpoint.

use axum::{
    body::Bytes,
    http::{header::CONTENT_TYPE, HeaderMap},
    Json,
};
use tracing::{debug, warn};

use crate::dto::{ChatRequest, ChatResponse, PLACEHOLDER_REPLY};
use crate::error::{AppError, AppResult};

/// POST /chat - Accepts any JSON object and answers with the placeholder reply.
///
/// The body is read as JSON when `Content-Type` is absent or a JSON media type.
pub async fn chat(headers: HeaderMap, body: Bytes) -> AppResult<Json<ChatResponse>> {
    if body.is_empty() {
        return Err(AppError::UnprocessableBody("request body is required".into()));
    }

    if !is_json_content_type(&headers) {
        warn!(content_type = ?headers.get(CONTENT_TYPE), "Rejected non-JSON chat body");
        return Err(AppError::UnprocessableBody(
            "expected a JSON object body".into(),
        ));
    }

    let message: ChatRequest = serde_json::from_slice(&body).map_err(|e| {
        warn!("Rejected chat body: {}", e);
        AppError::from(e)
    })?;

    debug!(keys = message.len(), "chat message received");

    Ok(Json(ChatResponse {
        response: PLACEHOLDER_REPLY,
    }))
}

/// True for a missing or blank `Content-Type`, `application/json`, and
/// `application/*+json`. Parameters such as `charset` are ignored.
fn is_json_content_type(headers: &HeaderMap) -> bool {
    let Some(value) = headers.get(CONTENT_TYPE) else {
        return true;
    };
    let Ok(value) = value.to_str() else {
        return false;
    };

    let essence = value.split(';').next().unwrap_or_default().trim();
    if essence.is_empty() {
        return true;
    }

    match essence.to_ascii_lowercase().split_once('/') {
        Some(("application", subtype)) => subtype == "json" || subtype.ends_with("+json"),
        _ => false,
    }
}
