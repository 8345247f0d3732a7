//! Request and response bodies.

use serde::Serialize;

/// Fixed reply of `POST /chat` until a real responder exists.
pub const PLACEHOLDER_REPLY: &str = "Hello! This is a placeholder response from the bot service.";

/// Body accepted by `POST /chat`: any JSON object. No field is read.
pub type ChatRequest = serde_json::Map<String, serde_json::Value>;

#[derive(Debug, Serialize)]
pub struct RootResponse {
    pub message: String,
    pub version: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: String,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub response: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
