//! Application error types and Axum response conversion.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::error::Category;
use thiserror::Error;

use crate::dto::ErrorResponse;

/// Convenience alias for handler return types.
pub type AppResult<T> = Result<T, AppError>;

/// Application-level errors with HTTP status code mapping.
#[derive(Debug, Error)]
pub enum AppError {
    /// Body is not syntactically valid JSON.
    #[error("Malformed JSON body: {0}")]
    MalformedJson(String),

    /// Body is missing, has a non-JSON content type, or is JSON of the wrong shape.
    #[error("Unprocessable request body: {0}")]
    UnprocessableBody(String),
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        match e.classify() {
            Category::Data => AppError::UnprocessableBody(e.to_string()),
            Category::Syntax | Category::Eof | Category::Io => {
                AppError::MalformedJson(e.to_string())
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::MalformedJson(_) => StatusCode::BAD_REQUEST,
            AppError::UnprocessableBody(_) => StatusCode::UNPROCESSABLE_ENTITY,
        };
        (status, Json(ErrorResponse { error: self.to_string() })).into_response()
    }
}
