//! HTTP route handlers for the bot service.

pub mod chat;

use std::sync::Arc;

use axum::{extract::State, Json};

use crate::dto::{HealthResponse, RootResponse};
use crate::ServerState;

/// GET / - Service name and version.
pub async fn root(State(state): State<Arc<ServerState>>) -> Json<RootResponse> {
    Json(RootResponse {
        message: state.config.service_name.clone(),
        version: state.config.service_version.clone(),
    })
}

/// GET /health - Liveness check.
pub async fn health(State(state): State<Arc<ServerState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: state.config.service_id.clone(),
    })
}
