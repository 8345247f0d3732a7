//! HTTP server for the ChatAppointment bot service.
//!
//! Exposes three endpoints:
//!
//! - `GET /` reports the service name and version
//! - `GET /health` is the liveness check
//! - `POST /chat` accepts any JSON object and returns a placeholder reply
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use bot_service::{router, ServerState};
//! use bot_service_config::ServiceConfig;
//!
//! # async fn run() -> anyhow::Result<()> {
//! let config = ServiceConfig::from_env()?;
//! let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
//! let app = router(Arc::new(ServerState::new(config)));
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

pub mod cors;
pub mod dto;
pub mod error;
pub mod handlers;

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, Response};
use axum::routing::{get, post};
use axum::{middleware, Router};
use bot_service_config::ServiceConfig;
use tower_http::trace::TraceLayer;
use tracing::info;
use uuid::Uuid;

/// State shared by all handlers. Built once at startup and never mutated.
pub struct ServerState {
    pub config: ServiceConfig,
}

impl ServerState {
    pub fn new(config: ServiceConfig) -> Self {
        Self { config }
    }
}

/// Builds the Axum router with all routes, request tracing and CORS.
pub fn router(state: Arc<ServerState>) -> Router {
    let allow_credentials = state.config.cors.allow_credentials;

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|req: &Request<Body>| {
            tracing::info_span!(
                "request",
                id = %Uuid::new_v4(),
                method = %req.method(),
                uri = %req.uri(),
                version = ?req.version(),
            )
        })
        .on_response(|res: &Response<Body>, latency: Duration, _span: &tracing::Span| {
            info!(
                latency = %format!("{} ms", latency.as_millis()),
                status = %res.status().as_u16(),
                "finished processing request"
            );
        });

    let app = Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))
        .route("/chat", post(handlers::chat::chat))
        .layer(trace_layer)
        .layer(cors::cors_layer());

    let app = if allow_credentials {
        app.layer(middleware::from_fn(cors::allow_credentials))
    } else {
        app
    };

    app.with_state(state)
}
