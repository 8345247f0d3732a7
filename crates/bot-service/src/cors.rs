//! Cross-origin policy.
//!
//! Every origin, method and header is allowed. With credentials enabled the
//! responses mirror a wildcard-origin, credentials-allowed policy:
//!
//! - requests with an `Origin` get `Access-Control-Allow-Credentials: true`
//! - plain requests keep `Access-Control-Allow-Origin: *`
//! - preflights and requests carrying a `Cookie` get the request origin echoed
//!   back, since browsers refuse `*` on those

use std::time::Duration;

use axum::{
    extract::Request,
    http::{
        header::{
            ACCESS_CONTROL_ALLOW_CREDENTIALS, ACCESS_CONTROL_ALLOW_ORIGIN,
            ACCESS_CONTROL_REQUEST_METHOD, COOKIE, ORIGIN,
        },
        HeaderValue, Method,
    },
    middleware::Next,
    response::Response,
};
use bot_service_config::CorsConfig;
use tower_http::cors::{AllowHeaders, AllowMethods, Any, CorsLayer};

const PREFLIGHT_MAX_AGE: Duration = Duration::from_secs(600);

/// Wildcard-origin CORS layer. Preflights list every standard method and
/// echo the requested headers.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(AllowMethods::list([
            Method::DELETE,
            Method::GET,
            Method::HEAD,
            Method::OPTIONS,
            Method::PATCH,
            Method::POST,
            Method::PUT,
        ]))
        .allow_headers(AllowHeaders::mirror_request())
        .max_age(PREFLIGHT_MAX_AGE)
}

/// Middleware applied outside [`cors_layer`] when credentials are allowed.
pub async fn allow_credentials(request: Request, next: Next) -> Response {
    let origin = request.headers().get(ORIGIN).cloned();
    let echo_origin = is_preflight(&request) || request.headers().contains_key(COOKIE);

    let mut response = next.run(request).await;

    let Some(origin) = origin else {
        return response;
    };

    let headers = response.headers_mut();
    headers.insert(ACCESS_CONTROL_ALLOW_CREDENTIALS, HeaderValue::from_static("true"));
    if echo_origin {
        headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, origin);
    }

    response
}

fn is_preflight(request: &Request) -> bool {
    request.method() == Method::OPTIONS
        && request.headers().contains_key(ACCESS_CONTROL_REQUEST_METHOD)
}

/// Label used in startup logs.
pub fn describe(config: &CorsConfig) -> &'static str {
    if config.allow_credentials {
        "any origin, credentials allowed"
    } else {
        "any origin, no credentials"
    }
}
