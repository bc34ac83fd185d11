//! CORS layer configuration.

use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderValue, Method};
use tower_http::cors::{Any, CorsLayer};

use sessionhub_core::config::CorsConfig;

/// Builds a CORS tower layer from configuration.
///
/// Explicit origins get `Access-Control-Allow-Credentials` so session cookies
/// are sent. A `*` origin never does.
pub fn build_cors_layer(config: &CorsConfig) -> CorsLayer {
    let methods: Vec<Method> = config
        .allowed_methods
        .iter()
        .filter_map(|m| m.parse().ok())
        .collect();

    let layer = CorsLayer::new()
        .allow_methods(methods)
        .allow_headers([AUTHORIZATION, CONTENT_TYPE])
        .max_age(std::time::Duration::from_secs(config.max_age_seconds));

    if config.allowed_origins.iter().any(|o| o == "*") {
        return layer.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|o| o.parse().ok())
        .collect();

    layer.allow_origin(origins).allow_credentials(true)
}
