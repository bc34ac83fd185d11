//! Route definitions for the SessionHub HTTP API.
//!
//! All routes are mounted under `/api`. Protected routes sit behind the
//! `require_auth` middleware, which attaches the caller as `CurrentUser`.

use axum::{
    Router, middleware as axum_middleware,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::middleware::cors::build_cors_layer;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = build_cors_layer(&state.config.server.cors);

    let api_routes = Router::new()
        .merge(public_routes())
        .merge(protected_routes(state.clone()));

    Router::new()
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(middleware::logging::request_logging))
        .with_state(state)
}

/// Endpoints reachable without a session.
fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/health-checker", get(handlers::health::health))
        .route("/auth/register", post(handlers::auth::register))
        .route("/auth/login", post(handlers::auth::login))
        .route("/auth/refresh", get(handlers::auth::refresh))
}

/// Endpoints that require a resolved user.
fn protected_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/auth/logout", get(handlers::auth::logout))
        .route("/users/me", get(handlers::user::me))
        .route_layer(axum_middleware::from_fn_with_state(
            state,
            middleware::auth::require_auth,
        ))
}
