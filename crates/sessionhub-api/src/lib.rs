//! # sessionhub-api
//!
//! HTTP API layer for SessionHub built on Axum.
//!
//! Provides the auth and profile endpoints, the `require_auth` middleware
//! that resolves the caller from a bearer token or session cookie, cookie
//! rendering, CORS and request logging layers, and error mapping.

pub mod app;
pub mod cookie;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, serve};
pub use error::ApiError;
pub use state::AppState;
