//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use sessionhub_auth::{IdentityResolver, SessionIssuer};
use sessionhub_core::config::AppConfig;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Login, refresh, registration, and logout flows
    pub issuer: Arc<SessionIssuer>,
    /// Access token verification and principal lookup
    pub resolver: Arc<IdentityResolver>,
}

impl AppState {
    /// Bundles the configured services.
    pub fn new(config: AppConfig, issuer: SessionIssuer, resolver: IdentityResolver) -> Self {
        Self {
            config: Arc::new(config),
            issuer: Arc::new(issuer),
            resolver: Arc::new(resolver),
        }
    }
}
