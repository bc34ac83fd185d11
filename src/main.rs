//! SessionHub Server: token-based authentication service.
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{EnvFilter, fmt};

use sessionhub_api::AppState;
use sessionhub_auth::{
    IdentityResolver, KeyMaterial, PasswordHasher, SessionIssuer, TokenCodec, UserStore,
};
use sessionhub_core::config::AppConfig;
use sessionhub_core::error::AppError;
use sessionhub_core::traits::IdentityStore;
use sessionhub_database::{DatabasePool, UserRepository};

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {:#}", e);
        std::process::exit(1);
    }
}

/// Load configuration for the environment named by `SESSIONHUB_ENV`.
fn load_configuration() -> Result<AppConfig, AppError> {
    let env = std::env::var("SESSIONHUB_ENV").unwrap_or_else(|_| "development".to_string());
    AppConfig::load(&env)
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> anyhow::Result<()> {
    tracing::info!("Starting SessionHub v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Key material ─────────────────────────────────────
    let keys = Arc::new(
        KeyMaterial::from_config(&config.auth).context("Failed to load token keys")?,
    );
    let hasher = Arc::new(
        PasswordHasher::new(&config.auth.password).context("Failed to configure hasher")?,
    );
    tracing::info!(auth = ?config.auth, "Token keys loaded");

    // ── Step 2: Database connection + migrations ─────────────────
    let db = DatabasePool::connect(&config.database)
        .await
        .context("Database connection failed")?;
    db.health_check()
        .await
        .context("Database health check failed")?;

    tracing::info!("Running database migrations...");
    sessionhub_database::migration::run_migrations(db.pool())
        .await
        .context("Migration failed")?;
    tracing::info!("Database migrations complete");

    let user_repo = UserRepository::new(db.pool().clone());
    user_repo
        .ensure_unique_index("email")
        .await
        .context("Failed to create unique email index")?;
    let store: Arc<UserStore> = Arc::new(user_repo);

    // ── Step 3: Auth services ────────────────────────────────────
    let issuer = SessionIssuer::new(
        TokenCodec::new(),
        Arc::clone(&keys),
        hasher,
        Arc::clone(&store),
        &config.auth,
    );
    let resolver = IdentityResolver::new(TokenCodec::new(), keys, store);

    // ── Step 4: HTTP server ──────────────────────────────────────
    let server_config = config.server.clone();
    let app = sessionhub_api::build_app(AppState::new(config, issuer, resolver));
    let result = sessionhub_api::serve(app, &server_config).await;

    db.close().await;
    result.map_err(Into::into)
}
