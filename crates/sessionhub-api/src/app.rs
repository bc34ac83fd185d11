//! Application builder and HTTP server lifecycle.

use std::future::IntoFuture;
use std::time::Duration;

use axum::Router;
use tokio::sync::watch;

use sessionhub_core::config::ServerConfig;
use sessionhub_core::error::AppError;

use crate::router::build_router;
use crate::state::AppState;

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(state: AppState) -> Router {
    build_router(state)
}

/// Serves `app` until Ctrl+C or SIGTERM, then drains in-flight requests for
/// at most `shutdown_grace_seconds`.
pub async fn serve(app: Router, config: &ServerConfig) -> Result<(), AppError> {
    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("SessionHub server listening on {}", addr);

    let (shutdown_tx, mut shutdown_rx) = watch::channel(false);
    let grace = Duration::from_secs(config.shutdown_grace_seconds);

    let server = axum::serve(listener, app).with_graceful_shutdown(async move {
        shutdown_signal().await;
        tracing::info!("Shutdown signal received, draining connections");
        let _ = shutdown_tx.send(true);
    });
    let mut server = std::pin::pin!(server.into_future());

    let drain_deadline = async move {
        if shutdown_rx.wait_for(|stopping| *stopping).await.is_err() {
            std::future::pending::<()>().await;
        }
        tokio::time::sleep(grace).await;
    };

    tokio::select! {
        result = &mut server => {
            result.map_err(|e| AppError::internal(format!("Server error: {e}")))?;
        }
        () = drain_deadline => {
            tracing::warn!(grace_seconds = grace.as_secs(), "Graceful shutdown timed out");
        }
    }

    tracing::info!("SessionHub server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
}
