//! Savings Dashboard HTTP API
//!
//! HTTP layer built with Axum. Everything except the health probes is
//! mounted under the configured base path.
//!
//! # Endpoints
//!
//! ## Dashboard
//! - `GET {base}/` - HTML dashboard (`?offset=N` for the table scroll position)
//! - `GET {base}/rows` - Table row window for `?offset=N`, HTML fragment
//!
//! ## Savings
//! - `GET {base}/api/savings` - All entries, most recent first
//! - `GET {base}/api/savings/summary` - Total, table view and chart series
//!
//! ## Health
//! - `GET /health/live` - Liveness probe
//! - `GET /health` - Full health status
//!
//! # Example
//!
//! ```rust,no_run
//! use savings_dashboard::api::{serve, ApiConfig, AppState};
//! use savings_dashboard::savings::builtin_entries;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ApiConfig::new("127.0.0.1", 8080).base_path("/doge-dashboard");
//!     let state = AppState::new(&builtin_entries(), config.clone());
//!     serve(state, &config).await?;
//!     Ok(())
//! }
//! ```

pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::{ApiConfig, AppState};

use axum::{http::Uri, routing::get, Router};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Build the router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let site_routes = Router::new()
        // Dashboard routes
        .route("/", get(routes::dashboard::dashboard))
        .route("/rows", get(routes::dashboard::rows))
        // Savings routes
        .route("/api/savings", get(routes::savings::list_savings))
        .route("/api/savings/summary", get(routes::savings::savings_summary));

    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/", get(routes::health::full_health));

    // axum refuses to nest at the root, and a nested "/" only matches the bare prefix
    let base_path = state.config.base_path.clone();
    let site_routes = if base_path.is_empty() {
        site_routes
    } else {
        Router::new()
            .nest(&base_path, site_routes)
            .route(&format!("{}/", base_path), get(routes::dashboard::dashboard))
    };

    let shared_state = Arc::new(state);

    Router::new()
        .merge(site_routes)
        .nest("/health", health_routes)
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(shared_state)
}

async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(format!("No route for {}", uri.path()))
}

/// Start the server
pub async fn serve(state: AppState, config: &ApiConfig) -> Result<(), ApiError> {
    let router = build_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!(
        "Savings dashboard listening on http://{}{}/",
        addr,
        config.base_path
    );

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("Savings dashboard shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
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
                tracing::error!("Failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
