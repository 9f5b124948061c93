// ABOUTME: HTTP server assembly: shared state, router with middleware stack, and the serve loop
// ABOUTME: Binds the configured address and shuts down gracefully on Ctrl-C or SIGTERM
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Server assembly
//!
//! Middleware, outermost first:
//!
//! 1. `SetRequestIdLayer` assigns an `x-request-id` when the caller sent none
//! 2. `TraceLayer` opens one span per request
//! 3. `PropagateRequestIdLayer` copies the ID onto the response
//! 4. CORS
//! 5. `CatchPanicLayer` turns a handler panic into a JSON 500
//! 6. `enforce_timeout` bounds each request and answers 408 as JSON
//! 7. `DefaultBodyLimit` caps the body size

use crate::config::environment::{ServerConfig, MAX_REQUEST_BODY_BYTES};
use crate::middleware::{enforce_timeout, make_request_span, panic_response, setup_cors};
use crate::routes::{AssetRoutes, HealthRoutes, WorkoutRoutes};
use crate::services::WorkoutService;
use anyhow::{Context, Result};
use axum::{extract::DefaultBodyLimit, http::Uri, middleware, Router};
use std::sync::Arc;
use swim_core::errors::AppError;
use tokio::net::TcpListener;
use tower_http::{
    catch_panic::CatchPanicLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};
use tracing::{info, warn};

/// Read-only state shared by every handler
#[derive(Debug)]
pub struct AppState {
    /// Startup configuration
    pub config: ServerConfig,
    /// Workout generation service
    pub workout: WorkoutService,
}

impl AppState {
    /// Build state from configuration
    #[must_use]
    pub fn new(config: ServerConfig) -> Self {
        let workout = WorkoutService::new(config.generator);
        Self { config, workout }
    }
}

/// Build the complete router for a configuration
#[must_use]
pub fn build_router(config: ServerConfig) -> Router {
    let cors = setup_cors(&config);
    let timeout = config.request_timeout();
    let state = Arc::new(AppState::new(config));

    Router::new()
        .merge(HealthRoutes::routes())
        .merge(WorkoutRoutes::routes(Arc::clone(&state)))
        .merge(AssetRoutes::routes(state))
        .fallback(handle_not_found)
        .layer(DefaultBodyLimit::max(MAX_REQUEST_BODY_BYTES))
        .layer(middleware::from_fn_with_state(timeout, enforce_timeout))
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(cors)
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}

async fn handle_not_found(uri: Uri) -> AppError {
    AppError::not_found(format!("Route {}", uri.path()))
}

/// Bind and serve until a shutdown signal arrives
///
/// # Errors
///
/// Returns an error if the address cannot be bound or the server fails
pub async fn run(config: ServerConfig) -> Result<()> {
    let address = config.bind_address();
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {address}"))?;
    let local = listener.local_addr().context("Failed to read bound address")?;

    info!("Swim workout server listening on http://{local}");
    info!("  POST http://{local}/generate-workout");
    info!("  GET  http://{local}/styles.css");
    info!("  GET  http://{local}/health");

    axum::serve(listener, build_router(config))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server terminated unexpectedly")?;

    info!("Swim workout server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl-C: {e}");
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
                warn!("Failed to listen for SIGTERM: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Received Ctrl-C, shutting down"),
        () = terminate => info!("Received SIGTERM, shutting down"),
    }
}
