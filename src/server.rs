//! HTTP server initialization and runtime setup.
//!
//! Wires the image probe, pitch repository and service together and runs the
//! Axum server until Ctrl+C.

use crate::application::services::PitchService;
use crate::config::Config;
use crate::domain::validation::PitchSchema;
use crate::infrastructure::persistence::InMemoryPitchRepository;
use crate::infrastructure::probe::HttpContentProbe;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Builds the pitch service from configuration.
///
/// # Errors
///
/// Returns an error if the HTTP client for the image probe cannot be built.
pub fn build_pitch_service(config: &Config) -> Result<PitchService> {
    let probe = HttpContentProbe::new(config.probe_timeout(), &config.probe_user_agent)
        .context("Failed to initialize image probe")?;

    let schema = PitchSchema::new(Arc::new(probe));
    let repository = Arc::new(InMemoryPitchRepository::new());

    Ok(PitchService::new(schema, repository))
}

/// Runs the HTTP server with the given configuration.
///
/// # Errors
///
/// Returns an error if:
/// - The image probe client cannot be built
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let pitch_service = build_pitch_service(&config)?;
    tracing::info!("Pitch service ready (in-memory storage)");

    let state = AppState::new(Arc::new(pitch_service));
    let app = app_router(state);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        return;
    }
    tracing::info!("Shutdown signal received");
}
