//! Person API Library
//!
//! This crate provides the HTTP surface: extractors that validate every
//! input source, handlers that shape validated records into responses, and
//! the router that ties them together.

pub mod config;
pub mod extractors;
pub mod handlers;
pub mod openapi;
pub mod routes;
pub mod state;

use std::net::SocketAddr;

use tokio::signal;
use tracing::info;

use crate::config::ApiConfig;
use crate::routes::create_router;
use crate::state::AppState;

/// Run the HTTP server with the given configuration.
pub async fn run_server(config: ApiConfig) -> Result<(), Box<dyn std::error::Error>> {
    // Build address
    let addr: SocketAddr = config.service.addr().parse()?;

    // Create app state
    let state = AppState::from_config(config);
    info!(
        service = %state.config.service.service_name,
        known_person_ids = ?state.config.known_person_ids,
        max_upload_bytes = state.config.upload.max_bytes,
        "Configuration loaded"
    );

    // Build router
    let service_name = state.config.service.service_name.clone();
    let app = create_router(state);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("{} listening on http://{}", service_name, addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C, shutting down"),
        _ = terminate => info!("Received SIGTERM, shutting down"),
    }
}
