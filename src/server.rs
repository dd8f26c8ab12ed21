//! HTTP server initialization and runtime setup.
//!
//! Handles the database connection, storage-binding selection, and Axum
//! server lifecycle.

use crate::config::{Config, StorageBinding};
use crate::domain::repositories::StudentRepository;
use crate::infrastructure::persistence::{CollectionStudentRepository, ModelStudentRepository};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use mongodb::Client;
use mongodb::bson::doc;
use std::net::SocketAddr;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - MongoDB client and connection check
/// - The configured storage binding (raw collection or mapped model)
/// - Axum HTTP server
///
/// The connection is verified with a `ping` before the listener binds: a
/// service that cannot reach storage must fail startup, not serve requests
/// against a broken binding.
///
/// # Errors
///
/// Returns an error if:
/// - Database connection fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let client = Client::with_uri_str(&config.mongodb_url)
        .await
        .context("Invalid MongoDB connection string")?;
    let db = client.database(&config.db_name);

    db.run_command(doc! { "ping": 1 })
        .await
        .context("Failed to connect to MongoDB")?;
    tracing::info!(database = %config.db_name, "Connected to MongoDB");

    let students: Arc<dyn StudentRepository> = match config.storage_binding {
        StorageBinding::Collection => Arc::new(CollectionStudentRepository::new(&db)),
        StorageBinding::Model => Arc::new(ModelStudentRepository::new(&db)),
    };
    tracing::info!(binding = %config.storage_binding, "Storage binding selected");

    let state = AppState::new(students);
    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Resolves when the process receives Ctrl-C, letting in-flight requests
/// finish before the client handle is dropped.
async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        tracing::info!("Shutdown signal received");
    }
}
