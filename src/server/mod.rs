// src/server/mod.rs
//! HTTP server for the recipe catalog
//!
//! Serves two surfaces over the same store:
//! - an HTML browsing UI (`/`, `/random`, `/:id`, `/categories/:title`)
//! - a JSON API (`/api/v1/:id`, `/api/v1/recipes`)
//!
//! Requests are independent. Each one opens its own SQLite connection on
//! the blocking pool and reads from a single snapshot.

pub mod config;
mod error;
mod handlers;
mod routes;
mod views;

pub use config::RecipeBoxConfig;
pub use error::{ApiError, PageError};
pub use routes::create_router;

use crate::db;
use crate::pagination::PageLimits;
use anyhow::Result;
use rusqlite::Transaction;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::signal;

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to
    pub bind_addr: SocketAddr,
    /// Path to the recipe database
    pub db_path: PathBuf,
    /// Page size defaults and bounds for listings
    pub page_limits: PageLimits,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 5000)),
            db_path: PathBuf::from(db::DEFAULT_DB_PATH),
            page_limits: PageLimits::default(),
        }
    }
}

/// Shared server state
///
/// Immutable once the server starts; handlers only read it.
#[derive(Debug)]
pub struct ServerState {
    pub config: ServerConfig,
}

impl ServerState {
    pub fn new(config: ServerConfig) -> Self {
        Self { config }
    }

    /// Run `f` against a read snapshot on the blocking thread pool
    pub async fn read<T, F>(&self, f: F) -> crate::Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&Transaction) -> crate::Result<T> + Send + 'static,
    {
        let db_path = self.config.db_path.clone();

        tokio::task::spawn_blocking(move || {
            let mut conn = db::open(&db_path)?;
            db::read_snapshot(&mut conn, f)
        })
        .await
        .map_err(|e| crate::Error::IoError(format!("Request task failed: {}", e)))?
    }
}

/// Start the recipe server and run until Ctrl+C or SIGTERM
pub async fn run_server(config: ServerConfig) -> Result<()> {
    tracing::info!("Starting recipe server on {}", config.bind_addr);
    tracing::info!("Database: {:?}", config.db_path);
    tracing::info!(
        "Page size: default {}, max {}",
        config.page_limits.default_per_page,
        config.page_limits.max_per_page
    );

    // Creates the file on first start, applies pending migrations otherwise
    db::init(&config.db_path.to_string_lossy())?;

    let state = Arc::new(ServerState::new(config.clone()));
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!("Recipe server is ready");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Recipe server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
        tracing::info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
                tracing::info!("Received terminate signal, shutting down");
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
}
