//! Startup orchestration.
//!
//! # Responsibilities
//! - Load and validate configuration
//! - Initialize logging and metrics
//! - Start the catalog watcher and the signal handler
//! - Bind the listener and serve until shutdown
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - Subsystems initialize in order, not concurrently
//! - Listener binds last (traffic only when ready)

use std::net::SocketAddr;
use std::path::Path;

use thiserror::Error;
use tokio::net::TcpListener;
use tokio::sync::mpsc;

use crate::config::{load_config, CatalogConfig, CatalogWatcher, ConfigError};
use crate::http::HttpServer;
use crate::lifecycle::{signals, Shutdown};
use crate::observability::{init_logging, init_metrics};

/// Fatal startup failures.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("logging: {0}")]
    Logging(#[from] tracing_subscriber::util::TryInitError),

    #[error("catalog watcher: {0}")]
    Watch(#[from] notify::Error),

    #[error("listener: {0}")]
    Io(#[from] std::io::Error),
}

/// Run the host until a termination signal arrives.
///
/// Without a config path the built-in defaults are used and nothing is watched.
pub async fn run(config_path: Option<&Path>) -> Result<(), StartupError> {
    let config = match config_path {
        Some(path) => load_config(path)?,
        None => CatalogConfig::default(),
    };

    init_logging(&config.observability)?;

    tracing::info!(
        bind_address = %config.listener.bind_address,
        pages = config.pages.len(),
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse::<SocketAddr>() {
            Ok(addr) => init_metrics(addr),
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    // The watcher handle must outlive the server.
    let (catalog_updates, _watcher) = match config_path {
        Some(path) => {
            let (watcher, rx) = CatalogWatcher::new(path);
            (rx, Some(watcher.run()?))
        }
        None => {
            let (_tx, rx) = mpsc::unbounded_channel();
            (rx, None)
        }
    };

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    signals::spawn_signal_handler(shutdown);

    HttpServer::new(config)
        .run(listener, catalog_updates, server_shutdown)
        .await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
