//! Catalog file watcher for hot reload.
//!
//! Every modify or create event re-reads the whole catalog. Only catalogs
//! that load and validate are published; a broken edit leaves the running
//! catalog in place until the next good one.

use std::path::{Path, PathBuf};
use std::time::Duration;

use notify::{Config, Event, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc;

use crate::config::loader::load_config;
use crate::config::schema::CatalogConfig;

const POLL_INTERVAL: Duration = Duration::from_secs(2);

/// Publishes each valid version of a catalog file.
pub struct CatalogWatcher {
    path: PathBuf,
    update_tx: mpsc::UnboundedSender<CatalogConfig>,
}

impl CatalogWatcher {
    /// Create a watcher and the receiver its updates arrive on.
    pub fn new(path: &Path) -> (Self, mpsc::UnboundedReceiver<CatalogConfig>) {
        let (update_tx, update_rx) = mpsc::unbounded_channel();
        let watcher = Self {
            path: path.to_path_buf(),
            update_tx,
        };
        (watcher, update_rx)
    }

    /// Start watching. Dropping the returned handle stops the watch.
    pub fn run(self) -> Result<RecommendedWatcher, notify::Error> {
        let Self { path, update_tx } = self;
        let reload_path = path.clone();

        let mut watcher = RecommendedWatcher::new(
            move |res: notify::Result<Event>| match res {
                Ok(event) if event.kind.is_modify() || event.kind.is_create() => {
                    reload(&reload_path, &update_tx);
                }
                Ok(_) => {}
                Err(e) => tracing::error!(error = %e, "Catalog watch error"),
            },
            Config::default().with_poll_interval(POLL_INTERVAL),
        )?;

        watcher.watch(&path, RecursiveMode::NonRecursive)?;
        tracing::info!(path = %path.display(), "Watching catalog file");
        Ok(watcher)
    }
}

/// Load the catalog at `path` and publish it if valid. Returns whether it was sent.
fn reload(path: &Path, tx: &mpsc::UnboundedSender<CatalogConfig>) -> bool {
    match load_config(path) {
        Ok(config) => {
            tracing::info!(
                path = %path.display(),
                pages = config.pages.len(),
                "Catalog reloaded"
            );
            tx.send(config).is_ok()
        }
        Err(e) => {
            tracing::warn!(
                path = %path.display(),
                error = %e,
                "Catalog reload rejected, keeping current catalog"
            );
            false
        }
    }
}
