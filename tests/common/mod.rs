//! Shared utilities for integration tests.

use std::net::SocketAddr;

use page_handlers::config::{CatalogConfig, PageConfig};
use page_handlers::http::HttpServer;
use page_handlers::lifecycle::Shutdown;
use page_handlers::routing::HandlerDescriptor;
use tokio::net::TcpListener;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// A host running on an ephemeral local port.
pub struct TestHost {
    pub addr: SocketAddr,
    pub shutdown: Shutdown,
    pub updates: mpsc::UnboundedSender<CatalogConfig>,
    pub handle: JoinHandle<Result<(), std::io::Error>>,
}

impl TestHost {
    pub fn url(&self, path_and_query: &str) -> String {
        format!("http://{}{}", self.addr, path_and_query)
    }
}

/// Start a host serving `pages`. The listener is bound before returning.
pub async fn start_host(pages: Vec<PageConfig>) -> TestHost {
    let mut config = CatalogConfig::default();
    config.pages = pages;
    start_host_with(config).await
}

/// Start a host from a full config, ignoring its bind address.
pub async fn start_host_with(mut config: CatalogConfig) -> TestHost {
    config.listener.bind_address = "127.0.0.1:0".into();

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let (updates, catalog_updates) = mpsc::unbounded_channel();
    let server = HttpServer::new(config);
    let server_shutdown = shutdown.subscribe();

    let handle = tokio::spawn(async move {
        server.run(listener, catalog_updates, server_shutdown).await
    });

    TestHost {
        addr,
        shutdown,
        updates,
        handle,
    }
}

pub fn page(path: &str, handlers: Vec<HandlerDescriptor>) -> PageConfig {
    PageConfig {
        path: path.to_string(),
        handlers,
    }
}

pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}
