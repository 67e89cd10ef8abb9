//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with a single catch-all page handler
//! - Wire up middleware (request ID, tracing, timeout, body limit)
//! - Resolve page + handler for every request and render the outcome
//! - Swap the page catalog when a reloaded config arrives
//! - Stop on the shutdown broadcast

use axum::{
    body::Body,
    extract::State,
    http::{Request, StatusCode},
    response::Response,
    routing::any,
    Router,
};
use arc_swap::ArcSwap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::net::TcpListener;
use tokio::sync::{broadcast, mpsc};
use tower::ServiceBuilder;
use tower_http::{
    limit::RequestBodyLimitLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::CatalogConfig;
use crate::http::request::{self, HostRequest};
use crate::http::response;
use crate::lifecycle::shutdown;
use crate::observability::metrics::{self, SelectionOutcome};
use crate::routing::{DefaultHandlerSelector, HandlerSelector, PageRouter};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<ArcSwap<PageRouter>>,
    pub selector: Arc<dyn HandlerSelector>,
}

/// HTTP host serving the page catalog.
pub struct HttpServer {
    router: Router,
    config: CatalogConfig,
    catalog: Arc<ArcSwap<PageRouter>>,
}

impl HttpServer {
    /// Create a server using the default specificity rules.
    pub fn new(config: CatalogConfig) -> Self {
        Self::with_selector(config, Arc::new(DefaultHandlerSelector::new()))
    }

    /// Create a server with a custom selection strategy.
    pub fn with_selector(config: CatalogConfig, selector: Arc<dyn HandlerSelector>) -> Self {
        let catalog = Arc::new(ArcSwap::from_pointee(PageRouter::from_config(
            config.pages.clone(),
        )));

        let state = AppState {
            catalog: catalog.clone(),
            selector,
        };

        let router = Self::build_router(&config, state);
        Self {
            router,
            config,
            catalog,
        }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &CatalogConfig, state: AppState) -> Router {
        Router::new()
            .route("/{*path}", any(page_handler))
            .route("/", any(page_handler))
            .with_state(state)
            .layer(
                ServiceBuilder::new()
                    .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                    .layer(TraceLayer::new_for_http())
                    .layer(PropagateRequestIdLayer::x_request_id())
                    .layer(RequestBodyLimitLayer::new(config.listener.max_body_bytes))
                    .layer(TimeoutLayer::with_status_code(
                        StatusCode::REQUEST_TIMEOUT,
                        Duration::from_secs(config.timeouts.request_secs),
                    )),
            )
    }

    /// Shared handle to the live page catalog.
    pub fn catalog(&self) -> Arc<ArcSwap<PageRouter>> {
        self.catalog.clone()
    }

    /// Get a reference to the config the server was built with.
    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    /// Serve until `shutdown` fires.
    ///
    /// Each config received on `catalog_updates` replaces the page catalog.
    /// Listener and timeout settings only change on restart.
    pub async fn run(
        self,
        listener: TcpListener,
        mut catalog_updates: mpsc::UnboundedReceiver<CatalogConfig>,
        shutdown_rx: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            pages = self.catalog.load().len(),
            "HTTP server starting"
        );

        let catalog = self.catalog.clone();
        let reload = tokio::spawn(async move {
            while let Some(config) = catalog_updates.recv().await {
                let router = PageRouter::from_config(config.pages);
                tracing::info!(pages = router.len(), "Page catalog swapped");
                catalog.store(Arc::new(router));
            }
        });

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown::wait(shutdown_rx))
            .await?;

        reload.abort();
        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Resolve the page and its handler, then render the outcome.
async fn page_handler(State(state): State<AppState>, req: Request<Body>) -> Response {
    let start = Instant::now();
    let (parts, _body) = req.into_parts();
    let request_id = request::request_id(&parts.headers);
    let path = parts.uri.path();
    let catalog = state.catalog.load_full();

    let reply = match catalog.match_path(path) {
        None => {
            tracing::warn!(request_id = %request_id, path = %path, "No page matched");
            metrics::record_selection(SelectionOutcome::NoPage);
            response::page_not_found(path, &request_id)
        }
        Some(matched) => {
            let host = HostRequest::from_parts(&parts.method, &parts.uri, matched.route_value);
            let selection = host.selection_request();
            let page = matched.page.path.as_str();

            match state.selector.select(&matched.page.handlers, &selection) {
                Ok(Some(handler)) => {
                    tracing::debug!(
                        request_id = %request_id,
                        page = %page,
                        handler = %handler,
                        "Handler selected"
                    );
                    metrics::record_selection(SelectionOutcome::Selected);
                    response::selected(page, handler, &request_id)
                }
                Ok(None) => {
                    tracing::info!(
                        request_id = %request_id,
                        page = %page,
                        method = %selection.method,
                        name_hint = ?selection.name_hint,
                        "No handler for request"
                    );
                    metrics::record_selection(SelectionOutcome::NoHandler);
                    response::no_handler(page, selection.method, &request_id)
                }
                Err(e) => {
                    tracing::error!(request_id = %request_id, page = %page, error = %e, "Handler selection failed");
                    metrics::record_selection(SelectionOutcome::Ambiguous);
                    response::selection_failed(page, e, &request_id)
                }
            }
        }
    };

    metrics::record_request(parts.method.as_str(), reply.status().as_u16(), start);
    reply
}
