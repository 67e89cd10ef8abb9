//! Metrics collection and exposition.
//!
//! # Metrics
//! - `page_requests_total` (counter): requests by method, status
//! - `page_request_duration_seconds` (histogram): latency distribution
//! - `page_handler_selections_total` (counter): selection outcomes
//!
//! # Design Decisions
//! - Recording is a no-op until an exporter is installed
//! - Labels stay low-cardinality (no page paths, no handler names)

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::PrometheusBuilder;

/// Outcome label for `page_handler_selections_total`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionOutcome {
    Selected,
    NoHandler,
    NoPage,
    Ambiguous,
}

impl SelectionOutcome {
    pub fn as_str(self) -> &'static str {
        match self {
            SelectionOutcome::Selected => "selected",
            SelectionOutcome::NoHandler => "no_handler",
            SelectionOutcome::NoPage => "no_page",
            SelectionOutcome::Ambiguous => "ambiguous",
        }
    }
}

/// Install the Prometheus exporter with its own HTTP listener.
///
/// Must be called from within a Tokio runtime.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics endpoint started"),
        Err(e) => tracing::error!(error = %e, "Failed to install metrics exporter"),
    }
}

pub fn record_selection(outcome: SelectionOutcome) {
    metrics::counter!("page_handler_selections_total", "outcome" => outcome.as_str()).increment(1);
}

pub fn record_request(method: &str, status: u16, start: Instant) {
    let labels = [
        ("method", method.to_string()),
        ("status", status.to_string()),
    ];
    metrics::counter!("page_requests_total", &labels).increment(1);
    metrics::histogram!("page_request_duration_seconds", &labels)
        .record(start.elapsed().as_secs_f64());
}
