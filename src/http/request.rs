//! Request inspection.
//!
//! # Responsibilities
//! - Read the verb and the `handler` query value from an incoming request
//! - Combine them with the route value into a `SelectionRequest`
//! - Expose the request ID set by the request-ID layer
//!
//! # Design Decisions
//! - Query values are form-decoded; route values are percent-decoded
//! - The `handler` query key matches case-insensitively
//! - Only the first `handler` query value counts
//! - No body inspection: selection never depends on the payload

use axum::http::{HeaderMap, Method, Uri};

use percent_encoding::percent_decode_str;

use crate::routing::{eq_ignore_case, SelectionRequest, HANDLER_KEY};

/// Header carrying the per-request correlation ID.
pub const X_REQUEST_ID: &str = "x-request-id";

/// Selection inputs extracted from one HTTP request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostRequest {
    pub method: String,
    pub route_value: Option<String>,
    pub query_value: Option<String>,
}

impl HostRequest {
    pub fn from_parts(method: &Method, uri: &Uri, route_value: Option<&str>) -> Self {
        Self {
            method: method.as_str().to_string(),
            route_value: route_value.map(decode_route_value),
            query_value: uri.query().and_then(first_handler_value),
        }
    }

    /// Borrow as selector input, applying the hint precedence rule.
    pub fn selection_request(&self) -> SelectionRequest<'_> {
        SelectionRequest::from_sources(
            &self.method,
            self.route_value.as_deref(),
            self.query_value.as_deref(),
        )
    }
}

/// First value of the `handler` key in a raw query string.
pub fn first_handler_value(query: &str) -> Option<String> {
    url::form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| eq_ignore_case(key, HANDLER_KEY))
        .map(|(_, value)| value.into_owned())
}

/// Percent-decode a raw path segment. Invalid UTF-8 is replaced, and `+`
/// stays literal.
pub fn decode_route_value(segment: &str) -> String {
    percent_decode_str(segment).decode_utf8_lossy().into_owned()
}

/// Request ID from the headers, or `"unknown"`.
pub fn request_id(headers: &HeaderMap) -> String {
    headers
        .get(X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown")
        .to_string()
}
