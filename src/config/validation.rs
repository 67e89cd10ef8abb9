//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, addresses parse)
//! - Reject malformed page paths and handler fields
//! - Detect conflicting page declarations
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: CatalogConfig → Result<(), Vec<ValidationError>>
//! - Duplicate handlers on one page are accepted: they surface at request
//!   time as an ambiguous match

use std::collections::HashSet;
use std::net::SocketAddr;

use axum::http::Method;
use thiserror::Error;

use crate::config::schema::CatalogConfig;

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("invalid {field} address: {value}")]
    InvalidAddress { field: &'static str, value: String },

    #[error("timeouts.request_secs must be greater than zero")]
    ZeroTimeout,

    #[error("page path must start with '/': {0:?}")]
    InvalidPagePath(String),

    #[error("duplicate page path: {0}")]
    DuplicatePage(String),

    #[error("page {page}: handler #{index} has an empty name")]
    EmptyHandlerName { page: String, index: usize },

    #[error("page {page}: handler #{index} has an invalid http_method {method:?}")]
    InvalidHttpMethod {
        page: String,
        index: usize,
        method: String,
    },
}

/// Validate a parsed configuration.
pub fn validate_config(config: &CatalogConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidAddress {
            field: "listener.bind_address",
            value: config.listener.bind_address.clone(),
        });
    }

    if config.observability.metrics_enabled
        && config.observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError::InvalidAddress {
            field: "observability.metrics_address",
            value: config.observability.metrics_address.clone(),
        });
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroTimeout);
    }

    let mut seen = HashSet::new();
    for page in &config.pages {
        if !page.path.starts_with('/') {
            errors.push(ValidationError::InvalidPagePath(page.path.clone()));
        }

        let normalized = page.path.trim_end_matches('/');
        if !seen.insert(normalized) {
            errors.push(ValidationError::DuplicatePage(page.path.clone()));
        }

        for (index, handler) in page.handlers.iter().enumerate() {
            if handler.name.as_deref() == Some("") {
                errors.push(ValidationError::EmptyHandlerName {
                    page: page.path.clone(),
                    index,
                });
            }

            if let Some(method) = handler.http_method.as_deref() {
                if !is_method_token(method) {
                    errors.push(ValidationError::InvalidHttpMethod {
                        page: page.path.clone(),
                        index,
                        method: method.to_string(),
                    });
                }
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Whether `s` parses as an HTTP method, including extension methods.
fn is_method_token(s: &str) -> bool {
    Method::from_bytes(s.as_bytes()).is_ok()
}
