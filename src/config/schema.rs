//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the page host:
//! listener, timeouts, observability and the page/handler catalog.
//! All types derive Serde traits for deserialization from TOML files.

use serde::{Deserialize, Serialize};

use crate::routing::HandlerDescriptor;

/// Root configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct CatalogConfig {
    /// Listener configuration (bind address, body limit).
    pub listener: ListenerConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,

    /// Pages and their declared handlers.
    pub pages: Vec<PageConfig>,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,

    /// Maximum accepted request body in bytes.
    pub max_body_bytes: usize,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
            max_body_bytes: 1024 * 1024,
        }
    }
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Request timeout in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Log output format.
    pub log_format: LogFormat,

    /// Enable the Prometheus metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}

/// One page and the handlers declared on it, in declaration order.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct PageConfig {
    /// Page path (e.g., "/orders").
    pub path: String,

    #[serde(default)]
    pub handlers: Vec<HandlerDescriptor>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let config: CatalogConfig = toml::from_str("").unwrap();
        assert_eq!(config.listener.bind_address, "0.0.0.0:8080");
        assert_eq!(config.timeouts.request_secs, 30);
        assert_eq!(config.observability.log_format, LogFormat::Pretty);
        assert!(!config.observability.metrics_enabled);
        assert!(config.pages.is_empty());
    }

    #[test]
    fn pages_keep_handler_order() {
        let config: CatalogConfig = toml::from_str(
            r#"
            [observability]
            log_format = "json"

            [[pages]]
            path = "/orders"

            [[pages.handlers]]
            http_method = "GET"

            [[pages.handlers]]
            name = "Edit"
            http_method = "POST"
            action = "OnPostEdit"

            [[pages.handlers]]
            "#,
        )
        .unwrap();

        assert_eq!(config.observability.log_format, LogFormat::Json);
        let handlers = &config.pages[0].handlers;
        assert_eq!(handlers.len(), 3);
        assert_eq!(handlers[0], HandlerDescriptor::for_method("GET"));
        assert_eq!(handlers[1].action.as_deref(), Some("OnPostEdit"));
        assert_eq!(handlers[2], HandlerDescriptor::any());
    }
}
