//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! catalog file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → CatalogConfig (validated, immutable)
//!     → compiled into routing::PageRouter
//!
//! On file change:
//!     watcher.rs detects change
//!     → loader.rs loads new catalog
//!     → validation.rs validates
//!     → sent to the server, which swaps its PageRouter atomically
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; changes require full reload
//! - All sections have defaults to allow minimal files
//! - Invalid reloads are logged and dropped; the running catalog stays

pub mod loader;
pub mod schema;
pub mod validation;
pub mod watcher;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::{
    CatalogConfig, ListenerConfig, LogFormat, ObservabilityConfig, PageConfig, TimeoutConfig,
};
pub use validation::{validate_config, ValidationError};
pub use watcher::CatalogWatcher;
