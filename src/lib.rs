//! Page handler selection.
//!
//! Picks which of a page's declared handlers serves a request, from the
//! request verb and an optional handler name hint. The core lives in
//! [`routing`]; the remaining modules form a reference HTTP host around it.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod routing;

pub use config::CatalogConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use routing::{
    select, DefaultHandlerSelector, HandlerDescriptor, HandlerSelector, SelectionError,
    SelectionRequest,
};
