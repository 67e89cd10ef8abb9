//! HTTP host subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware)
//!     → request.rs (verb, handler query value, request ID)
//!     → routing (page lookup, handler selection)
//!     → response.rs (JSON outcome, status code)
//!     → Send to client
//! ```

pub mod request;
pub mod response;
pub mod server;

pub use request::{decode_route_value, HostRequest, X_REQUEST_ID};
pub use server::{AppState, HttpServer};
