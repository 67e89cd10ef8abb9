//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming Request (path, method, query)
//!     → router.rs (page lookup + route value)
//!     → descriptor.rs (SelectionRequest: verb + name hint)
//!     → filter.rs (verb/name compatible candidates)
//!     → selector.rs (specificity score, tie detection)
//!     → Return: selected handler, no match, or ambiguity error
//!
//! Catalog Compilation (at startup / on reload):
//!     PageConfig[]
//!     → Normalize paths
//!     → Freeze as immutable PageRouter
//! ```
//!
//! # Design Decisions
//! - Catalogs compiled at load time, immutable at runtime
//! - Selection is a pure function: same input, same outcome
//! - Ambiguity is an error, never resolved by declaration order

pub mod descriptor;
pub mod filter;
pub mod router;
pub mod selector;
pub mod verb;

pub use descriptor::{eq_ignore_case, HandlerDescriptor, SelectionRequest, HANDLER_KEY};
pub use filter::filter_candidates;
pub use router::{Page, PageMatch, PageRouter};
pub use selector::{
    score, scored_candidates, select, DefaultHandlerSelector, HandlerSelector, SelectionError,
    SelectionResult, MAX_SCORE,
};
pub use verb::{categorize, VerbCategory};
