//! Handler descriptors and selection requests.
//!
//! # Responsibilities
//! - Describe one declared handler on a page (optional name, optional verb)
//! - Carry the per-call request inputs (verb + name hint)
//! - Resolve the name hint from its two sources (route value, query value)
//!
//! # Design Decisions
//! - Descriptors are owned by the page catalog; selection only borrows them
//! - Absent field = wildcard, never an empty string
//! - Name/verb comparison is ordinal and locale-independent

use serde::{Deserialize, Serialize};
use std::fmt;

/// Key under which the name hint travels in route data and in the query string.
pub const HANDLER_KEY: &str = "handler";

/// One declared handler on a page.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
pub struct HandlerDescriptor {
    /// Required name hint. `None` applies regardless of the hint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Required HTTP verb. `None` applies regardless of the verb.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub http_method: Option<String>,

    /// Label of the method the host invokes (e.g. `OnPostEdit`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
}

impl HandlerDescriptor {
    /// A descriptor that matches every request.
    pub fn any() -> Self {
        Self::default()
    }

    /// A descriptor bound to a verb only.
    pub fn for_method(method: impl Into<String>) -> Self {
        Self {
            http_method: Some(method.into()),
            ..Self::default()
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_method(mut self, method: impl Into<String>) -> Self {
        self.http_method = Some(method.into());
        self
    }

    pub fn with_action(mut self, action: impl Into<String>) -> Self {
        self.action = Some(action.into());
        self
    }
}

impl fmt::Display for HandlerDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(action) = &self.action {
            return f.write_str(action);
        }
        write!(
            f,
            "{}:{}",
            self.http_method.as_deref().unwrap_or("*"),
            self.name.as_deref().unwrap_or("*")
        )
    }
}

/// Inputs of one selection call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionRequest<'a> {
    /// Verb of the actual request. Must be non-empty.
    pub method: &'a str,

    /// Resolved name hint.
    pub name_hint: Option<&'a str>,
}

impl<'a> SelectionRequest<'a> {
    pub fn new(method: &'a str) -> Self {
        Self {
            method,
            name_hint: None,
        }
    }

    pub fn with_name_hint(mut self, hint: &'a str) -> Self {
        self.name_hint = Some(hint);
        self
    }

    /// Build a request from both hint sources.
    ///
    /// A non-empty route value wins. Otherwise the first `handler` query
    /// value is used as-is, even when it is empty.
    pub fn from_sources(
        method: &'a str,
        route_value: Option<&'a str>,
        query_value: Option<&'a str>,
    ) -> Self {
        let name_hint = match route_value {
            Some(value) if !value.is_empty() => Some(value),
            _ => query_value,
        };
        Self { method, name_hint }
    }
}

/// Ordinal, case-insensitive string equality.
///
/// Each `char` folds to its uppercase form only when that form is a single
/// `char`; no locale tables, no length-changing expansions.
pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    if a.is_ascii() && b.is_ascii() {
        return a.eq_ignore_ascii_case(b);
    }
    a.chars().map(fold).eq(b.chars().map(fold))
}

fn fold(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}
