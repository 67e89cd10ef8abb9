//! Page lookup.
//!
//! # Responsibilities
//! - Store the handler catalog of every page
//! - Resolve a request path to a page plus an optional route value
//! - Return an explicit no-match for unknown paths
//!
//! # Design Decisions
//! - Immutable after construction (thread-safe without locks)
//! - O(1) page lookup via HashMap
//! - Exact page match first; otherwise the last path segment becomes the
//!   route value of its parent page (`/orders/Edit` → `/orders` + `Edit`)
//! - Path matching is case-sensitive, trailing slashes are ignored

use std::collections::HashMap;

use crate::config::PageConfig;
use crate::routing::HandlerDescriptor;

/// A page and its declared handlers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub path: String,
    pub handlers: Vec<HandlerDescriptor>,
}

/// Result of a path lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageMatch<'r, 'p> {
    pub page: &'r Page,

    /// Handler segment taken from the path, if any.
    pub route_value: Option<&'p str>,
}

/// Page catalog keyed by normalized path.
#[derive(Debug, Default)]
pub struct PageRouter {
    pages: HashMap<String, Page>,
}

impl PageRouter {
    /// Build the catalog. On duplicate paths the first declaration wins.
    pub fn from_config(pages: Vec<PageConfig>) -> Self {
        let mut map = HashMap::with_capacity(pages.len());
        for page in pages {
            let path = normalize(&page.path).to_string();
            if map.contains_key(&path) {
                tracing::warn!(path = %path, "Duplicate page ignored");
                continue;
            }
            map.insert(
                path.clone(),
                Page {
                    path,
                    handlers: page.handlers,
                },
            );
        }
        Self { pages: map }
    }

    /// Look up the page serving `path`.
    pub fn match_path<'r, 'p>(&'r self, path: &'p str) -> Option<PageMatch<'r, 'p>> {
        let path = normalize(path);

        if let Some(page) = self.pages.get(path) {
            return Some(PageMatch {
                page,
                route_value: None,
            });
        }

        let (parent, segment) = path.rsplit_once('/')?;
        let parent = if parent.is_empty() { "/" } else { parent };
        self.pages.get(parent).map(|page| PageMatch {
            page,
            route_value: Some(segment),
        })
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Pages sorted by path.
    pub fn pages(&self) -> Vec<&Page> {
        let mut pages: Vec<&Page> = self.pages.values().collect();
        pages.sort_by(|a, b| a.path.cmp(&b.path));
        pages
    }
}

fn normalize(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        "/"
    } else {
        trimmed
    }
}
