//! Verb categories for fuzzy method matching.
//!
//! HEAD and OPTIONS requests are served by handlers declared for GET. Every
//! other verb, known or not, falls into the POST category.

use super::descriptor::eq_ignore_case;

/// Coarse grouping of HTTP verbs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VerbCategory {
    GetLike,
    PostLike,
}

impl VerbCategory {
    /// Canonical verb a handler must declare to match this category.
    pub fn canonical_verb(self) -> &'static str {
        match self {
            VerbCategory::GetLike => "GET",
            VerbCategory::PostLike => "POST",
        }
    }
}

const GET_LIKE: [&str; 3] = ["GET", "HEAD", "OPTIONS"];

/// Map a request verb to its category. Case-insensitive and total.
pub fn categorize(verb: &str) -> VerbCategory {
    if GET_LIKE.iter().any(|v| eq_ignore_case(v, verb)) {
        VerbCategory::GetLike
    } else {
        VerbCategory::PostLike
    }
}
