//! Candidate filtering.
//!
//! # Responsibilities
//! - Drop handlers whose declared verb is incompatible with the request
//! - Drop named handlers the request's name hint does not address
//! - Keep catalog order for the survivors
//!
//! # Design Decisions
//! - Verb check runs before the name check
//! - A declared verb matches the request verb exactly or the request's
//!   category verb (GET for HEAD/OPTIONS, POST for everything non-GET-like)
//! - A named handler is reachable only through a matching hint

use super::descriptor::{eq_ignore_case, HandlerDescriptor};
use super::verb::categorize;

/// Handlers on a page that may serve the request, in catalog order.
pub fn filter_candidates<'h>(
    handlers: &'h [HandlerDescriptor],
    method: &str,
    name_hint: Option<&str>,
) -> Vec<&'h HandlerDescriptor> {
    let category_verb = categorize(method).canonical_verb();

    handlers
        .iter()
        .filter(|handler| {
            verb_compatible(handler, method, category_verb) && name_compatible(handler, name_hint)
        })
        .collect()
}

fn verb_compatible(handler: &HandlerDescriptor, method: &str, category_verb: &str) -> bool {
    match handler.http_method.as_deref() {
        None => true,
        Some(declared) => eq_ignore_case(declared, method) || eq_ignore_case(declared, category_verb),
    }
}

fn name_compatible(handler: &HandlerDescriptor, name_hint: Option<&str>) -> bool {
    match (handler.name.as_deref(), name_hint) {
        (None, _) => true,
        (Some(name), Some(hint)) => eq_ignore_case(name, hint),
        (Some(_), None) => false,
    }
}
