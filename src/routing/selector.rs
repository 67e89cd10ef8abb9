//! Handler selection: scoring and tie-break.
//!
//! # Data Flow
//! ```text
//! page handlers + SelectionRequest
//!     → filter.rs (verb/name compatibility)
//!     → score each candidate (0..=4)
//!     → highest occupied score band
//!     → one occupant: selected / several: ambiguous / none: no match
//! ```
//!
//! # Scoring
//! | Condition                                  | Points |
//! |--------------------------------------------|--------|
//! | handler declares a name                    | +1     |
//! | declared verb equals the request verb      | +3     |
//! | declared verb matched only via its category| +1     |
//! | no declared verb                           | 0      |
//!
//! # Design Decisions
//! - Pure function of its inputs; no caching, no interior state
//! - Ties in the winning band fail loudly instead of picking the first
//! - Lower bands are never consulted once a higher band is occupied

use std::fmt;

use thiserror::Error;

use super::descriptor::{eq_ignore_case, HandlerDescriptor, SelectionRequest};
use super::filter::filter_candidates;

/// Highest score a handler can reach (named + exact verb).
pub const MAX_SCORE: u8 = 4;

/// Errors surfaced by handler selection.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    /// Two or more handlers share the winning score.
    #[error(
        "ambiguous handler match ({count} candidates at score {score}): {list}",
        count = .candidates.len(),
        list = candidate_list(.candidates)
    )]
    Ambiguous {
        score: u8,
        candidates: Vec<HandlerDescriptor>,
    },
}

fn candidate_list(candidates: &[HandlerDescriptor]) -> String {
    candidates
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Outcome of a selection call.
pub type SelectionResult<'h> = Result<Option<&'h HandlerDescriptor>, SelectionError>;

/// Pluggable handler selection strategy.
///
/// Hosts hold a `dyn HandlerSelector` so a page can swap the default
/// specificity rules for its own.
pub trait HandlerSelector: Send + Sync + fmt::Debug {
    fn select<'h>(
        &self,
        handlers: &'h [HandlerDescriptor],
        request: &SelectionRequest<'_>,
    ) -> SelectionResult<'h>;
}

/// Specificity-based selection.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultHandlerSelector;

impl DefaultHandlerSelector {
    pub fn new() -> Self {
        Self
    }
}

impl HandlerSelector for DefaultHandlerSelector {
    fn select<'h>(
        &self,
        handlers: &'h [HandlerDescriptor],
        request: &SelectionRequest<'_>,
    ) -> SelectionResult<'h> {
        select(handlers, request)
    }
}

/// Specificity of a handler that already passed the candidate filter.
pub fn score(handler: &HandlerDescriptor, method: &str) -> u8 {
    let mut score = 0;

    // A name match implies the verb was already found compatible.
    if handler.name.is_some() {
        score += 1;
    }

    match handler.http_method.as_deref() {
        Some(declared) if eq_ignore_case(declared, method) => score += 3,
        Some(_) => score += 1,
        None => {}
    }

    score
}

/// Candidates for the request paired with their scores, in catalog order.
pub fn scored_candidates<'h>(
    handlers: &'h [HandlerDescriptor],
    request: &SelectionRequest<'_>,
) -> Vec<(&'h HandlerDescriptor, u8)> {
    filter_candidates(handlers, request.method, request.name_hint)
        .into_iter()
        .map(|handler| (handler, score(handler, request.method)))
        .collect()
}

/// Select the single most specific handler for the request.
///
/// Returns `Ok(None)` when no handler qualifies and
/// [`SelectionError::Ambiguous`] when the winning score is shared.
pub fn select<'h>(
    handlers: &'h [HandlerDescriptor],
    request: &SelectionRequest<'_>,
) -> SelectionResult<'h> {
    let scored = scored_candidates(handlers, request);

    for (handler, score) in &scored {
        tracing::trace!(handler = %handler, score, "Scored handler candidate");
    }

    let Some(best) = scored.iter().map(|(_, score)| *score).max() else {
        tracing::debug!(
            method = request.method,
            name_hint = ?request.name_hint,
            "No handler candidates"
        );
        return Ok(None);
    };

    let mut winners = scored
        .iter()
        .filter(|(_, score)| *score == best)
        .map(|(handler, _)| *handler);

    let first = winners.next();
    let rest: Vec<&HandlerDescriptor> = winners.collect();

    match first {
        Some(handler) if rest.is_empty() => {
            tracing::debug!(handler = %handler, score = best, "Handler selected");
            Ok(Some(handler))
        }
        Some(handler) => {
            let candidates: Vec<HandlerDescriptor> = std::iter::once(handler)
                .chain(rest)
                .cloned()
                .collect();
            tracing::warn!(
                method = request.method,
                name_hint = ?request.name_hint,
                score = best,
                count = candidates.len(),
                "Ambiguous handler match"
            );
            Err(SelectionError::Ambiguous {
                score: best,
                candidates,
            })
        }
        None => Ok(None),
    }
}
