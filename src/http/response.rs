//! Response rendering.
//!
//! # Responsibilities
//! - Render selection outcomes as JSON bodies
//! - Map outcomes to status codes
//!
//! # Design Decisions
//! - 200: one handler selected
//! - 404: unknown page, or no handler applies to the request
//! - 500: ambiguous match (a catalog defect, not a client error)

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::routing::{HandlerDescriptor, SelectionError};

/// Body of a successful selection.
#[derive(Debug, Clone, Serialize)]
pub struct SelectedBody<'a> {
    pub page: &'a str,
    pub handler: &'a HandlerDescriptor,
    pub request_id: &'a str,
}

/// Body of every non-200 answer.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody<'a> {
    pub error: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<&'a str>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub candidates: Vec<HandlerDescriptor>,
    pub request_id: &'a str,
}

pub fn selected(page: &str, handler: &HandlerDescriptor, request_id: &str) -> Response {
    let body = SelectedBody {
        page,
        handler,
        request_id,
    };
    (StatusCode::OK, Json(body)).into_response()
}

pub fn page_not_found(path: &str, request_id: &str) -> Response {
    let body = ErrorBody {
        error: "page_not_found",
        message: format!("No page matches {path}"),
        page: None,
        candidates: Vec::new(),
        request_id,
    };
    (StatusCode::NOT_FOUND, Json(body)).into_response()
}

pub fn no_handler(page: &str, method: &str, request_id: &str) -> Response {
    let body = ErrorBody {
        error: "no_handler",
        message: format!("No handler on {page} accepts {method}"),
        page: Some(page),
        candidates: Vec::new(),
        request_id,
    };
    (StatusCode::NOT_FOUND, Json(body)).into_response()
}

pub fn selection_failed(page: &str, err: SelectionError, request_id: &str) -> Response {
    let message = err.to_string();
    let SelectionError::Ambiguous { candidates, .. } = err;
    let body = ErrorBody {
        error: "ambiguous_handler",
        message,
        page: Some(page),
        candidates,
        request_id,
    };
    (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_status_codes() {
        let handler = HandlerDescriptor::for_method("GET");
        assert_eq!(selected("/a", &handler, "r").status(), StatusCode::OK);
        assert_eq!(page_not_found("/x", "r").status(), StatusCode::NOT_FOUND);
        assert_eq!(no_handler("/a", "PUT", "r").status(), StatusCode::NOT_FOUND);

        let err = SelectionError::Ambiguous {
            score: 3,
            candidates: vec![handler.clone(), handler],
        };
        assert_eq!(
            selection_failed("/a", err, "r").status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn error_body_omits_empty_fields() {
        let body = ErrorBody {
            error: "page_not_found",
            message: "nope".into(),
            page: None,
            candidates: Vec::new(),
            request_id: "r",
        };
        let v = serde_json::to_value(&body).unwrap();
        assert!(v.get("page").is_none());
        assert!(v.get("candidates").is_none());
        assert_eq!(v["request_id"], "r");
    }
}
