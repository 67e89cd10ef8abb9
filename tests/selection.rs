//! Selection behaviour through the public API.

use page_handlers::routing::{
    categorize, select, DefaultHandlerSelector, HandlerDescriptor, HandlerSelector,
    SelectionError, SelectionRequest, VerbCategory, MAX_SCORE,
};
use page_handlers::routing::{score, scored_candidates};
use rstest::rstest;

fn catalog() -> Vec<HandlerDescriptor> {
    vec![
        HandlerDescriptor::for_method("GET").with_action("OnGet"),
        HandlerDescriptor::for_method("POST").with_action("OnPost"),
        HandlerDescriptor::for_method("POST")
            .with_name("Delete")
            .with_action("OnPostDelete"),
        HandlerDescriptor::any().with_action("OnAny"),
    ]
}

fn action(selected: Option<&HandlerDescriptor>) -> Option<&str> {
    selected.and_then(|h| h.action.as_deref())
}

#[rstest]
#[case("GET", None, Some("OnGet"))]
#[case("get", None, Some("OnGet"))]
#[case("HEAD", None, Some("OnGet"))]
#[case("OPTIONS", None, Some("OnGet"))]
#[case("POST", None, Some("OnPost"))]
#[case("PUT", None, Some("OnPost"))]
#[case("DELETE", None, Some("OnPost"))]
#[case("POST", Some("delete"), Some("OnPostDelete"))]
#[case("POST", Some("Missing"), Some("OnPost"))]
#[case("GET", Some("Delete"), Some("OnGet"))]
fn resolves_expected_handler(
    #[case] method: &str,
    #[case] hint: Option<&str>,
    #[case] expected: Option<&str>,
) {
    let handlers = catalog();
    let request = SelectionRequest {
        method,
        name_hint: hint,
    };
    let selected = select(&handlers, &request).unwrap();
    assert_eq!(action(selected), expected);
}

#[test]
fn unconstrained_handler_is_the_fallback() {
    let handlers = vec![
        HandlerDescriptor::for_method("GET").with_action("OnGet"),
        HandlerDescriptor::any().with_action("OnAny"),
    ];
    let selected = select(&handlers, &SelectionRequest::new("POST")).unwrap();
    assert_eq!(action(selected), Some("OnAny"));

    let selected = select(&handlers, &SelectionRequest::new("GET")).unwrap();
    assert_eq!(action(selected), Some("OnGet"));
}

#[test]
fn named_handler_requires_a_hint() {
    let handlers = vec![HandlerDescriptor::for_method("POST")
        .with_name("Save")
        .with_action("OnPostSave")];

    assert!(select(&handlers, &SelectionRequest::new("POST"))
        .unwrap()
        .is_none());
    assert!(select(&handlers, &SelectionRequest::new("POST").with_name_hint(""))
        .unwrap()
        .is_none());

    let selected = select(&handlers, &SelectionRequest::new("POST").with_name_hint("SAVE"))
        .unwrap();
    assert_eq!(action(selected), Some("OnPostSave"));
}

#[test]
fn exact_verb_beats_category_verb() {
    let handlers = vec![
        HandlerDescriptor::for_method("POST").with_action("OnPost"),
        HandlerDescriptor::for_method("PUT").with_action("OnPut"),
    ];
    let selected = select(&handlers, &SelectionRequest::new("PUT")).unwrap();
    assert_eq!(action(selected), Some("OnPut"));
}

#[test]
fn tie_reports_every_candidate_in_catalog_order() {
    let handlers = vec![
        HandlerDescriptor::for_method("GET").with_action("OnGet"),
        HandlerDescriptor::for_method("POST").with_action("OnPost"),
        HandlerDescriptor::for_method("post").with_action("OnPostAsync"),
        HandlerDescriptor::for_method("Post").with_action("OnPostLegacy"),
    ];

    let err = select(&handlers, &SelectionRequest::new("POST")).unwrap_err();
    let SelectionError::Ambiguous { score, candidates } = err;
    assert_eq!(score, 3);
    let actions: Vec<_> = candidates.iter().filter_map(|c| c.action.as_deref()).collect();
    assert_eq!(actions, vec!["OnPost", "OnPostAsync", "OnPostLegacy"]);
}

#[test]
fn lower_bands_never_conflict_with_a_unique_winner() {
    let handlers = vec![
        HandlerDescriptor::for_method("POST").with_action("OnPostA"),
        HandlerDescriptor::for_method("POST").with_action("OnPostB"),
        HandlerDescriptor::for_method("PATCH")
            .with_name("Go")
            .with_action("OnPatchGo"),
    ];

    // Both POST handlers score 1 for a PATCH request; the named handler scores 4.
    let request = SelectionRequest::new("PATCH").with_name_hint("go");
    let selected = select(&handlers, &request).unwrap();
    assert_eq!(action(selected), Some("OnPatchGo"));

    let err = select(&handlers, &SelectionRequest::new("PATCH")).unwrap_err();
    assert!(err.to_string().contains("OnPostA, OnPostB"));
}

#[test]
fn scores_stay_within_bounds() {
    let handlers = catalog();
    for method in ["GET", "HEAD", "POST", "PUT", "DELETE", "PATCH", "OPTIONS"] {
        let request = SelectionRequest::new(method).with_name_hint("Delete");
        for (handler, s) in scored_candidates(&handlers, &request) {
            assert!(s <= MAX_SCORE);
            assert_eq!(s, score(handler, method));
        }
    }
}

#[test]
fn canonical_verbs_map_to_their_own_category() {
    for category in [VerbCategory::GetLike, VerbCategory::PostLike] {
        assert_eq!(categorize(category.canonical_verb()), category);
    }
}

#[test]
fn selector_trait_matches_free_function() {
    let selector: Box<dyn HandlerSelector> = Box::new(DefaultHandlerSelector::new());
    let handlers = catalog();

    for method in ["GET", "POST", "TRACE"] {
        let request = SelectionRequest::new(method);
        assert_eq!(
            selector.select(&handlers, &request).unwrap(),
            select(&handlers, &request).unwrap()
        );
    }
}

#[test]
fn selection_is_pure() {
    let handlers = catalog();
    let before = handlers.clone();
    let request = SelectionRequest::new("POST").with_name_hint("Delete");

    let first = select(&handlers, &request).unwrap().cloned();
    let second = select(&handlers, &request).unwrap().cloned();
    assert_eq!(first, second);
    assert_eq!(handlers, before);
}
