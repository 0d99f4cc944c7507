use std::sync::Once;

use tripwiz_core::{update, AppState, Effect, Msg, Suggestion};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(tripwiz_logging::initialize_for_tests);
}

fn settle(state: AppState, text: &str) -> (AppState, Vec<Effect>) {
    let (state, _) = update(state, Msg::QueryEdited(text.to_string()));
    update(state, Msg::QuerySettled(text.to_string()))
}

fn paris() -> Suggestion {
    Suggestion {
        city_name: "Paris".to_string(),
        country_id: "FR".to_string(),
        country_name: "France".to_string(),
        entity_id: "27539733".to_string(),
        hierarchy: "France|Ile-de-France|Paris".to_string(),
        iata_code: "PAR".to_string(),
        location: "48.856, 2.352".to_string(),
        name: "Paris".to_string(),
        kind: "CITY".to_string(),
    }
}

#[test]
fn settled_query_starts_a_fetch() {
    init_logging();
    let (mut state, effects) = settle(AppState::new(), "paris");
    let view = state.view();

    assert!(view.loading);
    assert!(view.options.is_empty());
    assert_eq!(
        effects,
        vec![Effect::FetchSuggestions {
            request_id: 1,
            destination: "paris".to_string(),
        }]
    );
    assert!(state.consume_dirty());
}

#[test]
fn query_edit_alone_emits_nothing() {
    init_logging();
    let (mut state, effects) = update(AppState::new(), Msg::QueryEdited("pa".to_string()));

    assert!(effects.is_empty());
    assert_eq!(state.view().query, "pa");
    assert!(!state.view().loading);
    assert!(state.consume_dirty());
}

#[test]
fn empty_settle_clears_results_without_fetching() {
    init_logging();
    let (state, _) = settle(AppState::new(), "paris");
    let (state, _) = update(
        state,
        Msg::FetchSucceeded {
            request_id: 1,
            suggestions: vec![paris()],
        },
    );
    assert_eq!(state.view().options.len(), 1);

    let (state, effects) = settle(state, "");
    let view = state.view();

    assert!(effects.is_empty());
    assert!(view.options.is_empty());
    assert!(!view.loading);
}

#[test]
fn fetch_success_replaces_results_and_clears_loading() {
    init_logging();
    let (state, _) = settle(AppState::new(), "paris");
    let (state, effects) = update(
        state,
        Msg::FetchSucceeded {
            request_id: 1,
            suggestions: vec![paris()],
        },
    );
    let view = state.view();

    assert!(effects.is_empty());
    assert!(!view.loading);
    assert_eq!(view.options.len(), 1);
    assert_eq!(view.options[0].label, "Paris, Paris, France");
    assert_eq!(view.options[0].suggestion, paris());
}

#[test]
fn each_settle_supersedes_the_previous_request() {
    init_logging();
    let (state, first) = settle(AppState::new(), "par");
    let (mut state, second) = settle(state, "paris");

    assert_eq!(
        first,
        vec![Effect::FetchSuggestions {
            request_id: 1,
            destination: "par".to_string(),
        }]
    );
    assert_eq!(
        second,
        vec![Effect::FetchSuggestions {
            request_id: 2,
            destination: "paris".to_string(),
        }]
    );
    assert!(state.consume_dirty());

    // The old request resolving late must not clobber the new one.
    let (mut state, _) = update(
        state,
        Msg::FetchSucceeded {
            request_id: 1,
            suggestions: vec![paris()],
        },
    );
    assert!(state.view().loading);
    assert!(state.view().options.is_empty());
    assert!(!state.consume_dirty());

    let (state, _) = update(
        state,
        Msg::FetchSucceeded {
            request_id: 2,
            suggestions: vec![paris()],
        },
    );
    assert!(!state.view().loading);
    assert_eq!(state.view().options.len(), 1);
}

#[test]
fn completion_after_empty_settle_is_discarded() {
    init_logging();
    let (state, _) = settle(AppState::new(), "paris");
    let (mut state, _) = settle(state, "");
    assert!(state.consume_dirty());

    let (mut state, _) = update(
        state,
        Msg::FetchSucceeded {
            request_id: 1,
            suggestions: vec![paris()],
        },
    );
    let view = state.view();

    assert!(view.options.is_empty());
    assert!(!view.loading);
    assert!(!state.consume_dirty());
}

#[test]
fn fetch_failure_surfaces_error_and_stops_loading() {
    init_logging();
    let (state, _) = settle(AppState::new(), "paris");
    let (state, effects) = update(
        state,
        Msg::FetchFailed {
            request_id: 1,
            error: "http status 500".to_string(),
        },
    );
    let view = state.view();

    assert!(effects.is_empty());
    assert!(!view.loading);
    assert!(view.options.is_empty());
    assert!(view.error.as_deref().unwrap_or_default().contains("500"));
}

#[test]
fn stale_failure_is_discarded() {
    init_logging();
    let (state, _) = settle(AppState::new(), "par");
    let (mut state, _) = settle(state, "paris");
    assert!(state.consume_dirty());

    // The superseded request was cancelled; its failure must not touch
    // the view.
    let (mut state, _) = update(
        state,
        Msg::FetchFailed {
            request_id: 1,
            error: "cancelled".to_string(),
        },
    );
    let view = state.view();

    assert!(view.loading);
    assert!(view.error.is_none());
    assert!(!state.consume_dirty());
}

#[test]
fn new_settle_drops_previous_error() {
    init_logging();
    let (state, _) = settle(AppState::new(), "paris");
    let (state, _) = update(
        state,
        Msg::FetchFailed {
            request_id: 1,
            error: "http status 500".to_string(),
        },
    );
    assert!(state.view().error.is_some());

    let (state, _) = settle(state, "london");
    assert!(state.view().error.is_none());
    assert!(state.view().loading);
}
