//! Debounced autocomplete and search submission behavior.

use super::*;
use medialib_core::models::{Highlight, SearchHit};

fn test_hit(id: &str, name: &str) -> SearchHit {
    SearchHit {
        id: id.to_string(),
        name: name.to_string(),
        url: format!("https://cdn.example.com/{}", name),
        highlights: vec![Highlight {
            path: "name".to_string(),
            score: 1.0,
        }],
        parent_folder_id: None,
        bucket: "media".to_string(),
        custom_fields: CustomFields::default(),
    }
}

#[test]
fn autocomplete_waits_for_the_debounce_window() {
    let mut harness = make_app();
    harness.app.set_search_query("red".to_string());

    harness.app.maybe_dispatch_autocomplete();
    assert_no_cmd(&harness.cmd_rx);

    let debounce = harness.app.search_debounce;
    expire_debounce(&mut harness.app.search_last_input_at, debounce);
    harness.app.maybe_dispatch_autocomplete();
    match recv_cmd(&harness.cmd_rx) {
        CoreCmd::Autocomplete { query } => assert_eq!(query, "red"),
        other => panic!("expected autocomplete, got {:?}", other),
    }

    // The same settled query is not re-sent on later frames.
    harness.app.maybe_dispatch_autocomplete();
    assert_no_cmd(&harness.cmd_rx);
}

#[test]
fn empty_query_clears_suggestions_and_sends_nothing() {
    let mut harness = make_app();
    harness.app.suggestions.push(test_hit("1", "red-shoe.jpg"));
    harness.app.search_last_sent = "red".to_string();

    harness.app.set_search_query(String::new());
    harness.app.maybe_dispatch_autocomplete();

    assert!(harness.app.suggestions.is_empty());
    assert_no_cmd(&harness.cmd_rx);
}

#[test]
fn stale_autocomplete_response_is_dropped() {
    let mut harness = make_app();
    harness.app.set_search_query("blue".to_string());

    harness.app.apply_event(CoreEvent::AutocompleteResults {
        query: "red".to_string(),
        items: vec![test_hit("1", "red-shoe.jpg")],
    });
    assert!(harness.app.suggestions.is_empty());

    harness.app.apply_event(CoreEvent::AutocompleteResults {
        query: "blue".to_string(),
        items: vec![test_hit("2", "blue-bag.jpg")],
    });
    assert_eq!(harness.app.suggestions.len(), 1);
    assert_eq!(harness.app.suggestions[0].id, "2");
}

#[test]
fn suggestion_list_is_capped() {
    let mut harness = make_app();
    harness.app.set_search_query("a".to_string());

    let items = (0..20)
        .map(|idx| test_hit(&idx.to_string(), &format!("asset-{}.jpg", idx)))
        .collect();
    harness.app.apply_event(CoreEvent::AutocompleteResults {
        query: "a".to_string(),
        items,
    });
    assert_eq!(harness.app.suggestions.len(), SUGGESTION_LIMIT);
}

#[test]
fn submit_search_dispatches_and_switches_view() {
    let mut harness = make_app();
    harness.app.set_search_query("  red shoe  ".to_string());
    harness.app.suggestions.push(test_hit("1", "red-shoe.jpg"));

    harness.app.submit_search();

    match recv_cmd(&harness.cmd_rx) {
        CoreCmd::Search { query } => assert_eq!(query, "red shoe"),
        other => panic!("expected search, got {:?}", other),
    }
    assert!(harness.app.search_in_flight);
    assert!(harness.app.suggestions.is_empty());
    assert_eq!(harness.app.view, View::Search);
}

#[test]
fn stale_search_results_are_dropped() {
    let mut harness = make_app();
    harness.app.set_search_query("red".to_string());
    harness.app.submit_search();
    let _ = recv_cmd(&harness.cmd_rx);

    // The user immediately submits a newer query.
    harness.app.set_search_query("blue".to_string());
    harness.app.submit_search();
    let _ = recv_cmd(&harness.cmd_rx);

    harness.app.apply_event(CoreEvent::SearchResults {
        query: "red".to_string(),
        items: vec![test_hit("1", "red-shoe.jpg")],
    });
    assert!(harness.app.search_results.is_empty());
    assert!(harness.app.search_in_flight);

    harness.app.apply_event(CoreEvent::SearchResults {
        query: "blue".to_string(),
        items: vec![test_hit("2", "blue-bag.jpg")],
    });
    assert_eq!(harness.app.search_results.len(), 1);
    assert!(!harness.app.search_in_flight);
}

#[test]
fn empty_result_set_is_a_valid_answer() {
    let mut harness = make_app();
    harness.app.set_search_query("zzz".to_string());
    harness.app.submit_search();
    let _ = recv_cmd(&harness.cmd_rx);

    harness.app.apply_event(CoreEvent::SearchResults {
        query: "zzz".to_string(),
        items: Vec::new(),
    });
    assert!(harness.app.search_results.is_empty());
    assert!(!harness.app.search_in_flight);
    // No error status for an empty result.
    assert!(harness.app.status.is_none());
}

#[test]
fn query_error_resets_search_flag_only() {
    let mut harness = make_app();
    harness.app.search_in_flight = true;
    harness.app.upload_in_flight = true;

    harness.app.apply_event(CoreEvent::Error {
        source: CoreErrorSource::Query,
        message: "Search failed: status 500".to_string(),
    });

    assert!(!harness.app.search_in_flight);
    assert!(harness.app.upload_in_flight);
    assert!(harness.app.status.is_some());
}
