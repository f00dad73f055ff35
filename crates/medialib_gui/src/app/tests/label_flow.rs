//! Auto-fetch trigger and per-dimension edit behavior on the asset card.

use super::*;
use medialib_core::models::FieldKey;

#[test]
fn opening_untagged_asset_dispatches_one_label_fetch() {
    let mut harness = make_app();
    harness.app.select_asset(test_asset("1", "photo.jpg"));

    harness.app.maybe_begin_label_fetch();
    match recv_cmd(&harness.cmd_rx) {
        CoreCmd::FetchLabels { ticket } => {
            assert_eq!(ticket.asset_id, "1");
            assert_eq!(ticket.asset_name, "photo.jpg");
        }
        other => panic!("expected label fetch, got {:?}", other),
    }

    // A second frame must not re-dispatch while the fetch is in flight.
    harness.app.maybe_begin_label_fetch();
    assert_no_cmd(&harness.cmd_rx);
    assert!(harness.app.sync.is_fetching());
}

#[test]
fn pre_tagged_asset_never_dispatches_a_fetch() {
    let mut harness = make_app();
    harness.app.select_asset(tagged_asset("1", "photo.jpg"));

    harness.app.maybe_begin_label_fetch();
    assert_no_cmd(&harness.cmd_rx);
    assert_eq!(
        harness.app.sync.labels().map(|s| s.products.clone()),
        Some(vec!["shoe".to_string(), "bag".to_string()])
    );
}

#[test]
fn upload_in_flight_defers_fetch_until_settled() {
    let mut harness = make_app();
    harness.app.select_asset(test_asset("1", "photo.jpg"));
    harness.app.upload_in_flight = true;

    harness.app.maybe_begin_label_fetch();
    assert_no_cmd(&harness.cmd_rx);

    harness.app.upload_in_flight = false;
    harness.app.maybe_begin_label_fetch();
    assert!(matches!(
        recv_cmd(&harness.cmd_rx),
        CoreCmd::FetchLabels { .. }
    ));
}

#[test]
fn stale_fetch_result_is_dropped_after_asset_switch() {
    let mut harness = make_app();
    harness.app.select_asset(test_asset("1", "old.jpg"));
    harness.app.maybe_begin_label_fetch();
    let ticket = match recv_cmd(&harness.cmd_rx) {
        CoreCmd::FetchLabels { ticket } => ticket,
        other => panic!("expected label fetch, got {:?}", other),
    };

    // User opens a different asset before the response lands.
    harness.app.select_asset(tagged_asset("2", "new.jpg"));

    harness.app.apply_event(CoreEvent::LabelsFetched {
        ticket,
        fields: CustomFields {
            products: Some("stale".to_string()),
            tags: None,
            colors: None,
        },
    });

    let labels = harness.app.sync.labels().expect("labels for new asset");
    assert_eq!(labels.products, vec!["shoe", "bag"]);
}

#[test]
fn failed_fetch_surfaces_status_and_does_not_rearm() {
    let mut harness = make_app();
    harness.app.select_asset(test_asset("1", "photo.jpg"));
    harness.app.maybe_begin_label_fetch();
    let ticket = match recv_cmd(&harness.cmd_rx) {
        CoreCmd::FetchLabels { ticket } => ticket,
        other => panic!("expected label fetch, got {:?}", other),
    };

    harness.app.apply_event(CoreEvent::LabelsFetchFailed {
        ticket,
        message: "Label fetch failed: status 502".to_string(),
    });
    assert!(harness.app.status.is_some());

    harness.app.maybe_begin_label_fetch();
    assert_no_cmd(&harness.cmd_rx);
}

#[test]
fn submitting_a_draft_appends_to_the_joined_value() {
    let mut harness = make_app();
    harness.app.select_asset(tagged_asset("1", "photo.jpg"));

    *harness.app.field_drafts.get_mut(FieldKey::Products) = "hat".to_string();
    harness.app.submit_field_draft(FieldKey::Products);

    match recv_cmd(&harness.cmd_rx) {
        CoreCmd::UpdateField {
            asset_id,
            key,
            value,
        } => {
            assert_eq!(asset_id, "1");
            assert_eq!(key, FieldKey::Products);
            assert_eq!(value, "shoe, bag, hat");
        }
        other => panic!("expected field update, got {:?}", other),
    }
    assert!(*harness.app.field_saving.get(FieldKey::Products));
}

#[test]
fn duplicate_draft_submits_the_deduplicated_set() {
    let mut harness = make_app();
    harness.app.select_asset(tagged_asset("1", "photo.jpg"));

    *harness.app.field_drafts.get_mut(FieldKey::Products) = "shoe".to_string();
    harness.app.submit_field_draft(FieldKey::Products);

    match recv_cmd(&harness.cmd_rx) {
        CoreCmd::UpdateField { value, .. } => assert_eq!(value, "shoe, bag"),
        other => panic!("expected field update, got {:?}", other),
    }
}

#[test]
fn empty_or_blank_draft_is_ignored() {
    let mut harness = make_app();
    harness.app.select_asset(tagged_asset("1", "photo.jpg"));

    harness.app.submit_field_draft(FieldKey::Tags);
    *harness.app.field_drafts.get_mut(FieldKey::Tags) = "   ".to_string();
    harness.app.submit_field_draft(FieldKey::Tags);

    assert_no_cmd(&harness.cmd_rx);
}

#[test]
fn saving_dimension_rejects_further_edits_until_ack() {
    let mut harness = make_app();
    harness.app.select_asset(tagged_asset("1", "photo.jpg"));

    *harness.app.field_drafts.get_mut(FieldKey::Tags) = "winter".to_string();
    harness.app.submit_field_draft(FieldKey::Tags);
    let _ = recv_cmd(&harness.cmd_rx);

    // A second submit on the same dimension is refused while in flight.
    *harness.app.field_drafts.get_mut(FieldKey::Tags) = "spring".to_string();
    harness.app.submit_field_draft(FieldKey::Tags);
    harness.app.remove_label(FieldKey::Tags, 0);
    assert_no_cmd(&harness.cmd_rx);

    // Another dimension is unaffected.
    *harness.app.field_drafts.get_mut(FieldKey::Colors) = "red".to_string();
    harness.app.submit_field_draft(FieldKey::Colors);
    assert!(matches!(
        recv_cmd(&harness.cmd_rx),
        CoreCmd::UpdateField {
            key: FieldKey::Colors,
            ..
        }
    ));
}

#[test]
fn field_saved_applies_server_echo_and_clears_draft() {
    let mut harness = make_app();
    harness.app.assets.push(tagged_asset("1", "photo.jpg"));
    harness.app.select_asset(tagged_asset("1", "photo.jpg"));

    *harness.app.field_drafts.get_mut(FieldKey::Products) = "hat".to_string();
    harness.app.submit_field_draft(FieldKey::Products);
    let _ = recv_cmd(&harness.cmd_rx);

    let mut saved = tagged_asset("1", "photo.jpg");
    saved.custom_fields.products = Some("shoe, bag, hat".to_string());
    harness.app.apply_event(CoreEvent::FieldSaved {
        key: FieldKey::Products,
        asset: saved,
    });

    assert!(!*harness.app.field_saving.get(FieldKey::Products));
    assert!(harness.app.field_drafts.get(FieldKey::Products).is_empty());
    let labels = harness.app.sync.labels().expect("labels present");
    assert_eq!(labels.products, vec!["shoe", "bag", "hat"]);
    // Untouched dimensions keep their values.
    assert_eq!(labels.tags, vec!["summer"]);
    // The grid copy reflects the edit too.
    assert_eq!(
        harness.app.assets[0].custom_fields.products.as_deref(),
        Some("shoe, bag, hat")
    );
}

#[test]
fn removing_a_label_submits_the_reduced_set() {
    let mut harness = make_app();
    harness.app.select_asset(tagged_asset("1", "photo.jpg"));

    harness.app.remove_label(FieldKey::Products, 0);
    match recv_cmd(&harness.cmd_rx) {
        CoreCmd::UpdateField { value, .. } => assert_eq!(value, "bag"),
        other => panic!("expected field update, got {:?}", other),
    }
}

#[test]
fn save_error_resets_only_the_matching_dimension() {
    let mut harness = make_app();
    harness.app.select_asset(tagged_asset("1", "photo.jpg"));
    *harness.app.field_saving.get_mut(FieldKey::Tags) = true;
    *harness.app.field_saving.get_mut(FieldKey::Colors) = true;

    harness.app.apply_event(CoreEvent::Error {
        source: CoreErrorSource::SaveField(FieldKey::Tags),
        message: "Tags update failed: status 500".to_string(),
    });

    assert!(!*harness.app.field_saving.get(FieldKey::Tags));
    assert!(*harness.app.field_saving.get(FieldKey::Colors));
    assert!(harness.app.status.is_some());
    // The on-screen labels were not touched by the failure.
    let labels = harness.app.sync.labels().expect("labels present");
    assert_eq!(labels.tags, vec!["summer"]);
}

#[test]
fn closing_the_card_stops_the_fetch_trigger() {
    let mut harness = make_app();
    harness.app.select_asset(test_asset("1", "photo.jpg"));
    harness.app.close_card();

    harness.app.maybe_begin_label_fetch();
    assert_no_cmd(&harness.cmd_rx);
    assert!(harness.app.sync.asset().is_none());
}
