//! Upload dispatch and post-upload selection behavior.

use super::*;
use std::path::PathBuf;

#[test]
fn start_upload_dispatches_once_and_sets_the_flag() {
    let mut harness = make_app();
    harness.app.set_pending_file(PathBuf::from("/tmp/photo.jpg"));

    harness.app.start_upload();
    match recv_cmd(&harness.cmd_rx) {
        CoreCmd::Upload { path } => assert_eq!(path, PathBuf::from("/tmp/photo.jpg")),
        other => panic!("expected upload, got {:?}", other),
    }
    assert!(harness.app.upload_in_flight);

    // Re-clicking while in flight does nothing.
    harness.app.start_upload();
    assert_no_cmd(&harness.cmd_rx);
}

#[test]
fn start_upload_without_a_file_is_a_no_op() {
    let mut harness = make_app();
    harness.app.start_upload();
    assert_no_cmd(&harness.cmd_rx);
    assert!(!harness.app.upload_in_flight);
}

#[test]
fn uploaded_asset_lands_in_the_grid_and_opens_the_card() {
    let mut harness = make_app();
    harness.app.set_pending_file(PathBuf::from("/tmp/photo.jpg"));
    harness.app.start_upload();
    let _ = recv_cmd(&harness.cmd_rx);

    harness.app.apply_event(CoreEvent::Uploaded {
        asset: test_asset("1", "photo.jpg"),
    });

    assert!(!harness.app.upload_in_flight);
    assert!(harness.app.pending_file.is_none());
    assert_eq!(harness.app.assets.len(), 1);
    assert!(harness.app.card_open);
    assert_eq!(
        harness.app.sync.asset().map(|a| a.id.as_str()),
        Some("1")
    );

    // The freshly uploaded asset is untagged, so the auto-fetch fires.
    harness.app.maybe_begin_label_fetch();
    assert!(matches!(
        recv_cmd(&harness.cmd_rx),
        CoreCmd::FetchLabels { .. }
    ));
}

#[test]
fn upload_into_another_folder_does_not_pollute_the_current_grid() {
    let mut harness = make_app();
    let mut asset = test_asset("1", "photo.jpg");
    asset.parent_folder_id = Some("f9".to_string());

    harness.app.apply_event(CoreEvent::Uploaded { asset });

    assert!(harness.app.assets.is_empty());
    // The card still opens on the new asset.
    assert!(harness.app.card_open);
}

#[test]
fn upload_error_resets_the_flag_and_keeps_the_pending_file() {
    let mut harness = make_app();
    harness.app.set_pending_file(PathBuf::from("/tmp/photo.jpg"));
    harness.app.start_upload();
    let _ = recv_cmd(&harness.cmd_rx);

    harness.app.apply_event(CoreEvent::Error {
        source: CoreErrorSource::Upload,
        message: "Upload failed: status 413".to_string(),
    });

    assert!(!harness.app.upload_in_flight);
    // The selection stays so the user can retry without re-picking.
    assert_eq!(
        harness.app.pending_file,
        Some(PathBuf::from("/tmp/photo.jpg"))
    );
    assert!(harness.app.status.is_some());
}
