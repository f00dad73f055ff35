//! Headless app tests that exercise state and event flows over test channels.

use super::*;
use crate::backend::{BackendHandle, CoreCmd, CoreErrorSource, CoreEvent};
use crossbeam_channel::{unbounded, Receiver, TryRecvError};
use medialib_core::models::CustomFields;

struct TestHarness {
    app: MediaLibraryApp,
    cmd_rx: Receiver<CoreCmd>,
    // Keeps the app's event receiver connected; tests inject events by
    // calling `apply_event` directly.
    _evt_tx: crossbeam_channel::Sender<CoreEvent>,
}

fn test_asset(id: &str, name: &str) -> Asset {
    Asset {
        id: id.to_string(),
        name: name.to_string(),
        url: format!("https://cdn.example.com/{}", name),
        parent_folder_id: None,
        bucket: "media".to_string(),
        custom_fields: CustomFields::default(),
    }
}

fn tagged_asset(id: &str, name: &str) -> Asset {
    let mut asset = test_asset(id, name);
    asset.custom_fields = CustomFields {
        products: Some("shoe, bag".to_string()),
        tags: Some("summer".to_string()),
        colors: None,
    };
    asset
}

fn test_folder(id: &str, name: &str) -> Folder {
    Folder {
        id: id.to_string(),
        name: name.to_string(),
        description: String::new(),
        parent_folder_id: None,
    }
}

fn make_app() -> TestHarness {
    let (cmd_tx, cmd_rx) = unbounded();
    let (evt_tx, evt_rx) = unbounded();

    let app = MediaLibraryApp {
        backend: BackendHandle::from_test_channels(cmd_tx, evt_rx),
        view: View::Folders,
        api_url: "http://localhost:5050".to_string(),
        search_debounce: Duration::from_millis(300),
        folder_trail: Vec::new(),
        folders: Vec::new(),
        assets: Vec::new(),
        browse_loading: false,
        sync: LabelSync::default(),
        card_open: false,
        field_drafts: PerField::default(),
        field_saving: PerField::default(),
        pending_file: None,
        upload_in_flight: false,
        search_query: String::new(),
        search_last_input_at: None,
        search_last_sent: String::new(),
        suggestions: Vec::new(),
        search_results: Vec::new(),
        search_submitted: String::new(),
        search_in_flight: false,
        rocketium_query: String::new(),
        rocketium_last_input_at: None,
        rocketium_last_sent: String::new(),
        rocketium_suggestions: Vec::new(),
        rocketium_results: Vec::new(),
        rocketium_submitted: String::new(),
        rocketium_page: 0,
        rocketium_in_flight: false,
        status: None,
        toasts: VecDeque::with_capacity(TOAST_LIMIT),
        style_applied: false,
    };

    TestHarness {
        app,
        cmd_rx,
        _evt_tx: evt_tx,
    }
}

fn recv_cmd(rx: &Receiver<CoreCmd>) -> CoreCmd {
    rx.recv_timeout(Duration::from_millis(200))
        .expect("expected outbound command")
}

fn assert_no_cmd(rx: &Receiver<CoreCmd>) {
    match rx.try_recv() {
        Err(TryRecvError::Empty) => {}
        other => panic!("expected no outbound command, got {:?}", other),
    }
}

/// Mark an input as old enough that the debounce window has elapsed.
fn expire_debounce(last_input_at: &mut Option<Instant>, debounce: Duration) {
    *last_input_at = Some(Instant::now() - debounce);
}

mod label_flow;
mod search_flow;
mod upload_flow;
