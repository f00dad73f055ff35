//! Background worker thread for backend HTTP access.

use crate::backend::{CoreCmd, CoreErrorSource, CoreEvent};
use crossbeam_channel::{unbounded, Receiver, Sender};
use medialib_client::AssetClient;
use std::thread;
use tracing::error;

/// Handle for sending commands to, and receiving events from, the backend worker.
pub struct BackendHandle {
    pub cmd_tx: Sender<CoreCmd>,
    pub evt_rx: Receiver<CoreEvent>,
}

impl BackendHandle {
    /// Build a handle around externally owned channels, with no worker thread.
    /// Used by headless app tests to observe outbound commands and inject
    /// events.
    pub fn from_test_channels(cmd_tx: Sender<CoreCmd>, evt_rx: Receiver<CoreEvent>) -> Self {
        Self { cmd_tx, evt_rx }
    }
}

fn send_error(evt_tx: &Sender<CoreEvent>, source: CoreErrorSource, message: String) {
    let _ = evt_tx.send(CoreEvent::Error { source, message });
}

/// Spawn the backend worker thread that performs blocking HTTP requests.
///
/// All network I/O stays off the UI thread; the worker replies with
/// [`CoreEvent`] values that are polled each frame.
///
/// # Returns
/// A [`BackendHandle`] containing the command sender and event receiver.
///
/// # Panics
/// Panics if the worker thread cannot be spawned.
pub fn spawn_backend(client: AssetClient) -> BackendHandle {
    let (cmd_tx, cmd_rx) = unbounded();
    let (evt_tx, evt_rx) = unbounded();

    thread::Builder::new()
        .name("medialib-gui-backend".to_string())
        .spawn(move || {
            for cmd in cmd_rx.iter() {
                match cmd {
                    CoreCmd::BrowseFolders { parent_id } => {
                        match client.list_folders(parent_id.as_deref()) {
                            Ok(items) => {
                                let _ = evt_tx.send(CoreEvent::FoldersLoaded { parent_id, items });
                            }
                            Err(err) => {
                                error!("backend folder browse failed: {}", err);
                                send_error(
                                    &evt_tx,
                                    CoreErrorSource::Browse,
                                    format!("Folder load failed: {}", err),
                                );
                            }
                        }
                    }
                    CoreCmd::BrowseAssets { parent_id } => {
                        match client.list_assets(parent_id.as_deref()) {
                            Ok(items) => {
                                let _ = evt_tx.send(CoreEvent::AssetsLoaded { parent_id, items });
                            }
                            Err(err) => {
                                error!("backend asset browse failed: {}", err);
                                send_error(
                                    &evt_tx,
                                    CoreErrorSource::Browse,
                                    format!("Asset load failed: {}", err),
                                );
                            }
                        }
                    }
                    CoreCmd::Autocomplete { query } => match client.autocomplete(&query) {
                        Ok(items) => {
                            let _ = evt_tx.send(CoreEvent::AutocompleteResults { query, items });
                        }
                        Err(err) => {
                            error!("backend autocomplete failed: {}", err);
                            send_error(
                                &evt_tx,
                                CoreErrorSource::Query,
                                format!("Autocomplete failed: {}", err),
                            );
                        }
                    },
                    CoreCmd::Search { query } => match client.search(&query) {
                        Ok(items) => {
                            let _ = evt_tx.send(CoreEvent::SearchResults { query, items });
                        }
                        Err(err) => {
                            error!("backend search failed: {}", err);
                            send_error(
                                &evt_tx,
                                CoreErrorSource::Query,
                                format!("Search failed: {}", err),
                            );
                        }
                    },
                    CoreCmd::Upload { path } => {
                        let file_name = path
                            .file_name()
                            .map(|name| name.to_string_lossy().to_string())
                            .unwrap_or_default();
                        let bytes = match std::fs::read(&path) {
                            Ok(bytes) => bytes,
                            Err(err) => {
                                error!("upload read failed for {}: {}", path.display(), err);
                                send_error(
                                    &evt_tx,
                                    CoreErrorSource::Upload,
                                    format!("Could not read {}: {}", path.display(), err),
                                );
                                continue;
                            }
                        };
                        match client.upload(&file_name, bytes) {
                            Ok(asset) => {
                                let _ = evt_tx.send(CoreEvent::Uploaded { asset });
                            }
                            Err(err) => {
                                error!("backend upload failed: {}", err);
                                send_error(
                                    &evt_tx,
                                    CoreErrorSource::Upload,
                                    format!("Upload failed: {}", err),
                                );
                            }
                        }
                    }
                    CoreCmd::FetchLabels { ticket } => {
                        match client.fetch_labels(&ticket.asset_id, &ticket.asset_name) {
                            Ok(fields) => {
                                let _ = evt_tx.send(CoreEvent::LabelsFetched { ticket, fields });
                            }
                            Err(err) => {
                                error!("backend label fetch failed: {}", err);
                                let _ = evt_tx.send(CoreEvent::LabelsFetchFailed {
                                    ticket,
                                    message: format!("Label fetch failed: {}", err),
                                });
                            }
                        }
                    }
                    CoreCmd::UpdateField {
                        asset_id,
                        key,
                        value,
                    } => match client.update_custom_field(&asset_id, key, &value) {
                        Ok(asset) => {
                            let _ = evt_tx.send(CoreEvent::FieldSaved { key, asset });
                        }
                        Err(err) => {
                            error!("backend field update failed: {}", err);
                            send_error(
                                &evt_tx,
                                CoreErrorSource::SaveField(key),
                                format!("{} update failed: {}", key.title(), err),
                            );
                        }
                    },
                    CoreCmd::RocketiumAutocomplete { query } => {
                        match client.rocketium_autocomplete(&query) {
                            Ok(items) => {
                                let _ = evt_tx
                                    .send(CoreEvent::RocketiumAutocompleteResults { query, items });
                            }
                            Err(err) => {
                                error!("backend rocketium autocomplete failed: {}", err);
                                send_error(
                                    &evt_tx,
                                    CoreErrorSource::Query,
                                    format!("Rocketium autocomplete failed: {}", err),
                                );
                            }
                        }
                    }
                    CoreCmd::RocketiumSearch { query, page } => {
                        match client.rocketium_search(&query, page) {
                            Ok(items) => {
                                let _ = evt_tx.send(CoreEvent::RocketiumSearchResults {
                                    query,
                                    page,
                                    items,
                                });
                            }
                            Err(err) => {
                                error!("backend rocketium search failed: {}", err);
                                send_error(
                                    &evt_tx,
                                    CoreErrorSource::Query,
                                    format!("Rocketium search failed: {}", err),
                                );
                            }
                        }
                    }
                }
            }
        })
        .expect("spawn backend thread");

    BackendHandle { cmd_tx, evt_rx }
}
