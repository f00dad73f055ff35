//! State transitions for backend events, browsing, search, and the edit flow.

use super::{
    MediaLibraryApp, StatusMessage, ToastMessage, View, STATUS_TTL, SUGGESTION_LIMIT, TOAST_LIMIT,
    TOAST_TTL,
};
use crate::backend::{CoreCmd, CoreErrorSource, CoreEvent};
use medialib_core::labels::join_labels;
use medialib_core::models::{Asset, FieldKey};
use std::path::PathBuf;
use std::time::Instant;
use tracing::{debug, warn};

impl MediaLibraryApp {
    pub(super) fn apply_event(&mut self, event: CoreEvent) {
        match event {
            CoreEvent::FoldersLoaded { parent_id, items } => {
                if parent_id != self.current_parent_id() {
                    debug!("dropping folder listing for a level no longer shown");
                    return;
                }
                self.folders = items;
            }
            CoreEvent::AssetsLoaded { parent_id, items } => {
                if parent_id != self.current_parent_id() {
                    debug!("dropping asset listing for a level no longer shown");
                    return;
                }
                self.assets = items;
                self.browse_loading = false;
            }
            CoreEvent::AutocompleteResults { query, items } => {
                // Only the response matching the text still in the box counts.
                if query.trim() != self.search_query.trim() {
                    return;
                }
                self.suggestions = items;
                self.suggestions.truncate(SUGGESTION_LIMIT);
            }
            CoreEvent::SearchResults { query, items } => {
                if query != self.search_submitted {
                    return;
                }
                self.search_results = items;
                self.search_in_flight = false;
            }
            CoreEvent::Uploaded { asset } => {
                self.upload_in_flight = false;
                self.pending_file = None;
                self.set_status(format!("Uploaded {}.", asset.name));
                if asset.parent_folder_id == self.current_parent_id() {
                    self.assets.insert(0, asset.clone());
                }
                // Open the card so auto-labeling kicks in for the new asset.
                self.select_asset(asset);
            }
            CoreEvent::LabelsFetched { ticket, fields } => {
                if self.sync.fetch_succeeded(&ticket, fields) {
                    if let Some(asset) = self.sync.asset().cloned() {
                        self.reconcile_asset_lists(&asset);
                    }
                }
            }
            CoreEvent::LabelsFetchFailed { ticket, message } => {
                if self.sync.fetch_failed(&ticket) {
                    self.set_status(message);
                }
            }
            CoreEvent::FieldSaved { key, asset } => {
                *self.field_saving.get_mut(key) = false;
                let joined = asset.custom_fields.get(key).unwrap_or("").to_string();
                if self.sync.apply_field_update(&asset.id, key, &joined) {
                    self.field_drafts.get_mut(key).clear();
                }
                self.reconcile_asset_lists(&asset);
            }
            CoreEvent::RocketiumAutocompleteResults { query, items } => {
                if query.trim() != self.rocketium_query.trim() {
                    return;
                }
                self.rocketium_suggestions = items;
                self.rocketium_suggestions.truncate(SUGGESTION_LIMIT);
            }
            CoreEvent::RocketiumSearchResults { query, page, items } => {
                if query != self.rocketium_submitted {
                    return;
                }
                self.rocketium_results = items;
                self.rocketium_page = page;
                self.rocketium_in_flight = false;
            }
            CoreEvent::Error { source, message } => {
                warn!("backend error ({:?}): {}", source, message);
                // Only reset the busy flag for the matching request class so a
                // failed search cannot cancel an unrelated upload or save.
                match source {
                    CoreErrorSource::Browse => self.browse_loading = false,
                    CoreErrorSource::Query => {
                        self.search_in_flight = false;
                        self.rocketium_in_flight = false;
                    }
                    CoreErrorSource::Upload => self.upload_in_flight = false,
                    CoreErrorSource::SaveField(key) => *self.field_saving.get_mut(key) = false,
                }
                self.set_status(message);
            }
        }
    }

    // --- folder browsing ---

    pub(super) fn current_parent_id(&self) -> Option<String> {
        self.folder_trail.last().map(|folder| folder.id.clone())
    }

    pub(super) fn request_browse(&mut self) {
        let parent_id = self.current_parent_id();
        self.browse_loading = true;
        let folders_sent = self
            .backend
            .cmd_tx
            .send(CoreCmd::BrowseFolders {
                parent_id: parent_id.clone(),
            })
            .is_ok();
        let assets_sent = self
            .backend
            .cmd_tx
            .send(CoreCmd::BrowseAssets { parent_id })
            .is_ok();
        if !folders_sent || !assets_sent {
            self.browse_loading = false;
            self.set_status("Browse failed: backend unavailable.");
        }
    }

    pub(super) fn open_folder(&mut self, folder: medialib_core::models::Folder) {
        self.folder_trail.push(folder);
        self.folders.clear();
        self.assets.clear();
        self.request_browse();
    }

    /// Jump back to a breadcrumb entry. `depth` is the number of trail entries
    /// to keep; zero returns to the library root.
    pub(super) fn navigate_to_depth(&mut self, depth: usize) {
        if depth >= self.folder_trail.len() {
            return;
        }
        self.folder_trail.truncate(depth);
        self.folders.clear();
        self.assets.clear();
        self.request_browse();
    }

    // --- asset card ---

    pub(super) fn select_asset(&mut self, asset: Asset) {
        self.sync.set_asset(asset);
        self.card_open = true;
        for key in FieldKey::ALL {
            self.field_drafts.get_mut(key).clear();
            *self.field_saving.get_mut(key) = false;
        }
    }

    pub(super) fn close_card(&mut self) {
        self.sync.clear();
        self.card_open = false;
    }

    /// Fire the one-shot auto-label fetch when the state machine allows it.
    pub(super) fn maybe_begin_label_fetch(&mut self) {
        if !self.card_open {
            return;
        }
        let Some(ticket) = self.sync.begin_fetch(self.upload_in_flight) else {
            return;
        };
        if self
            .backend
            .cmd_tx
            .send(CoreCmd::FetchLabels {
                ticket: ticket.clone(),
            })
            .is_err()
        {
            self.sync.fetch_failed(&ticket);
            self.set_status("Label fetch failed: backend unavailable.");
        }
    }

    /// Submit the create-box draft for one dimension, appending it to the
    /// current label set.
    pub(super) fn submit_field_draft(&mut self, key: FieldKey) {
        if *self.field_saving.get(key) {
            return;
        }
        let draft = self.field_drafts.get(key).trim().to_string();
        if draft.is_empty() {
            return;
        }
        let mut labels: Vec<String> = self
            .sync
            .labels()
            .map(|sheet| sheet.get(key).to_vec())
            .unwrap_or_default();
        labels.push(draft);
        self.dispatch_field_update(key, join_labels(&labels));
    }

    /// Remove one label from a dimension and persist the reduced set.
    pub(super) fn remove_label(&mut self, key: FieldKey, index: usize) {
        if *self.field_saving.get(key) {
            return;
        }
        let Some(sheet) = self.sync.labels() else {
            return;
        };
        let mut labels = sheet.get(key).to_vec();
        if index >= labels.len() {
            return;
        }
        labels.remove(index);
        self.dispatch_field_update(key, join_labels(&labels));
    }

    fn dispatch_field_update(&mut self, key: FieldKey, value: String) {
        let Some(asset_id) = self.sync.asset().map(|asset| asset.id.clone()) else {
            return;
        };
        if self
            .backend
            .cmd_tx
            .send(CoreCmd::UpdateField {
                asset_id,
                key,
                value,
            })
            .is_err()
        {
            self.set_status(format!("{} update failed: backend unavailable.", key.title()));
            return;
        }
        *self.field_saving.get_mut(key) = true;
    }

    /// Push the server-confirmed asset record back into every list that shows
    /// it, so grids and search results reflect edits without a refetch.
    fn reconcile_asset_lists(&mut self, asset: &Asset) {
        if let Some(item) = self.assets.iter_mut().find(|item| item.id == asset.id) {
            *item = asset.clone();
        }
        for hit in self
            .search_results
            .iter_mut()
            .chain(self.suggestions.iter_mut())
        {
            if hit.id == asset.id {
                hit.custom_fields = asset.custom_fields.clone();
                hit.name = asset.name.clone();
            }
        }
    }

    // --- upload flow ---

    pub(super) fn set_pending_file(&mut self, path: PathBuf) {
        self.pending_file = Some(path);
    }

    pub(super) fn start_upload(&mut self) {
        if self.upload_in_flight {
            return;
        }
        let Some(path) = self.pending_file.clone() else {
            return;
        };
        if self.backend.cmd_tx.send(CoreCmd::Upload { path }).is_err() {
            self.set_status("Upload failed: backend unavailable.");
            return;
        }
        self.upload_in_flight = true;
    }

    // --- library search ---

    pub(super) fn set_search_query(&mut self, query: String) {
        if self.search_query == query {
            return;
        }
        self.search_query = query;
        self.search_last_input_at = Some(Instant::now());
        if self.search_query.trim().is_empty() {
            self.suggestions.clear();
            self.search_last_sent.clear();
        }
    }

    pub(super) fn maybe_dispatch_autocomplete(&mut self) {
        let query = self.search_query.trim().to_string();
        if query.is_empty() {
            return;
        }
        if self.search_last_sent == query {
            return;
        }
        let Some(last_input_at) = self.search_last_input_at else {
            return;
        };
        if last_input_at.elapsed() < self.search_debounce {
            return;
        }
        if self
            .backend
            .cmd_tx
            .send(CoreCmd::Autocomplete {
                query: query.clone(),
            })
            .is_err()
        {
            self.set_status("Autocomplete failed: backend unavailable.");
            return;
        }
        self.search_last_sent = query;
    }

    pub(super) fn submit_search(&mut self) {
        let query = self.search_query.trim().to_string();
        if query.is_empty() {
            return;
        }
        if self
            .backend
            .cmd_tx
            .send(CoreCmd::Search {
                query: query.clone(),
            })
            .is_err()
        {
            self.set_status("Search failed: backend unavailable.");
            return;
        }
        self.search_submitted = query;
        self.search_in_flight = true;
        self.suggestions.clear();
        self.search_last_input_at = None;
        self.view = View::Search;
    }

    // --- rocketium catalog ---

    pub(super) fn set_rocketium_query(&mut self, query: String) {
        if self.rocketium_query == query {
            return;
        }
        self.rocketium_query = query;
        self.rocketium_last_input_at = Some(Instant::now());
        if self.rocketium_query.trim().is_empty() {
            self.rocketium_suggestions.clear();
            self.rocketium_last_sent.clear();
        }
    }

    pub(super) fn maybe_dispatch_rocketium_autocomplete(&mut self) {
        let query = self.rocketium_query.trim().to_string();
        if query.is_empty() {
            return;
        }
        if self.rocketium_last_sent == query {
            return;
        }
        let Some(last_input_at) = self.rocketium_last_input_at else {
            return;
        };
        if last_input_at.elapsed() < self.search_debounce {
            return;
        }
        if self
            .backend
            .cmd_tx
            .send(CoreCmd::RocketiumAutocomplete {
                query: query.clone(),
            })
            .is_err()
        {
            self.set_status("Rocketium autocomplete failed: backend unavailable.");
            return;
        }
        self.rocketium_last_sent = query;
    }

    pub(super) fn submit_rocketium_search(&mut self) {
        let query = self.rocketium_query.trim().to_string();
        if query.is_empty() {
            return;
        }
        self.rocketium_submitted = query;
        self.rocketium_suggestions.clear();
        self.rocketium_last_input_at = None;
        // A fresh submission supersedes any response still in flight; the
        // query echo check discards the superseded one on arrival.
        self.rocketium_in_flight = false;
        // The catalog's pages are 1-indexed.
        self.request_rocketium_page(1);
    }

    pub(super) fn rocketium_next_page(&mut self) {
        self.request_rocketium_page(self.rocketium_page + 1);
    }

    pub(super) fn rocketium_prev_page(&mut self) {
        if self.rocketium_page <= 1 {
            return;
        }
        self.request_rocketium_page(self.rocketium_page - 1);
    }

    fn request_rocketium_page(&mut self, page: u32) {
        if self.rocketium_in_flight || self.rocketium_submitted.is_empty() {
            return;
        }
        if self
            .backend
            .cmd_tx
            .send(CoreCmd::RocketiumSearch {
                query: self.rocketium_submitted.clone(),
                page,
            })
            .is_err()
        {
            self.set_status("Rocketium search failed: backend unavailable.");
            return;
        }
        self.rocketium_in_flight = true;
    }

    // --- feedback ---

    pub(super) fn set_status(&mut self, text: impl Into<String>) {
        let text = text.into();
        self.status = Some(StatusMessage {
            text: text.clone(),
            expires_at: Instant::now() + STATUS_TTL,
        });
        self.push_toast(text);
    }

    fn push_toast(&mut self, text: String) {
        let now = Instant::now();
        if let Some(last) = self.toasts.back_mut() {
            if last.text == text {
                last.expires_at = now + TOAST_TTL;
                return;
            }
        }
        self.toasts.push_back(ToastMessage {
            text,
            expires_at: now + TOAST_TTL,
        });
        while self.toasts.len() > TOAST_LIMIT {
            self.toasts.pop_front();
        }
    }
}
