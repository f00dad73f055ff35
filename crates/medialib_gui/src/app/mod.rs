//! Native egui application shell for the media library.

mod state_ops;
mod style;
mod ui;

use crate::backend::{spawn_backend, BackendHandle};
use eframe::egui;
use medialib_client::{AssetClient, ClientError};
use medialib_core::models::{Asset, FieldKey, Folder, RocketiumAsset, SearchHit};
use medialib_core::{Config, LabelSync};
use std::collections::VecDeque;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use style::*;
use tracing::info;

/// Native egui application shell.
///
/// Owns the UI state and communicates with the background worker via channels
/// so the `update` loop never blocks on network I/O.
pub(crate) struct MediaLibraryApp {
    backend: BackendHandle,
    view: View,
    api_url: String,
    search_debounce: Duration,

    // Folder browsing.
    folder_trail: Vec<Folder>,
    folders: Vec<Folder>,
    assets: Vec<Asset>,
    browse_loading: bool,

    // Asset card (label viewing and metadata editing).
    sync: LabelSync,
    card_open: bool,
    field_drafts: PerField<String>,
    field_saving: PerField<bool>,

    // Upload flow.
    pending_file: Option<PathBuf>,
    upload_in_flight: bool,

    // Library search.
    search_query: String,
    search_last_input_at: Option<Instant>,
    search_last_sent: String,
    suggestions: Vec<SearchHit>,
    search_results: Vec<SearchHit>,
    search_submitted: String,
    search_in_flight: bool,

    // Rocketium catalog.
    rocketium_query: String,
    rocketium_last_input_at: Option<Instant>,
    rocketium_last_sent: String,
    rocketium_suggestions: Vec<RocketiumAsset>,
    rocketium_results: Vec<RocketiumAsset>,
    rocketium_submitted: String,
    rocketium_page: u32,
    rocketium_in_flight: bool,

    status: Option<StatusMessage>,
    toasts: VecDeque<ToastMessage>,
    style_applied: bool,
}

/// Which main surface fills the central panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum View {
    Folders,
    Search,
    Upload,
    Rocketium,
}

/// One value per custom-field dimension, addressed by [`FieldKey`].
#[derive(Debug, Default)]
struct PerField<T> {
    products: T,
    colors: T,
    tags: T,
}

impl<T> PerField<T> {
    fn get(&self, key: FieldKey) -> &T {
        match key {
            FieldKey::Products => &self.products,
            FieldKey::Colors => &self.colors,
            FieldKey::Tags => &self.tags,
        }
    }

    fn get_mut(&mut self, key: FieldKey) -> &mut T {
        match key {
            FieldKey::Products => &mut self.products,
            FieldKey::Colors => &mut self.colors,
            FieldKey::Tags => &mut self.tags,
        }
    }
}

const STATUS_TTL: Duration = Duration::from_secs(5);
const TOAST_TTL: Duration = Duration::from_secs(4);
const TOAST_LIMIT: usize = 4;
const IDLE_REPAINT_INTERVAL: Duration = Duration::from_secs(1);
#[doc = "Default initial window size for native GUI startup."]
pub(crate) const DEFAULT_WINDOW_SIZE: [f32; 2] = [1180.0, 760.0];
#[doc = "Minimum enforced window size to keep the grid and card usable."]
pub(crate) const MIN_WINDOW_SIZE: [f32; 2] = [900.0, 600.0];
const SUGGESTION_LIMIT: usize = 8;
const PLACEHOLDER_CHIPS: usize = 4;
const THUMBNAIL_SIZE: f32 = 140.0;

struct StatusMessage {
    text: String,
    expires_at: Instant,
}

struct ToastMessage {
    text: String,
    expires_at: Instant,
}

impl MediaLibraryApp {
    /// Construct a new app instance from the current environment config.
    ///
    /// Spawns the backend worker thread and kicks off the initial root browse
    /// so the UI has data to render on first paint.
    ///
    /// # Returns
    /// The initialized [`MediaLibraryApp`] ready to be handed to `eframe`.
    ///
    /// # Errors
    /// Returns an error if the configured backend base URL is invalid.
    pub(crate) fn new() -> Result<Self, ClientError> {
        let config = Config::from_env();
        let client = AssetClient::new(&config.api_url)?;
        info!("native GUI targeting backend at {}", config.api_url);
        let backend = spawn_backend(client);

        let mut app = Self {
            backend,
            view: View::Folders,
            api_url: config.api_url,
            search_debounce: config.search_debounce,
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
        app.request_browse();
        Ok(app)
    }
}

impl eframe::App for MediaLibraryApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ensure_style(ctx);

        let now = Instant::now();
        if let Some(status) = &self.status {
            if now >= status.expires_at {
                self.status = None;
            }
        }
        while self
            .toasts
            .front()
            .map(|toast| now >= toast.expires_at)
            .unwrap_or(false)
        {
            self.toasts.pop_front();
        }

        while let Ok(event) = self.backend.evt_rx.try_recv() {
            self.apply_event(event);
        }

        self.maybe_begin_label_fetch();

        self.render_top_bar(ctx);
        self.render_media_card(ctx);
        match self.view {
            View::Folders => self.render_folders(ctx),
            View::Search => self.render_search(ctx),
            View::Upload => self.render_upload(ctx),
            View::Rocketium => self.render_rocketium(ctx),
        }
        self.render_status_bar(ctx);
        self.render_toasts(ctx);

        self.maybe_dispatch_autocomplete();
        self.maybe_dispatch_rocketium_autocomplete();

        let mut repaint_after = IDLE_REPAINT_INTERVAL;
        if self.search_last_input_at.is_some() || self.rocketium_last_input_at.is_some() {
            repaint_after = repaint_after.min(self.search_debounce);
        }
        if let Some(status) = &self.status {
            let until = status.expires_at.saturating_duration_since(Instant::now());
            repaint_after = repaint_after.min(until);
        }
        if let Some(toast) = self.toasts.front() {
            let until = toast.expires_at.saturating_duration_since(Instant::now());
            repaint_after = repaint_after.min(until);
        }
        ctx.request_repaint_after(repaint_after);
    }
}

#[cfg(test)]
mod tests;
