//! Protocol types for the GUI backend worker.

use medialib_core::models::{Asset, CustomFields, FieldKey, Folder, RocketiumAsset, SearchHit};
use medialib_core::FetchTicket;
use std::path::PathBuf;

/// Commands issued by the UI thread for the backend worker to execute.
#[derive(Debug)]
pub enum CoreCmd {
    /// Load sub-folders of the given folder. `None` means library root.
    BrowseFolders { parent_id: Option<String> },
    /// Load assets directly under the given folder. `None` means library root.
    BrowseAssets { parent_id: Option<String> },
    /// As-you-type suggestion query for the asset index.
    Autocomplete { query: String },
    /// Explicit full search submission.
    Search { query: String },
    /// Read the file at `path` and upload it to the backend.
    Upload { path: PathBuf },
    /// Run the auto-labeling fetch for the asset named by `ticket`.
    FetchLabels { ticket: FetchTicket },
    /// Replace one custom-field dimension with a full joined value.
    UpdateField {
        asset_id: String,
        key: FieldKey,
        value: String,
    },
    /// As-you-type suggestion query for the Rocketium catalog.
    RocketiumAutocomplete { query: String },
    /// Paged search against the Rocketium catalog.
    RocketiumSearch { query: String, page: u32 },
}

/// Events produced by the backend worker and polled by the UI thread.
#[derive(Debug)]
pub enum CoreEvent {
    /// Sub-folders of `parent_id`, echoed so late responses can be dropped.
    FoldersLoaded {
        parent_id: Option<String>,
        items: Vec<Folder>,
    },
    /// Assets under `parent_id`, echoed so late responses can be dropped.
    AssetsLoaded {
        parent_id: Option<String>,
        items: Vec<Asset>,
    },
    /// Suggestions for the echoed autocomplete query.
    AutocompleteResults {
        query: String,
        items: Vec<SearchHit>,
    },
    /// Results for the echoed search submission.
    SearchResults {
        query: String,
        items: Vec<SearchHit>,
    },
    /// Upload finished; the backend returned the created asset.
    Uploaded { asset: Asset },
    /// Label fetch finished for the ticketed asset.
    LabelsFetched {
        ticket: FetchTicket,
        fields: CustomFields,
    },
    /// Label fetch failed; the ticket lets the UI settle the right asset.
    LabelsFetchFailed { ticket: FetchTicket, message: String },
    /// A custom-field update was accepted; `asset` is the authoritative
    /// post-update record.
    FieldSaved { key: FieldKey, asset: Asset },
    /// Rocketium suggestions for the echoed query.
    RocketiumAutocompleteResults {
        query: String,
        items: Vec<RocketiumAsset>,
    },
    /// Rocketium results for the echoed query and page.
    RocketiumSearchResults {
        query: String,
        page: u32,
        items: Vec<RocketiumAsset>,
    },
    /// A backend failure occurred (network error, bad status, etc).
    Error {
        source: CoreErrorSource,
        message: String,
    },
}

/// Which in-flight UI operation a backend error belongs to, so generic
/// failures cannot reset unrelated busy flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoreErrorSource {
    Browse,
    Query,
    Upload,
    SaveField(FieldKey),
}
