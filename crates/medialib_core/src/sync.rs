//! Label-fetch synchronization state machine.
//!
//! Tracks exactly one of {no asset, asset without labels, fetch in flight,
//! labels present} for the asset under edit, so illegal combinations (a fetch
//! with no asset, two concurrent fetches, stale labels from a previous asset)
//! are unrepresentable. Each fetch carries a [`FetchTicket`] tagged with the
//! asset identity and a generation counter; completions whose ticket no
//! longer matches are discarded.

use crate::labels::LabelSheet;
use crate::models::{Asset, CustomFields, FieldKey};
use tracing::debug;

/// Identity of one in-flight label fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    pub asset_id: String,
    pub asset_name: String,
    generation: u64,
}

#[derive(Debug, Clone, Default)]
enum SyncState {
    #[default]
    Empty,
    Loaded {
        asset: Asset,
        labels: Option<LabelSheet>,
        fetch_attempted: bool,
    },
    Fetching {
        asset: Asset,
        ticket: FetchTicket,
    },
}

/// State machine driving the auto-fetch and edit flow for one asset-in-view.
#[derive(Debug, Default)]
pub struct LabelSync {
    state: SyncState,
    generation: u64,
}

impl LabelSync {
    /// Replace the asset under edit. Always resets: labels are derived
    /// immediately when the asset already carries non-empty custom fields,
    /// otherwise the machine becomes eligible for one automatic fetch. Any
    /// outstanding fetch for the previous asset is implicitly invalidated by
    /// the generation bump.
    pub fn set_asset(&mut self, asset: Asset) {
        self.generation += 1;
        let labels = if asset.custom_fields.has_any() {
            Some(LabelSheet::from_fields(&asset.custom_fields))
        } else {
            None
        };
        self.state = SyncState::Loaded {
            asset,
            labels,
            fetch_attempted: false,
        };
    }

    /// Drop the asset under edit entirely.
    pub fn clear(&mut self) {
        self.generation += 1;
        self.state = SyncState::Empty;
    }

    /// The asset under edit, if any.
    pub fn asset(&self) -> Option<&Asset> {
        match &self.state {
            SyncState::Empty => None,
            SyncState::Loaded { asset, .. } | SyncState::Fetching { asset, .. } => Some(asset),
        }
    }

    /// Derived label sheet, present only once labels were fetched or the
    /// asset arrived pre-tagged.
    pub fn labels(&self) -> Option<&LabelSheet> {
        match &self.state {
            SyncState::Loaded { labels, .. } => labels.as_ref(),
            _ => None,
        }
    }

    /// `true` while the initial bulk fetch is in flight.
    pub fn is_fetching(&self) -> bool {
        matches!(self.state, SyncState::Fetching { .. })
    }

    /// Ask for a fetch ticket. Fires at most once per asset: refused while an
    /// upload is in flight, while a fetch is already outstanding, after a
    /// failed attempt, when labels are already present, or when the asset's
    /// id or name is empty.
    pub fn begin_fetch(&mut self, upload_in_flight: bool) -> Option<FetchTicket> {
        if upload_in_flight {
            return None;
        }
        let SyncState::Loaded {
            asset,
            labels: None,
            fetch_attempted: false,
        } = &self.state
        else {
            return None;
        };
        if asset.id.is_empty() || asset.name.is_empty() {
            return None;
        }
        let ticket = FetchTicket {
            asset_id: asset.id.clone(),
            asset_name: asset.name.clone(),
            generation: self.generation,
        };
        let asset = asset.clone();
        self.state = SyncState::Fetching {
            asset,
            ticket: ticket.clone(),
        };
        Some(ticket)
    }

    /// Complete a fetch with the backend's custom fields. Stale tickets
    /// (the asset was replaced or cleared meanwhile) are discarded.
    ///
    /// # Returns
    /// `true` when the result was applied.
    pub fn fetch_succeeded(&mut self, ticket: &FetchTicket, fields: CustomFields) -> bool {
        if !self.ticket_is_current(ticket) {
            debug!(
                asset_id = %ticket.asset_id,
                "discarding stale label fetch result"
            );
            return false;
        }
        let SyncState::Fetching { asset, .. } = std::mem::take(&mut self.state) else {
            return false;
        };
        let mut asset = asset;
        asset.custom_fields = fields;
        let labels = LabelSheet::from_fields(&asset.custom_fields);
        self.state = SyncState::Loaded {
            asset,
            labels: Some(labels),
            fetch_attempted: true,
        };
        true
    }

    /// Record a failed fetch. The machine returns to the no-labels state with
    /// the attempt spent, so the auto-trigger cannot loop; re-selecting the
    /// asset re-arms it.
    pub fn fetch_failed(&mut self, ticket: &FetchTicket) -> bool {
        if !self.ticket_is_current(ticket) {
            debug!(
                asset_id = %ticket.asset_id,
                "discarding stale label fetch failure"
            );
            return false;
        }
        let SyncState::Fetching { asset, .. } = std::mem::take(&mut self.state) else {
            return false;
        };
        self.state = SyncState::Loaded {
            asset,
            labels: None,
            fetch_attempted: true,
        };
        true
    }

    /// Reconcile one dimension from the server's authoritative post-update
    /// value. Does not pass through the fetching state, so single-field edits
    /// never show the bulk-fetch placeholder. Updates for a different asset
    /// id are ignored.
    ///
    /// # Returns
    /// `true` when the dimension was updated.
    pub fn apply_field_update(&mut self, asset_id: &str, key: FieldKey, joined: &str) -> bool {
        let SyncState::Loaded { asset, labels, .. } = &mut self.state else {
            return false;
        };
        if asset.id != asset_id {
            debug!(asset_id, "ignoring field update for replaced asset");
            return false;
        }
        asset.custom_fields.set(key, Some(joined.to_string()));
        match labels {
            Some(sheet) => sheet.replace(key, joined),
            None => *labels = Some(LabelSheet::from_fields(&asset.custom_fields)),
        }
        true
    }

    fn ticket_is_current(&self, ticket: &FetchTicket) -> bool {
        matches!(&self.state, SyncState::Fetching { ticket: current, .. } if current == ticket)
            && ticket.generation == self.generation
    }
}
