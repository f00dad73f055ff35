//! Label string parsing, joining, and per-asset label sheets.
//!
//! The backend stores each label dimension as a single comma-and-space joined
//! string. Everything in this module preserves server order and never
//! produces empty labels.

use crate::models::{CustomFields, FieldKey};

/// Separator used by the backend when joining labels.
pub const LABEL_SEPARATOR: &str = ", ";

/// Split a joined field value into distinct labels.
///
/// Empty or whitespace-only input yields an empty vec, never `[""]`. Order
/// reflects the server response, not a client sort.
pub fn split_labels(raw: &str) -> Vec<String> {
    raw.split(LABEL_SEPARATOR)
        .map(str::trim)
        .filter(|label| !label.is_empty())
        .map(str::to_string)
        .collect()
}

/// Join labels into the wire format, deduplicating while preserving first
/// occurrence. Blank entries are dropped before joining.
pub fn join_labels<S: AsRef<str>>(labels: &[S]) -> String {
    let mut seen: Vec<&str> = Vec::with_capacity(labels.len());
    for label in labels {
        let trimmed = label.as_ref().trim();
        if trimmed.is_empty() || seen.contains(&trimmed) {
            continue;
        }
        seen.push(trimmed);
    }
    seen.join(LABEL_SEPARATOR)
}

/// Derived label sets for all three dimensions of one asset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelSheet {
    pub products: Vec<String>,
    pub colors: Vec<String>,
    pub tags: Vec<String>,
}

impl LabelSheet {
    /// Derive a sheet from an asset's raw custom fields.
    pub fn from_fields(fields: &CustomFields) -> Self {
        Self {
            products: split_labels(fields.get(FieldKey::Products).unwrap_or_default()),
            colors: split_labels(fields.get(FieldKey::Colors).unwrap_or_default()),
            tags: split_labels(fields.get(FieldKey::Tags).unwrap_or_default()),
        }
    }

    /// Labels for one dimension.
    pub fn get(&self, key: FieldKey) -> &[String] {
        match key {
            FieldKey::Products => &self.products,
            FieldKey::Colors => &self.colors,
            FieldKey::Tags => &self.tags,
        }
    }

    /// Replace one dimension from a server-echoed joined string. The other
    /// dimensions are left untouched.
    pub fn replace(&mut self, key: FieldKey, joined: &str) {
        let labels = split_labels(joined);
        match key {
            FieldKey::Products => self.products = labels,
            FieldKey::Colors => self.colors = labels,
            FieldKey::Tags => self.tags = labels,
        }
    }
}
