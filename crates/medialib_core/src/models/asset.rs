//! Asset and custom-field models.

use serde::{Deserialize, Serialize};

/// An uploaded media asset as returned by the backend.
///
/// Assets are created server-side on upload and mutated only through
/// custom-field updates; this client never deletes them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Asset {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub url: String,
    #[serde(rename = "parentFolderId", default)]
    pub parent_folder_id: Option<String>,
    #[serde(default)]
    pub bucket: String,
    #[serde(rename = "customFields", default)]
    pub custom_fields: CustomFields,
}

/// The three editable label dimensions, stored as comma-and-space joined
/// strings. Absent or empty values mean "no labels yet".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomFields {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub products: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colors: Option<String>,
}

impl CustomFields {
    /// Raw joined string for one dimension, if present.
    pub fn get(&self, key: FieldKey) -> Option<&str> {
        match key {
            FieldKey::Products => self.products.as_deref(),
            FieldKey::Tags => self.tags.as_deref(),
            FieldKey::Colors => self.colors.as_deref(),
        }
    }

    /// Replace one dimension's joined string.
    pub fn set(&mut self, key: FieldKey, value: Option<String>) {
        match key {
            FieldKey::Products => self.products = value,
            FieldKey::Tags => self.tags = value,
            FieldKey::Colors => self.colors = value,
        }
    }

    /// `true` when at least one dimension carries a non-empty value.
    pub fn has_any(&self) -> bool {
        FieldKey::ALL
            .iter()
            .any(|key| self.get(*key).map(|v| !v.is_empty()).unwrap_or(false))
    }
}

/// Identifier for one of the three custom-field dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKey {
    Products,
    Colors,
    Tags,
}

impl FieldKey {
    /// All dimensions in display order.
    pub const ALL: [FieldKey; 3] = [FieldKey::Products, FieldKey::Colors, FieldKey::Tags];

    /// Stable wire/display name for the dimension.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKey::Products => "products",
            FieldKey::Colors => "colors",
            FieldKey::Tags => "tags",
        }
    }

    /// Capitalized label for UI headings.
    pub fn title(&self) -> &'static str {
        match self {
            FieldKey::Products => "Products",
            FieldKey::Colors => "Colors",
            FieldKey::Tags => "Tags",
        }
    }
}

/// Response payload of the label-fetch endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct LabelsResponse {
    #[serde(rename = "customFields", default)]
    pub custom_fields: CustomFields,
}

/// Request payload for the custom-field update endpoint. `value` is the full
/// joined string for the dimension, not a delta.
#[derive(Debug, Clone, Serialize)]
pub struct UpdateCustomFieldRequest {
    #[serde(rename = "imageId")]
    pub image_id: String,
    pub key: FieldKey,
    pub value: String,
}
