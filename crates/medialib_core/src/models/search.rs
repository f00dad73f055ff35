//! Search, autocomplete, and Rocketium result models.

use super::asset::{Asset, CustomFields};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One search or autocomplete result, validated at the service-client
/// boundary instead of flowing through as an untyped record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchHit {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub url: String,
    #[serde(default)]
    pub highlights: Vec<Highlight>,
    #[serde(rename = "parentFolderId", default)]
    pub parent_folder_id: Option<String>,
    #[serde(default)]
    pub bucket: String,
    #[serde(rename = "customFields", default)]
    pub custom_fields: CustomFields,
}

/// One matched path from the backend's search index, with its ranking score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Highlight {
    pub path: String,
    #[serde(default)]
    pub score: f64,
}

impl SearchHit {
    /// Names of the custom-field dimensions that matched the query, ordered by
    /// descending score. Empty when the asset name itself matched, since the
    /// name match already explains the hit.
    pub fn matched_custom_fields(&self) -> Vec<&str> {
        let name_matched = self.highlights.iter().any(|h| h.path == "name");
        if name_matched {
            return Vec::new();
        }
        let mut matches: Vec<&Highlight> = self
            .highlights
            .iter()
            .filter(|h| h.path.split('.').next() == Some("customFields"))
            .collect();
        matches.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
        matches
            .iter()
            .filter_map(|h| h.path.split('.').nth(1))
            .collect()
    }

    /// View the hit as a full asset so it can be opened in the metadata editor.
    pub fn to_asset(&self) -> Asset {
        Asset {
            id: self.id.clone(),
            name: self.name.clone(),
            url: self.url.clone(),
            parent_folder_id: self.parent_folder_id.clone(),
            bucket: self.bucket.clone(),
            custom_fields: self.custom_fields.clone(),
        }
    }
}

/// One entry from the Rocketium asset catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RocketiumAsset {
    #[serde(rename = "originalFileName")]
    pub original_file_name: String,
    pub link: String,
    #[serde(rename = "uploadedAt")]
    pub uploaded_at: DateTime<Utc>,
}
