//! Folder tree models. Folders are read-only from this client's perspective.

use serde::{Deserialize, Serialize};

/// A folder in the asset tree. `parent_folder_id == None` means root level.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Folder {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "parentFolderId", default)]
    pub parent_folder_id: Option<String>,
}
