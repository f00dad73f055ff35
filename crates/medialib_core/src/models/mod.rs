//! Data models for backend payloads.

/// Asset and custom-field types.
pub mod asset;
/// Folder tree types.
pub mod folder;
/// Search, autocomplete, and Rocketium result types.
pub mod search;

pub use asset::{Asset, CustomFields, FieldKey, LabelsResponse, UpdateCustomFieldRequest};
pub use folder::Folder;
pub use search::{Highlight, RocketiumAsset, SearchHit};
