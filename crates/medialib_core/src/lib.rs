//! Core domain library for the media library client (config, models, label
//! parsing, and the label synchronization state machine).

/// Configuration loading and defaults.
pub mod config;
/// Label string parsing, joining, and per-asset label sheets.
pub mod labels;
/// Data models for backend payloads.
pub mod models;
/// Label-fetch synchronization state machine.
pub mod sync;

pub use config::Config;
pub use labels::LabelSheet;
pub use sync::{FetchTicket, LabelSync};
