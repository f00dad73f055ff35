//! Blocking HTTP client for the media asset backend.
//!
//! Every operation is a single request/response round trip with no retry;
//! callers surface failures by leaving their prior state untouched. Payloads
//! are validated into `medialib_core` model types at this boundary.

mod client;
/// Client error taxonomy.
pub mod error;

pub use client::AssetClient;
pub use error::ClientError;
