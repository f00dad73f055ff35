//! Error types for the asset service client.

use thiserror::Error;

/// Failure of one backend round trip. Callers treat every variant as
/// recoverable: log it, leave prior state untouched, and let the user retry.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Backend returned status {status} for {operation}")]
    Status { operation: &'static str, status: u16 },

    #[error("Failed to decode {operation} response: {source}")]
    Decode {
        operation: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("Validation error: {0}")]
    Validation(String),
}
