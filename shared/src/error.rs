//! Errors raised while decoding listings or building a dispatch configuration

use thiserror::Error;

/// Errors that can occur before a dispatch plan is produced
#[derive(Error, Debug)]
pub enum DispatchError {
    #[error("Invalid {record} record at index {index}: missing field `{field}`")]
    InvalidInput {
        record: &'static str,
        index: usize,
        field: &'static str,
    },

    #[error("Malformed listing: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid dispatch configuration: {0}")]
    InvalidConfig(String),
}
