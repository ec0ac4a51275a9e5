use thiserror::Error;

/// Common error type shared by the blockgate packages
#[derive(Error, Debug)]
pub enum CommonError {
    #[error("Invalid tree path '{path}': {reason}")]
    InvalidPath { path: String, reason: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
