//! Error types for an upload attempt.
//!
//! Every variant carries the technical detail for the diagnostic log.
//! None of it reaches the rendered widget: users only ever see
//! [`USER_FACING_ERROR`].

use thiserror::Error;

/// The only failure text a user is shown.
pub const USER_FACING_ERROR: &str = "Failed to upload image. Please try again.";

/// Errors from one upload attempt.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UploadError {
    /// Selected file could not be read.
    #[error("Failed to read file: {0}")]
    Read(String),

    /// Request could not be built or sent, or the connection failed.
    #[error("HTTP request failed: {0}")]
    Transport(String),

    /// Service answered with a non-success status.
    #[error("Upload service error ({status}): {body}")]
    Status { status: u16, body: String },

    /// Success body was not the expected JSON.
    #[error("Failed to parse response: {0}")]
    Decode(String),
}

impl UploadError {
    /// Message to render for this error. Identical for every variant.
    pub fn user_message(&self) -> &'static str {
        USER_FACING_ERROR
    }
}

impl From<serde_json::Error> for UploadError {
    fn from(err: serde_json::Error) -> Self {
        UploadError::Decode(err.to_string())
    }
}

/// Result type for upload operations.
pub type UploadResult<T> = Result<T, UploadError>;
