//! Error type shared by every portal operation.

use thiserror::Error;

/// Failure of a single portal operation. Nothing is retried; every variant is
/// surfaced to the caller of the operation that triggered it.
#[derive(Debug, Error)]
pub enum SkynetError {
    /// Metadata header missing, not JSON, or missing a required field.
    #[error("malformed metadata: {0}")]
    MetadataFormat(String),

    /// Upload response was not JSON or carried no `skylink`.
    #[error("upload failed: {0}")]
    Upload(String),

    /// Portal answered a query/read with a non-200 status. `body` is the
    /// server-provided text (empty for HEAD).
    #[error("HTTP {status}: {body}")]
    Download { status: u32, body: String },

    /// Request could not be built or sent (bad URL, curl failure).
    #[error("transport: {0}")]
    Transport(String),

    /// Local file could not be read for upload.
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

impl From<curl::Error> for SkynetError {
    fn from(e: curl::Error) -> Self {
        SkynetError::Transport(e.to_string())
    }
}

impl From<curl::FormError> for SkynetError {
    fn from(e: curl::FormError) -> Self {
        SkynetError::Transport(e.to_string())
    }
}

impl From<url::ParseError> for SkynetError {
    fn from(e: url::ParseError) -> Self {
        SkynetError::Transport(format!("invalid URL: {}", e))
    }
}

pub type Result<T> = std::result::Result<T, SkynetError>;
