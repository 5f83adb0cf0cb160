/// Core error types for TuneCloud
use crate::types::TrackId;
use thiserror::Error;

/// Result type alias using `CoreError`
pub type Result<T> = std::result::Result<T, CoreError>;

/// Core error type for TuneCloud
#[derive(Error, Debug)]
pub enum CoreError {
    /// The same track identifier appears twice in one catalog
    #[error("Duplicate track in catalog: {0}")]
    DuplicateTrack(TrackId),

    /// Catalog listing could not be parsed
    #[error("Catalog parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// I/O errors
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
