//! Error types for playback control

use thiserror::Error;
use tunecloud_core::TrackId;

/// Playback errors
#[derive(Debug, Error)]
pub enum PlaybackError {
    /// Requested track is not in the catalog
    #[error("Unknown track: {0}")]
    UnknownTrack(TrackId),

    /// Engine refused to start playback (unsupported source, autoplay policy, ...)
    #[error("Engine failed to start playback: {0}")]
    EngineStart(String),

    /// Engine could not accept a new source
    #[error("Engine failed to load source: {0}")]
    EngineLoad(String),

    /// Configuration values out of range
    #[error("Invalid playback config: {0}")]
    InvalidConfig(String),
}

/// Result type for playback operations
pub type Result<T> = std::result::Result<T, PlaybackError>;
