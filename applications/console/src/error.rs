/// Console error types
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConsoleError>;

#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Catalog error: {0}")]
    Catalog(#[from] tunecloud_core::CoreError),

    #[error("Playback error: {0}")]
    Playback(#[from] tunecloud_playback::PlaybackError),
}
