//! Core types for playback control

use crate::error::{PlaybackError, Result};
use crate::progress::ClockTime;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tunecloud_core::Track;

/// Transport state
///
/// ```text
/// Idle ──play_track_by_id──▶ Loading ──metadata ready──▶ Playing ◀──▶ Paused
///                               ▲                                       │
///                               └──────── play_track_by_id (any) ───────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaybackState {
    /// No track selected
    Idle,

    /// Track selected, waiting for the engine's metadata
    Loading,

    /// Currently playing
    Playing,

    /// Paused mid-track, or loaded but never started
    Paused,
}

/// Configuration for the playback controller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybackConfig {
    /// Initial volume (0.0-1.0, default: 1.0)
    pub initial_volume: f32,

    /// Volume change per scroll tick (default: 0.05)
    pub volume_step: f32,
}

impl PlaybackConfig {
    /// Validate configuration ranges
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.initial_volume) {
            return Err(PlaybackError::InvalidConfig(format!(
                "initial_volume must be within 0.0-1.0, got {}",
                self.initial_volume
            )));
        }

        if !(self.volume_step > 0.0 && self.volume_step <= 1.0) {
            return Err(PlaybackError::InvalidConfig(format!(
                "volume_step must be within (0.0, 1.0], got {}",
                self.volume_step
            )));
        }

        Ok(())
    }
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            initial_volume: 1.0,
            volume_step: 0.05,
        }
    }
}

/// Read-only view of the controller for the view layer
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerSnapshot {
    /// Selected track, shared with the catalog
    pub track: Option<Arc<Track>>,

    /// Transport state
    pub state: PlaybackState,

    /// `state == Playing`
    pub is_playing: bool,

    /// Elapsed time
    pub elapsed: ClockTime,

    /// Track duration, zero while unknown
    pub total: ClockTime,

    /// Percent complete (0-100)
    pub percent_complete: f64,

    /// Linear volume (0.0-1.0)
    pub volume: f32,

    /// Volume as a 0-100 slider value
    pub volume_percent: u8,

    /// Volume is zero
    pub is_muted: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = PlaybackConfig::default();
        assert_eq!(config.initial_volume, 1.0);
        assert_eq!(config.volume_step, 0.05);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_out_of_range_config() {
        let config = PlaybackConfig {
            initial_volume: 1.5,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(PlaybackError::InvalidConfig(_))));

        let config = PlaybackConfig {
            volume_step: 0.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = PlaybackConfig {
            volume_step: f32::NAN,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
