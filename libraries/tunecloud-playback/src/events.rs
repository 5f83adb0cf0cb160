//! Playback Events
//!
//! Event-based communication for UI synchronization. Events are queued by
//! the controller and drained by the host:
//! - State changes (loading/play/pause/idle)
//! - Track changes
//! - Position updates (one per accepted engine progress notification)
//! - Volume changes
//! - Errors that were absorbed instead of returned (engine start failures)

use crate::types::PlaybackState;
use serde::{Deserialize, Serialize};

/// Events emitted by the playback controller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PlaybackEvent {
    /// Transport state changed
    StateChanged {
        /// The new state
        state: PlaybackState,
    },

    /// A different track was selected
    TrackChanged {
        /// ID of the new (current) track, `None` when the selection was cleared
        track_id: Option<String>,
        /// ID of the previous track (if any)
        previous_track_id: Option<String>,
    },

    /// Position update
    PositionUpdate {
        /// Elapsed whole seconds
        elapsed_secs: u64,
        /// Total whole seconds (0 while unknown)
        duration_secs: u64,
    },

    /// Volume changed
    VolumeChanged {
        /// New linear volume (0.0-1.0)
        volume: f32,
        /// Whether audio is muted
        is_muted: bool,
    },

    /// Error absorbed by the controller
    Error {
        /// Error message
        message: String,
    },
}
