//! Playback engine adapter
//!
//! Abstracts the component that actually decodes and plays audio (a browser
//! media element, a native decoder, a test double).

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Selection generation handed to [`PlaybackEngine::load`]
///
/// Every `load` gets a fresh ticket. The engine echoes it back on each
/// notification that belongs to that source, and the controller drops any
/// notification whose ticket is no longer current.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct LoadTicket(pub u64);

impl LoadTicket {
    /// Ticket following this one
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for LoadTicket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Notifications raised by the engine
///
/// Hosts forward these to `PlaybackController::handle_engine_event` in the
/// order the engine raised them. For one load, `MetadataReady` always comes
/// before the first `Progress`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineEvent {
    /// Duration is known and the source can start
    MetadataReady(LoadTicket),

    /// Periodic time update (engine-defined interval, e.g. ~250ms)
    Progress(LoadTicket),
}

impl EngineEvent {
    /// Ticket of the load this notification belongs to
    pub fn ticket(&self) -> LoadTicket {
        match self {
            EngineEvent::MetadataReady(ticket) | EngineEvent::Progress(ticket) => *ticket,
        }
    }
}

/// Platform playback engine
///
/// Loading is asynchronous: `load` only begins the source swap and returns.
/// Completion is reported later through [`EngineEvent::MetadataReady`]
/// carrying the same ticket.
#[cfg_attr(test, mockall::automock)]
pub trait PlaybackEngine {
    /// Begin loading a new source, replacing the current one
    fn load(&mut self, source: &str, ticket: LoadTicket) -> Result<()>;

    /// Start or resume playback
    ///
    /// # Returns
    /// * `Err(PlaybackError::EngineStart)` - the engine rejected playback
    fn play(&mut self) -> Result<()>;

    /// Pause playback
    fn pause(&mut self);

    /// Jump to a position in seconds
    fn set_current_time(&mut self, seconds: f64);

    /// Apply linear volume in `[0, 1]`
    fn set_volume(&mut self, volume: f32);

    /// Current position in (fractional) seconds
    fn current_time(&self) -> f64;

    /// Duration in (fractional) seconds
    ///
    /// `0.0` or a non-finite value while unknown.
    fn duration(&self) -> f64;
}
