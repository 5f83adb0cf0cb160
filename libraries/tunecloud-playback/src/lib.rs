//! TuneCloud - Playback Control
//!
//! Platform-agnostic playback controller for TuneCloud.
//!
//! This crate provides:
//! - Transport control (play/pause, previous/next over catalog order, play by id)
//! - Two-phase track loading (load, then start on metadata ready)
//! - Stale-callback protection through per-selection load tickets
//! - Seek by fraction of the track
//! - Volume control (linear 0.0-1.0, scroll steps, mute with restore)
//! - Progress projection (fractional seconds to minute:second)
//!
//! # Architecture
//!
//! `tunecloud-playback` never touches audio itself:
//! - No dependency on a media element or decoder
//! - No dependency on the UI layer
//! - No global state: hosts construct a [`PlaybackController`] and hand it
//!   to their views
//!
//! The platform supplies a [`PlaybackEngine`] and forwards its notifications
//! as [`EngineEvent`]s.
//!
//! # Example
//!
//! ```rust
//! use tunecloud_core::{Catalog, Track, TrackId};
//! use tunecloud_playback::{
//!     EngineEvent, LoadTicket, PlaybackConfig, PlaybackController, PlaybackEngine, Result,
//! };
//!
//! // Implement PlaybackEngine for your platform
//! #[derive(Default)]
//! struct MyEngine {
//!     loaded: Option<LoadTicket>,
//! }
//!
//! impl PlaybackEngine for MyEngine {
//!     fn load(&mut self, _source: &str, ticket: LoadTicket) -> Result<()> {
//!         self.loaded = Some(ticket);
//!         Ok(())
//!     }
//!     fn play(&mut self) -> Result<()> {
//!         Ok(())
//!     }
//!     fn pause(&mut self) {}
//!     fn set_current_time(&mut self, _seconds: f64) {}
//!     fn set_volume(&mut self, _volume: f32) {}
//!     fn current_time(&self) -> f64 {
//!         125.0
//!     }
//!     fn duration(&self) -> f64 {
//!         200.0
//!     }
//! }
//!
//! let mut controller = PlaybackController::new(MyEngine::default(), PlaybackConfig::default());
//! controller.replace_catalog(
//!     Catalog::new(vec![
//!         Track::new("a", "First", "https://cdn.example.com/a.mp3"),
//!         Track::new("b", "Second", "https://cdn.example.com/b.mp3"),
//!     ])
//!     .unwrap(),
//! );
//!
//! controller.play_track_by_id(&TrackId::new("b"));
//!
//! // Later, the engine reports that the source is ready
//! let ticket = controller.engine().loaded.unwrap();
//! controller.handle_engine_event(EngineEvent::MetadataReady(ticket));
//! controller.handle_engine_event(EngineEvent::Progress(ticket));
//!
//! let view = controller.snapshot();
//! assert!(view.is_playing);
//! assert_eq!(view.elapsed.to_string(), "2:05");
//! assert_eq!(view.total.to_string(), "3:20");
//! ```

mod controller;
mod engine;
mod error;
mod events;
pub mod progress;
pub mod types;
mod volume;

// Public exports
pub use controller::PlaybackController;
pub use engine::{EngineEvent, LoadTicket, PlaybackEngine};
pub use error::{PlaybackError, Result};
pub use events::PlaybackEvent;
pub use progress::{ClockTime, ProgressSnapshot};
pub use types::{PlaybackConfig, PlaybackState, PlayerSnapshot};
pub use volume::{ScrollDirection, Volume};
