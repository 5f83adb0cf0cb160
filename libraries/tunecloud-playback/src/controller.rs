//! Playback controller - core orchestration
//!
//! Reconciles user commands, catalog navigation and engine notifications
//! into one transport/volume state.

use crate::{
    engine::{EngineEvent, LoadTicket, PlaybackEngine},
    error::PlaybackError,
    events::PlaybackEvent,
    progress::{self, ProgressSnapshot},
    types::{PlaybackConfig, PlaybackState, PlayerSnapshot},
    volume::{ScrollDirection, Volume},
};
use std::sync::Arc;
use tracing::{debug, info, warn};
use tunecloud_core::{Catalog, Track, TrackId};

/// Central playback control
///
/// Owns the transport state (selected track, play/pause, elapsed/total) and
/// the volume state, and drives an injected [`PlaybackEngine`].
///
/// All methods run to completion on the caller's thread; the controller is
/// not shared across threads and needs no locking. Asynchronous engine work
/// (source loading, periodic time updates) comes back in through
/// [`PlaybackController::handle_engine_event`].
///
/// # Stale callbacks
///
/// Each track selection takes a new [`LoadTicket`]. Notifications carrying
/// any other ticket belong to a superseded selection and are dropped, so a
/// slow "metadata ready" from an earlier click can never start the wrong
/// track.
pub struct PlaybackController<E: PlaybackEngine> {
    engine: E,
    catalog: Catalog,
    config: PlaybackConfig,

    // Transport
    state: PlaybackState,
    current_track: Option<Arc<Track>>,
    ticket: LoadTicket,
    play_when_ready: bool,
    progress: ProgressSnapshot,

    // Volume
    volume: Volume,

    // Event queue for UI synchronization
    pending_events: Vec<PlaybackEvent>,
}

impl<E: PlaybackEngine> PlaybackController<E> {
    /// Create a controller with an empty catalog
    ///
    /// The initial volume is pushed to the engine immediately.
    pub fn new(mut engine: E, config: PlaybackConfig) -> Self {
        let volume = Volume::new(config.initial_volume);
        engine.set_volume(volume.level());

        Self {
            engine,
            catalog: Catalog::default(),
            config,
            state: PlaybackState::Idle,
            current_track: None,
            ticket: LoadTicket::default(),
            play_when_ready: false,
            progress: ProgressSnapshot::default(),
            volume,
            pending_events: Vec::new(),
        }
    }

    // ===== Catalog =====

    /// Swap in a refreshed catalog
    ///
    /// - Empty catalog: the selection is cleared and the controller goes idle.
    /// - Nothing selected yet: the first track is cued (loaded, not played).
    /// - Otherwise the selection is kept, rebound to the new catalog's entry
    ///   when the identifier is still listed.
    pub fn replace_catalog(&mut self, catalog: Catalog) {
        self.catalog = catalog;

        if self.catalog.is_empty() {
            if self.current_track.is_some() {
                self.clear_selection();
            }
            return;
        }

        match self.current_track.as_ref().map(|t| t.id.clone()) {
            None => {
                if let Some(first) = self.catalog.first().cloned() {
                    self.select(first, false);
                }
            }
            Some(id) => {
                if let Some(fresh) = self.catalog.get(&id) {
                    self.current_track = Some(Arc::clone(fresh));
                }
            }
        }
    }

    /// Catalog currently navigated
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    // ===== Navigation =====

    /// Select a track by identifier and start it once its metadata is ready
    ///
    /// Unknown identifiers are ignored. Supersedes any earlier selection
    /// whose metadata has not arrived yet.
    pub fn play_track_by_id(&mut self, id: &TrackId) {
        let Some(track) = self.catalog.get(id).cloned() else {
            debug!("{}", PlaybackError::UnknownTrack(id.clone()));
            return;
        };

        self.select(track, true);
    }

    /// Select the track before the current one
    ///
    /// No-op on the first catalog entry or when nothing is selected.
    pub fn previous(&mut self) {
        let Some(index) = self.current_index() else {
            return;
        };

        if index == 0 {
            return;
        }

        if let Some(id) = self.catalog.track_at(index - 1).map(|t| t.id.clone()) {
            self.play_track_by_id(&id);
        }
    }

    /// Select the track after the current one
    ///
    /// No-op on the last catalog entry (no wrap-around).
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) {
        let Some(index) = self.current_index() else {
            return;
        };

        if let Some(id) = self.catalog.track_at(index + 1).map(|t| t.id.clone()) {
            self.play_track_by_id(&id);
        }
    }

    // ===== Playback Control =====

    /// Start or resume playback
    pub fn play(&mut self) {
        match self.state {
            PlaybackState::Paused => self.start_engine(),
            PlaybackState::Loading => {
                // Metadata not in yet: start as soon as it is
                self.play_when_ready = true;
            }
            PlaybackState::Playing | PlaybackState::Idle => {}
        }
    }

    /// Pause playback
    pub fn pause(&mut self) {
        match self.state {
            PlaybackState::Playing => {
                self.engine.pause();
                self.set_state(PlaybackState::Paused);
            }
            PlaybackState::Loading => {
                self.play_when_ready = false;
            }
            PlaybackState::Paused | PlaybackState::Idle => {}
        }
    }

    /// Toggle between play and pause (space bar / play button)
    pub fn toggle_play(&mut self) {
        let running = match self.state {
            PlaybackState::Playing => true,
            PlaybackState::Loading => self.play_when_ready,
            PlaybackState::Paused | PlaybackState::Idle => false,
        };

        if running {
            self.pause();
        } else {
            self.play();
        }
    }

    // ===== Seek =====

    /// Seek to a fraction of the current track
    ///
    /// The fraction is clamped to 0.0-1.0. Ignored while the duration is
    /// unknown. Elapsed time is updated optimistically; the next progress
    /// notification replaces it with the engine's reading.
    pub fn seek_to(&mut self, fraction: f64) {
        if self.current_track.is_none() || self.state == PlaybackState::Loading {
            return;
        }
        if fraction.is_nan() {
            return;
        }

        let duration = progress::sanitize_seconds(self.engine.duration());
        if duration <= 0.0 {
            debug!("Seek ignored: duration unknown");
            return;
        }

        let target = fraction.clamp(0.0, 1.0) * duration;
        self.engine.set_current_time(target);
        self.publish_progress(progress::project(target, duration));
    }

    // ===== Volume =====

    /// Set volume (0.0-1.0, clamped)
    pub fn set_volume(&mut self, volume: f32) {
        self.volume.set(volume);
        self.apply_volume();
    }

    /// Set volume from a 0-100 slider value
    pub fn set_volume_percent(&mut self, percent: u8) {
        self.set_volume(f32::from(percent.min(100)) / 100.0);
    }

    /// Apply one scroll tick per call; the sign of `delta` picks the direction
    pub fn scroll_adjust(&mut self, delta: f64) {
        let Some(direction) = ScrollDirection::from_wheel_delta(delta) else {
            return;
        };

        self.volume.step(direction, self.config.volume_step);
        self.apply_volume();
    }

    /// Mute, or restore the level in effect when muted
    pub fn toggle_mute(&mut self) {
        self.volume.toggle_mute();
        self.apply_volume();
    }

    // ===== Engine Notifications =====

    /// Feed an engine notification into the controller
    ///
    /// Notifications for superseded selections are dropped.
    pub fn handle_engine_event(&mut self, event: EngineEvent) {
        if event.ticket() != self.ticket || self.current_track.is_none() {
            debug!(
                "Dropping stale engine event {:?} (current ticket {})",
                event, self.ticket
            );
            return;
        }

        match event {
            EngineEvent::MetadataReady(_) => self.on_metadata_ready(),
            EngineEvent::Progress(_) => {
                let snapshot =
                    progress::project(self.engine.current_time(), self.engine.duration());
                self.publish_progress(snapshot);
            }
        }
    }

    fn on_metadata_ready(&mut self) {
        if self.state != PlaybackState::Loading {
            debug!("Metadata ready outside of loading; ignoring");
            return;
        }

        self.progress = progress::project(self.engine.current_time(), self.engine.duration());

        if self.play_when_ready {
            self.play_when_ready = false;
            self.start_engine();
        } else {
            self.set_state(PlaybackState::Paused);
        }
    }

    // ===== State Queries =====

    /// Read-only snapshot for the view layer
    pub fn snapshot(&self) -> PlayerSnapshot {
        PlayerSnapshot {
            track: self.current_track.clone(),
            state: self.state,
            is_playing: self.is_playing(),
            elapsed: self.progress.elapsed,
            total: self.progress.total,
            percent_complete: self.progress.percent_complete,
            volume: self.volume.level(),
            volume_percent: self.volume.percent(),
            is_muted: self.volume.is_muted(),
        }
    }

    /// Get current transport state
    pub fn state(&self) -> PlaybackState {
        self.state
    }

    /// Check if playing
    pub fn is_playing(&self) -> bool {
        self.state == PlaybackState::Playing
    }

    /// Get selected track
    pub fn current_track(&self) -> Option<&Arc<Track>> {
        self.current_track.as_ref()
    }

    /// Latest progress projection
    pub fn progress(&self) -> ProgressSnapshot {
        self.progress
    }

    /// Get current volume (0.0-1.0)
    pub fn volume(&self) -> f32 {
        self.volume.level()
    }

    /// Check if muted
    pub fn is_muted(&self) -> bool {
        self.volume.is_muted()
    }

    /// Ticket of the latest selection
    pub fn current_ticket(&self) -> LoadTicket {
        self.ticket
    }

    /// Borrow the engine
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Mutably borrow the engine (hosts pump simulated engines through this)
    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    // ===== Events =====

    /// Drain all pending events
    ///
    /// The UI should call this after each command or notification.
    pub fn drain_events(&mut self) -> Vec<PlaybackEvent> {
        std::mem::take(&mut self.pending_events)
    }

    /// Check if there are pending events
    pub fn has_pending_events(&self) -> bool {
        !self.pending_events.is_empty()
    }

    // ===== Internal =====

    fn current_index(&self) -> Option<usize> {
        let track = self.current_track.as_ref()?;
        self.catalog.position_of(&track.id)
    }

    /// Stop the current source and load `track` under a fresh ticket
    fn select(&mut self, track: Arc<Track>, autoplay: bool) {
        if self.state == PlaybackState::Playing {
            self.engine.pause();
        }

        self.ticket = self.ticket.next();
        self.play_when_ready = autoplay;
        self.progress = ProgressSnapshot::default();

        let previous = self
            .current_track
            .replace(Arc::clone(&track))
            .map(|t| t.id.to_string());

        info!("Selected track {} ({}) {}", track.id, track.name, self.ticket);
        self.pending_events.push(PlaybackEvent::TrackChanged {
            track_id: Some(track.id.to_string()),
            previous_track_id: previous,
        });
        self.set_state(PlaybackState::Loading);

        if let Err(e) = self.engine.load(&track.audio_url, self.ticket) {
            self.play_when_ready = false;
            self.set_state(PlaybackState::Paused);
            self.report(e);
        }
    }

    fn clear_selection(&mut self) {
        if self.state == PlaybackState::Playing {
            self.engine.pause();
        }

        // Invalidate anything still in flight for the old selection
        self.ticket = self.ticket.next();
        self.play_when_ready = false;
        self.progress = ProgressSnapshot::default();

        let previous = self.current_track.take().map(|t| t.id.to_string());
        info!("Catalog empty; selection cleared");
        self.pending_events.push(PlaybackEvent::TrackChanged {
            track_id: None,
            previous_track_id: previous,
        });
        self.set_state(PlaybackState::Idle);
    }

    fn start_engine(&mut self) {
        match self.engine.play() {
            Ok(()) => self.set_state(PlaybackState::Playing),
            Err(e) => {
                // Track stays selected so an explicit play() can retry
                self.set_state(PlaybackState::Paused);
                self.report(e);
            }
        }
    }

    fn set_state(&mut self, state: PlaybackState) {
        if self.state != state {
            self.state = state;
            self.pending_events.push(PlaybackEvent::StateChanged { state });
        }
    }

    fn publish_progress(&mut self, snapshot: ProgressSnapshot) {
        self.progress = snapshot;
        self.pending_events.push(PlaybackEvent::PositionUpdate {
            elapsed_secs: snapshot.elapsed.as_seconds(),
            duration_secs: snapshot.total.as_seconds(),
        });
    }

    fn apply_volume(&mut self) {
        self.engine.set_volume(self.volume.level());
        self.pending_events.push(PlaybackEvent::VolumeChanged {
            volume: self.volume.level(),
            is_muted: self.volume.is_muted(),
        });
    }

    fn report(&mut self, error: PlaybackError) {
        warn!("{}", error);
        self.pending_events.push(PlaybackEvent::Error {
            message: error.to_string(),
        });
    }
}
