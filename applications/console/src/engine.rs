//! Simulated playback engine
//!
//! Stands in for a real media element: a virtual clock instead of audio,
//! notifications queued instead of fired from a decoder thread. Queued
//! notifications from earlier loads are kept, so the controller sees the
//! same late callbacks a real engine produces on rapid track switches.

use crate::config::EngineSettings;
use std::collections::VecDeque;
use tunecloud_playback::{EngineEvent, LoadTicket, PlaybackEngine, PlaybackError, Result};

/// Sources with this suffix load but refuse to play
const UNSUPPORTED_SUFFIX: &str = ".unsupported";

pub struct SimulatedEngine {
    settings: EngineSettings,
    source: Option<String>,
    ticket: Option<LoadTicket>,
    playing: bool,
    position: f64,
    duration: f64,
    volume: f32,
    since_progress_ms: u64,
    pending: VecDeque<EngineEvent>,
}

impl SimulatedEngine {
    pub fn new(settings: EngineSettings) -> Self {
        Self {
            settings,
            source: None,
            ticket: None,
            playing: false,
            position: 0.0,
            duration: 0.0,
            volume: 1.0,
            since_progress_ms: 0,
            pending: VecDeque::new(),
        }
    }

    /// Move the virtual clock forward
    ///
    /// Queues at most one progress notification per call, when at least one
    /// interval boundary was crossed. Notifications carry no position, so
    /// the controller reads the latest time either way.
    pub fn advance(&mut self, millis: u64) {
        let Some(ticket) = self.ticket else {
            return;
        };
        if !self.playing || self.duration <= 0.0 {
            return;
        }

        self.position = (self.position + millis as f64 / 1000.0).min(self.duration);

        let interval = self.settings.progress_interval_ms.max(1);
        let since = self.since_progress_ms.saturating_add(millis);
        if since >= interval {
            self.since_progress_ms = since % interval;
            self.pending.push_back(EngineEvent::Progress(ticket));
        } else {
            self.since_progress_ms = since;
        }
    }

    /// Deliver queued notifications
    ///
    /// Metadata for the active source "arrives" when its ready notification
    /// is delivered, so the duration is unknown until then.
    pub fn poll_events(&mut self) -> Vec<EngineEvent> {
        let events: Vec<EngineEvent> = self.pending.drain(..).collect();

        for event in &events {
            if let EngineEvent::MetadataReady(ticket) = event {
                if Some(*ticket) == self.ticket {
                    self.duration = self.settings.default_duration_secs;
                }
            }
        }

        events
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn volume(&self) -> f32 {
        self.volume
    }

    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }
}

impl PlaybackEngine for SimulatedEngine {
    fn load(&mut self, source: &str, ticket: LoadTicket) -> Result<()> {
        self.source = Some(source.to_string());
        self.ticket = Some(ticket);
        self.playing = false;
        self.position = 0.0;
        self.duration = 0.0;
        self.since_progress_ms = 0;
        self.pending.push_back(EngineEvent::MetadataReady(ticket));
        Ok(())
    }

    fn play(&mut self) -> Result<()> {
        let Some(source) = self.source.as_deref() else {
            return Err(PlaybackError::EngineStart("no source loaded".to_string()));
        };

        if source.ends_with(UNSUPPORTED_SUFFIX) {
            return Err(PlaybackError::EngineStart(format!(
                "no supported source was found: {}",
                source
            )));
        }

        self.playing = true;
        Ok(())
    }

    fn pause(&mut self) {
        self.playing = false;
    }

    fn set_current_time(&mut self, seconds: f64) {
        self.position = seconds.clamp(0.0, self.duration);
    }

    fn set_volume(&mut self, volume: f32) {
        self.volume = volume;
    }

    fn current_time(&self) -> f64 {
        self.position
    }

    fn duration(&self) -> f64 {
        self.duration
    }
}
