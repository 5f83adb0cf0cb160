/// Console session: controller, simulated engine and the status line
use crate::commands::{Command, HELP};
use crate::config::ConsoleConfig;
use crate::engine::SimulatedEngine;
use tracing::{debug, info};
use tunecloud_core::Catalog;
use tunecloud_playback::{
    progress, PlaybackController, PlaybackEvent, PlaybackState, PlayerSnapshot,
};

pub struct Session {
    controller: PlaybackController<SimulatedEngine>,
}

impl Session {
    /// Build a session and cue the first catalog entry
    pub fn new(config: &ConsoleConfig, catalog: Catalog) -> Self {
        let engine = SimulatedEngine::new(config.engine.clone());
        let mut controller = PlaybackController::new(engine, config.playback.clone());

        info!("Loaded catalog with {} tracks", catalog.len());
        controller.replace_catalog(catalog);

        let mut session = Self { controller };
        session.pump();
        session.controller.drain_events();
        session
    }

    /// Run one command and return the lines to print
    ///
    /// `Quit` is the caller's business and produces no output here.
    pub fn execute(&mut self, command: Command) -> Vec<String> {
        debug!("Executing {:?}", command);

        let mut output = Vec::new();
        let mut show_status = true;

        match command {
            Command::Play => self.controller.play(),
            Command::Pause => self.controller.pause(),
            Command::Toggle => self.controller.toggle_play(),
            Command::Next => self.controller.next(),
            Command::Previous => self.controller.previous(),
            Command::Track(id) => {
                if self.controller.catalog().get(&id).is_none() {
                    output.push(format!("no track with id {}", id));
                }
                self.controller.play_track_by_id(&id);
            }
            Command::Seek(fraction) => self.controller.seek_to(fraction),
            Command::Click { offset, width } => self
                .controller
                .seek_to(progress::fraction_from_offset(offset, width)),
            Command::Volume(level) => self.controller.set_volume(level),
            Command::Slider(percent) => self.controller.set_volume_percent(percent),
            Command::Scroll(delta) => self.controller.scroll_adjust(delta),
            Command::Mute => self.controller.toggle_mute(),
            Command::Tick(millis) => self.controller.engine_mut().advance(millis),
            Command::Search(term) => {
                output.extend(self.search(&term));
                show_status = false;
            }
            Command::Albums => {
                output.extend(self.albums());
                show_status = false;
            }
            Command::Status => {}
            Command::Help => {
                output.push(HELP.to_string());
                show_status = false;
            }
            Command::Quit => return output,
        }

        self.pump();
        output.extend(self.drain_messages());

        if show_status {
            output.push(self.status_line());
        }
        output
    }

    /// Deliver engine notifications until the engine goes quiet
    ///
    /// Starting a track can queue further notifications, hence the loop.
    pub fn pump(&mut self) {
        loop {
            let events = self.controller.engine_mut().poll_events();
            if events.is_empty() {
                break;
            }
            for event in events {
                self.controller.handle_engine_event(event);
            }
        }
    }

    /// One-line player view: `▶ name  m:ss / m:ss  vol NN%`
    pub fn status_line(&self) -> String {
        format_status(&self.controller.snapshot())
    }

    pub fn controller(&self) -> &PlaybackController<SimulatedEngine> {
        &self.controller
    }

    fn drain_messages(&mut self) -> Vec<String> {
        let mut messages = Vec::new();

        for event in self.controller.drain_events() {
            match event {
                PlaybackEvent::Error { message } => messages.push(format!("error: {}", message)),
                PlaybackEvent::TrackChanged {
                    track_id: Some(id), ..
                } => debug!("Track changed to {}", id),
                other => debug!("Controller event: {:?}", other),
            }
        }

        messages
    }

    fn search(&self, term: &str) -> Vec<String> {
        let catalog = self.controller.catalog();
        let tracks = catalog.search_tracks(term);
        let albums = catalog.search_albums(term);

        if tracks.is_empty() && albums.is_empty() {
            return vec![format!("nothing matches \"{}\"", term)];
        }

        let mut lines: Vec<String> = tracks
            .iter()
            .map(|t| format!("  track {}  {}", t.id, t.name))
            .collect();
        lines.extend(albums.iter().map(|a| format!("  album {}", a.name)));
        lines
    }

    fn albums(&self) -> Vec<String> {
        let catalog = self.controller.catalog();
        if catalog.albums().is_empty() {
            return vec!["no albums".to_string()];
        }

        catalog
            .albums()
            .iter()
            .map(|album| {
                format!(
                    "  {} ({} tracks)",
                    album.name,
                    catalog.tracks_in_album(&album.name).len()
                )
            })
            .collect()
    }
}

fn format_status(view: &PlayerSnapshot) -> String {
    let Some(track) = view.track.as_ref() else {
        return format!("■ no track  vol {}%", view.volume_percent);
    };

    let symbol = match view.state {
        PlaybackState::Playing => "▶",
        PlaybackState::Loading => "…",
        PlaybackState::Paused | PlaybackState::Idle => "⏸",
    };

    let mut line = format!(
        "{} {}  {} / {}  vol {}%",
        symbol, track.name, view.elapsed, view.total, view.volume_percent
    );
    if view.is_muted {
        line.push_str(" (muted)");
    }
    line
}
