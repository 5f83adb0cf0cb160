//! Property-based tests for the playback controller
//!
//! Uses proptest to verify invariants across many random inputs.

use proptest::prelude::*;
use tunecloud_core::{Catalog, Track, TrackId};
use tunecloud_playback::{
    progress, EngineEvent, LoadTicket, PlaybackConfig, PlaybackController, PlaybackEngine,
    PlaybackState, ScrollDirection, Volume,
};

// ===== Helpers =====

/// Engine that accepts everything and remembers the last ticket
#[derive(Default)]
struct NullEngine {
    last_ticket: LoadTicket,
    current_time: f64,
    duration: f64,
}

impl PlaybackEngine for NullEngine {
    fn load(&mut self, _source: &str, ticket: LoadTicket) -> tunecloud_playback::Result<()> {
        self.last_ticket = ticket;
        Ok(())
    }

    fn play(&mut self) -> tunecloud_playback::Result<()> {
        Ok(())
    }

    fn pause(&mut self) {}

    fn set_current_time(&mut self, seconds: f64) {
        self.current_time = seconds;
    }

    fn set_volume(&mut self, _volume: f32) {}

    fn current_time(&self) -> f64 {
        self.current_time
    }

    fn duration(&self) -> f64 {
        self.duration
    }
}

fn catalog_of(len: usize) -> Catalog {
    Catalog::new(
        (0..len)
            .map(|i| Track::new(format!("t{i}"), format!("Track {i}"), format!("{i}.mp3")))
            .collect(),
    )
    .unwrap()
}

#[derive(Debug, Clone)]
enum Command {
    Play,
    Pause,
    Next,
    Previous,
    Select(usize),
    Seek(f64),
    Ready,
    StaleReady,
    Progress(f64),
}

fn arbitrary_command() -> impl Strategy<Value = Command> {
    prop_oneof![
        Just(Command::Play),
        Just(Command::Pause),
        Just(Command::Next),
        Just(Command::Previous),
        (0usize..12).prop_map(Command::Select),
        (-1.0f64..2.0).prop_map(Command::Seek),
        Just(Command::Ready),
        Just(Command::StaleReady),
        (0.0f64..400.0).prop_map(Command::Progress),
    ]
}

// ===== Property Tests =====

proptest! {
    /// Property: set_volume always leaves volume within 0.0-1.0
    #[test]
    fn set_volume_stays_in_range(level in prop::num::f32::ANY) {
        let mut vol = Volume::new(0.5);
        vol.set(level);
        prop_assert!((0.0..=1.0).contains(&vol.level()));
    }

    /// Property: any run of scroll ticks stays within 0.0-1.0
    #[test]
    fn scroll_ticks_stay_in_range(
        start in 0.0f32..=1.0,
        ticks in prop::collection::vec(any::<bool>(), 0..200)
    ) {
        let mut vol = Volume::new(start);
        for up in ticks {
            let direction = if up { ScrollDirection::Up } else { ScrollDirection::Down };
            vol.step(direction, 0.05);
            prop_assert!((0.0..=1.0).contains(&vol.level()), "out of range: {}", vol.level());
        }
    }

    /// Property: mute then unmute restores the exact pre-mute level
    #[test]
    fn toggle_mute_is_an_involution(level in 0.001f32..=1.0) {
        let mut vol = Volume::new(0.5);
        vol.set(level);

        vol.toggle_mute();
        prop_assert!(vol.is_muted());
        vol.toggle_mute();

        prop_assert_eq!(vol.level(), level);
    }

    /// Property: projection splits seconds correctly and never exceeds total
    #[test]
    fn projection_is_consistent(current in 0.0f64..10_000.0, duration in 0.0f64..10_000.0) {
        let snapshot = progress::project(current, duration);

        prop_assert!(snapshot.elapsed.second < 60);
        prop_assert!(snapshot.total.second < 60);
        prop_assert!((0.0..=100.0).contains(&snapshot.percent_complete));
        prop_assert_eq!(snapshot.total.as_seconds(), duration.floor() as u64);

        if duration > 0.0 {
            prop_assert!(snapshot.elapsed <= snapshot.total);
        } else {
            prop_assert_eq!(snapshot.percent_complete, 0.0);
        }
    }

    /// Property: transport invariants hold across arbitrary command sequences
    #[test]
    fn transport_invariants_hold(
        len in 1usize..8,
        commands in prop::collection::vec(arbitrary_command(), 1..60)
    ) {
        let catalog = catalog_of(len);
        let engine = NullEngine { duration: 200.0, ..Default::default() };
        let mut controller = PlaybackController::new(engine, PlaybackConfig::default());
        controller.replace_catalog(catalog);

        for command in commands {
            match command {
                Command::Play => controller.play(),
                Command::Pause => controller.pause(),
                Command::Next => controller.next(),
                Command::Previous => controller.previous(),
                Command::Select(i) => controller.play_track_by_id(&TrackId::new(format!("t{i}"))),
                Command::Seek(f) => controller.seek_to(f),
                Command::Ready => {
                    let ticket = controller.engine().last_ticket;
                    controller.handle_engine_event(EngineEvent::MetadataReady(ticket));
                }
                Command::StaleReady => {
                    let ticket = LoadTicket(controller.current_ticket().0.saturating_sub(1));
                    let state_before = controller.state();
                    let track_before = controller.current_track().cloned();
                    if ticket != controller.current_ticket() {
                        controller.handle_engine_event(EngineEvent::MetadataReady(ticket));
                        prop_assert_eq!(controller.state(), state_before);
                        prop_assert_eq!(controller.current_track().cloned(), track_before);
                    }
                }
                Command::Progress(t) => {
                    controller.engine_mut().current_time = t;
                    let ticket = controller.current_ticket();
                    controller.handle_engine_event(EngineEvent::Progress(ticket));
                }
            }

            let view = controller.snapshot();

            // Playing implies a selected track
            if view.is_playing {
                prop_assert!(view.track.is_some());
            }
            prop_assert_eq!(view.is_playing, view.state == PlaybackState::Playing);

            // Selection is always a catalog entry
            let track = view.track.as_ref().unwrap();
            prop_assert!(controller.catalog().position_of(&track.id).is_some());

            // Elapsed never passes a known total
            if view.total.as_seconds() > 0 {
                prop_assert!(view.elapsed <= view.total);
            }
        }
    }
}
