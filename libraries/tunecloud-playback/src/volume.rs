//! Volume control with mute memory
//!
//! Volume is linear in `[0, 1]`. Muting is not a separate flag: a muted
//! player simply has volume 0, and the level in effect when mute was pressed
//! is remembered so the next toggle can restore it.

/// Fallback restore level when nothing non-zero was ever remembered
const FULL_VOLUME: f32 = 1.0;

/// Resolution applied after every scroll step
const STEP_RESOLUTION: f32 = 10_000.0;

/// Direction of one discrete scroll tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    /// Raise volume
    Up,

    /// Lower volume
    Down,
}

impl ScrollDirection {
    /// Direction from a wheel delta
    ///
    /// Wheel deltas are negative when scrolling up, which raises the volume.
    /// A zero or NaN delta is not a tick.
    pub fn from_wheel_delta(delta: f64) -> Option<Self> {
        if delta < 0.0 {
            Some(ScrollDirection::Up)
        } else if delta > 0.0 {
            Some(ScrollDirection::Down)
        } else {
            None
        }
    }
}

/// Volume controller
#[derive(Debug, Clone)]
pub struct Volume {
    /// Current level (0.0-1.0)
    level: f32,

    /// Level in effect at the last mute
    remembered: f32,
}

impl Volume {
    /// Create new volume controller
    ///
    /// # Arguments
    /// * `level` - Initial volume, clamped to 0.0-1.0 (NaN becomes full volume)
    pub fn new(level: f32) -> Self {
        let level = if level.is_nan() {
            FULL_VOLUME
        } else {
            level.clamp(0.0, 1.0)
        };

        Self {
            level,
            remembered: FULL_VOLUME,
        }
    }

    /// Set volume level, clamped to 0.0-1.0
    ///
    /// NaN is ignored and leaves the level unchanged.
    pub fn set(&mut self, level: f32) {
        if level.is_nan() {
            return;
        }
        self.level = level.clamp(0.0, 1.0);
    }

    /// Apply one scroll tick of `step`
    ///
    /// Clamped on every tick, so ticks past either end are simply lost.
    pub fn step(&mut self, direction: ScrollDirection, step: f32) {
        let delta = match direction {
            ScrollDirection::Up => step,
            ScrollDirection::Down => -step,
        };
        let raw = (self.level + delta).clamp(0.0, 1.0);
        self.level = (raw * STEP_RESOLUTION).round() / STEP_RESOLUTION;
    }

    /// Toggle mute
    ///
    /// Muting remembers the level at this moment; unmuting restores it,
    /// falling back to full volume when the remembered level is zero.
    pub fn toggle_mute(&mut self) {
        if self.is_muted() {
            self.level = if self.remembered > 0.0 {
                self.remembered
            } else {
                FULL_VOLUME
            };
        } else {
            self.remembered = self.level;
            self.level = 0.0;
        }
    }

    /// Current level (0.0-1.0)
    pub fn level(&self) -> f32 {
        self.level
    }

    /// Level that the next unmute restores
    pub fn remembered(&self) -> f32 {
        self.remembered
    }

    /// Check if muted
    pub fn is_muted(&self) -> bool {
        self.level == 0.0
    }

    /// Level as a rounded 0-100 percentage for sliders
    pub fn percent(&self) -> u8 {
        (self.level * 100.0).round() as u8
    }
}

impl Default for Volume {
    fn default() -> Self {
        Self::new(FULL_VOLUME)
    }
}
