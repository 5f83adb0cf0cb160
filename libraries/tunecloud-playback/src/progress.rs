//! Progress projection
//!
//! Pure conversion from raw engine times to the minute:second form the UI
//! shows. Recomputed from the engine on every notification so the displayed
//! time never drifts from the engine's clock.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Whole-second time split into minutes and seconds
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ClockTime {
    /// `floor(total_seconds / 60)`
    pub minute: u64,

    /// `total_seconds % 60`, always in `0..60`
    pub second: u8,
}

impl ClockTime {
    /// Zero duration
    pub const ZERO: Self = Self {
        minute: 0,
        second: 0,
    };

    /// Convert fractional seconds, flooring to whole seconds
    ///
    /// Negative and non-finite inputs map to zero.
    pub fn from_seconds(seconds: f64) -> Self {
        let whole = sanitize_seconds(seconds).floor() as u64;
        Self {
            minute: whole / 60,
            second: (whole % 60) as u8,
        }
    }

    /// Total whole seconds
    pub fn as_seconds(&self) -> u64 {
        self.minute * 60 + u64::from(self.second)
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02}", self.minute, self.second)
    }
}

/// Elapsed/total pair derived from one engine reading
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ProgressSnapshot {
    /// Elapsed time, never past `total` once `total` is known
    pub elapsed: ClockTime,

    /// Track duration, zero while unknown
    pub total: ClockTime,

    /// Percent complete in `[0, 100]`, zero while the duration is unknown
    pub percent_complete: f64,
}

/// Project raw engine times into a [`ProgressSnapshot`]
///
/// `project(125.0, 200.0)` gives elapsed `2:05`, total `3:20`, 62.5%.
pub fn project(current_time: f64, duration: f64) -> ProgressSnapshot {
    let total = sanitize_seconds(duration);
    let mut current = sanitize_seconds(current_time);

    if total > 0.0 {
        current = current.min(total);
    }

    let percent_complete = if total > 0.0 {
        (current / total * 100.0).clamp(0.0, 100.0)
    } else {
        0.0
    };

    ProgressSnapshot {
        elapsed: ClockTime::from_seconds(current),
        total: ClockTime::from_seconds(total),
        percent_complete,
    }
}

/// Convert a pointer offset over a bar of `width` pixels to a fraction
///
/// Result is clamped to `[0, 1]`; a zero or negative width yields 0.
pub fn fraction_from_offset(offset: f64, width: f64) -> f64 {
    if width.is_nan() || width <= 0.0 || !offset.is_finite() {
        return 0.0;
    }
    (offset / width).clamp(0.0, 1.0)
}

/// Treat negative, NaN and infinite engine readings as zero
pub(crate) fn sanitize_seconds(seconds: f64) -> f64 {
    if seconds.is_finite() && seconds > 0.0 {
        seconds
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_minutes_and_seconds() {
        let snapshot = project(125.0, 200.0);
        assert_eq!(snapshot.elapsed, ClockTime { minute: 2, second: 5 });
        assert_eq!(snapshot.total, ClockTime { minute: 3, second: 20 });
        assert!((snapshot.percent_complete - 62.5).abs() < 1e-9);
    }

    #[test]
    fn unknown_duration_is_zero_percent() {
        let snapshot = project(12.0, 0.0);
        assert_eq!(snapshot.percent_complete, 0.0);
        assert_eq!(snapshot.total, ClockTime::ZERO);
        assert_eq!(snapshot.elapsed, ClockTime { minute: 0, second: 12 });

        let snapshot = project(12.0, f64::NAN);
        assert_eq!(snapshot.percent_complete, 0.0);
        assert_eq!(snapshot.total, ClockTime::ZERO);
    }

    #[test]
    fn fractional_seconds_floor() {
        assert_eq!(ClockTime::from_seconds(59.999), ClockTime { minute: 0, second: 59 });
        assert_eq!(ClockTime::from_seconds(60.0), ClockTime { minute: 1, second: 0 });
        assert_eq!(ClockTime::from_seconds(-3.0), ClockTime::ZERO);
        assert_eq!(ClockTime::from_seconds(f64::INFINITY), ClockTime::ZERO);
    }

    #[test]
    fn elapsed_never_exceeds_total() {
        let snapshot = project(201.7, 200.0);
        assert_eq!(snapshot.elapsed, snapshot.total);
        assert_eq!(snapshot.percent_complete, 100.0);
    }

    #[test]
    fn displays_padded_seconds() {
        assert_eq!(ClockTime { minute: 3, second: 7 }.to_string(), "3:07");
        assert_eq!(ClockTime { minute: 12, second: 45 }.to_string(), "12:45");
        assert_eq!(ClockTime::ZERO.to_string(), "0:00");
    }

    #[test]
    fn as_seconds_round_trips_whole_values() {
        assert_eq!(ClockTime::from_seconds(3725.0).as_seconds(), 3725);
    }

    #[test]
    fn pointer_offset_to_fraction() {
        assert_eq!(fraction_from_offset(250.0, 500.0), 0.5);
        assert_eq!(fraction_from_offset(-10.0, 500.0), 0.0);
        assert_eq!(fraction_from_offset(900.0, 500.0), 1.0);
        assert_eq!(fraction_from_offset(10.0, 0.0), 0.0);
    }
}
