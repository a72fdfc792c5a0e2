use std::fmt;

use serde::{Deserialize, Serialize};
use time::Duration;

/// Outcome of a tempo estimation.
///
/// `bpm == 0` together with `beats_per_bar == 0` means the buffer could not be
/// estimated (too short, or not enough onsets).
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct EstimationResult {
    /// Beats per minute, rounded to a whole number.
    pub bpm: f32,
    pub beats_per_bar: u32,
}

impl EstimationResult {
    pub fn new(bpm: f32, beats_per_bar: u32) -> Self {
        Self { bpm, beats_per_bar }
    }

    pub fn undetermined() -> Self {
        Self::new(0.0, 0)
    }

    pub fn is_determined(&self) -> bool {
        self.bpm > 0.0
    }

    pub fn beat_duration(&self) -> Option<Duration> {
        if !self.is_determined() {
            return None;
        }
        Some(Duration::seconds_f64(60.0 / self.bpm as f64))
    }

    pub fn bar_duration(&self) -> Option<Duration> {
        if !self.is_determined() || self.beats_per_bar == 0 {
            return None;
        }
        let beat_seconds = 60.0 / self.bpm as f64;
        Some(Duration::seconds_f64(beat_seconds * self.beats_per_bar as f64))
    }
}

/// Renders as `"{beats_per_bar}/4 {bpm} bpm"`. The `/4` denominator is fixed
/// overlay text, not an inferred time signature.
impl fmt::Display for EstimationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_determined() {
            write!(f, "{}/4 {} bpm", self.beats_per_bar, self.bpm)
        } else {
            f.write_str("no tempo")
        }
    }
}

/// Estimation of a single decoded clip, ready for export.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct TempoReport {
    pub source: String,
    pub sample_rate: u32,
    pub channels: u16,
    pub duration_seconds: f64,
    /// Number of onsets the detector found.
    pub onsets: usize,
    pub result: EstimationResult,
}
