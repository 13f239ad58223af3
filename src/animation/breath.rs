use std::time::Duration;

use crate::foundation::math::safe_opacity;

/// Non-terminating raised-cosine oscillator behind a cue's breath amplitude.
///
/// Starts at `0`, peaks at `1` half a period later, and repeats forever.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Breath {
    period: Duration,
}

impl Breath {
    /// Oscillator with the given full-cycle period.
    pub fn new(period: Duration) -> Self {
        Self { period }
    }

    /// Full-cycle period.
    pub fn period(self) -> Duration {
        self.period
    }

    /// Amplitude in `[0, 1]` after `elapsed` time on the oscillator.
    pub fn amplitude_at(self, elapsed: Duration) -> f64 {
        let period = self.period.as_secs_f64();
        if period <= 0.0 {
            return 0.0;
        }
        let phase = (elapsed.as_secs_f64() / period).fract();
        safe_opacity(0.5 - 0.5 * (std::f64::consts::TAU * phase).cos())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/breath.rs"]
mod tests;
