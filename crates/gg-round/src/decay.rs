//! Session-level time decay.
//!
//! Applied by the round orchestrator on top of the engine's raw score; it
//! is kept out of `gg-score` because it depends on wall-clock state the
//! scoring engine does not own.  Elapsed time arrives here as a plain
//! number of seconds measured by the caller's timer.

/// Multiplier curve: full value during a grace window, linear decay to a
/// floor over a fade window, flat floor afterwards.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimeDecay {
    /// Seconds of full-value grace at the start of a round.
    pub full_secs: u64,

    /// Seconds over which the multiplier fades from 1.0 to `floor`.
    pub fade_secs: u64,

    /// Minimum multiplier; a slow answer is still worth something.
    pub floor: f64,
}

impl Default for TimeDecay {
    fn default() -> Self {
        Self { full_secs: 10, fade_secs: 20, floor: 0.25 }
    }
}

impl TimeDecay {
    /// The multiplier for a guess confirmed `elapsed_secs` into the round.
    pub fn factor(&self, elapsed_secs: u64) -> f64 {
        if elapsed_secs <= self.full_secs {
            return 1.0;
        }
        if self.fade_secs == 0 {
            return self.floor;
        }
        let into_fade = (elapsed_secs - self.full_secs) as f64;
        let t = (into_fade / self.fade_secs as f64).min(1.0);
        1.0 - (1.0 - self.floor) * t
    }

    /// Apply the multiplier to a raw engine score.
    pub fn apply(&self, raw_score: u32, elapsed_secs: u64) -> u32 {
        (raw_score as f64 * self.factor(elapsed_secs)).round() as u32
    }
}
