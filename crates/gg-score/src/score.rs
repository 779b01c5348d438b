//! Score computation and the per-guess result record.

use crate::config::ScoreConfig;

/// Compute the round score from a containment flag and a miss distance.
///
/// Tiers are evaluated in order; within the two linear bands the score
/// interpolates on the (already whole-km) distance.  The final clamp keeps
/// the result non-negative no matter which tier produced it.
pub fn score(contained: bool, distance_km: f64, cfg: &ScoreConfig) -> u32 {
    let raw = if contained || distance_km <= cfg.perfect_km {
        cfg.max_score as f64
    } else if distance_km <= cfg.good_km {
        let t = (distance_km - cfg.perfect_km) / (cfg.good_km - cfg.perfect_km);
        cfg.max_score as f64 - (cfg.max_score - cfg.good_floor) as f64 * t
    } else if distance_km <= cfg.far_km {
        let t = (distance_km - cfg.good_km) / (cfg.far_km - cfg.good_km);
        cfg.good_floor as f64 * (1.0 - t)
    } else {
        0.0
    };

    raw.round().max(0.0) as u32
}

/// The outcome of one confirmed guess.  Created fresh per confirmation,
/// never mutated, handed back to the orchestration layer once.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GuessResult {
    pub is_contained: bool,
    /// `0.0` when contained; otherwise whole km to the region's target.
    pub distance_km: f64,
    pub score: u32,
}

impl GuessResult {
    /// A guess inside the region boundary: full score, zero distance.
    pub fn contained(cfg: &ScoreConfig) -> Self {
        Self {
            is_contained: true,
            distance_km: 0.0,
            score: cfg.max_score,
        }
    }

    /// A miss at the given whole-km distance.
    pub fn missed(distance_km: f64, cfg: &ScoreConfig) -> Self {
        Self {
            is_contained: false,
            distance_km,
            score: score(false, distance_km, cfg),
        }
    }
}
