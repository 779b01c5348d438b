//! The scoring threshold scheme.
//!
//! One coherent three-tier scheme: perfect / good / far.  Earlier builds of
//! the game used a single flat 20,000 km cutoff; the tiers replaced it and
//! the two schemes are never mixed.  All thresholds are configuration, not
//! inline literals, so the curve stays trivially tunable.

/// Score thresholds.  Defaults give the canonical curve:
///
/// ```text
/// contained, or d ≤ 150 km   → 1000
/// 150 < d ≤ 1000 km          → 1000 → 500, linear
/// 1000 < d ≤ 3000 km         →  500 → 0, linear
/// d > 3000 km                → 0
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoreConfig {
    /// Score for a contained or near-perfect guess.
    pub max_score: u32,

    /// Misses up to this distance still score `max_score`.
    pub perfect_km: f64,

    /// Upper edge of the linear "good" band.
    pub good_km: f64,

    /// Beyond this the round scores 0.
    pub far_km: f64,

    /// Score at exactly `good_km`; the "good" band decays from just under
    /// `max_score` down to this floor.
    pub good_floor: u32,
}

impl Default for ScoreConfig {
    fn default() -> Self {
        Self {
            max_score: 1_000,
            perfect_km: 150.0,
            good_km: 1_000.0,
            far_km: 3_000.0,
            good_floor: 500,
        }
    }
}
