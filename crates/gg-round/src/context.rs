//! The per-round evaluation context.

use gg_core::{GeoPoint, SpherePoint};
use gg_region::Region;
use gg_score::{GuessResult, ScoreConfig};

use crate::error::{RoundError, RoundResult};

/// Everything needed to score one guess against one region.
///
/// Borrowed, cheap to build per round, and deliberately value-passed: the
/// orchestration layer constructs a fresh context when a round starts and
/// drops it when the round ends.  Evaluation is pure, so scoring many
/// guesses (or many regions) concurrently needs no synchronization.
pub struct RoundContext<'a> {
    region: &'a Region,
    score_cfg: ScoreConfig,
}

impl<'a> RoundContext<'a> {
    pub fn new(region: &'a Region) -> Self {
        Self { region, score_cfg: ScoreConfig::default() }
    }

    pub fn with_score_config(region: &'a Region, score_cfg: ScoreConfig) -> Self {
        Self { region, score_cfg }
    }

    pub fn region(&self) -> &Region {
        self.region
    }

    /// Score a raw 3-D guess from the globe surface.
    pub fn evaluate(&self, raw: SpherePoint) -> RoundResult<GuessResult> {
        self.evaluate_geo(raw.to_geo())
    }

    /// Score an already-converted geographic guess.
    ///
    /// A contained guess reports zero distance and full score.  A miss is
    /// measured against the region's target — derived centroid, or the
    /// fallback point when the region has no usable geometry.  A region
    /// with neither is unscorable: [`RoundError::NoKnownLocation`], fatal
    /// for this round only.
    pub fn evaluate_geo(&self, guess: GeoPoint) -> RoundResult<GuessResult> {
        if self.region.contains(guess) {
            return Ok(GuessResult::contained(&self.score_cfg));
        }

        let Some(target) = self.region.target() else {
            return Err(RoundError::NoKnownLocation(self.region.id));
        };

        Ok(GuessResult::missed(guess.distance_km(target), &self.score_cfg))
    }
}
