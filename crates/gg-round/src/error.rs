//! Round-subsystem error type.

use thiserror::Error;

use gg_core::RegionId;

/// Errors produced during guess evaluation.
///
/// Everything else in the round pipeline degrades (missing geometry falls
/// back to distance-only scoring); only a region with no known location at
/// all is unscorable, and the caller should skip to another region.
#[derive(Debug, Error)]
pub enum RoundError {
    #[error("region {0} has no usable geometry and no fallback point")]
    NoKnownLocation(RegionId),
}

pub type RoundResult<T> = Result<T, RoundError>;
