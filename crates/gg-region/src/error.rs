//! Region-subsystem error type.

use thiserror::Error;

/// Errors produced by `gg-region`.
///
/// These surface only at the loading boundary ([`RegionSetBuilder`]); the
/// containment and centroid paths degrade to `false` / `None` instead of
/// erroring, per the round-time contract.
///
/// [`RegionSetBuilder`]: crate::RegionSetBuilder
#[derive(Debug, Error)]
pub enum RegionError {
    #[error("ring for region '{name}' has {vertices} vertices, need at least 3")]
    DegenerateRing { name: String, vertices: usize },

    #[error("region '{name}' has a MultiPolygon with no polygons")]
    EmptyMultiPolygon { name: String },
}

pub type RegionResult<T> = Result<T, RegionError>;
