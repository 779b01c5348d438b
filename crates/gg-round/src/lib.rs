//! `gg-round` — one round of the guessing game, end to end.
//!
//! # Pipeline
//!
//! ```text
//! raw 3-D guess (pointer-ray hit)
//!   → SpherePoint::to_geo
//!   → Region::contains            (parity + tolerance layers)
//!   → GeoPoint::distance_km       (miss only, vs the region target)
//!   → gg_score::score
//!   → GuessResult
//! ```
//!
//! All per-round state travels inside an explicit [`RoundContext`] value —
//! there is no module-level current region, current guess, or lock flag, so
//! nothing can leak between rounds.
//!
//! | Module      | Contents                                  |
//! |-------------|-------------------------------------------|
//! | [`context`] | `RoundContext`, guess evaluation          |
//! | [`decay`]   | `TimeDecay` session multiplier            |
//! | [`error`]   | `RoundError`, `RoundResult<T>`            |

pub mod context;
pub mod decay;
pub mod error;

#[cfg(test)]
mod tests;

pub use context::RoundContext;
pub use decay::TimeDecay;
pub use error::{RoundError, RoundResult};
