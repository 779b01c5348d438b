//! `gg-score` — the tiered scoring policy for globe-guess.
//!
//! Pure arithmetic over a containment flag and a whole-km distance; no
//! geometry and no clocks.  The session-level time decay lives in
//! `gg-round`, outside this engine, because it depends on wall-clock state.
//!
//! | Module     | Contents                                |
//! |------------|-----------------------------------------|
//! | [`config`] | `ScoreConfig` threshold scheme          |
//! | [`score`]  | `score()`, `GuessResult`                |

pub mod config;
pub mod score;

#[cfg(test)]
mod tests;

pub use config::ScoreConfig;
pub use score::{GuessResult, score};
