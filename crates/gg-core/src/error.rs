//! Framework error type.
//!
//! Sub-crates may define their own error enums and convert them into
//! `CoreError` via `From` impls, or keep them separate and wrap `CoreError`
//! as one variant.  Both patterns are acceptable; prefer whichever keeps
//! error sites clean.

use thiserror::Error;

use crate::RegionId;

/// The top-level error type for `gg-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("region {0} not found")]
    RegionNotFound(RegionId),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for all `gg-*` crates.
pub type CoreResult<T> = Result<T, CoreError>;
