//! Strongly typed region identifier.
//!
//! `RegionId` is `Copy + Ord + Hash` so it can be used as a map key without
//! ceremony.  The inner integer is `pub` to allow direct indexing into the
//! region table via `id.0 as usize`, but callers should prefer the
//! `.index()` helper for clarity.

use std::fmt;

/// Index of a region in the loaded region table.  Assigned sequentially
/// from 0 by whichever loader decodes the boundary data.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RegionId(pub u32);

impl RegionId {
    /// Sentinel meaning "no valid region" — equivalent to `u32::MAX`.
    pub const INVALID: RegionId = RegionId(u32::MAX);

    /// Cast to `usize` for direct use as a `Vec` index.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl Default for RegionId {
    /// Returns the `INVALID` sentinel so uninitialized IDs are visibly invalid.
    #[inline(always)]
    fn default() -> Self {
        Self::INVALID
    }
}

impl fmt::Display for RegionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RegionId({})", self.0)
    }
}

impl From<RegionId> for usize {
    #[inline(always)]
    fn from(id: RegionId) -> usize {
        id.0 as usize
    }
}

impl TryFrom<usize> for RegionId {
    type Error = std::num::TryFromIntError;
    fn try_from(n: usize) -> Result<RegionId, Self::Error> {
        u32::try_from(n).map(RegionId)
    }
}
