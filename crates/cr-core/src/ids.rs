//! Strongly typed, zero-cost location identifier.
//!
//! `LocationId` is `Copy + Ord + Hash` so it can be used as a map key, a
//! sorted-collection element, and a priority-queue tie-breaker without
//! ceremony.  The inner integer is `pub` to allow direct construction from
//! validated user input, but callers should prefer the `.index()` helper
//! when indexing arena slots.

use std::fmt;

/// City-wide key of a location.  Identity for both the balanced index and
/// the road graph; no two live locations share one.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LocationId(pub u32);

impl LocationId {
    /// Sentinel meaning "no valid location" — equivalent to `u32::MAX`.
    pub const INVALID: LocationId = LocationId(u32::MAX);

    /// Cast to `usize` for direct use as a `Vec` index.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl Default for LocationId {
    /// Returns the `INVALID` sentinel so uninitialized ids are visibly invalid.
    #[inline(always)]
    fn default() -> Self {
        Self::INVALID
    }
}

impl fmt::Display for LocationId {
    /// Renders the bare integer — ids appear verbatim in error messages and
    /// menu output, so `LocationId(7)` would read as noise there.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<LocationId> for usize {
    #[inline(always)]
    fn from(id: LocationId) -> usize {
        id.0 as usize
    }
}

impl From<u32> for LocationId {
    #[inline(always)]
    fn from(raw: u32) -> LocationId {
        LocationId(raw)
    }
}

impl TryFrom<usize> for LocationId {
    type Error = std::num::TryFromIntError;
    fn try_from(n: usize) -> Result<LocationId, Self::Error> {
        u32::try_from(n).map(LocationId)
    }
}
