use core::fmt;
use core::num::NonZeroU32;

/// Compact, stable identifier for a reagent allocated by a host registry.
///
/// - `u32` keeps mixture keys small
/// - `NonZero` enables `Option<ReagentId>` to be pointer-optimized
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ReagentId(NonZeroU32);

impl ReagentId {
    /// Create an id from a 0-based registry index by storing index+1.
    ///
    /// Returns `None` for `u32::MAX`, which has no room for the offset.
    pub fn new(index: u32) -> Option<Self> {
        index.checked_add(1).and_then(NonZeroU32::new).map(Self)
    }

    /// Create an id from a 0-based index.
    ///
    /// # Panics
    /// Panics if `index == u32::MAX`.
    pub fn from_index(index: u32) -> Self {
        Self::new(index).expect("reagent index must be below u32::MAX")
    }

    /// Recover the 0-based index.
    pub fn index(self) -> u32 {
        self.0.get() - 1
    }
}

impl fmt::Debug for ReagentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ReagentId({})", self.index())
    }
}

impl fmt::Display for ReagentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index())
    }
}
