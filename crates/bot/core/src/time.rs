//! Server clock representation.

use std::ops::Add;

/// Server time in milliseconds since map start.
///
/// Timestamps in bot memory (enemy sightings, aim pacing) are compared
/// against the tick clock; they are read, never waited on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    #[inline]
    pub fn millis(self) -> u64 {
        self.0
    }

    /// Milliseconds elapsed since `earlier`, saturating at zero.
    #[inline]
    pub fn since(self, earlier: Tick) -> u64 {
        self.0.saturating_sub(earlier.0)
    }
}

impl Add<u64> for Tick {
    type Output = Tick;

    fn add(self, ms: u64) -> Tick {
        Tick(self.0.saturating_add(ms))
    }
}
