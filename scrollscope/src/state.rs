use crate::{Boundaries, Dimensions, Direction, Position, Progress, Velocity};

/// A complete snapshot of a tracked surface.
///
/// Every field is derived from the same [`Dimensions`] read, and a new snapshot replaces the
/// previous one as a whole.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollState {
    pub position: Position,
    pub dimensions: Dimensions,
    pub direction: Direction,
    pub velocity: Velocity,
    pub boundaries: Boundaries,
    pub progress: Progress,
}

impl ScrollState {
    pub fn is_scrolling(&self) -> bool {
        self.direction.is_scrolling
    }
}

/// Lifetime counters of a [`crate::ScrollTracker`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrackerStats {
    /// Raw notifications received (including coalesced ones).
    pub notifications: u64,
    /// Raw notifications folded into an already pending sample.
    pub coalesced: u64,
    /// Accepted recomputations.
    pub samples: u64,
    /// Quiet periods detected (scroll-end transitions).
    pub settles: u64,
    /// Callback or listener invocations that panicked and were isolated.
    pub callback_failures: u64,
}
