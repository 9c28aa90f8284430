//! Pure metric derivations.
//!
//! Every function here is deterministic and allocation-free. [`crate::ScrollTracker`] calls them
//! with one coherent [`Dimensions`] snapshot per sample, but they are public so hosts can derive
//! the same values without running a tracker.

use crate::{
    Boundaries, Dimensions, Direction, Heading, HorizontalDirection, Position, Progress, Velocity,
    VerticalDirection,
};

/// Smallest time step used for velocity, in ms.
pub const MIN_VELOCITY_DT_MS: u64 = 1;

/// A position together with the monotonic time it was observed at.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sample {
    pub position: Position,
    pub timestamp: u64,
}

/// Derives the direction of travel from `previous` to `current`.
///
/// Without a previous position the result is at rest. `last` carries the most recent moving
/// heading from `previous_direction`.
pub fn direction(
    current: Position,
    previous: Option<Position>,
    previous_direction: Option<&Direction>,
) -> Direction {
    let last = previous_direction.and_then(|d| {
        if d.is_scrolling {
            Some(d.heading())
        } else {
            d.last
        }
    });
    let Some(previous) = previous else {
        return Direction::new(Heading::default(), last);
    };

    let horizontal = if current.x > previous.x {
        HorizontalDirection::Right
    } else if current.x < previous.x {
        HorizontalDirection::Left
    } else {
        HorizontalDirection::None
    };
    let vertical = if current.y > previous.y {
        VerticalDirection::Down
    } else if current.y < previous.y {
        VerticalDirection::Up
    } else {
        VerticalDirection::None
    };

    Direction::new(
        Heading {
            horizontal,
            vertical,
        },
        last,
    )
}

/// Derives velocity (px/ms) between `previous` and a position observed at `timestamp`.
///
/// The first sample (no previous) has zero velocity. The time step is floored at
/// [`MIN_VELOCITY_DT_MS`], so two samples at the same instant do not divide by zero.
pub fn velocity(current: Position, timestamp: u64, previous: Option<Sample>) -> Velocity {
    let Some(previous) = previous else {
        return Velocity::zero(timestamp);
    };
    let dt = timestamp
        .saturating_sub(previous.timestamp)
        .max(MIN_VELOCITY_DT_MS) as f64;
    let x = (current.x - previous.position.x) / dt;
    let y = (current.y - previous.position.y) / dt;
    Velocity {
        x,
        y,
        magnitude: hypot(x, y),
        timestamp,
    }
}

/// Derives exact and near-edge flags.
///
/// `threshold_px` below zero (or non-finite) is treated as zero, which keeps every exact flag a
/// subset of its near flag.
pub fn boundaries(dims: &Dimensions, threshold_px: f64) -> Boundaries {
    let threshold = sanitize_threshold(threshold_px);
    let max_left = dims.max_scroll_left();
    let max_top = dims.max_scroll_top();
    let left = dims.scroll_left;
    let top = dims.scroll_top;

    Boundaries {
        is_at_top: top <= 0.0,
        is_at_bottom: top >= max_top,
        is_at_left: left <= 0.0,
        is_at_right: left >= max_left,
        near_top: top <= threshold,
        near_bottom: top >= max_top - threshold,
        near_left: left <= threshold,
        near_right: left >= max_left - threshold,
    }
}

/// Derives normalized progress on both axes.
///
/// An axis without overflow reports 0, never NaN.
pub fn progress(dims: &Dimensions) -> Progress {
    Progress {
        vertical: ratio(dims.scroll_top, dims.max_scroll_top()),
        horizontal: ratio(dims.scroll_left, dims.max_scroll_left()),
    }
}

fn ratio(offset: f64, max: f64) -> f64 {
    if max <= 0.0 {
        return 0.0;
    }
    let r = offset / max;
    if r.is_finite() { r.clamp(0.0, 1.0) } else { 0.0 }
}

pub(crate) fn sanitize_threshold(threshold_px: f64) -> f64 {
    if threshold_px.is_finite() {
        threshold_px.max(0.0)
    } else {
        0.0
    }
}

#[cfg(feature = "std")]
fn hypot(x: f64, y: f64) -> f64 {
    x.hypot(y)
}

#[cfg(not(feature = "std"))]
fn hypot(x: f64, y: f64) -> f64 {
    libm::hypot(x, y)
}
