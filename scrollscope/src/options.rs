use alloc::sync::Arc;

use crate::{Direction, ScrollState};

/// A callback receiving a scroll state snapshot.
pub type StateCallback = Arc<dyn Fn(&ScrollState) + Send + Sync>;

/// A callback receiving the new direction after a direction change.
pub type DirectionCallback = Arc<dyn Fn(&Direction) + Send + Sync>;

/// Configuration for [`crate::ScrollTracker`].
///
/// This is a plain value: update a copy and hand it to `ScrollTracker::set_options`, or use
/// `ScrollTracker::update_options`.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`; missing fields take
/// their defaults.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ScrollOptions {
    /// Minimum spacing between accepted recomputations, in ms.
    ///
    /// Recomputation is also frame-aligned by the scheduler, so values below one frame only
    /// coalesce bursts.
    pub throttle_ms: u64,
    /// Quiet period after the last sample before scrolling is considered over, in ms.
    pub debounce_ms: u64,
    /// Distance from an edge (px) within which the `near_*` boundary flags are set.
    pub threshold_px: f64,
    /// When disabled, `direction` keeps its last computed value.
    pub track_direction: bool,
    /// When disabled, `velocity` keeps its last computed value.
    pub track_velocity: bool,
    /// When disabled, `boundaries` keeps its last computed value.
    pub track_boundaries: bool,
}

impl Default for ScrollOptions {
    fn default() -> Self {
        Self {
            throttle_ms: 16,
            debounce_ms: 150,
            threshold_px: 100.0,
            track_direction: true,
            track_velocity: true,
            track_boundaries: true,
        }
    }
}

impl ScrollOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_throttle_ms(mut self, throttle_ms: u64) -> Self {
        self.throttle_ms = throttle_ms;
        self
    }

    pub fn with_debounce_ms(mut self, debounce_ms: u64) -> Self {
        self.debounce_ms = debounce_ms;
        self
    }

    pub fn with_threshold_px(mut self, threshold_px: f64) -> Self {
        self.threshold_px = threshold_px;
        self
    }

    pub fn with_track_direction(mut self, enabled: bool) -> Self {
        self.track_direction = enabled;
        self
    }

    pub fn with_track_velocity(mut self, enabled: bool) -> Self {
        self.track_velocity = enabled;
        self
    }

    pub fn with_track_boundaries(mut self, enabled: bool) -> Self {
        self.track_boundaries = enabled;
        self
    }
}

/// Consumer callbacks, all optional.
///
/// Callbacks run synchronously on the context that drives the tracker. A panicking callback is
/// isolated (with `feature = "std"`) and does not stop the remaining callbacks or sampling.
///
/// This type is cheap to clone: every callback is stored in an `Arc`.
#[derive(Clone, Default)]
pub struct ScrollCallbacks {
    pub on_scroll: Option<StateCallback>,
    pub on_scroll_start: Option<StateCallback>,
    pub on_scroll_end: Option<StateCallback>,
    pub on_direction_change: Option<DirectionCallback>,
    pub on_reach_top: Option<StateCallback>,
    pub on_reach_bottom: Option<StateCallback>,
    pub on_reach_left: Option<StateCallback>,
    pub on_reach_right: Option<StateCallback>,
}

impl ScrollCallbacks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_scroll(mut self, f: impl Fn(&ScrollState) + Send + Sync + 'static) -> Self {
        self.on_scroll = Some(Arc::new(f));
        self
    }

    pub fn on_scroll_start(mut self, f: impl Fn(&ScrollState) + Send + Sync + 'static) -> Self {
        self.on_scroll_start = Some(Arc::new(f));
        self
    }

    pub fn on_scroll_end(mut self, f: impl Fn(&ScrollState) + Send + Sync + 'static) -> Self {
        self.on_scroll_end = Some(Arc::new(f));
        self
    }

    pub fn on_direction_change(mut self, f: impl Fn(&Direction) + Send + Sync + 'static) -> Self {
        self.on_direction_change = Some(Arc::new(f));
        self
    }

    pub fn on_reach_top(mut self, f: impl Fn(&ScrollState) + Send + Sync + 'static) -> Self {
        self.on_reach_top = Some(Arc::new(f));
        self
    }

    pub fn on_reach_bottom(mut self, f: impl Fn(&ScrollState) + Send + Sync + 'static) -> Self {
        self.on_reach_bottom = Some(Arc::new(f));
        self
    }

    pub fn on_reach_left(mut self, f: impl Fn(&ScrollState) + Send + Sync + 'static) -> Self {
        self.on_reach_left = Some(Arc::new(f));
        self
    }

    pub fn on_reach_right(mut self, f: impl Fn(&ScrollState) + Send + Sync + 'static) -> Self {
        self.on_reach_right = Some(Arc::new(f));
        self
    }
}

impl core::fmt::Debug for ScrollCallbacks {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ScrollCallbacks")
            .field("on_scroll", &self.on_scroll.is_some())
            .field("on_scroll_start", &self.on_scroll_start.is_some())
            .field("on_scroll_end", &self.on_scroll_end.is_some())
            .field("on_direction_change", &self.on_direction_change.is_some())
            .field("on_reach_top", &self.on_reach_top.is_some())
            .field("on_reach_bottom", &self.on_reach_bottom.is_some())
            .field("on_reach_left", &self.on_reach_left.is_some())
            .field("on_reach_right", &self.on_reach_right.is_some())
            .finish()
    }
}
