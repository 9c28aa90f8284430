//! A headless scroll state tracker.
//!
//! For host-side utilities (a simulated surface, a timer scheduler, a driving controller), see
//! the `scrollscope-adapter` crate.
//!
//! This crate turns raw scroll notifications from a scrollable surface into a consistent
//! [`ScrollState`] snapshot: position, extents, direction, velocity, boundary proximity and
//! progress. Recomputation is coalesced to at most one sample per scheduling tick (throttle),
//! a quiet-period timer detects the end of scrolling (debounce), and consumers are notified
//! through named callbacks and plain subscriptions.
//!
//! It is UI-agnostic. A host is expected to provide:
//! - a [`Surface`]: reads extents/offsets, accepts a raw notifier, executes scroll commands
//! - a [`Scheduler`]: frame callbacks in a GUI host, or a timer queue in a headless one
//! - a monotonic millisecond clock, passed into every time-dependent call
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("scrollscope requires either the `std` or `libm` feature");

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod dispatch;
mod error;
pub mod metrics;
mod navigation;
mod options;
mod scheduler;
mod state;
mod surface;
mod tracker;
mod types;


pub use error::Error;
pub use navigation::ScrollUtils;
pub use options::{DirectionCallback, ScrollCallbacks, ScrollOptions, StateCallback};
pub use scheduler::{Scheduler, Task, TaskHandle};
pub use state::{ScrollState, TrackerStats};
pub use surface::{ScrollNotifier, Surface, SurfaceTarget, ViewportHost};
pub use tracker::{Phase, ScrollTracker, SubscriptionId};
pub use types::{
    Boundaries, Dimensions, Direction, Heading, HorizontalDirection, Position, Progress, Rect,
    ScrollBehavior, ScrollOffset, Velocity, VerticalDirection,
};
