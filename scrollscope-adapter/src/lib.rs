//! Host utilities for the `scrollscope` crate.
//!
//! The `scrollscope` crate is UI-agnostic and focuses on the state derivation and scheduling
//! engine. This crate provides small, framework-neutral pieces a headless host needs:
//!
//! - A simulated scrollable surface (clamping, smooth scrolling via tweens)
//! - A due-time timer queue implementing `scrollscope::Scheduler`
//! - A window host that may or may not provide a default viewport
//! - A controller that drives all of the above from a single `tick(now_ms)`
//!
//! This crate is intentionally framework-agnostic (no egui/ratatui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod controller;
mod scheduler;
mod surface;
mod tween;
mod window;

#[cfg(test)]
mod tests;

pub use controller::{Controller, SharedSurface};
pub use scheduler::TimerScheduler;
pub use surface::SimulatedSurface;
pub use tween::{Easing, Tween};
pub use window::SimulatedWindow;
