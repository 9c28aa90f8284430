use alloc::rc::Rc;
use core::cell::RefCell;

use scrollscope::{
    Error, ScrollBehavior, ScrollCallbacks, ScrollOffset, ScrollOptions, ScrollState,
    ScrollTracker, SurfaceTarget,
};

use crate::{SimulatedSurface, SimulatedWindow, TimerScheduler};

/// A [`SimulatedSurface`] shared between the host and a tracker.
pub type SharedSurface = Rc<RefCell<SimulatedSurface>>;

/// A framework-neutral controller that wires a `scrollscope::ScrollTracker` to a simulated
/// surface and a timer scheduler.
///
/// This type does not hold any UI objects. Hosts drive it by calling:
/// - `user_scroll_*` when input arrives
/// - `scroll_*` for programmatic navigation
/// - `tick(now_ms)` each frame/timer tick (smooth scrolling, sampling and scroll-end detection)
#[derive(Debug)]
pub struct Controller {
    tracker: ScrollTracker<SharedSurface, TimerScheduler>,
    surface: SharedSurface,
}

impl Controller {
    pub fn new(
        surface: SimulatedSurface,
        options: ScrollOptions,
        callbacks: ScrollCallbacks,
    ) -> Self {
        Self::from_shared(Rc::new(RefCell::new(surface)), options, callbacks)
    }

    /// Tracks a surface the host keeps a handle to.
    pub fn from_shared(
        surface: SharedSurface,
        options: ScrollOptions,
        callbacks: ScrollCallbacks,
    ) -> Self {
        let tracker = ScrollTracker::attach(
            Rc::clone(&surface),
            TimerScheduler::new(),
            options,
            callbacks,
        );
        Self { tracker, surface }
    }

    /// Tracks `target`, falling back to the window's viewport.
    pub fn attach_to(
        target: SurfaceTarget<SharedSurface>,
        window: &SimulatedWindow,
        options: ScrollOptions,
        callbacks: ScrollCallbacks,
    ) -> Result<Self, Error> {
        let surface = target.resolve(window)?;
        Ok(Self::from_shared(surface, options, callbacks))
    }

    pub fn tracker(&self) -> &ScrollTracker<SharedSurface, TimerScheduler> {
        &self.tracker
    }

    pub fn tracker_mut(&mut self) -> &mut ScrollTracker<SharedSurface, TimerScheduler> {
        &mut self.tracker
    }

    pub fn surface(&self) -> &SharedSurface {
        &self.surface
    }

    pub fn state(&self) -> &ScrollState {
        self.tracker.state()
    }

    pub fn is_animating(&self) -> bool {
        self.surface.borrow().is_animating()
    }

    /// `true` when nothing is animating and no task is scheduled.
    pub fn is_idle(&self) -> bool {
        !self.is_animating() && self.tracker.scheduler().is_empty()
    }

    /// Advances the controller.
    ///
    /// Steps the surface animation, folds pending scroll notifications into the tracker, then
    /// runs every task that is due at `now_ms` in due order. Returns the number of tasks run.
    pub fn tick(&mut self, now_ms: u64) -> usize {
        self.tracker.scheduler_mut().advance_to(now_ms);
        self.surface.borrow_mut().tick(now_ms);
        self.tracker.pump(now_ms);

        let mut ran = 0;
        while let Some((handle, _task)) = self.tracker.scheduler_mut().pop_due() {
            self.tracker.run(handle, now_ms);
            ran += 1;
        }
        #[cfg(feature = "tracing")]
        if ran > 0 {
            tracing::trace!(target: "scrollscope_adapter", now_ms, ran, "tick");
        }
        ran
    }

    /// Runs `tick` every `frame_ms` until the controller is idle or `until_ms` is reached.
    ///
    /// Returns the time of the last tick.
    pub fn run_until_idle(&mut self, mut now_ms: u64, frame_ms: u64, until_ms: u64) -> u64 {
        let frame_ms = frame_ms.max(1);
        loop {
            self.tick(now_ms);
            if self.is_idle() || now_ms >= until_ms {
                return now_ms;
            }
            now_ms = now_ms.saturating_add(frame_ms);
        }
    }

    /// Simulates a user scroll to an absolute offset. This cancels any smooth scroll.
    pub fn user_scroll_to(&mut self, left: f64, top: f64, now_ms: u64) {
        self.surface.borrow_mut().user_scroll_to(left, top);
        self.tick(now_ms);
    }

    /// Simulates a user scroll by a delta. This cancels any smooth scroll.
    pub fn user_scroll_by(&mut self, dx: f64, dy: f64, now_ms: u64) {
        self.surface.borrow_mut().user_scroll_by(dx, dy);
        self.tick(now_ms);
    }

    pub fn scroll_to(&mut self, offset: ScrollOffset, behavior: ScrollBehavior, now_ms: u64) {
        self.surface.borrow_mut().set_now(now_ms);
        self.tracker.utils().scroll_to(offset, behavior);
        self.tick(now_ms);
    }

    pub fn scroll_to_top(&mut self, behavior: ScrollBehavior, now_ms: u64) {
        self.surface.borrow_mut().set_now(now_ms);
        self.tracker.utils().scroll_to_top(behavior);
        self.tick(now_ms);
    }

    pub fn scroll_to_bottom(&mut self, behavior: ScrollBehavior, now_ms: u64) {
        self.surface.borrow_mut().set_now(now_ms);
        self.tracker.utils().scroll_to_bottom(behavior);
        self.tick(now_ms);
    }

    pub fn detach(&mut self) {
        self.surface.borrow_mut().cancel_animation();
        self.tracker.detach();
        #[cfg(feature = "tracing")]
        tracing::debug!(target: "scrollscope_adapter", "Controller::detach");
    }
}
