use alloc::sync::Arc;
use alloc::vec::Vec;

use crate::dispatch::Dispatcher;
use crate::metrics::{self, Sample};
use crate::{
    Direction, Error, Progress, Scheduler, ScrollCallbacks, ScrollNotifier, ScrollOptions,
    ScrollState, ScrollUtils, StateCallback, Surface, SurfaceTarget, Task, TaskHandle,
    TrackerStats, Velocity, ViewportHost,
};

/// Identity of a listener registered with [`ScrollTracker::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

/// Where the sampler is in its cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    /// No sample since attach or since the last quiet period.
    #[default]
    Idle,
    /// At least one sample was accepted and the debounce window is open.
    Sampling,
}

/// A headless scroll state tracker.
///
/// This type is intentionally UI-agnostic:
/// - It does not hold any UI objects beyond the [`Surface`] it observes.
/// - Your host drives it: raw notifications go in through [`ScrollTracker::pump`] or
///   [`ScrollTracker::handle_scroll_event`], and scheduled tasks come back through
///   [`ScrollTracker::run`].
/// - Results are exposed as [`ScrollState`] snapshots, named callbacks and plain subscriptions.
///
/// Recomputation is throttled: a burst of notifications schedules at most one [`Task::Sample`],
/// spaced at least `throttle_ms` after the previous sample. Every accepted sample re-arms a
/// [`Task::Settle`] timer; when it fires, the scroll-end callback runs once.
///
/// For a ready-made headless host, see the `scrollscope-adapter` crate.
pub struct ScrollTracker<S: Surface, Sc: Scheduler> {
    surface: S,
    scheduler: Sc,
    options: ScrollOptions,
    callbacks: ScrollCallbacks,
    listeners: Vec<(SubscriptionId, StateCallback)>,
    next_subscription: u64,
    notifier: ScrollNotifier,

    state: ScrollState,
    previous_sample: Option<Sample>,
    previous_direction: Option<Direction>,

    pending_sample: Option<TaskHandle>,
    debounce: Option<TaskHandle>,
    phase: Phase,
    started: bool,
    attached: bool,
    stats: TrackerStats,
}

impl<S: Surface, Sc: Scheduler> ScrollTracker<S, Sc> {
    /// Attaches a tracker to an explicit surface.
    ///
    /// The initial state is seeded from the surface's current dimensions, at rest and with zero
    /// velocity. No callback fires until the first sample.
    pub fn attach(
        mut surface: S,
        scheduler: Sc,
        options: ScrollOptions,
        callbacks: ScrollCallbacks,
    ) -> Self {
        let notifier = ScrollNotifier::new();
        surface.attach(notifier.clone());

        let dims = surface.read_dimensions().normalized();
        let boundaries = if options.track_boundaries {
            metrics::boundaries(&dims, options.threshold_px)
        } else {
            Default::default()
        };
        let state = ScrollState {
            position: dims.position(),
            dimensions: dims,
            direction: Default::default(),
            velocity: Velocity::zero(0),
            boundaries,
            progress: metrics::progress(&dims),
        };
        sdebug!(
            scroll_left = dims.scroll_left,
            scroll_top = dims.scroll_top,
            throttle_ms = options.throttle_ms,
            debounce_ms = options.debounce_ms,
            "ScrollTracker::attach"
        );

        Self {
            surface,
            scheduler,
            options,
            callbacks,
            listeners: Vec::new(),
            next_subscription: 0,
            notifier,
            state,
            previous_sample: None,
            previous_direction: None,
            pending_sample: None,
            debounce: None,
            phase: Phase::Idle,
            started: false,
            attached: true,
            stats: TrackerStats::default(),
        }
    }

    /// Resolves `target` against `host` and attaches to the result.
    ///
    /// Fails with [`Error::SurfaceUnavailable`] when the default viewport is requested and the
    /// host has none.
    pub fn attach_to<H: ViewportHost<Surface = S> + ?Sized>(
        target: SurfaceTarget<S>,
        host: &H,
        scheduler: Sc,
        options: ScrollOptions,
        callbacks: ScrollCallbacks,
    ) -> Result<Self, Error> {
        let surface = target.resolve(host)?;
        Ok(Self::attach(surface, scheduler, options, callbacks))
    }

    /// Stops tracking: removes the surface listener, cancels any pending sample and clears the
    /// debounce timer.
    ///
    /// Idempotent. Tasks delivered to [`ScrollTracker::run`] afterwards are ignored, so no
    /// callback fires after detach.
    pub fn detach(&mut self) {
        if !self.attached {
            return;
        }
        self.attached = false;
        self.notifier.disable();
        self.surface.detach();
        if let Some(h) = self.pending_sample.take() {
            self.scheduler.cancel(h);
        }
        if let Some(h) = self.debounce.take() {
            self.scheduler.cancel(h);
        }
        self.phase = Phase::Idle;
        self.started = false;
        sdebug!(samples = self.stats.samples, "ScrollTracker::detach");
    }

    /// Detaches and hands back the surface and scheduler.
    pub fn into_parts(mut self) -> (S, Sc) {
        self.detach();
        (self.surface, self.scheduler)
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    pub fn state(&self) -> &ScrollState {
        &self.state
    }

    pub fn is_scrolling(&self) -> bool {
        self.state.direction.is_scrolling
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether a [`Task::Sample`] is scheduled and not yet run.
    pub fn has_pending_sample(&self) -> bool {
        self.pending_sample.is_some()
    }

    pub fn stats(&self) -> TrackerStats {
        self.stats
    }

    /// The last computed progress, without resampling.
    pub fn progress(&self) -> Progress {
        self.state.progress
    }

    pub fn options(&self) -> &ScrollOptions {
        &self.options
    }

    /// Replaces the options. New values apply from the next scheduling decision.
    pub fn set_options(&mut self, options: ScrollOptions) {
        strace!(
            throttle_ms = options.throttle_ms,
            debounce_ms = options.debounce_ms,
            "ScrollTracker::set_options"
        );
        self.options = options;
    }

    /// Copies the current options, applies `f`, then delegates to `set_options`.
    pub fn update_options(&mut self, f: impl FnOnce(&mut ScrollOptions)) {
        let mut next = self.options;
        f(&mut next);
        self.set_options(next);
    }

    pub fn callbacks(&self) -> &ScrollCallbacks {
        &self.callbacks
    }

    pub fn set_callbacks(&mut self, callbacks: ScrollCallbacks) {
        self.callbacks = callbacks;
    }

    /// Registers a listener that receives every new state (each sample and each settle).
    pub fn subscribe(
        &mut self,
        listener: impl Fn(&ScrollState) + Send + Sync + 'static,
    ) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription = self.next_subscription.wrapping_add(1);
        let listener: StateCallback = Arc::new(listener);
        self.listeners.push((id, listener));
        id
    }

    /// Removes a listener. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(i, _)| *i != id);
        self.listeners.len() != before
    }

    /// The notifier handed to the surface on attach.
    pub fn notifier(&self) -> &ScrollNotifier {
        &self.notifier
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn scheduler(&self) -> &Sc {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut Sc {
        &mut self.scheduler
    }

    /// Navigation commands bound to this tracker's surface.
    pub fn utils(&mut self) -> ScrollUtils<'_, S> {
        ScrollUtils::new(&mut self.surface, self.state.progress)
    }

    /// Folds raw notifications collected by the [`ScrollNotifier`] into scheduling, as if they
    /// all arrived at `now_ms`.
    ///
    /// Returns the number of notifications drained.
    pub fn pump(&mut self, now_ms: u64) -> usize {
        let n = self.notifier.take_pending();
        if n > 0 {
            self.on_notifications(n as u64, now_ms);
        }
        n
    }

    /// Handles a single raw scroll notification delivered directly by the host.
    pub fn handle_scroll_event(&mut self, now_ms: u64) {
        self.on_notifications(1, now_ms);
    }

    fn on_notifications(&mut self, count: u64, now_ms: u64) {
        if !self.attached {
            return;
        }
        self.stats.notifications = self.stats.notifications.saturating_add(count);

        if self.pending_sample.is_some() {
            self.stats.coalesced = self.stats.coalesced.saturating_add(count);
            strace!(count, now_ms, "coalesced into pending sample");
            return;
        }
        self.stats.coalesced = self.stats.coalesced.saturating_add(count - 1);

        let delay = match self.previous_sample {
            Some(prev) => self
                .options
                .throttle_ms
                .saturating_sub(now_ms.saturating_sub(prev.timestamp)),
            None => 0,
        };
        self.pending_sample = Some(self.scheduler.schedule_once(Task::Sample, delay));
        strace!(now_ms, delay, "sample scheduled");
    }

    /// Runs a task the scheduler fired.
    ///
    /// Handles that are stale (cancelled, superseded, or delivered after detach) are ignored.
    pub fn run(&mut self, handle: TaskHandle, now_ms: u64) {
        if !self.attached {
            strace!(handle = handle.0, "task after detach ignored");
            return;
        }
        if self.pending_sample == Some(handle) {
            self.pending_sample = None;
            self.sample(now_ms);
        } else if self.debounce == Some(handle) {
            self.debounce = None;
            self.settle(now_ms);
        } else {
            strace!(handle = handle.0, "stale task ignored");
        }
    }

    fn sample(&mut self, now_ms: u64) {
        let dims = self.surface.read_dimensions().normalized();
        let position = dims.position();
        let previous = self.state;
        let opts = self.options;

        let direction = if opts.track_direction {
            metrics::direction(
                position,
                self.previous_sample.map(|s| s.position),
                self.previous_direction.as_ref(),
            )
        } else {
            previous.direction
        };
        let velocity = if opts.track_velocity {
            metrics::velocity(position, now_ms, self.previous_sample)
        } else {
            previous.velocity
        };
        let boundaries = if opts.track_boundaries {
            metrics::boundaries(&dims, opts.threshold_px)
        } else {
            previous.boundaries
        };
        let next = ScrollState {
            position,
            dimensions: dims,
            direction,
            velocity,
            boundaries,
            progress: metrics::progress(&dims),
        };

        self.previous_sample = Some(Sample {
            position,
            timestamp: now_ms,
        });
        self.previous_direction = Some(direction);
        self.state = next;
        self.phase = Phase::Sampling;
        self.stats.samples = self.stats.samples.saturating_add(1);

        if let Some(h) = self.debounce.take() {
            self.scheduler.cancel(h);
        }
        self.debounce = Some(self.scheduler.schedule_once(Task::Settle, opts.debounce_ms));

        let starting = !self.started && next.direction.is_scrolling;
        if starting {
            self.started = true;
        }
        strace!(
            now_ms,
            x = position.x,
            y = position.y,
            speed = next.velocity.magnitude,
            starting,
            "sample"
        );

        let mut d = Dispatcher::new(&self.callbacks);
        d.sample(&next, &previous.direction, starting);
        d.listeners(self.listeners.iter().map(|(_, cb)| cb), &next);
        self.stats.callback_failures = self.stats.callback_failures.saturating_add(d.failures());
    }

    fn settle(&mut self, now_ms: u64) {
        let opts = self.options;
        let mut next = self.state;
        if opts.track_direction {
            next.direction = next.direction.settled();
        }
        if opts.track_velocity {
            next.velocity = Velocity::zero(now_ms);
        }

        self.previous_direction = Some(next.direction);
        self.state = next;
        self.phase = Phase::Idle;
        self.started = false;
        self.stats.settles = self.stats.settles.saturating_add(1);
        strace!(now_ms, "settle");

        let mut d = Dispatcher::new(&self.callbacks);
        d.settle(&next);
        d.listeners(self.listeners.iter().map(|(_, cb)| cb), &next);
        self.stats.callback_failures = self.stats.callback_failures.saturating_add(d.failures());
    }
}

impl<S: Surface, Sc: Scheduler> core::fmt::Debug for ScrollTracker<S, Sc> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ScrollTracker")
            .field("options", &self.options)
            .field("state", &self.state)
            .field("phase", &self.phase)
            .field("attached", &self.attached)
            .field("pending_sample", &self.pending_sample)
            .field("debounce", &self.debounce)
            .field("listeners", &self.listeners.len())
            .field("stats", &self.stats)
            .finish_non_exhaustive()
    }
}
