use crate::{Direction, ScrollCallbacks, ScrollState, StateCallback};

/// Names of the consumer-facing events, used for logging.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Event {
    Scroll,
    ScrollStart,
    ScrollEnd,
    DirectionChange,
    ReachTop,
    ReachBottom,
    ReachLeft,
    ReachRight,
    Listener,
}

impl Event {
    #[cfg_attr(not(feature = "tracing"), allow(dead_code))]
    pub(crate) fn name(self) -> &'static str {
        match self {
            Self::Scroll => "scroll",
            Self::ScrollStart => "scroll_start",
            Self::ScrollEnd => "scroll_end",
            Self::DirectionChange => "direction_change",
            Self::ReachTop => "reach_top",
            Self::ReachBottom => "reach_bottom",
            Self::ReachLeft => "reach_left",
            Self::ReachRight => "reach_right",
            Self::Listener => "listener",
        }
    }
}

/// Fires consumer callbacks in a fixed order, isolating each invocation.
///
/// Failures are counted rather than propagated so one broken consumer cannot stop the others.
pub(crate) struct Dispatcher<'a> {
    callbacks: &'a ScrollCallbacks,
    failures: u64,
}

impl<'a> Dispatcher<'a> {
    pub(crate) fn new(callbacks: &'a ScrollCallbacks) -> Self {
        Self {
            callbacks,
            failures: 0,
        }
    }

    pub(crate) fn failures(&self) -> u64 {
        self.failures
    }

    /// Dispatches one accepted sample.
    ///
    /// Order: scroll, direction change, every edge currently reached (top, bottom, left, right),
    /// then scroll start when `starting` is set.
    pub(crate) fn sample(&mut self, state: &ScrollState, previous: &Direction, starting: bool) {
        let cbs = self.callbacks;
        self.state(Event::Scroll, cbs.on_scroll.as_ref(), state);

        if state.direction.heading() != previous.heading() {
            if let Some(cb) = &cbs.on_direction_change {
                let direction = state.direction;
                self.guard(Event::DirectionChange, || cb(&direction));
            }
        }

        let b = state.boundaries;
        if b.is_at_top {
            self.state(Event::ReachTop, cbs.on_reach_top.as_ref(), state);
        }
        if b.is_at_bottom {
            self.state(Event::ReachBottom, cbs.on_reach_bottom.as_ref(), state);
        }
        if b.is_at_left {
            self.state(Event::ReachLeft, cbs.on_reach_left.as_ref(), state);
        }
        if b.is_at_right {
            self.state(Event::ReachRight, cbs.on_reach_right.as_ref(), state);
        }

        if starting {
            self.state(Event::ScrollStart, cbs.on_scroll_start.as_ref(), state);
        }
    }

    pub(crate) fn settle(&mut self, state: &ScrollState) {
        let cbs = self.callbacks;
        self.state(Event::ScrollEnd, cbs.on_scroll_end.as_ref(), state);
    }

    pub(crate) fn listeners<'l>(
        &mut self,
        listeners: impl IntoIterator<Item = &'l StateCallback>,
        state: &ScrollState,
    ) {
        for cb in listeners {
            self.guard(Event::Listener, || cb(state));
        }
    }

    fn state(&mut self, event: Event, cb: Option<&StateCallback>, state: &ScrollState) {
        if let Some(cb) = cb {
            self.guard(event, || cb(state));
        }
    }

    #[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
    fn guard(&mut self, event: Event, f: impl FnOnce()) {
        if !invoke_isolated(f) {
            self.failures = self.failures.saturating_add(1);
            swarn!(event = event.name(), "scroll callback panicked; continuing");
        }
    }
}

#[cfg(feature = "std")]
fn invoke_isolated(f: impl FnOnce()) -> bool {
    std::panic::catch_unwind(std::panic::AssertUnwindSafe(f)).is_ok()
}

#[cfg(not(feature = "std"))]
fn invoke_isolated(f: impl FnOnce()) -> bool {
    f();
    true
}
