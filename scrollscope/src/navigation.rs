use crate::{Progress, Rect, ScrollBehavior, ScrollOffset, Surface};

/// Imperative navigation over a tracked [`Surface`].
///
/// Commands never fail: out-of-range offsets are forwarded and the surface clamps them, the way
/// platform scrolling does. Their effect reaches the tracker through the surface's ordinary
/// scroll notifications.
///
/// Obtained from [`crate::ScrollTracker::utils`].
#[derive(Debug)]
pub struct ScrollUtils<'a, S: Surface> {
    surface: &'a mut S,
    progress: Progress,
}

impl<'a, S: Surface> ScrollUtils<'a, S> {
    pub fn new(surface: &'a mut S, progress: Progress) -> Self {
        Self { surface, progress }
    }

    /// Scrolls to `offset`; axes left as `None` keep their position.
    ///
    /// Non-finite components are dropped; an empty offset is a no-op.
    pub fn scroll_to(&mut self, offset: ScrollOffset, behavior: ScrollBehavior) {
        let offset = offset.finite();
        if offset.is_empty() {
            return;
        }
        strace!(left = ?offset.left, top = ?offset.top, ?behavior, "scroll_to");
        self.surface.command_scroll(offset, behavior);
    }

    /// Scrolls relative to the current offset.
    pub fn scroll_by(&mut self, dx: f64, dy: f64, behavior: ScrollBehavior) {
        let dims = self.surface.read_dimensions().normalized();
        self.scroll_to(
            ScrollOffset::both(dims.scroll_left + dx, dims.scroll_top + dy),
            behavior,
        );
    }

    pub fn scroll_to_top(&mut self, behavior: ScrollBehavior) {
        self.scroll_to(ScrollOffset::top(0.0), behavior);
    }

    pub fn scroll_to_bottom(&mut self, behavior: ScrollBehavior) {
        let max = self.surface.read_dimensions().normalized().max_scroll_top();
        self.scroll_to(ScrollOffset::top(max), behavior);
    }

    pub fn scroll_to_left(&mut self, behavior: ScrollBehavior) {
        self.scroll_to(ScrollOffset::left(0.0), behavior);
    }

    pub fn scroll_to_right(&mut self, behavior: ScrollBehavior) {
        let max = self.surface.read_dimensions().normalized().max_scroll_left();
        self.scroll_to(ScrollOffset::left(max), behavior);
    }

    /// Whether `element` (in content coordinates) lies entirely inside the visible rectangle.
    pub fn is_element_in_view(&self, element: Rect) -> bool {
        self.surface
            .read_dimensions()
            .normalized()
            .visible_rect()
            .contains_rect(&element)
    }

    /// Whether any part of `element` (in content coordinates) is visible.
    pub fn is_element_partially_in_view(&self, element: Rect) -> bool {
        self.surface
            .read_dimensions()
            .normalized()
            .visible_rect()
            .intersects(&element)
    }

    /// The progress of the last sample. Does not resample the surface.
    pub fn progress(&self) -> Progress {
        self.progress
    }
}
