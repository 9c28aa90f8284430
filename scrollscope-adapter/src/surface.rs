use scrollscope::{Dimensions, Position, ScrollBehavior, ScrollNotifier, ScrollOffset, Surface};

use crate::{Easing, Tween};

/// An in-memory scrollable element.
///
/// Behaves like a platform scroll container: offsets are clamped to the scrollable range,
/// [`ScrollBehavior::Auto`] jumps immediately, and [`ScrollBehavior::Smooth`] starts a tween
/// that [`SimulatedSurface::tick`] advances. Every offset change reports a raw notification to
/// the attached tracker.
#[derive(Clone, Debug)]
pub struct SimulatedSurface {
    content_width: f64,
    content_height: f64,
    viewport_width: f64,
    viewport_height: f64,
    offset: Position,
    notifier: Option<ScrollNotifier>,
    tween: Option<Tween>,
    smooth_duration_ms: u64,
    easing: Easing,
    now_ms: u64,
}

impl SimulatedSurface {
    /// Creates a surface at offset `(0, 0)` with the given content and viewport extents.
    pub fn new(
        content_width: f64,
        content_height: f64,
        viewport_width: f64,
        viewport_height: f64,
    ) -> Self {
        Self {
            content_width,
            content_height,
            viewport_width,
            viewport_height,
            offset: Position::default(),
            notifier: None,
            tween: None,
            smooth_duration_ms: 240,
            easing: Easing::SmoothStep,
            now_ms: 0,
        }
    }

    pub fn with_offset(mut self, left: f64, top: f64) -> Self {
        self.offset = self.clamp(Position::new(left, top));
        self
    }

    /// Sets the duration and easing used for smooth scrolls.
    pub fn with_smooth_scroll(mut self, duration_ms: u64, easing: Easing) -> Self {
        self.smooth_duration_ms = duration_ms;
        self.easing = easing;
        self
    }

    pub fn offset(&self) -> Position {
        self.offset
    }

    pub fn is_attached(&self) -> bool {
        self.notifier.is_some()
    }

    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    pub fn cancel_animation(&mut self) {
        self.tween = None;
    }

    /// Updates the surface clock used to start smooth scrolls.
    pub fn set_now(&mut self, now_ms: u64) {
        self.now_ms = self.now_ms.max(now_ms);
    }

    /// Simulates a user scroll (wheel, drag, keyboard) to an absolute offset.
    ///
    /// This cancels any active smooth scroll.
    pub fn user_scroll_to(&mut self, left: f64, top: f64) {
        self.cancel_animation();
        self.move_to(Position::new(left, top));
    }

    /// Simulates a user scroll by a delta.
    pub fn user_scroll_by(&mut self, dx: f64, dy: f64) {
        let p = self.offset;
        self.user_scroll_to(p.x + dx, p.y + dy);
    }

    pub fn resize_content(&mut self, width: f64, height: f64) {
        self.content_width = width;
        self.content_height = height;
        self.move_to(self.offset);
    }

    pub fn resize_viewport(&mut self, width: f64, height: f64) {
        self.viewport_width = width;
        self.viewport_height = height;
        self.move_to(self.offset);
    }

    /// Advances an active smooth scroll.
    ///
    /// Returns `true` while the animation is still running.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        self.set_now(now_ms);
        let Some(tween) = self.tween else {
            return false;
        };
        self.move_to(tween.sample(now_ms));
        if tween.is_done(now_ms) {
            self.tween = None;
            return false;
        }
        true
    }

    fn max_offset(&self) -> Position {
        Position::new(
            (self.content_width - self.viewport_width).max(0.0),
            (self.content_height - self.viewport_height).max(0.0),
        )
    }

    fn clamp(&self, p: Position) -> Position {
        let max = self.max_offset();
        Position::new(p.x.clamp(0.0, max.x), p.y.clamp(0.0, max.y))
    }

    fn move_to(&mut self, p: Position) {
        let next = self.clamp(p);
        if !next.x.is_finite() || !next.y.is_finite() || next == self.offset {
            return;
        }
        self.offset = next;
        if let Some(n) = &self.notifier {
            n.notify();
        }
    }
}

impl Surface for SimulatedSurface {
    fn read_dimensions(&self) -> Dimensions {
        Dimensions {
            scroll_width: self.content_width.max(self.viewport_width),
            scroll_height: self.content_height.max(self.viewport_height),
            client_width: self.viewport_width,
            client_height: self.viewport_height,
            scroll_left: self.offset.x,
            scroll_top: self.offset.y,
        }
    }

    fn attach(&mut self, notifier: ScrollNotifier) {
        self.notifier = Some(notifier);
    }

    fn detach(&mut self) {
        self.notifier = None;
    }

    fn command_scroll(&mut self, offset: ScrollOffset, behavior: ScrollBehavior) {
        let target = self.clamp(Position::new(
            offset.left.unwrap_or(self.offset.x),
            offset.top.unwrap_or(self.offset.y),
        ));
        match behavior {
            ScrollBehavior::Auto => {
                self.cancel_animation();
                self.move_to(target);
            }
            ScrollBehavior::Smooth => {
                let (now, duration) = (self.now_ms, self.smooth_duration_ms);
                let tween = match self.tween {
                    Some(mut tween) => {
                        tween.retarget(now, target, duration);
                        tween
                    }
                    None => Tween::new(self.offset, target, now, duration, self.easing),
                };
                self.tween = Some(tween);
            }
        }
    }
}
