use crate::*;

use alloc::rc::Rc;
use core::cell::RefCell;
use core::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use scrollscope::{
    Error, Position, ScrollBehavior, ScrollCallbacks, ScrollOffset, ScrollOptions, Scheduler,
    Surface, SurfaceTarget, Task, TaskHandle,
};

#[derive(Clone, Default)]
struct Counts {
    scroll: Arc<AtomicUsize>,
    start: Arc<AtomicUsize>,
    end: Arc<AtomicUsize>,
    bottom: Arc<AtomicUsize>,
}

impl Counts {
    fn callbacks(&self) -> ScrollCallbacks {
        let (scroll, start, end, bottom) = (
            Arc::clone(&self.scroll),
            Arc::clone(&self.start),
            Arc::clone(&self.end),
            Arc::clone(&self.bottom),
        );
        ScrollCallbacks::new()
            .on_scroll(move |_| {
                scroll.fetch_add(1, Ordering::Relaxed);
            })
            .on_scroll_start(move |_| {
                start.fetch_add(1, Ordering::Relaxed);
            })
            .on_scroll_end(move |_| {
                end.fetch_add(1, Ordering::Relaxed);
            })
            .on_reach_bottom(move |_| {
                bottom.fetch_add(1, Ordering::Relaxed);
            })
    }

    fn get(c: &Arc<AtomicUsize>) -> usize {
        c.load(Ordering::Relaxed)
    }
}

fn long_page() -> SimulatedSurface {
    SimulatedSurface::new(800.0, 5000.0, 800.0, 600.0)
}

#[test]
fn smooth_scroll_to_bottom_is_sampled_once_per_frame() {
    let counts = Counts::default();
    let mut c = Controller::new(long_page(), ScrollOptions::default(), counts.callbacks());

    c.scroll_to_bottom(ScrollBehavior::Smooth, 0);
    assert!(c.is_animating());
    let done_at = c.run_until_idle(16, 16, 5_000);

    let state = c.state();
    assert_eq!(state.position.top(), 4400.0);
    assert!(state.boundaries.is_at_bottom);
    assert_eq!(state.progress.vertical, 1.0);
    assert!(!state.is_scrolling());

    let stats = c.tracker().stats();
    assert_eq!(stats.samples as usize, Counts::get(&counts.scroll));
    assert_eq!(stats.coalesced, 0);
    assert_eq!(Counts::get(&counts.start), 1);
    assert_eq!(Counts::get(&counts.end), 1);
    assert!(Counts::get(&counts.bottom) >= 1);
    assert!(done_at >= 240 + 150);
    assert!(c.is_idle());
}

#[test]
fn burst_between_ticks_is_coalesced() {
    let counts = Counts::default();
    let mut c = Controller::new(long_page(), ScrollOptions::default(), counts.callbacks());

    for _ in 0..10 {
        c.surface().borrow_mut().user_scroll_by(0.0, 10.0);
    }
    assert_eq!(c.tick(100), 1);

    let stats = c.tracker().stats();
    assert_eq!(stats.notifications, 10);
    assert_eq!(stats.coalesced, 9);
    assert_eq!(stats.samples, 1);
    assert_eq!(c.state().position.top(), 100.0);

    c.tick(249);
    assert_eq!(Counts::get(&counts.end), 0);
    c.tick(250);
    assert_eq!(Counts::get(&counts.end), 1);
    assert!(c.is_idle());
}

#[test]
fn throttle_below_frame_rate_delays_samples() {
    let mut c = Controller::new(
        long_page(),
        ScrollOptions::default().with_throttle_ms(50),
        ScrollCallbacks::new(),
    );

    c.user_scroll_by(0.0, 10.0, 0);
    assert_eq!(c.tracker().stats().samples, 1);

    c.user_scroll_by(0.0, 10.0, 16);
    c.user_scroll_by(0.0, 10.0, 32);
    assert_eq!(c.tracker().stats().samples, 1);
    assert!(c.tracker().has_pending_sample());

    c.tick(50);
    assert_eq!(c.tracker().stats().samples, 2);
    assert_eq!(c.state().position.top(), 30.0);
    assert!((c.state().velocity.y - 0.4).abs() < 1e-9);
}

#[test]
fn user_scroll_cancels_smooth_scroll() {
    let mut c = Controller::new(long_page(), ScrollOptions::default(), ScrollCallbacks::new());

    c.scroll_to(ScrollOffset::top(3000.0), ScrollBehavior::Smooth, 0);
    c.tick(16);
    c.tick(32);
    assert!(c.is_animating());

    c.user_scroll_to(0.0, 100.0, 48);
    assert!(!c.is_animating());
    assert_eq!(c.surface().borrow().offset(), Position::new(0.0, 100.0));
    assert_eq!(c.state().position.top(), 100.0);
}

#[test]
fn auto_scroll_jumps_and_clamps() {
    let mut c = Controller::new(long_page(), ScrollOptions::default(), ScrollCallbacks::new());

    c.scroll_to(ScrollOffset::both(50.0, 99_999.0), ScrollBehavior::Auto, 10);
    assert!(!c.is_animating());
    assert_eq!(c.state().position, Position::new(0.0, 4400.0));

    c.scroll_to_top(ScrollBehavior::Auto, 40);
    assert_eq!(c.state().position.top(), 0.0);
    assert!(c.state().boundaries.is_at_top);
}

#[test]
fn resizing_content_clamps_the_offset() {
    let mut c = Controller::new(
        long_page().with_offset(0.0, 4400.0),
        ScrollOptions::default(),
        ScrollCallbacks::new(),
    );

    c.surface().borrow_mut().resize_content(800.0, 1000.0);
    c.tick(10);
    let state = c.state();
    assert_eq!(state.position.top(), 400.0);
    assert!(state.boundaries.is_at_bottom);
    assert_eq!(state.progress.vertical, 1.0);
}

#[test]
fn default_viewport_requires_a_window() {
    let err = Controller::attach_to(
        SurfaceTarget::Viewport,
        &SimulatedWindow::headless(),
        ScrollOptions::default(),
        ScrollCallbacks::new(),
    )
    .unwrap_err();
    assert_eq!(err, Error::SurfaceUnavailable);

    let window = SimulatedWindow::new(long_page());
    let c = Controller::attach_to(
        SurfaceTarget::Viewport,
        &window,
        ScrollOptions::default(),
        ScrollCallbacks::new(),
    )
    .unwrap();
    assert!(window.viewport_surface().unwrap().borrow().is_attached());
    assert!(Rc::ptr_eq(c.surface(), window.viewport_surface().unwrap()));

    let element = Rc::new(RefCell::new(SimulatedSurface::new(300.0, 300.0, 300.0, 100.0)));
    let c = Controller::attach_to(
        SurfaceTarget::Element(Rc::clone(&element)),
        &SimulatedWindow::headless(),
        ScrollOptions::default(),
        ScrollCallbacks::new(),
    )
    .unwrap();
    assert!(Rc::ptr_eq(c.surface(), &element));
    assert_eq!(c.state().dimensions.client_height, 100.0);
}

#[test]
fn detach_stops_tracking() {
    let counts = Counts::default();
    let mut c = Controller::new(long_page(), ScrollOptions::default(), counts.callbacks());
    c.user_scroll_by(0.0, 50.0, 0);
    assert_eq!(Counts::get(&counts.scroll), 1);

    c.detach();
    assert!(!c.surface().borrow().is_attached());
    assert!(c.is_idle());

    c.user_scroll_by(0.0, 50.0, 20);
    c.run_until_idle(40, 16, 1_000);
    assert_eq!(Counts::get(&counts.scroll), 1);
    assert_eq!(Counts::get(&counts.end), 0);
    assert_eq!(c.surface().borrow().read_dimensions().scroll_top, 100.0);
}

#[test]
fn timer_scheduler_runs_due_tasks_in_order() {
    let mut s = TimerScheduler::new();
    let settle = s.schedule_once(Task::Settle, 10);
    let sample = s.schedule_once(Task::Sample, 0);
    let late = s.schedule_once(Task::Sample, 10);
    s.cancel(late);
    s.cancel(TaskHandle(999));
    assert_eq!(s.pending(), 2);
    assert_eq!(s.next_due(), Some(0));

    assert_eq!(s.pop_due(), Some((sample, Task::Sample)));
    assert_eq!(s.pop_due(), None);

    s.advance_to(10);
    s.advance_to(3);
    assert_eq!(s.now_ms(), 10);
    assert_eq!(s.pop_due(), Some((settle, Task::Settle)));
    assert!(s.is_empty());
}

#[test]
fn easings_hit_their_endpoints() {
    for easing in [Easing::Linear, Easing::SmoothStep, Easing::EaseInOutCubic] {
        assert_eq!(easing.sample(0.0), 0.0);
        assert_eq!(easing.sample(1.0), 1.0);
    }

    let tween = Tween::new(
        Position::new(0.0, 0.0),
        Position::new(0.0, 100.0),
        0,
        100,
        Easing::EaseInOutCubic,
    );
    let mut last = -1.0;
    for now in (0..=120).step_by(10) {
        let y = tween.sample(now).y;
        assert!(y >= last);
        last = y;
    }
    assert_eq!(last, 100.0);
}

#[test]
fn tween_retarget_starts_from_current_position() {
    let mut tween = Tween::new(
        Position::new(0.0, 0.0),
        Position::new(0.0, 100.0),
        0,
        100,
        Easing::Linear,
    );
    tween.retarget(50, Position::new(0.0, 0.0), 50);
    assert_eq!(tween.from, Position::new(0.0, 50.0));
    assert_eq!(tween.sample(75).y, 25.0);
    assert!(tween.is_done(100));
}
