// Example: a minimal host driving the tracker by hand.
use std::cell::RefCell;
use std::rc::Rc;

use scrollscope::{
    Dimensions, ScrollBehavior, ScrollCallbacks, ScrollNotifier, ScrollOffset, ScrollOptions,
    ScrollTracker, Scheduler, Surface, Task, TaskHandle,
};

/// A fixed-size page whose offset is set by the host.
#[derive(Default)]
struct Page {
    top: f64,
    notifier: Option<ScrollNotifier>,
}

impl Surface for Page {
    fn read_dimensions(&self) -> Dimensions {
        Dimensions {
            scroll_width: 800.0,
            scroll_height: 4000.0,
            client_width: 800.0,
            client_height: 600.0,
            scroll_left: 0.0,
            scroll_top: self.top,
        }
    }

    fn attach(&mut self, notifier: ScrollNotifier) {
        self.notifier = Some(notifier);
    }

    fn detach(&mut self) {
        self.notifier = None;
    }

    fn command_scroll(&mut self, offset: ScrollOffset, _behavior: ScrollBehavior) {
        if let Some(top) = offset.top {
            self.top = top.clamp(0.0, 3400.0);
            if let Some(n) = &self.notifier {
                n.notify();
            }
        }
    }
}

/// Records scheduled tasks; the "frame loop" below fires them.
#[derive(Default)]
struct Frames {
    next: u64,
    queue: Vec<(u64, TaskHandle)>,
    now: u64,
}

impl Scheduler for Frames {
    fn schedule_once(&mut self, _task: Task, delay_ms: u64) -> TaskHandle {
        let h = TaskHandle(self.next);
        self.next += 1;
        self.queue.push((self.now + delay_ms, h));
        h
    }

    fn cancel(&mut self, handle: TaskHandle) {
        self.queue.retain(|(_, h)| *h != handle);
    }
}

fn main() {
    let page = Rc::new(RefCell::new(Page::default()));
    let frames = Rc::new(RefCell::new(Frames::default()));

    let callbacks = ScrollCallbacks::new()
        .on_scroll_start(|s| println!("start at y={}", s.position.y))
        .on_direction_change(|d| println!("direction: {:?}", d.vertical))
        .on_reach_bottom(|_| println!("reached bottom"))
        .on_scroll_end(|s| {
            println!("end at y={} progress={:.2}", s.position.y, s.progress.vertical)
        });

    let mut tracker = ScrollTracker::attach(
        Rc::clone(&page),
        Rc::clone(&frames),
        ScrollOptions::default(),
        callbacks,
    );

    // Simulate a 60fps frame loop with a fling that lands on the bottom edge.
    let mut now = 0u64;
    for frame in 0..60u64 {
        now = frame * 16;
        frames.borrow_mut().now = now;
        if frame < 20 {
            tracker
                .utils()
                .scroll_to(ScrollOffset::top(frame as f64 * 200.0), ScrollBehavior::Auto);
        }
        tracker.pump(now);

        let due: Vec<TaskHandle> = {
            let mut f = frames.borrow_mut();
            let (due, rest): (Vec<_>, Vec<_>) = f.queue.drain(..).partition(|(at, _)| *at <= now);
            f.queue = rest;
            due.into_iter().map(|(_, h)| h).collect()
        };
        for h in due {
            tracker.run(h, now);
        }
    }

    let s = tracker.state();
    println!(
        "t={now}ms y={} at_bottom={} samples={}",
        s.position.y,
        s.boundaries.is_at_bottom,
        tracker.stats().samples
    );
    tracker.detach();
}
