// Example: controller-driven smooth scrolling with a user interruption.
use scrollscope::{ScrollBehavior, ScrollCallbacks, ScrollOptions};
use scrollscope_adapter::{Controller, Easing, SimulatedSurface};

fn main() {
    let surface = SimulatedSurface::new(800.0, 20_000.0, 800.0, 600.0)
        .with_smooth_scroll(300, Easing::EaseInOutCubic);
    let callbacks = ScrollCallbacks::new()
        .on_scroll_start(|_| println!("scroll start"))
        .on_scroll_end(|s| println!("scroll end at y={:.0}", s.position.y));
    let options = ScrollOptions::default().with_threshold_px(200.0);
    let mut c = Controller::new(surface, options, callbacks);

    c.scroll_to_bottom(ScrollBehavior::Smooth, 0);

    let mut now = 0u64;
    let mut frame = 0u64;
    loop {
        now += 16;
        frame += 1;
        c.tick(now);

        if frame % 4 == 0 {
            let s = c.state();
            println!(
                "t={now}ms y={:.0} v={:.2}px/ms progress={:.2} near_bottom={}",
                s.position.y, s.velocity.y, s.progress.vertical, s.boundaries.near_bottom
            );
        }

        // The user grabs the page mid-animation.
        if frame == 10 {
            c.user_scroll_by(0.0, -400.0, now);
        }

        if c.is_idle() {
            break;
        }
    }

    println!("idle at t={now}ms, stats={:?}", c.tracker().stats());
}
