use alloc::rc::Rc;
use core::cell::RefCell;

/// Work a [`crate::ScrollTracker`] asks its host to run later.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Task {
    /// Recompute the scroll state (throttled, frame-aligned).
    Sample,
    /// The debounce window elapsed without a new sample.
    Settle,
}

/// Opaque identity of a scheduled [`Task`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TaskHandle(pub u64);

/// The host's deferred-execution capability.
///
/// A GUI host typically maps `delay_ms == 0` to its next animation frame and longer delays to a
/// timer; a headless host can keep a due-time queue. Either way, when a task fires the host
/// calls [`crate::ScrollTracker::run`] with the handle returned here.
///
/// Delivering a handle after it was cancelled is allowed; the tracker ignores it.
pub trait Scheduler {
    /// Schedules `task` to fire once, no earlier than `delay_ms` from now.
    fn schedule_once(&mut self, task: Task, delay_ms: u64) -> TaskHandle;

    /// Cancels a scheduled task. Unknown or already fired handles are ignored.
    fn cancel(&mut self, handle: TaskHandle);
}

impl<T: Scheduler + ?Sized> Scheduler for &mut T {
    fn schedule_once(&mut self, task: Task, delay_ms: u64) -> TaskHandle {
        (**self).schedule_once(task, delay_ms)
    }

    fn cancel(&mut self, handle: TaskHandle) {
        (**self).cancel(handle);
    }
}

impl<T: Scheduler + ?Sized> Scheduler for Rc<RefCell<T>> {
    fn schedule_once(&mut self, task: Task, delay_ms: u64) -> TaskHandle {
        self.borrow_mut().schedule_once(task, delay_ms)
    }

    fn cancel(&mut self, handle: TaskHandle) {
        self.borrow_mut().cancel(handle);
    }
}
