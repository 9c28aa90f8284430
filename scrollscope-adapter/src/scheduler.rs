use alloc::collections::BTreeMap;

use scrollscope::{Scheduler, Task, TaskHandle};

/// A headless [`Scheduler`] backed by a due-time queue.
///
/// The host advances the clock with [`TimerScheduler::advance_to`] and drains due tasks with
/// [`TimerScheduler::pop_due`], feeding each one to `ScrollTracker::run`. Tasks scheduled with
/// `delay_ms == 0` are due at the current clock, which makes one host tick behave like one frame.
#[derive(Clone, Debug, Default)]
pub struct TimerScheduler {
    now_ms: u64,
    next_id: u64,
    queue: BTreeMap<(u64, u64), Task>,
}

impl TimerScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Moves the clock forward. The clock never goes backwards.
    pub fn advance_to(&mut self, now_ms: u64) {
        self.now_ms = self.now_ms.max(now_ms);
    }

    /// Removes and returns the earliest task that is due at the current clock.
    ///
    /// Tasks due at the same time come out in scheduling order.
    pub fn pop_due(&mut self) -> Option<(TaskHandle, Task)> {
        let (&(due, _), _) = self.queue.first_key_value()?;
        if due > self.now_ms {
            return None;
        }
        let ((_, id), task) = self.queue.pop_first()?;
        Some((TaskHandle(id), task))
    }

    /// Due time of the earliest scheduled task.
    pub fn next_due(&self) -> Option<u64> {
        self.queue.keys().next().map(|&(due, _)| due)
    }

    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

impl Scheduler for TimerScheduler {
    fn schedule_once(&mut self, task: Task, delay_ms: u64) -> TaskHandle {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        self.queue
            .insert((self.now_ms.saturating_add(delay_ms), id), task);
        TaskHandle(id)
    }

    fn cancel(&mut self, handle: TaskHandle) {
        self.queue.retain(|&(_, id), _| id != handle.0);
    }
}
