//! Delayed, cancellable tasks on a host-driven clock.
//!
//! The queue keeps its own notion of "now", advanced by [`TaskQueue::advance`].
//! Posting returns a [`TaskHandle`]; a cancelled handle never fires.

use std::time::Duration;

/// Identifier of a posted task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskHandle(u64);

impl TaskHandle {
    /// Raw numeric id.
    #[must_use]
    pub const fn id(self) -> u64 {
        self.0
    }
}

#[derive(Debug)]
struct ScheduledTask<T> {
    handle: TaskHandle,
    due: Duration,
    task: T,
}

/// Queue of delayed tasks.
#[derive(Debug)]
pub struct TaskQueue<T> {
    tasks: Vec<ScheduledTask<T>>,
    now: Duration,
    next_id: u64,
}

impl<T> Default for TaskQueue<T> {
    fn default() -> Self {
        Self {
            tasks: Vec::new(),
            now: Duration::ZERO,
            next_id: 0,
        }
    }
}

impl<T> TaskQueue<T> {
    /// Create an empty queue at time zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Elapsed queue time.
    #[must_use]
    pub const fn now(&self) -> Duration {
        self.now
    }

    /// Schedule `task` to fire once `delay` has elapsed.
    pub fn post_delayed(&mut self, task: T, delay: Duration) -> TaskHandle {
        let handle = TaskHandle(self.next_id);
        self.next_id += 1;
        self.tasks.push(ScheduledTask {
            handle,
            due: self.now + delay,
            task,
        });
        handle
    }

    /// Cancel a pending task. Returns `false` if it already fired or was
    /// cancelled before.
    pub fn cancel(&mut self, handle: TaskHandle) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.handle != handle);
        before != self.tasks.len()
    }

    /// Whether `handle` is still waiting to fire.
    #[must_use]
    pub fn is_pending(&self, handle: TaskHandle) -> bool {
        self.tasks.iter().any(|t| t.handle == handle)
    }

    /// Number of pending tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Check if nothing is pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Time left until the earliest pending task is due.
    #[must_use]
    pub fn next_due_in(&self) -> Option<Duration> {
        self.tasks
            .iter()
            .map(|t| t.due.saturating_sub(self.now))
            .min()
    }

    /// Move the clock forward by `dt` and drain every task now due,
    /// earliest first. Ties fire in posting order.
    pub fn advance(&mut self, dt: Duration) -> Vec<(TaskHandle, T)> {
        self.now += dt;
        let now = self.now;
        let (mut due, pending): (Vec<_>, Vec<_>) =
            self.tasks.drain(..).partition(|t| t.due <= now);
        self.tasks = pending;
        due.sort_by_key(|t| (t.due, t.handle));
        due.into_iter().map(|t| (t.handle, t.task)).collect()
    }

    /// Drop every pending task.
    pub fn clear(&mut self) {
        self.tasks.clear();
    }
}
