//! Deferred tasks on a virtual clock.
//!
//! The queue never sleeps or spawns anything. Time only moves when the owner
//! calls [`TimerQueue::advance`], which is what tests do. A host with real
//! timers (the browser's `setTimeout`) instead calls [`TimerQueue::fire`] with
//! the handle once its own timer elapses.

use std::time::Duration;

/// Identifies one scheduled task. Handles are never reused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerHandle(u64);

/// A freshly scheduled task, as reported to a host that must arm a real timer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScheduledTimer {
    pub handle: TimerHandle,
    pub delay: Duration,
}

#[derive(Clone, Debug)]
struct Pending<T> {
    handle: TimerHandle,
    due: Duration,
    task: T,
}

#[derive(Clone, Debug)]
pub struct TimerQueue<T> {
    now: Duration,
    next_id: u64,
    pending: Vec<Pending<T>>,
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self {
            now: Duration::ZERO,
            next_id: 0,
            pending: Vec::new(),
        }
    }
}

impl<T> TimerQueue<T> {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn schedule(&mut self, delay: Duration, task: T) -> TimerHandle {
        let handle = TimerHandle(self.next_id);
        self.next_id += 1;
        self.pending.push(Pending {
            handle,
            due: self.now + delay,
            task,
        });
        log::trace!("[timer] scheduled #{} in {:?}", handle.0, delay);
        handle
    }

    /// Drop a pending task. Returns false if it already fired or was cancelled.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        self.take(handle).is_some()
    }

    #[inline]
    pub fn is_pending(&self, handle: TimerHandle) -> bool {
        self.pending.iter().any(|p| p.handle == handle)
    }

    /// Fire a task now regardless of the virtual clock.
    ///
    /// Returns the task at most once per handle.
    pub fn fire(&mut self, handle: TimerHandle) -> Option<T> {
        let task = self.take(handle);
        if task.is_some() {
            log::trace!("[timer] fired #{}", handle.0);
        }
        task
    }

    /// Move the clock forward by `dt` and return every task that came due,
    /// earliest deadline first (ties in scheduling order).
    pub fn advance(&mut self, dt: Duration) -> Vec<T> {
        self.now += dt;
        let now = self.now;
        let mut due = Vec::new();
        let mut i = 0;
        while i < self.pending.len() {
            if self.pending[i].due <= now {
                due.push(self.pending.remove(i));
            } else {
                i += 1;
            }
        }
        due.sort_by_key(|p| (p.due, p.handle));
        due.into_iter().map(|p| p.task).collect()
    }

    fn take(&mut self, handle: TimerHandle) -> Option<T> {
        let idx = self.pending.iter().position(|p| p.handle == handle)?;
        Some(self.pending.remove(idx).task)
    }
}
