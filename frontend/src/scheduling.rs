use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;

/// A callback that has been handed to a [`Scheduler`].
pub trait ScheduledTask {
    /// False once the callback has run or been cancelled.
    fn is_pending(&self) -> bool;
    /// Drop the callback without running it.
    fn cancel(self);
}

pub trait Scheduler {
    type Task: ScheduledTask;

    fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Self::Task;
}

/// Browser timers through `setTimeout`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimeoutScheduler;

/// Owns the `setTimeout` closure until it fires or is cancelled.
pub struct TimeoutTask {
    fired: Rc<Cell<bool>>,
    timeout: Timeout,
}

impl Scheduler for TimeoutScheduler {
    type Task = TimeoutTask;

    fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> TimeoutTask {
        let fired = Rc::new(Cell::new(false));
        let flag = fired.clone();
        let timeout = Timeout::new(delay_ms, move || {
            flag.set(true);
            callback();
        });
        TimeoutTask { fired, timeout }
    }
}

impl ScheduledTask for TimeoutTask {
    fn is_pending(&self) -> bool {
        !self.fired.get()
    }

    fn cancel(self) {
        // dropping a Timeout clears it
        drop(self.timeout);
    }
}

#[cfg(test)]
pub mod testing {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use super::{ScheduledTask, Scheduler};

    struct Entry {
        due: u64,
        done: Rc<Cell<bool>>,
        callback: Box<dyn FnOnce()>,
    }

    /// Virtual clock for tests. Nothing runs until [`ManualScheduler::advance`]
    /// moves time past a task's due point.
    #[derive(Clone, Default)]
    pub struct ManualScheduler {
        now: Rc<Cell<u64>>,
        queue: Rc<RefCell<Vec<Entry>>>,
    }

    /// `done` is set when the task runs or is cancelled.
    pub struct ManualTask {
        done: Rc<Cell<bool>>,
    }

    impl ScheduledTask for ManualTask {
        fn is_pending(&self) -> bool {
            !self.done.get()
        }

        fn cancel(self) {
            self.done.set(true);
        }
    }

    impl Scheduler for ManualScheduler {
        type Task = ManualTask;

        fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> ManualTask {
            let done = Rc::new(Cell::new(false));
            self.queue.borrow_mut().push(Entry {
                due: self.now.get() + u64::from(delay_ms),
                done: done.clone(),
                callback,
            });
            ManualTask { done }
        }
    }

    impl ManualScheduler {
        pub fn pending(&self) -> usize {
            self.queue.borrow().iter().filter(|e| !e.done.get()).count()
        }

        /// Runs every live task due at or before the new time, earliest first.
        pub fn advance(&self, ms: u64) {
            let now = self.now.get() + ms;
            self.now.set(now);

            let mut due: Vec<Entry> = {
                let mut queue = self.queue.borrow_mut();
                let (ready, waiting): (Vec<_>, Vec<_>) = queue.drain(..).partition(|e| e.due <= now);
                *queue = waiting;
                ready
            };
            due.sort_by_key(|e| e.due);

            for entry in due {
                if !entry.done.get() {
                    entry.done.set(true);
                    (entry.callback)();
                }
            }
        }
    }
}
