//! Cooperative, single-threaded frame scheduling.
//!
//! A [`Scheduler`] calls a tick once per frame until the tick returns
//! [`Flow::Break`] or its [`CancelHandle`] is cancelled. Cancellation is
//! checked right before each tick runs, so a frame that was already queued
//! when `cancel()` happened is dropped.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Break,
}

pub type Tick = Box<dyn FnMut(f64) -> Flow>;

pub trait Scheduler {
    fn run(&self, tick: Tick) -> CancelHandle;
}

#[derive(Default)]
struct CancelInner {
    cancelled: Cell<bool>,
    on_cancel: RefCell<Option<Box<dyn FnOnce()>>>,
}

#[derive(Clone, Default)]
pub struct CancelHandle {
    inner: Rc<CancelInner>,
}

impl CancelHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_cancelled(&self) -> bool {
        self.inner.cancelled.get()
    }

    /// Mark the task cancelled; the hook (if any) runs on the first call only.
    pub fn cancel(&self) {
        if self.inner.cancelled.replace(true) {
            return;
        }
        if let Some(hook) = self.inner.on_cancel.borrow_mut().take() {
            hook();
        }
    }

    /// Replace the hook run on cancellation, e.g. to drop a pending frame request.
    pub fn set_on_cancel(&self, hook: impl FnOnce() + 'static) {
        *self.inner.on_cancel.borrow_mut() = Some(Box::new(hook));
    }
}

impl fmt::Debug for CancelHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CancelHandle")
            .field("cancelled", &self.is_cancelled())
            .finish()
    }
}

/// Scheduler driven by explicit `advance` calls.
#[derive(Default)]
pub struct ManualScheduler {
    now_ms: Cell<f64>,
    tasks: RefCell<Vec<(CancelHandle, Tick)>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now_ms(&self) -> f64 {
        self.now_ms.get()
    }

    pub fn pending(&self) -> usize {
        self.tasks.borrow().len()
    }

    /// Run one frame `dt_ms` after the previous one. Returns the number of
    /// ticks that actually ran.
    pub fn advance(&self, dt_ms: f64) -> usize {
        let now = self.now_ms.get() + dt_ms;
        self.now_ms.set(now);
        // Ticks may schedule new tasks, so run on a detached list.
        let mut tasks = std::mem::take(&mut *self.tasks.borrow_mut());
        let mut ran = 0;
        tasks.retain_mut(|(handle, tick)| {
            if handle.is_cancelled() {
                return false;
            }
            ran += 1;
            tick(now) == Flow::Continue && !handle.is_cancelled()
        });
        let mut queued = self.tasks.borrow_mut();
        tasks.append(&mut queued);
        *queued = tasks;
        ran
    }
}

impl Scheduler for ManualScheduler {
    fn run(&self, tick: Tick) -> CancelHandle {
        let handle = CancelHandle::new();
        self.tasks.borrow_mut().push((handle.clone(), tick));
        handle
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cancel_hook_runs_once() {
        let count = Rc::new(Cell::new(0));
        let handle = CancelHandle::new();
        let c = count.clone();
        handle.set_on_cancel(move || c.set(c.get() + 1));
        handle.cancel();
        handle.cancel();
        assert!(handle.is_cancelled());
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn manual_scheduler_stops_on_break() {
        let sched = ManualScheduler::new();
        let runs = Rc::new(Cell::new(0));
        let r = runs.clone();
        sched.run(Box::new(move |_| {
            r.set(r.get() + 1);
            if r.get() == 3 {
                Flow::Break
            } else {
                Flow::Continue
            }
        }));
        for _ in 0..10 {
            sched.advance(16.0);
        }
        assert_eq!(runs.get(), 3);
        assert_eq!(sched.pending(), 0);
        assert_eq!(sched.now_ms(), 160.0);
    }
}
