//! Deterministic collaborators for tests.
//!
//! [`ManualScheduler`] is a virtual clock: nothing fires until
//! [`ManualScheduler::advance`] moves time forward. [`RecordingNavigator`]
//! records every path it is asked to visit.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use crate::error::ScheduleError;
use crate::shell::Navigator;
use crate::timer::{Scheduler, Ticket};

struct Entry {
    due: Duration,
    ticket: Ticket,
    live: Rc<Cell<bool>>,
}

#[derive(Default)]
struct Clock {
    now: Duration,
    queue: Vec<Entry>,
    fail_next: Option<ScheduleError>,
    last_delay: Option<Duration>,
}

/// Virtual-time scheduler. Clones share the same clock.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    clock: Rc<RefCell<Clock>>,
}

/// Handle returned by [`ManualScheduler`]; dropping it cancels the entry.
pub struct ManualHandle {
    live: Rc<Cell<bool>>,
}

impl Drop for ManualHandle {
    fn drop(&mut self) {
        self.live.set(false);
    }
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> Duration {
        self.clock.borrow().now
    }

    /// Number of scheduled callbacks that have not fired or been cancelled.
    pub fn pending_count(&self) -> usize {
        self.clock
            .borrow()
            .queue
            .iter()
            .filter(|e| e.live.get())
            .count()
    }

    /// Delay passed to the most recent successful `schedule` call.
    pub fn last_delay(&self) -> Option<Duration> {
        self.clock.borrow().last_delay
    }

    /// Makes the next `schedule` call fail with `err`.
    pub fn fail_next(&self, err: ScheduleError) {
        self.clock.borrow_mut().fail_next = Some(err);
    }

    /// Moves the clock forward and returns the tickets that came due, in
    /// firing order.
    pub fn advance(&self, by: Duration) -> Vec<Ticket> {
        let mut clock = self.clock.borrow_mut();
        clock.now += by;
        let now = clock.now;

        let mut due: Vec<Entry> = Vec::new();
        clock.queue.retain_mut(|entry| {
            if !entry.live.get() {
                return false;
            }
            if entry.due <= now {
                due.push(Entry {
                    due: entry.due,
                    ticket: entry.ticket,
                    live: Rc::clone(&entry.live),
                });
                return false;
            }
            true
        });

        due.sort_by_key(|e| (e.due, e.ticket));
        due.into_iter().map(|e| e.ticket).collect()
    }
}

impl Scheduler for ManualScheduler {
    type Handle = ManualHandle;

    fn schedule(&mut self, ticket: Ticket, delay: Duration) -> Result<ManualHandle, ScheduleError> {
        let mut clock = self.clock.borrow_mut();
        if let Some(err) = clock.fail_next.take() {
            return Err(err);
        }

        let live = Rc::new(Cell::new(true));
        let due = clock.now + delay;
        clock.queue.push(Entry {
            due,
            ticket,
            live: Rc::clone(&live),
        });
        clock.last_delay = Some(delay);
        Ok(ManualHandle { live })
    }
}

/// Navigator that records visited paths.
#[derive(Default)]
pub struct RecordingNavigator {
    visits: RefCell<Vec<String>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visits(&self) -> Vec<String> {
        self.visits.borrow().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, path: &str) {
        self.visits.borrow_mut().push(path.to_string());
    }
}
