//! Single-slot, cancellable delayed action.
//!
//! [`TransitionTimer`] holds at most one pending action. Arming it again
//! drops the previous entry, and dropping a scheduler handle cancels the
//! underlying callback, so a superseded action can never run. Every arm gets
//! a fresh [`Ticket`]; a callback that arrives with a stale ticket is ignored.

use std::time::Duration;

use crate::error::ScheduleError;

/// Identifies one arming of a [`TransitionTimer`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Ticket(u64);

/// A primitive that can call back once after a delay.
///
/// The implementation must invoke the owner with `ticket` when `delay`
/// elapses, unless the returned handle has been dropped first.
pub trait Scheduler {
    /// Owned handle for the scheduled callback. Dropping it cancels.
    type Handle;

    fn schedule(&mut self, ticket: Ticket, delay: Duration) -> Result<Self::Handle, ScheduleError>;
}

struct Pending<A, H> {
    ticket: Ticket,
    action: A,
    // Held for its Drop impl.
    _handle: H,
}

/// Delayed action slot with last-write-wins semantics.
pub struct TransitionTimer<A, H> {
    pending: Option<Pending<A, H>>,
    last_ticket: u64,
}

impl<A, H> TransitionTimer<A, H> {
    pub fn new() -> Self {
        Self {
            pending: None,
            last_ticket: 0,
        }
    }

    /// True while an armed action has neither fired nor been cancelled.
    pub fn is_transitioning(&self) -> bool {
        self.pending.is_some()
    }

    /// Ticket of the pending action, if any.
    pub fn pending_ticket(&self) -> Option<Ticket> {
        self.pending.as_ref().map(|p| p.ticket)
    }

    /// Cancels any pending action and schedules `action` after `delay`.
    ///
    /// On failure the slot is left empty and the error is returned; the
    /// previously pending action stays cancelled.
    pub fn arm<S>(
        &mut self,
        action: A,
        delay: Duration,
        scheduler: &mut S,
    ) -> Result<Ticket, ScheduleError>
    where
        S: Scheduler<Handle = H>,
    {
        self.cancel_all();

        self.last_ticket += 1;
        let ticket = Ticket(self.last_ticket);
        let handle = scheduler.schedule(ticket, delay)?;

        self.pending = Some(Pending {
            ticket,
            action,
            _handle: handle,
        });
        Ok(ticket)
    }

    /// Takes the pending action if `ticket` is still current.
    pub fn fire(&mut self, ticket: Ticket) -> Option<A> {
        match self.pending.take() {
            Some(pending) if pending.ticket == ticket => Some(pending.action),
            other => {
                self.pending = other;
                None
            }
        }
    }

    /// Drops the pending action without running it. Returns `true` if one
    /// was pending.
    pub fn cancel_all(&mut self) -> bool {
        self.pending.take().is_some()
    }
}

impl<A, H> Default for TransitionTimer<A, H> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::ManualScheduler;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_arm_sets_transitioning() {
        let mut sched = ManualScheduler::new();
        let mut timer = TransitionTimer::new();
        assert!(!timer.is_transitioning());

        let ticket = timer.arm("a", ms(600), &mut sched).unwrap();
        assert!(timer.is_transitioning());
        assert_eq!(timer.pending_ticket(), Some(ticket));
        assert_eq!(sched.pending_count(), 1);
    }

    #[test]
    fn test_fire_runs_once() {
        let mut sched = ManualScheduler::new();
        let mut timer = TransitionTimer::new();
        let ticket = timer.arm("a", ms(600), &mut sched).unwrap();

        assert!(sched.advance(ms(599)).is_empty());
        assert_eq!(sched.advance(ms(1)), vec![ticket]);
        assert_eq!(timer.fire(ticket), Some("a"));
        assert!(!timer.is_transitioning());
        assert_eq!(timer.fire(ticket), None);
    }

    #[test]
    fn test_rearm_cancels_previous() {
        let mut sched = ManualScheduler::new();
        let mut timer = TransitionTimer::new();
        let first = timer.arm("a", ms(600), &mut sched).unwrap();
        sched.advance(ms(100));
        let second = timer.arm("b", ms(600), &mut sched).unwrap();

        assert_ne!(first, second);
        assert_eq!(sched.pending_count(), 1);
        assert!(sched.advance(ms(599)).is_empty());
        assert_eq!(sched.advance(ms(1)), vec![second]);
        assert_eq!(sched.now(), ms(700));
        assert_eq!(timer.fire(second), Some("b"));
    }

    #[test]
    fn test_stale_ticket_ignored() {
        let mut sched = ManualScheduler::new();
        let mut timer = TransitionTimer::new();
        let first = timer.arm("a", ms(600), &mut sched).unwrap();
        let second = timer.arm("b", ms(600), &mut sched).unwrap();

        assert_eq!(timer.fire(first), None);
        assert_eq!(timer.pending_ticket(), Some(second));
    }

    #[test]
    fn test_cancel_all() {
        let mut sched = ManualScheduler::new();
        let mut timer = TransitionTimer::new();
        timer.arm("a", ms(600), &mut sched).unwrap();

        assert!(timer.cancel_all());
        assert!(!timer.cancel_all());
        assert_eq!(sched.pending_count(), 0);
        assert!(sched.advance(ms(1000)).is_empty());
    }

    #[test]
    fn test_schedule_failure_leaves_idle() {
        let mut sched = ManualScheduler::new();
        let mut timer = TransitionTimer::new();
        timer.arm("a", ms(600), &mut sched).unwrap();

        sched.fail_next(ScheduleError::NoWindow);
        let err = timer.arm("b", ms(600), &mut sched).unwrap_err();
        assert_eq!(err, ScheduleError::NoWindow);
        assert!(!timer.is_transitioning());
        assert!(sched.advance(ms(1000)).is_empty());
    }
}
