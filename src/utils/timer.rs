//! `setTimeout`-backed [`Scheduler`] for the transition timer.
//!
//! Each scheduled callback owns its JS closure. Dropping the returned
//! [`BrowserTimeout`] clears the timeout, which is how the shell cancels a
//! superseded or unmounted transition.

use std::time::Duration;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::Closure;
use web_sys::Window;

use cartdept_core::{ScheduleError, Scheduler, Ticket};

/// Browser scheduler that reports elapsed tickets to `on_fire`.
pub struct BrowserScheduler<F> {
    on_fire: F,
}

impl<F> BrowserScheduler<F>
where
    F: Fn(Ticket) + Clone + 'static,
{
    pub fn new(on_fire: F) -> Self {
        Self { on_fire }
    }
}

/// A live `setTimeout` registration.
pub struct BrowserTimeout {
    window: Window,
    id: i32,
    _closure: Closure<dyn FnMut()>,
}

impl Drop for BrowserTimeout {
    fn drop(&mut self) {
        self.window.clear_timeout_with_handle(self.id);
    }
}

impl<F> Scheduler for BrowserScheduler<F>
where
    F: Fn(Ticket) + Clone + 'static,
{
    type Handle = BrowserTimeout;

    fn schedule(&mut self, ticket: Ticket, delay: Duration) -> Result<BrowserTimeout, ScheduleError> {
        let window = web_sys::window().ok_or(ScheduleError::NoWindow)?;
        let millis = i32::try_from(delay.as_millis())
            .map_err(|_| ScheduleError::Rejected(format!("delay too long: {:?}", delay)))?;

        let on_fire = self.on_fire.clone();
        let closure = Closure::<dyn FnMut()>::new(move || on_fire(ticket));

        let id = window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                millis,
            )
            .map_err(|e| ScheduleError::Rejected(format!("{:?}", e)))?;

        Ok(BrowserTimeout {
            window,
            id,
            _closure: closure,
        })
    }
}
