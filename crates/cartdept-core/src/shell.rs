//! Shell orchestrator.
//!
//! [`NavShell`] is the single owner of the header latch, drawer, newsletter
//! panel and transition timer. Every UI event enters through one of its
//! handlers; presentation reads [`ShellView`] and nothing else.
//!
//! # Link selection
//!
//! Navigation never happens inside the click handler. Selecting a link
//! closes both panels right away and arms the transition timer; the route
//! changes only when the timer reports back through
//! [`NavShell::on_transition_elapsed`]. From the hero layout the delay also
//! covers the header's mount animation.

use std::time::Duration;

use crate::config::TransitionTimings;
use crate::drawer::DrawerState;
use crate::error::ShellError;
use crate::nav::{NavLatch, NavMode};
use crate::newsletter::NewsletterState;
use crate::route::Route;
use crate::timer::{Scheduler, Ticket, TransitionTimer};

/// Route collaborator. Fire-and-forget.
pub trait Navigator {
    fn navigate(&self, path: &str);
}

/// Work deferred until a transition completes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavAction {
    Navigate(Route),
}

/// Result of [`NavShell::select_link`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Selection {
    /// The link points at the current route.
    Ignored,
    /// Navigation is armed and will run after `delay`.
    Scheduled { ticket: Ticket, delay: Duration },
}

/// Modifier state of a link activation.
///
/// Only a plain primary-button click is handled by the shell; anything else
/// (new tab, download, context menu) is left to the browser.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LinkClick {
    pub button: i16,
    pub meta: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
}

impl LinkClick {
    pub fn should_intercept(&self) -> bool {
        self.button == 0 && !(self.meta || self.ctrl || self.alt || self.shift)
    }
}

/// Render flags derived from shell state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ShellView {
    pub mode: NavMode,
    pub is_home: bool,
    pub drawer_visible: bool,
    pub newsletter_open: bool,
    /// Main content renders faded out while a transition is pending.
    pub content_hidden: bool,
}

/// Navigation shell state machine.
///
/// `H` is the handle type of the [`Scheduler`] driving the transition timer.
pub struct NavShell<H> {
    timings: TransitionTimings,
    route: Option<Route>,
    latch: NavLatch,
    drawer: DrawerState,
    newsletter: NewsletterState,
    timer: TransitionTimer<NavAction, H>,
    torn_down: bool,
}

impl<H> NavShell<H> {
    /// Creates the shell for a page loaded at `current_route`.
    pub fn mount(current_route: Option<&str>) -> Self {
        Self::with_timings(current_route, TransitionTimings::default())
    }

    pub fn with_timings(current_route: Option<&str>, timings: TransitionTimings) -> Self {
        let route = current_route.map(Route::parse);
        Self {
            timings,
            latch: NavLatch::for_route(route.as_ref().map(Route::as_str)),
            route,
            drawer: DrawerState::default(),
            newsletter: NewsletterState::default(),
            timer: TransitionTimer::new(),
            torn_down: false,
        }
    }

    // ------------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------------

    pub fn current_route(&self) -> Option<&Route> {
        self.route.as_ref()
    }

    pub fn stored_mode(&self) -> NavMode {
        self.latch.stored()
    }

    pub fn effective_mode(&self) -> NavMode {
        self.latch.effective(self.route.as_ref().map(Route::as_str))
    }

    pub fn is_transitioning(&self) -> bool {
        self.timer.is_transitioning()
    }

    pub fn drawer_open(&self) -> bool {
        self.drawer.is_open()
    }

    pub fn drawer_visible(&self) -> bool {
        self.drawer.is_visible(self.effective_mode())
    }

    pub fn newsletter_open(&self) -> bool {
        self.newsletter.is_open()
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    pub fn view(&self) -> ShellView {
        ShellView {
            mode: self.effective_mode(),
            is_home: self.route.as_ref().is_none_or(Route::is_root),
            drawer_visible: self.drawer_visible(),
            newsletter_open: self.newsletter.is_open(),
            content_hidden: self.timer.is_transitioning(),
        }
    }

    // ------------------------------------------------------------------------
    // Handlers
    // ------------------------------------------------------------------------

    /// Handles activation of a primary nav link.
    ///
    /// The drawer always closes. Same-route clicks are otherwise ignored;
    /// any other target closes the newsletter and defers navigation to
    /// `href` through the timer, replacing any navigation still pending.
    /// The hero header only latches compact once the timer is armed.
    pub fn select_link<S>(&mut self, href: &str, scheduler: &mut S) -> Result<Selection, ShellError>
    where
        S: Scheduler<Handle = H>,
    {
        if self.torn_down {
            return Err(ShellError::TornDown);
        }

        // The drawer closes on every selection, including the current page.
        self.drawer.force_close();

        let target = Route::parse(href);
        if self.route.as_ref() == Some(&target) {
            return Ok(Selection::Ignored);
        }

        self.newsletter.force_close();

        let hero = self.effective_mode() == NavMode::Initial;
        let delay = if hero {
            self.timings.hero_delay()
        } else {
            self.timings.mounted_delay()
        };

        let ticket = self
            .timer
            .arm(NavAction::Navigate(target), delay, scheduler)?;
        if hero {
            self.latch.ensure_mounted();
        }
        Ok(Selection::Scheduled { ticket, delay })
    }

    /// Timer callback. Runs the deferred navigation if `ticket` is current.
    /// Returns `true` if a navigation was performed.
    pub fn on_transition_elapsed<N>(&mut self, ticket: Ticket, navigator: &N) -> bool
    where
        N: Navigator + ?Sized,
    {
        if self.torn_down {
            return false;
        }

        match self.timer.fire(ticket) {
            Some(NavAction::Navigate(route)) => {
                navigator.navigate(route.as_str());
                true
            }
            None => false,
        }
    }

    /// Drawer toggle button. Refused while the hero layout is showing.
    pub fn toggle_drawer(&mut self) -> bool {
        if self.torn_down {
            return false;
        }
        self.drawer.toggle(self.effective_mode())
    }

    /// Keyboard input. Escape closes a visible drawer; returns `true` if
    /// the key was consumed.
    pub fn handle_key(&mut self, key: &str) -> bool {
        if self.torn_down || key != "Escape" || !self.drawer_visible() {
            return false;
        }
        self.drawer.force_close()
    }

    /// "Stay Up To Date" button. Latches the compact header and flips the
    /// panel; opening it also closes the drawer. Returns the new open state.
    pub fn toggle_newsletter(&mut self) -> bool {
        if self.torn_down {
            return false;
        }
        let open = self.newsletter.toggle(&mut self.latch);
        if open {
            self.drawer.force_close();
        }
        open
    }

    /// Completion signal from the email form.
    pub fn newsletter_completed(&mut self) {
        if self.torn_down {
            return;
        }
        self.newsletter.force_close();
    }

    /// Records the route the browser is now showing.
    pub fn route_changed(&mut self, path: &str) {
        if self.torn_down {
            return;
        }
        let route = Route::parse(path);
        if route.is_root() {
            self.drawer.force_close();
        }
        self.route = Some(route);
    }

    /// Releases the pending timer and resets state. Later events are ignored.
    pub fn teardown(&mut self) {
        self.timer.cancel_all();
        self.latch = NavLatch::default();
        self.drawer = DrawerState::default();
        self.newsletter = NewsletterState::default();
        self.torn_down = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{ManualHandle, ManualScheduler, RecordingNavigator};

    type Shell = NavShell<ManualHandle>;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_mount_at_root_is_hero() {
        let shell = Shell::mount(Some("/"));
        assert_eq!(shell.stored_mode(), NavMode::Initial);
        assert_eq!(shell.effective_mode(), NavMode::Initial);
        assert!(shell.view().is_home);
    }

    #[test]
    fn test_mount_deep_link_is_compact() {
        let shell = Shell::mount(Some("/events"));
        assert_eq!(shell.stored_mode(), NavMode::Mounted);
        assert!(!shell.view().is_home);
    }

    #[test]
    fn test_same_route_is_noop() {
        let mut sched = ManualScheduler::new();
        let mut shell = Shell::mount(Some("/shop"));
        shell.toggle_drawer();

        let result = shell.select_link("/shop", &mut sched).unwrap();
        assert_eq!(result, Selection::Ignored);
        assert!(!shell.is_transitioning());
        assert!(!shell.drawer_open());
        assert_eq!(sched.pending_count(), 0);
    }

    #[test]
    fn test_select_closes_panels() {
        let mut sched = ManualScheduler::new();
        let mut shell = Shell::mount(Some("/shop"));
        shell.toggle_drawer();
        shell.toggle_newsletter();
        shell.toggle_drawer();
        assert!(shell.drawer_open());
        assert!(shell.newsletter_open());

        shell.select_link("/events", &mut sched).unwrap();
        assert!(!shell.drawer_open());
        assert!(!shell.newsletter_open());
    }

    #[test]
    fn test_hero_delay() {
        let mut sched = ManualScheduler::new();
        let mut shell = Shell::mount(Some("/"));
        let result = shell.select_link("/shop", &mut sched).unwrap();

        assert!(matches!(result, Selection::Scheduled { delay, .. } if delay == ms(840)));
        assert_eq!(shell.stored_mode(), NavMode::Mounted);
        assert!(shell.view().content_hidden);
    }

    #[test]
    fn test_mounted_delay() {
        let mut sched = ManualScheduler::new();
        let mut shell = Shell::mount(Some("/shop"));
        let result = shell.select_link("/events", &mut sched).unwrap();

        assert!(matches!(result, Selection::Scheduled { delay, .. } if delay == ms(600)));
    }

    #[test]
    fn test_elapsed_navigates() {
        let mut sched = ManualScheduler::new();
        let nav = RecordingNavigator::new();
        let mut shell = Shell::mount(Some("/shop"));
        shell.select_link("/events", &mut sched).unwrap();

        for ticket in sched.advance(ms(600)) {
            assert!(shell.on_transition_elapsed(ticket, &nav));
        }
        assert_eq!(nav.visits(), vec!["/events"]);
        assert!(!shell.is_transitioning());
    }

    #[test]
    fn test_schedule_failure() {
        let mut sched = ManualScheduler::new();
        let mut shell = Shell::mount(Some("/shop"));
        shell.toggle_drawer();
        sched.fail_next(crate::ScheduleError::Rejected("quota".into()));

        let err = shell.select_link("/events", &mut sched).unwrap_err();
        assert!(matches!(err, ShellError::Schedule(_)));
        assert!(!shell.is_transitioning());
        assert!(!shell.drawer_open());
    }

    #[test]
    fn test_schedule_failure_keeps_hero() {
        let mut sched = ManualScheduler::new();
        let mut shell = Shell::mount(Some("/"));
        sched.fail_next(crate::ScheduleError::NoWindow);

        let err = shell.select_link("/shop", &mut sched).unwrap_err();
        assert_eq!(err, ShellError::Schedule(crate::ScheduleError::NoWindow));
        assert_eq!(shell.stored_mode(), NavMode::Initial);
        assert_eq!(shell.effective_mode(), NavMode::Initial);

        // Retrying still plays the full hero transition
        let retry = shell.select_link("/shop", &mut sched).unwrap();
        assert!(matches!(retry, Selection::Scheduled { delay, .. } if delay == ms(840)));
        assert_eq!(shell.effective_mode(), NavMode::Mounted);
    }

    #[test]
    fn test_custom_timings() {
        let mut sched = ManualScheduler::new();
        let timings = TransitionTimings {
            animation: ms(10),
            mount_buffer: ms(5),
            content_fade: ms(0),
        };
        let mut shell = Shell::with_timings(Some("/"), timings);

        shell.select_link("/shop", &mut sched).unwrap();
        assert_eq!(sched.last_delay(), Some(ms(15)));
        shell.select_link("/events", &mut sched).unwrap();
        assert_eq!(sched.last_delay(), Some(ms(10)));
    }

    #[test]
    fn test_same_route_keeps_newsletter() {
        let mut sched = ManualScheduler::new();
        let mut shell = Shell::mount(Some("/shop"));
        shell.toggle_newsletter();

        assert_eq!(shell.select_link("/shop", &mut sched).unwrap(), Selection::Ignored);
        assert!(shell.newsletter_open());
    }

    #[test]
    fn test_drawer_refused_in_hero() {
        let mut shell = Shell::mount(Some("/"));
        assert!(!shell.toggle_drawer());
        assert!(!shell.drawer_open());
    }

    #[test]
    fn test_escape_closes_drawer() {
        let mut shell = Shell::mount(Some("/shop"));
        assert!(!shell.handle_key("Escape"));
        shell.toggle_drawer();
        assert!(!shell.handle_key("Enter"));
        assert!(shell.drawer_open());
        assert!(shell.handle_key("Escape"));
        assert!(!shell.drawer_open());
    }

    #[test]
    fn test_newsletter_latches_from_hero() {
        let mut shell = Shell::mount(Some("/"));
        assert!(shell.toggle_newsletter());
        assert_eq!(shell.effective_mode(), NavMode::Mounted);
        assert!(!shell.toggle_newsletter());
        assert_eq!(shell.effective_mode(), NavMode::Mounted);
    }

    #[test]
    fn test_newsletter_closes_drawer() {
        let mut shell = Shell::mount(Some("/shop"));
        shell.toggle_drawer();
        shell.toggle_newsletter();
        assert!(!shell.drawer_open());
    }

    #[test]
    fn test_newsletter_completed() {
        let mut shell = Shell::mount(Some("/"));
        shell.toggle_newsletter();
        shell.newsletter_completed();
        assert!(!shell.newsletter_open());
    }

    #[test]
    fn test_route_to_root_closes_drawer() {
        let mut shell = Shell::mount(Some("/shop"));
        shell.toggle_drawer();
        shell.route_changed("/events");
        assert!(shell.drawer_open());

        shell.route_changed("/");
        assert!(!shell.drawer_open());
        assert_eq!(shell.effective_mode(), NavMode::Mounted);
    }

    #[test]
    fn test_teardown_ignores_events() {
        let mut sched = ManualScheduler::new();
        let mut shell = Shell::mount(Some("/shop"));
        shell.teardown();

        assert_eq!(
            shell.select_link("/events", &mut sched).unwrap_err(),
            ShellError::TornDown
        );
        assert!(!shell.toggle_drawer());
        assert!(!shell.toggle_newsletter());
        assert!(shell.is_torn_down());
    }

    #[test]
    fn test_link_click_filter() {
        assert!(LinkClick::default().should_intercept());
        assert!(!LinkClick { meta: true, ..Default::default() }.should_intercept());
        assert!(!LinkClick { ctrl: true, ..Default::default() }.should_intercept());
        assert!(!LinkClick { alt: true, ..Default::default() }.should_intercept());
        assert!(!LinkClick { shift: true, ..Default::default() }.should_intercept());
        assert!(!LinkClick { button: 1, ..Default::default() }.should_intercept());
    }
}
