//! Slide-up newsletter panel.

use crate::nav::NavLatch;

/// Open/closed state of the newsletter panel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NewsletterState {
    open: bool,
}

impl NewsletterState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Latches the header into the compact layout, then flips the panel.
    /// Returns the new open state.
    ///
    /// The latch is not released when the panel closes again.
    pub fn toggle(&mut self, latch: &mut NavLatch) -> bool {
        latch.ensure_mounted();
        self.open = !self.open;
        self.open
    }

    /// Closes the panel. Returns `true` if it was open.
    pub fn force_close(&mut self) -> bool {
        std::mem::replace(&mut self.open, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::NavMode;

    #[test]
    fn test_toggle_latches_mount() {
        let mut latch = NavLatch::default();
        let mut panel = NewsletterState::default();

        assert!(panel.toggle(&mut latch));
        assert_eq!(latch.stored(), NavMode::Mounted);

        assert!(!panel.toggle(&mut latch));
        assert_eq!(latch.stored(), NavMode::Mounted);
    }

    #[test]
    fn test_force_close() {
        let mut latch = NavLatch::default();
        let mut panel = NewsletterState::default();
        panel.toggle(&mut latch);

        assert!(panel.force_close());
        assert!(!panel.force_close());
        assert!(!panel.is_open());
    }
}
