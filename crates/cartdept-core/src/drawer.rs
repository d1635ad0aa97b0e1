//! Expanded vertical menu of the compact header.

use crate::nav::NavMode;

/// Open/closed state of the navigation drawer.
///
/// The drawer only exists visually in [`NavMode::Mounted`]; in the hero
/// layout its toggle button is not interactive and toggling is refused.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DrawerState {
    open: bool,
}

impl DrawerState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Whether the drawer is rendered expanded in `mode`.
    pub fn is_visible(&self, mode: NavMode) -> bool {
        self.open && mode.is_mounted()
    }

    /// Flips the drawer. Returns `false` (and does nothing) in the hero layout.
    pub fn toggle(&mut self, mode: NavMode) -> bool {
        if !mode.is_mounted() {
            return false;
        }
        self.open = !self.open;
        true
    }

    /// Closes the drawer. Returns `true` if it was open.
    pub fn force_close(&mut self) -> bool {
        std::mem::replace(&mut self.open, false)
    }
}
