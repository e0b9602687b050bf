use crate::nav::{Screen, ViewSelector};

/// Visibility state of the mentor overlay. Independent of the current
/// screen: the overlay can sit above any of them.
#[derive(Debug, Clone)]
pub struct OverlayState {
    visible: bool,
}

impl OverlayState {
    pub fn new() -> Self {
        Self { visible: false }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn open(&mut self) {
        self.visible = true;
    }

    /// Idempotent; used by the explicit close control, the Escape key, and
    /// the continue action alike.
    pub fn close(&mut self) {
        self.visible = false;
    }

    /// One user action with two outcomes: dismiss the overlay and move the
    /// view selector onto the dashboard.
    pub fn confirm_and_continue(&mut self, selector: &mut ViewSelector) {
        self.visible = false;
        selector.transition_to(Screen::Dashboard);
    }
}

impl Default for OverlayState {
    fn default() -> Self {
        Self::new()
    }
}
