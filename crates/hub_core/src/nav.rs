use serde::Serialize;

/// Top-level views the application can display. Exactly one is current at
/// any time; there is no "none" state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Screen {
    Landing,
    Dashboard,
    Mockup,
}

impl Screen {
    /// Fixed logical parent used by back controls. Deliberately not a
    /// history stack: back from `Mockup` always lands on `Dashboard`.
    pub fn parent(self) -> Option<Screen> {
        match self {
            Screen::Landing => None,
            Screen::Dashboard => Some(Screen::Landing),
            Screen::Mockup => Some(Screen::Dashboard),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Screen::Landing => "landing",
            Screen::Dashboard => "dashboard",
            Screen::Mockup => "mockup",
        }
    }
}

/// Holds the single currently active screen. Any transition is valid and
/// takes effect immediately; rapid repeated calls are last-write-wins,
/// consistent with single-threaded UI event dispatch.
#[derive(Debug, Clone)]
pub struct ViewSelector {
    current: Screen,
}

impl ViewSelector {
    pub fn new() -> Self {
        Self {
            current: Screen::Landing,
        }
    }

    pub fn current(&self) -> Screen {
        self.current
    }

    pub fn transition_to(&mut self, target: Screen) {
        if target != self.current {
            tracing::debug!(from = self.current.name(), to = target.name(), "screen transition");
        }
        self.current = target;
    }
}

impl Default for ViewSelector {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::{Screen, ViewSelector};

    #[test]
    fn starts_on_landing() {
        assert_eq!(ViewSelector::new().current(), Screen::Landing);
    }

    #[test]
    fn last_transition_wins_over_any_sequence() {
        let mut selector = ViewSelector::new();
        for target in [
            Screen::Dashboard,
            Screen::Mockup,
            Screen::Landing,
            Screen::Mockup,
            Screen::Dashboard,
        ] {
            selector.transition_to(target);
        }
        assert_eq!(selector.current(), Screen::Dashboard);
    }

    #[test]
    fn transition_to_current_screen_is_a_valid_noop() {
        let mut selector = ViewSelector::new();
        selector.transition_to(Screen::Landing);
        assert_eq!(selector.current(), Screen::Landing);
    }

    #[test]
    fn back_targets_are_fixed_parents() {
        assert_eq!(Screen::Mockup.parent(), Some(Screen::Dashboard));
        assert_eq!(Screen::Dashboard.parent(), Some(Screen::Landing));
        assert_eq!(Screen::Landing.parent(), None);
    }
}
