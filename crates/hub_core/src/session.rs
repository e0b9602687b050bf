//! Root controller state machine: the two mutable state cells (current
//! screen, overlay visibility) and the intent/effect reducer around them.

use crate::cards::{self, CardActivation, CardId};
use crate::nav::{Screen, ViewSelector};
use crate::overlay::OverlayState;

/// User interactions reported by screen renderers. Renderers hold no
/// navigational authority; they only produce intents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HubIntent {
    /// Landing entry action ("What is this?").
    EnterHub,
    /// Overlay dismissed via the close control or the Escape key.
    DismissOverlay,
    /// Overlay "Enter dashboard" action.
    ConfirmOverlay,
    /// Dashboard card clicked.
    ActivateCard(CardId),
    /// Mockup-screen demo video requested.
    OpenDemoVideo,
    /// Back control on the current screen.
    Back,
}

/// Side effect for the shell to run after a state transition. At most one
/// per applied intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HubEffect {
    /// Open the URL in a fresh browsing context with no opener reference.
    OpenExternal(&'static str),
}

pub struct HubSession {
    selector: ViewSelector,
    overlay: OverlayState,
}

impl HubSession {
    pub fn new() -> Self {
        Self {
            selector: ViewSelector::new(),
            overlay: OverlayState::new(),
        }
    }

    pub fn screen(&self) -> Screen {
        self.selector.current()
    }

    pub fn overlay_visible(&self) -> bool {
        self.overlay.is_visible()
    }

    /// Applies one intent synchronously on the caller's (UI event) thread.
    pub fn apply(&mut self, intent: HubIntent) -> Option<HubEffect> {
        match intent {
            HubIntent::EnterHub => {
                self.overlay.open();
                None
            }
            HubIntent::DismissOverlay => {
                self.overlay.close();
                None
            }
            HubIntent::ConfirmOverlay => {
                self.overlay.confirm_and_continue(&mut self.selector);
                None
            }
            HubIntent::ActivateCard(id) => self.activate_card(id),
            HubIntent::OpenDemoVideo => Some(HubEffect::OpenExternal(cards::DEMO_VIDEO_URL)),
            HubIntent::Back => {
                if let Some(parent) = self.screen().parent() {
                    self.selector.transition_to(parent);
                }
                None
            }
        }
    }

    fn activate_card(&mut self, id: CardId) -> Option<HubEffect> {
        let Some(card) = cards::card_by_id(id) else {
            tracing::warn!(card_id = id.0, "activation for unknown card ignored");
            return None;
        };
        match card.activation() {
            CardActivation::Internal(screen) => {
                self.selector.transition_to(screen);
                None
            }
            CardActivation::External(href) => Some(HubEffect::OpenExternal(href)),
            CardActivation::Inert => None,
        }
    }
}

impl Default for HubSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::{HubEffect, HubIntent, HubSession};
    use crate::cards::{CardId, DEMO_VIDEO_URL};
    use crate::nav::Screen;

    #[test]
    fn entry_flow_opens_overlay_then_continue_lands_on_dashboard() {
        let mut session = HubSession::new();
        assert_eq!(session.screen(), Screen::Landing);
        assert!(!session.overlay_visible());

        assert_eq!(session.apply(HubIntent::EnterHub), None);
        assert_eq!(session.screen(), Screen::Landing);
        assert!(session.overlay_visible());

        assert_eq!(session.apply(HubIntent::ConfirmOverlay), None);
        assert!(!session.overlay_visible());
        assert_eq!(session.screen(), Screen::Dashboard);
    }

    #[test]
    fn dismiss_is_idempotent_and_leaves_the_screen_alone() {
        let mut session = HubSession::new();
        session.apply(HubIntent::EnterHub);
        session.apply(HubIntent::DismissOverlay);
        session.apply(HubIntent::DismissOverlay);
        assert!(!session.overlay_visible());
        assert_eq!(session.screen(), Screen::Landing);
    }

    #[test]
    fn confirm_lands_on_dashboard_regardless_of_prior_screen() {
        let mut session = HubSession::new();
        session.apply(HubIntent::ActivateCard(CardId(3)));
        assert_eq!(session.screen(), Screen::Mockup);

        session.apply(HubIntent::EnterHub);
        session.apply(HubIntent::ConfirmOverlay);
        assert!(!session.overlay_visible());
        assert_eq!(session.screen(), Screen::Dashboard);
    }

    #[test]
    fn internal_card_transitions_without_touching_the_overlay() {
        let mut session = HubSession::new();
        session.apply(HubIntent::ConfirmOverlay);
        assert_eq!(session.screen(), Screen::Dashboard);

        let effect = session.apply(HubIntent::ActivateCard(CardId(3)));
        assert_eq!(effect, None);
        assert_eq!(session.screen(), Screen::Mockup);
        assert!(!session.overlay_visible());
    }

    #[test]
    fn external_card_yields_one_open_effect_and_keeps_the_screen() {
        let mut session = HubSession::new();
        session.apply(HubIntent::ConfirmOverlay);

        let effect = session.apply(HubIntent::ActivateCard(CardId(1)));
        assert_eq!(
            effect,
            Some(HubEffect::OpenExternal("https://t.me/AI_TEAMN4_BOT"))
        );
        assert_eq!(session.screen(), Screen::Dashboard);
    }

    #[test]
    fn placeholder_and_unknown_cards_do_nothing() {
        let mut session = HubSession::new();
        session.apply(HubIntent::ConfirmOverlay);

        assert_eq!(session.apply(HubIntent::ActivateCard(CardId(4))), None);
        assert_eq!(session.apply(HubIntent::ActivateCard(CardId(99))), None);
        assert_eq!(session.screen(), Screen::Dashboard);
    }

    #[test]
    fn demo_video_request_opens_externally() {
        let mut session = HubSession::new();
        assert_eq!(
            session.apply(HubIntent::OpenDemoVideo),
            Some(HubEffect::OpenExternal(DEMO_VIDEO_URL))
        );
    }

    #[test]
    fn back_walks_fixed_parents_and_stops_at_landing() {
        let mut session = HubSession::new();
        session.apply(HubIntent::ActivateCard(CardId(3)));
        assert_eq!(session.screen(), Screen::Mockup);

        session.apply(HubIntent::Back);
        assert_eq!(session.screen(), Screen::Dashboard);
        session.apply(HubIntent::Back);
        assert_eq!(session.screen(), Screen::Landing);
        session.apply(HubIntent::Back);
        assert_eq!(session.screen(), Screen::Landing);
    }
}
