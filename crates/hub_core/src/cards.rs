//! Static dashboard card catalog and activation resolution.

use serde::Serialize;

use crate::nav::Screen;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct CardId(pub i64);

/// One dashboard tile. Immutable, sourced from in-process constants; the
/// catalog never changes shape at runtime.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CardDescriptor {
    pub id: CardId,
    pub title: &'static str,
    pub tag: &'static str,
    pub description: &'static str,
    pub action_label: &'static str,
    pub target_href: &'static str,
    pub is_internal_action: bool,
}

/// Outcome of activating a card. Exactly one outcome per activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardActivation {
    /// In-application screen transition; must never leave the app.
    Internal(Screen),
    /// Open in a fresh browsing context, no opener reference granted.
    External(&'static str),
    /// Placeholder target ("#"); activation does nothing.
    Inert,
}

impl CardDescriptor {
    pub fn activation(&self) -> CardActivation {
        if self.is_internal_action {
            CardActivation::Internal(Screen::Mockup)
        } else if has_external_scheme(self.target_href) {
            CardActivation::External(self.target_href)
        } else {
            CardActivation::Inert
        }
    }

    /// Badge shown in the card footer.
    pub fn badge(&self) -> &'static str {
        match self.activation() {
            CardActivation::External(_) => "LIVE",
            CardActivation::Internal(_) | CardActivation::Inert => "INTERNAL",
        }
    }
}

pub fn has_external_scheme(href: &str) -> bool {
    href.starts_with("https://") || href.starts_with("http://")
}

/// External demo video shown on the mockup screen.
pub const DEMO_VIDEO_URL: &str = "https://www.youtube.com/watch?v=GwLsw3IJTs0";

const CATALOG: [CardDescriptor; 4] = [
    CardDescriptor {
        id: CardId(1),
        title: "AI Telegram Mentee",
        tag: "bot for homework",
        description: "A trained AI Telegram Bot mentor who quickly checks homework \
                      assignments and provides structured feedback in the style of \
                      PRJCTR tutors.",
        action_label: "Відкрити бота",
        target_href: "https://t.me/AI_TEAMN4_BOT",
        is_internal_action: false,
    },
    CardDescriptor {
        id: CardId(2),
        title: "Your AI KB Assistant",
        tag: "knowledge base",
        description: "Personalized knowledge base for your course.",
        action_label: "Open",
        target_href: "https://notebooklm.google.com/notebook/921a14a1-d248-4d16-ab05-e953f25de3c3?pli=1",
        is_internal_action: false,
    },
    CardDescriptor {
        id: CardId(3),
        title: "Telegram Gamification",
        tag: "video",
        description: "Telegram Gamification tool for digital school.",
        action_label: "Check it out",
        target_href: "#internal-mockup1",
        is_internal_action: true,
    },
    CardDescriptor {
        id: CardId(4),
        title: "Coming soon",
        tag: "prototype",
        description: "Your next AI tool is coming soon.",
        action_label: "Pending",
        target_href: "#",
        is_internal_action: false,
    },
];

/// Fixed ordered catalog rendered by the dashboard.
pub fn card_catalog() -> &'static [CardDescriptor] {
    &CATALOG
}

pub fn card_by_id(id: CardId) -> Option<&'static CardDescriptor> {
    CATALOG.iter().find(|card| card.id == id)
}

#[cfg(test)]
mod tests {
    use super::{card_by_id, card_catalog, has_external_scheme, CardActivation, CardId};
    use crate::nav::Screen;

    #[test]
    fn catalog_order_and_ids_are_stable() {
        let ids: Vec<i64> = card_catalog().iter().map(|card| card.id.0).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn internal_card_activates_the_mockup_screen_and_nothing_else() {
        let card = card_by_id(CardId(3)).expect("gamification card");
        assert!(card.is_internal_action);
        assert_eq!(card.activation(), CardActivation::Internal(Screen::Mockup));
        assert_eq!(card.badge(), "INTERNAL");
    }

    #[test]
    fn external_cards_resolve_to_their_href() {
        for id in [CardId(1), CardId(2)] {
            let card = card_by_id(id).expect("external card");
            match card.activation() {
                CardActivation::External(href) => assert_eq!(href, card.target_href),
                other => panic!("expected external activation, got {other:?}"),
            }
            assert_eq!(card.badge(), "LIVE");
        }
    }

    #[test]
    fn placeholder_card_is_inert() {
        let card = card_by_id(CardId(4)).expect("placeholder card");
        assert_eq!(card.activation(), CardActivation::Inert);
        assert_eq!(card.badge(), "INTERNAL");
    }

    #[test]
    fn external_scheme_detection_rejects_fragments_and_bare_paths() {
        assert!(has_external_scheme("https://t.me/AI_TEAMN4_BOT"));
        assert!(has_external_scheme("http://example.com"));
        assert!(!has_external_scheme("#internal-mockup1"));
        assert!(!has_external_scheme("#"));
        assert!(!has_external_scheme("mentor_intro.gif"));
        assert!(!has_external_scheme("javascript:alert(1)"));
    }
}
