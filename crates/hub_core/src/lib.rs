//! Core state for the AI tool hub front-end: screens, overlay, card catalog,
//! intents/effects, and asset path resolution.
//!
//! Everything in this crate is synchronous and GUI-free. The shell owns one
//! [`session::HubSession`], feeds it intents produced by screen renderers,
//! and runs whatever effect comes back.

pub mod assets;
pub mod cards;
pub mod nav;
pub mod overlay;
pub mod session;

pub use assets::{AssetBase, AssetError, MENTOR_CLIP_LOGICAL_PATH};
pub use cards::{card_by_id, card_catalog, CardActivation, CardDescriptor, CardId};
pub use nav::{Screen, ViewSelector};
pub use overlay::OverlayState;
pub use session::{HubEffect, HubIntent, HubSession};
