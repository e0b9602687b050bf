//! UI layer for the hub: app shell, screen renderers, mentor overlay,
//! shared widgets, and theme.

pub mod app;
pub mod dashboard;
pub mod landing;
pub mod mockup;
pub mod overlay;
pub mod theme;
pub mod widgets;

pub use app::HubGuiApp;
