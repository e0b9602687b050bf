//! Controller layer: media events delivered to the UI and command
//! orchestration toward the media worker.

pub mod events;
pub mod orchestration;
