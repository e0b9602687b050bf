//! Mentor clip loading and playback: commands queued to the worker thread,
//! decode on the worker, frame-based playback state on the UI side.

pub mod commands;
pub mod playback;
pub mod worker;
