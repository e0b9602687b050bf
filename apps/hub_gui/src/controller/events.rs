//! Events emitted by the media worker toward the UI thread.

use crate::media::playback::DecodedClip;

pub enum MediaEvent {
    ClipLoaded(DecodedClip),
    /// Decode or read failure; the overlay degrades to an empty media
    /// frame with its controls intact.
    ClipFailed {
        reason: String,
    },
}
