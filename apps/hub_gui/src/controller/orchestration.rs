//! Command orchestration helpers from UI actions to the media worker queue.

use crossbeam_channel::{Sender, TrySendError};

use crate::media::commands::MediaCommand;

/// Queues a command without blocking the UI thread. Media loading is
/// fire-and-forget: a full or disconnected queue is logged and the overlay
/// simply keeps its current media state.
pub fn dispatch_media_command(cmd_tx: &Sender<MediaCommand>, cmd: MediaCommand) {
    let cmd_name = match &cmd {
        MediaCommand::LoadClip { .. } => "load_clip",
    };

    match cmd_tx.try_send(cmd) {
        Ok(()) => tracing::debug!(command = cmd_name, "queued ui->media command"),
        Err(TrySendError::Full(_)) => {
            tracing::warn!(command = cmd_name, "media command queue full; dropping command");
        }
        Err(TrySendError::Disconnected(_)) => {
            tracing::warn!(command = cmd_name, "media worker disconnected; dropping command");
        }
    }
}
