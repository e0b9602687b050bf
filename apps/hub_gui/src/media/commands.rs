//! Media commands queued from UI to the media worker.

use std::path::PathBuf;

pub enum MediaCommand {
    LoadClip { path: PathBuf },
}
