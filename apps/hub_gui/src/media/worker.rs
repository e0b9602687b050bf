//! Media worker thread: reads and decodes the mentor clip off the UI
//! thread and reports the outcome as events. Fire-and-forget: no
//! control-flow path in the app awaits it.

use std::{fs, io::Cursor, thread};

use crossbeam_channel::{Receiver, Sender};
use image::{codecs::gif::GifDecoder, imageops::FilterType, AnimationDecoder, DynamicImage};

use crate::controller::events::MediaEvent;
use crate::media::commands::MediaCommand;
use crate::media::playback::{ClipFrame, DecodedClip};

/// Frames are downscaled to fit the overlay's bounded media frame.
const MAX_CLIP_DIMENSION: u32 = 480;

pub fn spawn_media_worker(cmd_rx: Receiver<MediaCommand>, event_tx: Sender<MediaEvent>) {
    thread::spawn(move || {
        while let Ok(cmd) = cmd_rx.recv() {
            match cmd {
                MediaCommand::LoadClip { path } => {
                    tracing::info!(path = %path.display(), "loading mentor clip");
                    let result = fs::read(&path)
                        .map_err(anyhow::Error::from)
                        .and_then(|bytes| decode_clip(&bytes));
                    match result {
                        Ok(clip) => {
                            tracing::info!(frames = clip.frames.len(), "mentor clip decoded");
                            let _ = event_tx.try_send(MediaEvent::ClipLoaded(clip));
                        }
                        Err(err) => {
                            tracing::warn!(
                                path = %path.display(),
                                error = %err,
                                "mentor clip unavailable; overlay will degrade to an empty frame"
                            );
                            let _ = event_tx.try_send(MediaEvent::ClipFailed {
                                reason: err.to_string(),
                            });
                        }
                    }
                }
            }
        }
        tracing::debug!("media command queue closed; worker exiting");
    });
}

pub fn decode_clip(bytes: &[u8]) -> anyhow::Result<DecodedClip> {
    let decoder = GifDecoder::new(Cursor::new(bytes))?;
    let frames = decoder.into_frames().collect_frames()?;
    if frames.is_empty() {
        anyhow::bail!("clip contains no frames");
    }

    let mut out_frames = Vec::with_capacity(frames.len());
    for frame in frames {
        let (num, den) = frame.delay().numer_denom_ms();
        let delay_ms = clip_frame_delay_ms(num, den);

        let image = DynamicImage::ImageRgba8(frame.into_buffer());
        let resized = if image.width().max(image.height()) > MAX_CLIP_DIMENSION {
            image.resize(MAX_CLIP_DIMENSION, MAX_CLIP_DIMENSION, FilterType::Triangle)
        } else {
            image
        };
        let rgba = resized.to_rgba8();
        out_frames.push(ClipFrame {
            width: rgba.width() as usize,
            height: rgba.height() as usize,
            rgba: rgba.into_raw(),
            delay_ms,
        });
    }

    Ok(DecodedClip { frames: out_frames })
}

/// Rounds the decoder's delay ratio to whole milliseconds, clamped to avoid
/// absurdly-fast frame spam and stuck frames.
fn clip_frame_delay_ms(num: u32, den: u32) -> u32 {
    if den == 0 {
        100
    } else {
        ((num as f32 / den as f32).round() as u32).clamp(20, 10_000)
    }
}
