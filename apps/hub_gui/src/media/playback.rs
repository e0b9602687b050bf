//! Frame-based playback for the decoded mentor clip. Silent by
//! construction; playback never blocks or gates any state transition.

use egui::TextureHandle;

#[derive(Clone)]
pub struct ClipFrame {
    pub width: usize,
    pub height: usize,
    pub rgba: Vec<u8>,
    pub delay_ms: u32,
}

#[derive(Clone)]
pub struct DecodedClip {
    pub frames: Vec<ClipFrame>,
}

/// Lifecycle of the overlay's media frame. A failed load degrades to an
/// empty frame; the overlay's controls are unaffected.
pub enum ClipState {
    NotRequested,
    Loading,
    Ready(ClipPlayback),
    Failed(String),
}

pub struct ClipPlayback {
    frames: Vec<ClipFrame>,
    current_frame: usize,
    next_frame_at_secs: f64,
    started: bool,
    playing: bool,
    pub texture: Option<TextureHandle>,
}

impl ClipPlayback {
    /// Playback starts automatically once the clip is decoded.
    pub fn new(clip: DecodedClip) -> Self {
        Self {
            frames: clip.frames,
            current_frame: 0,
            next_frame_at_secs: 0.0,
            started: false,
            playing: true,
            texture: None,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    pub fn current(&self) -> &ClipFrame {
        &self.frames[self.current_frame]
    }

    pub fn current_index(&self) -> usize {
        self.current_frame
    }

    /// Natural size of the clip, from the first frame.
    pub fn size(&self) -> (usize, usize) {
        let first = &self.frames[0];
        (first.width, first.height)
    }

    pub fn set_playing(&mut self, playing: bool, now: f64) {
        if playing && !self.playing {
            // Resume from the current frame; do not catch up on paused time.
            self.next_frame_at_secs = now + self.current_delay_secs();
        }
        self.playing = playing;
    }

    /// Rewinds to the first frame and resumes. Scheduling restarts from the
    /// next advance call's clock; the texture is dropped so the first frame
    /// is rebuilt immediately.
    pub fn restart(&mut self) {
        self.current_frame = 0;
        self.playing = true;
        self.started = false;
        self.texture = None;
    }

    /// Advances past due frames, looping at the end. Returns true when the
    /// displayed frame changed and the texture needs refreshing.
    pub fn advance(&mut self, now: f64) -> bool {
        if !self.playing || self.frames.len() <= 1 {
            return false;
        }
        if !self.started {
            self.started = true;
            self.next_frame_at_secs = now + self.current_delay_secs();
            return false;
        }

        let mut changed = false;
        while now >= self.next_frame_at_secs {
            self.current_frame = (self.current_frame + 1) % self.frames.len();
            self.next_frame_at_secs += self.current_delay_secs();
            changed = true;
        }
        changed
    }

    fn current_delay_secs(&self) -> f64 {
        self.frames[self.current_frame].delay_ms as f64 / 1000.0
    }
}

pub fn frame_color_image(frame: &ClipFrame) -> egui::ColorImage {
    egui::ColorImage::from_rgba_unmultiplied([frame.width, frame.height], &frame.rgba)
}
