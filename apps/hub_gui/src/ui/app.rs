//! App shell: owns the hub session and the media channel endpoints, routes
//! renderer intents through the session, and runs the returned effects.

use std::path::PathBuf;

use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use hub_core::{cards, HubEffect, HubIntent, HubSession, Screen};

use crate::controller::events::MediaEvent;
use crate::controller::orchestration::dispatch_media_command;
use crate::media::commands::MediaCommand;
use crate::media::playback::{ClipPlayback, ClipState};
use crate::ui::{dashboard, landing, mockup, overlay, theme};

pub struct HubGuiApp {
    session: HubSession,
    cmd_tx: Sender<MediaCommand>,
    media_rx: Receiver<MediaEvent>,
    clip_path: PathBuf,
    clip: ClipState,
    theme_applied: bool,
}

impl HubGuiApp {
    pub fn new(
        cmd_tx: Sender<MediaCommand>,
        media_rx: Receiver<MediaEvent>,
        clip_path: PathBuf,
    ) -> Self {
        Self {
            session: HubSession::new(),
            cmd_tx,
            media_rx,
            clip_path,
            clip: ClipState::NotRequested,
            theme_applied: false,
        }
    }

    fn process_media_events(&mut self) {
        while let Ok(event) = self.media_rx.try_recv() {
            match event {
                MediaEvent::ClipLoaded(clip) => {
                    self.clip = ClipState::Ready(ClipPlayback::new(clip));
                }
                MediaEvent::ClipFailed { reason } => {
                    self.clip = ClipState::Failed(reason);
                }
            }
        }
    }

    fn apply_intent(&mut self, intent: HubIntent) {
        if intent == HubIntent::EnterHub {
            self.prepare_clip_for_open();
        }
        if let Some(effect) = self.session.apply(intent) {
            self.run_effect(effect);
        }
    }

    /// Every open behaves like mounting a fresh media element: an already
    /// decoded clip replays from the start, a failed load is retried.
    fn prepare_clip_for_open(&mut self) {
        match &mut self.clip {
            ClipState::NotRequested | ClipState::Failed(_) => {
                dispatch_media_command(
                    &self.cmd_tx,
                    MediaCommand::LoadClip {
                        path: self.clip_path.clone(),
                    },
                );
                self.clip = ClipState::Loading;
            }
            ClipState::Ready(playback) => playback.restart(),
            ClipState::Loading => {}
        }
    }

    /// Escape dismisses the overlay. The press is consumed only while the
    /// overlay is visible, so exactly one handler sees it and nothing
    /// lingers once the overlay is hidden.
    fn overlay_escape_pressed(&self, ctx: &egui::Context) -> bool {
        self.session.overlay_visible()
            && ctx.input_mut(|i| i.consume_key(egui::Modifiers::NONE, egui::Key::Escape))
    }

    fn run_effect(&mut self, effect: HubEffect) {
        match effect {
            HubEffect::OpenExternal(url) => open_in_browser(url),
        }
    }
}

impl eframe::App for HubGuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.theme_applied {
            theme::apply(ctx);
            self.theme_applied = true;
        }
        self.process_media_events();

        let mut pending: Vec<HubIntent> = Vec::new();

        if self.overlay_escape_pressed(ctx) {
            pending.push(HubIntent::DismissOverlay);
        }

        let palette = theme::palette();
        let screen_frame = egui::Frame::NONE
            .fill(palette.app_background)
            .inner_margin(egui::Margin::symmetric(24, 18));
        let screen_intent = egui::CentralPanel::default()
            .frame(screen_frame)
            .show(ctx, |ui| match self.session.screen() {
                Screen::Landing => landing::show(ui),
                Screen::Dashboard => dashboard::show(ui, hub_core::card_catalog()),
                Screen::Mockup => mockup::show(ui),
            })
            .inner;
        pending.extend(screen_intent);

        if self.session.overlay_visible() {
            pending.extend(overlay::show(ctx, &mut self.clip));
        }

        for intent in pending {
            self.apply_intent(intent);
        }
    }
}

/// Opens an external-scheme URL in the system browser as a detached
/// process. The spawned browser receives no handle back to this
/// application.
fn open_in_browser(url: &str) {
    if !cards::has_external_scheme(url) {
        tracing::warn!(url, "refusing to open non-http(s) target externally");
        return;
    }
    let (program, args) = browser_command(url);
    match std::process::Command::new(program).args(args).spawn() {
        Ok(_) => tracing::info!(url, "opened external link in browser"),
        Err(err) => tracing::warn!(url, error = %err, "failed to open external link"),
    }
}

#[cfg(target_os = "windows")]
fn browser_command(url: &str) -> (&'static str, Vec<String>) {
    (
        "cmd",
        vec!["/C".to_string(), "start".to_string(), String::new(), url.to_string()],
    )
}

#[cfg(target_os = "macos")]
fn browser_command(url: &str) -> (&'static str, Vec<String>) {
    ("open", vec![url.to_string()])
}

#[cfg(all(unix, not(target_os = "macos")))]
fn browser_command(url: &str) -> (&'static str, Vec<String>) {
    ("xdg-open", vec![url.to_string()])
}

#[cfg(test)]
mod tests {
    use super::{browser_command, HubGuiApp};
    use crate::controller::events::MediaEvent;
    use crate::media::commands::MediaCommand;
    use crate::media::playback::{ClipFrame, ClipPlayback, ClipState, DecodedClip};
    use crossbeam_channel::{bounded, Receiver, Sender};
    use eframe::egui;
    use hub_core::HubIntent;
    use std::path::PathBuf;

    fn test_app() -> (HubGuiApp, Receiver<MediaCommand>, Sender<MediaEvent>) {
        let (cmd_tx, cmd_rx) = bounded::<MediaCommand>(4);
        let (event_tx, media_rx) = bounded::<MediaEvent>(4);
        let app = HubGuiApp::new(cmd_tx, media_rx, PathBuf::from("assets/mentor_intro.gif"));
        (app, cmd_rx, event_tx)
    }

    fn two_frame_clip() -> DecodedClip {
        DecodedClip {
            frames: (0..2)
                .map(|_| ClipFrame {
                    width: 2,
                    height: 2,
                    rgba: vec![0; 2 * 2 * 4],
                    delay_ms: 100,
                })
                .collect(),
        }
    }

    fn escape_key_event() -> egui::Event {
        egui::Event::Key {
            key: egui::Key::Escape,
            physical_key: None,
            pressed: true,
            repeat: false,
            modifiers: egui::Modifiers::NONE,
        }
    }

    fn escape_pass(ctx: &egui::Context, app: &HubGuiApp, with_press: bool) -> bool {
        let mut input = egui::RawInput::default();
        if with_press {
            input.events.push(escape_key_event());
        }
        ctx.begin_pass(input);
        let pressed = app.overlay_escape_pressed(ctx);
        let _ = ctx.end_pass();
        pressed
    }

    #[test]
    fn first_open_requests_the_clip_exactly_once() {
        let (mut app, cmd_rx, _event_tx) = test_app();
        app.apply_intent(HubIntent::EnterHub);
        app.apply_intent(HubIntent::DismissOverlay);
        app.apply_intent(HubIntent::EnterHub);

        assert!(cmd_rx.try_recv().is_ok());
        assert!(cmd_rx.try_recv().is_err());
        assert!(matches!(app.clip, ClipState::Loading));
    }

    #[test]
    fn reopening_the_overlay_restarts_a_paused_clip() {
        let (mut app, _cmd_rx, _event_tx) = test_app();
        let mut playback = ClipPlayback::new(two_frame_clip());
        playback.advance(0.0);
        playback.advance(0.15);
        playback.set_playing(false, 0.2);
        app.clip = ClipState::Ready(playback);

        app.apply_intent(HubIntent::EnterHub);

        assert!(app.session.overlay_visible());
        match &app.clip {
            ClipState::Ready(playback) => {
                assert!(playback.is_playing());
                assert_eq!(playback.current_index(), 0);
            }
            _ => panic!("decoded clip should survive reopen"),
        }
    }

    #[test]
    fn reopening_after_a_failed_load_retries() {
        let (mut app, cmd_rx, _event_tx) = test_app();
        app.clip = ClipState::Failed("no such file".to_string());

        app.apply_intent(HubIntent::EnterHub);

        assert!(cmd_rx.try_recv().is_ok());
        assert!(matches!(app.clip, ClipState::Loading));
    }

    #[test]
    fn escape_is_consumed_only_while_the_overlay_is_visible() {
        let (mut app, _cmd_rx, _event_tx) = test_app();
        let ctx = egui::Context::default();

        // Hidden overlay: the press is ignored and left unconsumed.
        assert!(!escape_pass(&ctx, &app, true));

        app.apply_intent(HubIntent::EnterHub);
        assert!(app.session.overlay_visible());

        // Visible overlay: one hit per press, none without a press.
        assert!(escape_pass(&ctx, &app, true));
        assert!(!escape_pass(&ctx, &app, false));

        // A single press cannot be handled twice within one pass.
        let mut input = egui::RawInput::default();
        input.events.push(escape_key_event());
        ctx.begin_pass(input);
        assert!(app.overlay_escape_pressed(&ctx));
        assert!(!app.overlay_escape_pressed(&ctx));
        let _ = ctx.end_pass();

        // Hide/show cycles do not stack handlers.
        app.apply_intent(HubIntent::DismissOverlay);
        assert!(!escape_pass(&ctx, &app, true));
        app.apply_intent(HubIntent::EnterHub);
        assert!(escape_pass(&ctx, &app, true));
    }

    #[test]
    fn browser_command_passes_the_url_through_unchanged() {
        let url = "https://t.me/AI_TEAMN4_BOT";
        let (program, args) = browser_command(url);
        assert!(!program.is_empty());
        assert_eq!(args.last().map(String::as_str), Some(url));
    }

    #[cfg(all(unix, not(target_os = "macos")))]
    #[test]
    fn uses_the_platform_opener_on_linux() {
        let (program, _) = browser_command("https://example.com");
        assert_eq!(program, "xdg-open");
    }
}
