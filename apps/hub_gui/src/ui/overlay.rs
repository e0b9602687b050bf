//! Mentor overlay: centered modal window with the auto-playing clip, a
//! close control, and the continue-to-dashboard action. Rendered above
//! whichever screen is current.

use std::time::Duration;

use eframe::egui;
use hub_core::HubIntent;

use crate::media::playback::{frame_color_image, ClipPlayback, ClipState};
use crate::ui::theme;

const MEDIA_WIDTH: f32 = 400.0;
const MAX_MEDIA_HEIGHT: f32 = 420.0;

pub fn show(ctx: &egui::Context, clip: &mut ClipState) -> Option<HubIntent> {
    let palette = theme::palette();
    let mut intent = None;

    let window_frame = egui::Frame::NONE
        .fill(theme::lighten_color(palette.app_background, 0.05))
        .stroke(egui::Stroke::new(1.0, palette.card_stroke))
        .corner_radius(14.0)
        .inner_margin(egui::Margin::symmetric(14, 12));

    egui::Window::new("mentor_overlay")
        .title_bar(false)
        .frame(window_frame)
        .resizable(false)
        .collapsible(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .default_width(MEDIA_WIDTH + 30.0)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new("AI Mentor PRJCTR")
                        .strong()
                        .color(palette.text_primary),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.small_button("✕").clicked() {
                        intent = Some(HubIntent::DismissOverlay);
                    }
                });
            });
            ui.separator();

            show_media_frame(ui, clip);

            ui.add_space(8.0);
            ui.vertical_centered(|ui| {
                ui.label(
                    egui::RichText::new("I'm AI Mentor PRJCTR. Let me show how the AI hub works.")
                        .color(palette.text_weak),
                );
                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    // Rough centering for the two-button row.
                    ui.add_space((ui.available_width() - 240.0).max(0.0) / 2.0);
                    let continue_button = egui::Button::new(
                        egui::RichText::new("Enter dashboard")
                            .strong()
                            .color(palette.accent_text),
                    )
                    .fill(palette.accent)
                    .corner_radius(999.0);
                    if ui.add(continue_button).clicked() {
                        intent = Some(HubIntent::ConfirmOverlay);
                    }
                    let close_button = egui::Button::new(
                        egui::RichText::new("Close").color(palette.text_weak),
                    )
                    .fill(palette.card_fill)
                    .stroke(egui::Stroke::new(1.0, palette.card_stroke))
                    .corner_radius(999.0);
                    if ui.add(close_button).clicked() {
                        intent = Some(HubIntent::DismissOverlay);
                    }
                });
            });
        });

    intent
}

fn show_media_frame(ui: &mut egui::Ui, clip: &mut ClipState) {
    match clip {
        ClipState::NotRequested | ClipState::Loading => {
            empty_media_frame(ui, "Loading mentor clip…");
        }
        ClipState::Failed(_) => {
            // Degraded but usable: the frame stays, the controls around it
            // keep working.
            empty_media_frame(ui, "Mentor clip unavailable");
        }
        ClipState::Ready(playback) => show_playback(ui, playback),
    }
}

fn show_playback(ui: &mut egui::Ui, playback: &mut ClipPlayback) {
    let palette = theme::palette();
    let now = ui.input(|i| i.time);

    let frame_changed = playback.advance(now);
    if playback.texture.is_none() {
        let image = frame_color_image(playback.current());
        playback.texture =
            Some(ui.ctx()
                .load_texture("mentor_clip", image, egui::TextureOptions::LINEAR));
    } else if frame_changed {
        let image = frame_color_image(playback.current());
        if let Some(texture) = playback.texture.as_mut() {
            texture.set(image, egui::TextureOptions::LINEAR);
        }
    }
    if playback.is_playing() {
        ui.ctx().request_repaint_after(Duration::from_millis(16));
    }

    let (width, height) = playback.size();
    let scale = (MEDIA_WIDTH / width as f32).min(MAX_MEDIA_HEIGHT / height as f32);
    let size = egui::vec2(width as f32 * scale, height as f32 * scale);

    egui::Frame::NONE
        .fill(palette.media_backdrop)
        .corner_radius(10.0)
        .show(ui, |ui| {
            ui.vertical_centered(|ui| {
                if let Some(texture) = &playback.texture {
                    ui.add(egui::Image::new(texture).fit_to_exact_size(size));
                }
            });
        });

    ui.add_space(6.0);
    ui.horizontal(|ui| {
        let toggle_label = if playback.is_playing() { "⏸ Pause" } else { "▶ Play" };
        if ui.small_button(toggle_label).clicked() {
            let resume = !playback.is_playing();
            playback.set_playing(resume, now);
        }
        if ui.small_button("⟲ Restart").clicked() {
            playback.restart();
        }
    });
}

fn empty_media_frame(ui: &mut egui::Ui, caption: &str) {
    let palette = theme::palette();
    let (rect, _) = ui.allocate_exact_size(
        egui::vec2(MEDIA_WIDTH, MEDIA_WIDTH * 9.0 / 16.0),
        egui::Sense::hover(),
    );
    let painter = ui.painter();
    painter.rect_filled(rect, 10.0, palette.media_backdrop);
    painter.text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        caption,
        egui::FontId::proportional(13.0),
        palette.text_weak,
    );
}
