//! Mockup screen: bounded demo-video frame plus the external watch action.

use eframe::egui;
use hub_core::HubIntent;

use crate::ui::{theme, widgets};

pub fn show(ui: &mut egui::Ui) -> Option<HubIntent> {
    let palette = theme::palette();
    let mut intent = None;

    if widgets::screen_header(
        ui,
        "PRJCTR INSTITUTE · Mockup #1",
        "Demo video · YouTube",
        "◀ Back to dashboard",
    ) {
        intent = Some(HubIntent::Back);
    }

    ui.add_space(18.0);

    ui.vertical_centered(|ui| {
        // 16:9 frame bounded to the available width.
        let width = ui.available_width().clamp(320.0, 760.0);
        let (rect, _) =
            ui.allocate_exact_size(egui::vec2(width, width * 9.0 / 16.0), egui::Sense::hover());
        let painter = ui.painter();
        painter.rect_filled(rect, 18.0, palette.media_backdrop);
        painter.rect_stroke(
            rect,
            18.0,
            egui::Stroke::new(1.0, palette.card_stroke),
            egui::StrokeKind::Middle,
        );
        painter.text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            "Telegram Gamification — demo",
            egui::FontId::proportional(16.0),
            palette.text_weak,
        );

        ui.add_space(14.0);
        let button = egui::Button::new(
            egui::RichText::new("▶ Watch demo on YouTube")
                .strong()
                .color(palette.accent_text),
        )
        .fill(palette.accent)
        .corner_radius(999.0)
        .min_size(egui::vec2(240.0, 40.0));
        if ui.add(button).clicked() {
            intent = Some(HubIntent::OpenDemoVideo);
        }

        ui.add_space(6.0);
        ui.label(
            egui::RichText::new("The demo opens in your browser; full-screen is available there.")
                .small()
                .color(palette.text_weak),
        );
    });

    intent
}
