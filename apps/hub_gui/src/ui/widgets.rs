//! Small shared widgets used by the dashboard and mockup headers.

use eframe::egui;

use crate::ui::theme;

/// Screen header with the institute mark, title/subtitle, and a back
/// control on the right. Returns true when the back control was clicked.
pub fn screen_header(ui: &mut egui::Ui, title: &str, subtitle: &str, back_label: &str) -> bool {
    let palette = theme::palette();
    let mut back_clicked = false;

    ui.horizontal(|ui| {
        logo_mark(ui);
        ui.vertical(|ui| {
            ui.label(
                egui::RichText::new(title)
                    .strong()
                    .size(18.0)
                    .color(palette.text_primary),
            );
            ui.label(egui::RichText::new(subtitle).small().color(palette.text_weak));
        });
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let button = egui::Button::new(
                egui::RichText::new(back_label).small().color(palette.text_weak),
            )
            .fill(palette.card_fill)
            .stroke(egui::Stroke::new(1.0, palette.card_stroke))
            .corner_radius(999.0);
            if ui.add(button).clicked() {
                back_clicked = true;
            }
        });
    });

    back_clicked
}

fn logo_mark(ui: &mut egui::Ui) {
    let palette = theme::palette();
    let (rect, _) = ui.allocate_exact_size(egui::vec2(30.0, 30.0), egui::Sense::hover());
    let painter = ui.painter();
    painter.rect_filled(rect, 8.0, palette.accent.gamma_multiply(0.7));
    painter.rect_stroke(
        rect,
        8.0,
        egui::Stroke::new(1.0, palette.card_stroke),
        egui::StrokeKind::Middle,
    );
}
