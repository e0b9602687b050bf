//! Landing screen: institute banner, orb mark, and the single entry action.

use eframe::egui;
use hub_core::HubIntent;

use crate::ui::theme;

pub fn show(ui: &mut egui::Ui) -> Option<HubIntent> {
    let palette = theme::palette();
    let mut intent = None;

    let avail = ui.available_size();
    ui.add_space((avail.y * 0.12).clamp(18.0, 90.0));

    ui.vertical_centered(|ui| {
        ui.label(
            egui::RichText::new("DIGITAL SCHOOL · SELF-SERVICE HUB")
                .small()
                .color(palette.text_weak),
        );
        ui.add_space(4.0);
        ui.label(
            egui::RichText::new("PRJCTR INSTITUTE")
                .strong()
                .size(36.0)
                .color(palette.text_primary),
        );
        ui.add_space(8.0);
        ui.set_max_width(560.0);
        ui.label(
            egui::RichText::new(
                "An easy entry point to all of your school's AI tools. One click and \
                 you're ready to start with an AI mentor, knowledge base, or new prototype.",
            )
            .color(palette.text_weak),
        );

        ui.add_space(26.0);
        draw_orb(ui);
        ui.add_space(26.0);

        let button = egui::Button::new(
            egui::RichText::new("What is this?")
                .strong()
                .size(16.0)
                .color(palette.accent_text),
        )
        .fill(palette.accent)
        .corner_radius(999.0)
        .min_size(egui::vec2(220.0, 44.0));
        if ui.add(button).clicked() {
            intent = Some(HubIntent::EnterHub);
        }
    });

    intent
}

fn draw_orb(ui: &mut egui::Ui) {
    let palette = theme::palette();
    let (rect, _) = ui.allocate_exact_size(egui::vec2(220.0, 220.0), egui::Sense::hover());
    let painter = ui.painter();
    let center = rect.center();

    painter.circle_filled(center, 106.0, palette.card_fill.gamma_multiply(0.8));
    painter.circle_stroke(center, 106.0, egui::Stroke::new(1.0, palette.card_stroke));
    painter.circle_stroke(
        center,
        86.0,
        egui::Stroke::new(1.0, palette.accent.gamma_multiply(0.5)),
    );
    painter.circle_filled(center, 52.0, theme::lighten_color(palette.card_fill, 0.06));
    painter.circle_stroke(
        center,
        52.0,
        egui::Stroke::new(1.0, palette.accent.gamma_multiply(0.8)),
    );
    painter.text(
        center,
        egui::Align2::CENTER_CENTER,
        "AI HUB",
        egui::FontId::proportional(12.0),
        palette.text_weak,
    );
}
