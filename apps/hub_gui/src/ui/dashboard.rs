//! Dashboard screen: header with back control and the fixed card grid.

use eframe::egui;
use hub_core::{CardActivation, CardDescriptor, HubIntent};

use crate::ui::{theme, widgets};

pub fn show(ui: &mut egui::Ui, cards: &[CardDescriptor]) -> Option<HubIntent> {
    let mut intent = None;

    if widgets::screen_header(
        ui,
        "PRJCTR INSTITUTE",
        "Self-Service · AI mentors · course tools",
        "◀ Back",
    ) {
        intent = Some(HubIntent::Back);
    }

    ui.add_space(18.0);

    for (row_index, row) in cards.chunks(2).enumerate() {
        ui.columns(2, |columns| {
            for (column_index, card) in row.iter().enumerate() {
                let position = row_index * 2 + column_index;
                if let Some(card_intent) = show_card(&mut columns[column_index], card, position) {
                    intent = Some(card_intent);
                }
            }
        });
        ui.add_space(14.0);
    }

    intent
}

fn show_card(ui: &mut egui::Ui, card: &CardDescriptor, position: usize) -> Option<HubIntent> {
    let palette = theme::palette();
    let mut intent = None;

    egui::Frame::NONE
        .fill(palette.card_fill.gamma_multiply(0.85))
        .stroke(egui::Stroke::new(1.0, palette.card_stroke))
        .corner_radius(16.0)
        .inner_margin(egui::Margin::symmetric(16, 14))
        .show(ui, |ui| {
            ui.set_min_height(150.0);

            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    ui.label(
                        egui::RichText::new(card.tag.to_uppercase())
                            .small()
                            .color(palette.text_weak),
                    );
                    ui.label(
                        egui::RichText::new(card.title)
                            .strong()
                            .size(17.0)
                            .color(palette.text_primary),
                    );
                });
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
                    ui.label(
                        egui::RichText::new(format!("{}", position + 1))
                            .small()
                            .color(palette.text_weak),
                    );
                });
            });

            ui.add_space(6.0);
            ui.label(egui::RichText::new(card.description).color(palette.text_weak));
            ui.add_space(10.0);

            ui.horizontal(|ui| {
                let activatable = card.activation() != CardActivation::Inert;
                let button = egui::Button::new(
                    egui::RichText::new(card.action_label)
                        .strong()
                        .color(palette.accent_text),
                )
                .fill(palette.accent.gamma_multiply(if activatable { 0.9 } else { 0.4 }))
                .corner_radius(999.0);
                if ui.add_enabled(activatable, button).clicked() {
                    intent = Some(HubIntent::ActivateCard(card.id));
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        egui::RichText::new(card.badge())
                            .small()
                            .color(palette.text_weak),
                    );
                });
            });
        });

    intent
}
