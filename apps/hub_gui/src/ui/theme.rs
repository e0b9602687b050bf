//! Dark slate/sky palette. Styling carries no behavioral contract; this
//! module only centralizes the colors the renderers share.

use eframe::egui;

pub struct HubPalette {
    pub app_background: egui::Color32,
    pub card_fill: egui::Color32,
    pub card_stroke: egui::Color32,
    pub media_backdrop: egui::Color32,
    pub accent: egui::Color32,
    pub accent_text: egui::Color32,
    pub text_primary: egui::Color32,
    pub text_weak: egui::Color32,
}

pub fn palette() -> HubPalette {
    HubPalette {
        app_background: egui::Color32::from_rgb(2, 6, 23),
        card_fill: egui::Color32::from_rgb(15, 23, 42),
        card_stroke: egui::Color32::from_rgb(51, 65, 85),
        media_backdrop: egui::Color32::from_rgb(8, 12, 27),
        accent: egui::Color32::from_rgb(56, 189, 248),
        // Dark text on the bright accent buttons.
        accent_text: egui::Color32::from_rgb(2, 6, 23),
        text_primary: egui::Color32::from_rgb(248, 250, 252),
        text_weak: egui::Color32::from_rgb(148, 163, 184),
    }
}

pub fn lighten_color(c: egui::Color32, t: f32) -> egui::Color32 {
    let t = t.clamp(0.0, 1.0);
    let mix = |channel: u8| -> u8 {
        let channel = channel as f32;
        (channel + (255.0 - channel) * t).round().clamp(0.0, 255.0) as u8
    };
    egui::Color32::from_rgba_unmultiplied(mix(c.r()), mix(c.g()), mix(c.b()), c.a())
}

/// Applied once at startup; the hub has a single fixed theme.
pub fn apply(ctx: &egui::Context) {
    let palette = palette();
    let mut style = (*ctx.style()).clone();

    style.visuals = egui::Visuals::dark();
    style.visuals.panel_fill = palette.app_background;
    style.visuals.window_fill = lighten_color(palette.app_background, 0.04);
    style.visuals.override_text_color = Some(palette.text_primary);
    style.visuals.widgets.noninteractive.bg_stroke =
        egui::Stroke::new(1.0, palette.card_stroke);
    style.visuals.widgets.inactive.bg_fill = palette.card_fill;
    style.visuals.widgets.hovered.bg_fill = lighten_color(palette.card_fill, 0.08);
    style.visuals.selection.bg_fill = palette.accent.gamma_multiply(0.4);

    style.spacing.item_spacing = egui::vec2(8.0, 6.0);
    style.spacing.button_padding = egui::vec2(10.0, 6.0);

    ctx.set_style(style);
}
