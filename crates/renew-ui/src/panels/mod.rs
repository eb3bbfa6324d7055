pub mod hero;
pub mod trust;
pub mod coach;
pub mod pricing;
pub mod footer;

use egui::{Color32, RichText};

use crate::theme::*;

/// Rounded orange call-to-action button
pub(crate) fn primary_button(ui: &mut egui::Ui, label: &str, enabled: bool) -> egui::Response {
    ui.add_enabled(
        enabled,
        egui::Button::new(RichText::new(label).color(TEXT_ON_DARK).strong())
            .fill(if enabled { ACCENT } else { BORDER })
            .corner_radius(PILL_ROUNDING),
    )
}

/// Small uppercase label above a callout or section
pub(crate) fn eyebrow(ui: &mut egui::Ui, text: &str, color: Color32) {
    ui.label(RichText::new(text.to_uppercase()).color(color).small().strong());
}

/// Square navy tile with the amber spark, followed by the brand name
pub(crate) fn logo(ui: &mut egui::Ui, small: bool) {
    let side = if small { 32.0 } else { 48.0 };
    ui.horizontal(|ui| {
        let (rect, _) = ui.allocate_exact_size(egui::vec2(side, side), egui::Sense::hover());
        let painter = ui.painter();
        painter.rect_filled(rect, egui::CornerRadius::same(if small { 8 } else { 12 }), BRAND_NAVY);
        let c = rect.center();
        let r = side * 0.28;
        let stroke = egui::Stroke::new(2.5, BRAND_AMBER);
        painter.line_segment([c - egui::vec2(0.0, r), c + egui::vec2(0.0, r)], stroke);
        painter.line_segment([c - egui::vec2(r, 0.0), c + egui::vec2(r, 0.0)], stroke);
        painter.circle_filled(c + egui::vec2(r, -r), side * 0.06, BRAND_AMBER);

        ui.label(
            RichText::new(renew_types::content::BRAND_NAME)
                .color(BRAND_AMBER)
                .strong()
                .size(if small { 18.0 } else { 26.0 }),
        );
    });
}
