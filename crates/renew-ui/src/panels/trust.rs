//! Trust strip: avatar stack, user count, press names.

use egui::{self, RichText};
use renew_types::content::*;

use crate::theme::*;

const AVATAR_TINTS: [egui::Color32; 4] = [BRAND_NAVY, INDIGO, ACCENT, BRAND_AMBER];

pub fn trust_strip(ui: &mut egui::Ui) {
    ui.vertical_centered(|ui| {
        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = -8.0;
            for tint in AVATAR_TINTS {
                let (rect, _) = ui.allocate_exact_size(egui::vec2(36.0, 36.0), egui::Sense::hover());
                ui.painter().circle(
                    rect.center(),
                    17.0,
                    tint.linear_multiply(0.8),
                    egui::Stroke::new(2.0, BG_SURFACE),
                );
            }
        });
        ui.add_space(6.0);

        ui.horizontal_wrapped(|ui| {
            ui.spacing_mut().item_spacing.x = 0.0;
            ui.label(RichText::new(TRUST_LINE_PREFIX).color(TEXT_SECONDARY));
            ui.label(RichText::new(TRUST_LINE_COUNT).color(TEXT_PRIMARY).strong());
            ui.label(RichText::new(TRUST_LINE_SUFFIX).color(TEXT_SECONDARY));
        });
        ui.add_space(6.0);

        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 28.0;
            for name in PRESS_NAMES {
                ui.label(RichText::new(*name).color(TEXT_SECONDARY.linear_multiply(0.6)).strong().size(18.0));
            }
        });
    });
}
