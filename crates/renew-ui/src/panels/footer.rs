//! Footer: logo, tagline, legal links.

use egui::{self, RichText};
use renew_types::content::*;

use crate::panels::logo;
use crate::theme::*;

pub fn footer(ui: &mut egui::Ui) {
    ui.vertical_centered(|ui| {
        logo(ui, true);
        ui.label(RichText::new(FOOTER_TAGLINE).color(TEXT_SECONDARY).small().strong());
        ui.horizontal(|ui| {
            for link in FOOTER_LINKS {
                // Placeholder targets until the legal pages exist
                let _ = ui.link(RichText::new(*link).color(TEXT_SECONDARY).small());
            }
        });
        ui.label(RichText::new(FOOTER_COPYRIGHT).color(TEXT_SECONDARY.linear_multiply(0.7)).small());
    });
}
