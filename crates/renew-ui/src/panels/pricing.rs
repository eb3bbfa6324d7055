//! Pricing section: three tier cards, the middle one highlighted.

use egui::{self, RichText, Vec2};
use renew_types::content::*;

use crate::panels::{eyebrow, primary_button};
use crate::theme::*;

/// Render the pricing cards. Returns the tier name when "Get Started" is
/// clicked; checkout lives outside this page.
pub fn pricing_panel(ui: &mut egui::Ui, tiers: &[PricingTier]) -> Option<String> {
    let mut chosen = None;

    ui.vertical_centered(|ui| {
        ui.label(RichText::new(PRICING_TITLE).color(TEXT_PRIMARY).size(30.0).strong());
        ui.label(RichText::new(PRICING_BLURB).color(TEXT_SECONDARY));
    });
    ui.add_space(16.0);

    let wide = ui.available_width() >= 760.0;
    let mut card = |ui: &mut egui::Ui, tier: &PricingTier| {
        if tier_card(ui, tier) {
            chosen = Some(tier.name.clone());
        }
    };

    if wide {
        ui.columns(tiers.len().max(1), |cols| {
            for (col, tier) in cols.iter_mut().zip(tiers) {
                card(col, tier);
            }
        });
    } else {
        for tier in tiers {
            card(ui, tier);
            ui.add_space(12.0);
        }
    }

    ui.add_space(12.0);
    ui.vertical_centered(|ui| {
        ui.label(RichText::new(PRICING_FOOTNOTE).color(TEXT_SECONDARY).small());
    });

    chosen
}

fn tier_card(ui: &mut egui::Ui, tier: &PricingTier) -> bool {
    let (fill, text, muted, stroke) = if tier.highlighted {
        (BRAND_NAVY, TEXT_ON_DARK, TEXT_ON_DARK.linear_multiply(0.7), ACCENT)
    } else {
        (BG_SURFACE, TEXT_PRIMARY, TEXT_SECONDARY, BORDER)
    };

    egui::Frame::default()
        .fill(fill)
        .stroke(egui::Stroke::new(if tier.highlighted { 2.0 } else { 1.0 }, stroke))
        .corner_radius(CARD_ROUNDING)
        .inner_margin(CARD_PADDING)
        .show(ui, |ui| {
            if tier.highlighted {
                eyebrow(ui, POPULAR_RIBBON, ACCENT);
            }
            ui.horizontal(|ui| {
                ui.label(RichText::new(&tier.name).color(text).size(20.0).strong());
                egui::Frame::default()
                    .fill(ACCENT.linear_multiply(0.15))
                    .corner_radius(PILL_ROUNDING)
                    .inner_margin(Vec2::new(8.0, 2.0))
                    .show(ui, |ui| {
                        ui.label(RichText::new(&tier.badge).color(ACCENT).small().strong());
                    });
            });
            ui.label(RichText::new(&tier.blurb).color(muted));
            ui.add_space(6.0);

            for feature in &tier.features {
                ui.horizontal(|ui| {
                    ui.label(RichText::new("✔").color(SUCCESS).strong());
                    ui.label(RichText::new(feature).color(text));
                });
            }
            ui.add_space(10.0);

            ui.horizontal(|ui| {
                ui.label(RichText::new(&tier.price).color(text).size(32.0).strong());
                ui.label(RichText::new(tier.cadence.label()).color(muted).small());
            });
            ui.add_space(6.0);

            primary_button(ui, PRICING_CTA, true).clicked()
        })
        .inner
}
