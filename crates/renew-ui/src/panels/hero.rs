//! Hero section: headline, skill-map CTA and the lead-magnet email form.

use egui::{self, RichText, Vec2};
use renew_types::content::*;

use crate::panels::{logo, primary_button};
use crate::state::{PageAction, UiState};
use crate::nav::NavTarget;
use crate::theme::*;

pub fn hero_panel(ui: &mut egui::Ui, state: &mut UiState, hero_image_url: &str) -> Option<PageAction> {
    let mut action = None;

    ui.horizontal(|ui| {
        logo(ui, true);
        ui.label(RichText::new(BRAND_TAGLINE).color(TEXT_SECONDARY).small().strong());
    });
    ui.add_space(16.0);

    hero_image(ui, hero_image_url);
    ui.add_space(20.0);

    ui.label(RichText::new(HERO_HEADLINE).color(TEXT_PRIMARY).size(40.0).strong());
    ui.label(RichText::new(HERO_HEADLINE_ACCENT).color(ACCENT).size(40.0).strong());
    ui.add_space(8.0);
    ui.label(RichText::new(HERO_SUBHEAD).color(TEXT_SECONDARY).size(17.0));
    ui.label(RichText::new(HERO_KICKER).color(TEXT_PRIMARY).strong());
    ui.add_space(12.0);

    if primary_button(ui, &format!("{}  →", HERO_CTA), true).clicked() {
        action = Some(PageAction::Navigate(NavTarget::Coach));
    }
    ui.add_space(16.0);

    if let Some(a) = email_capture(ui, state) {
        action = Some(a);
    }

    action
}

/// Placeholder tile for the decorative photo; egui has no remote image
/// loader installed, so the URL only surfaces on hover.
fn hero_image(ui: &mut egui::Ui, url: &str) {
    let width = ui.available_width();
    let response = egui::Frame::default()
        .fill(BRAND_NAVY.linear_multiply(0.15))
        .corner_radius(CARD_ROUNDING)
        .inner_margin(CARD_PADDING)
        .show(ui, |ui| {
            ui.set_min_size(Vec2::new(width - CARD_PADDING.x * 2.0, 180.0));
            ui.with_layout(egui::Layout::bottom_up(egui::Align::Min), |ui| {
                egui::Frame::default()
                    .fill(BG_SURFACE)
                    .corner_radius(PILL_ROUNDING)
                    .inner_margin(Vec2::new(12.0, 6.0))
                    .show(ui, |ui| {
                        ui.horizontal(|ui| {
                            ui.label(RichText::new("●").color(SUCCESS).small());
                            ui.label(RichText::new(HERO_BADGE).color(TEXT_PRIMARY).small().strong());
                        });
                    });
            });
        })
        .response;
    response.on_hover_text(format!("{}\n{}", HERO_IMAGE_ALT, url));
}

fn email_capture(ui: &mut egui::Ui, state: &mut UiState) -> Option<PageAction> {
    let mut action = None;

    egui::Frame::default()
        .fill(BG_SURFACE)
        .stroke(egui::Stroke::new(1.0, BORDER))
        .corner_radius(CARD_ROUNDING)
        .inner_margin(CARD_PADDING)
        .show(ui, |ui| {
            if state.email.is_submitted() {
                ui.label(RichText::new("✔").color(SUCCESS).size(28.0));
                ui.label(RichText::new(EMAIL_CONFIRM_TITLE).color(TEXT_PRIMARY).size(20.0).strong());
                ui.label(RichText::new(EMAIL_CONFIRM_BODY).color(TEXT_SECONDARY));
                return;
            }

            ui.label(RichText::new(LEAD_MAGNET_LABEL).color(TEXT_PRIMARY).strong());
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                let input = egui::TextEdit::singleline(&mut state.email.email)
                    .hint_text(EMAIL_PLACEHOLDER)
                    .desired_width(ui.available_width() - 150.0);
                let response = ui.add(input);
                if response.changed() {
                    state.email_error = None;
                }

                let enter = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                if primary_button(ui, EMAIL_SUBMIT, true).clicked() || enter {
                    action = Some(PageAction::SubmitEmail);
                }
            });

            if let Some(err) = &state.email_error {
                ui.label(RichText::new(err).color(ACCENT).small());
            }
        });

    action
}
