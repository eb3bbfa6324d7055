//! Brand palette and egui style

use egui::{Color32, CornerRadius, Stroke, Vec2};

pub const BG_PAGE: Color32 = Color32::from_rgb(248, 250, 252);
pub const BG_SURFACE: Color32 = Color32::WHITE;
pub const BG_MUTED: Color32 = Color32::from_rgb(241, 245, 249);
pub const BG_DARK: Color32 = Color32::from_rgb(15, 23, 42);
pub const BRAND_NAVY: Color32 = Color32::from_rgb(30, 58, 138);
pub const BRAND_AMBER: Color32 = Color32::from_rgb(245, 158, 11);
pub const ACCENT: Color32 = Color32::from_rgb(255, 126, 51);
pub const INDIGO: Color32 = Color32::from_rgb(88, 80, 236);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(15, 23, 42);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(100, 116, 139);
pub const TEXT_ON_DARK: Color32 = Color32::WHITE;
pub const BORDER: Color32 = Color32::from_rgb(226, 232, 240);
pub const SUCCESS: Color32 = Color32::from_rgb(34, 197, 94);

pub const CARD_ROUNDING: CornerRadius = CornerRadius::same(16);
pub const BUBBLE_ROUNDING: CornerRadius = CornerRadius::same(14);
pub const PILL_ROUNDING: CornerRadius = CornerRadius::same(255);
pub const CARD_PADDING: Vec2 = Vec2::new(24.0, 20.0);

/// Narrow column on phones, wide column on desktop
pub fn content_width(available: f32) -> f32 {
    if available < 760.0 {
        available.min(540.0)
    } else {
        available.min(1000.0)
    }
}

/// Apply the light brand theme to an egui context
pub fn apply_theme(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();

    style.visuals = egui::Visuals::light();
    style.visuals.panel_fill = BG_PAGE;
    style.visuals.window_fill = BG_SURFACE;
    style.visuals.extreme_bg_color = BG_SURFACE;

    style.visuals.widgets.inactive.bg_fill = BG_MUTED;
    style.visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, TEXT_PRIMARY);
    style.visuals.widgets.hovered.bg_fill = BG_MUTED;
    style.visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, TEXT_PRIMARY);
    style.visuals.widgets.active.bg_fill = ACCENT;
    style.visuals.widgets.active.fg_stroke = Stroke::new(1.0, TEXT_ON_DARK);

    style.visuals.selection.bg_fill = ACCENT.linear_multiply(0.3);
    style.visuals.selection.stroke = Stroke::new(1.0, ACCENT);

    style.spacing.item_spacing = Vec2::new(10.0, 8.0);
    style.spacing.button_padding = Vec2::new(16.0, 10.0);

    ctx.set_style(style);
}
