//! Coach demo: blurb with shortcut questions beside the chat window.

use egui::{self, Align, Layout, RichText, ScrollArea, Vec2};
use renew_types::content::*;
use renew_types::message::{CalloutTone, Emphasis, Message, MessageContent, RichBlock, Role, Span};

use crate::nav::NavTarget;
use crate::panels::{eyebrow, primary_button};
use crate::state::{PageAction, UiState};
use crate::theme::*;

/// Render the coach section. Returns an action when the user asks
/// something or jumps to pricing.
pub fn coach_panel(ui: &mut egui::Ui, state: &mut UiState, messages: &[Message]) -> Option<PageAction> {
    let mut action = None;
    let wide = ui.available_width() >= 760.0;

    egui::Frame::default()
        .fill(BG_DARK)
        .corner_radius(CARD_ROUNDING)
        .inner_margin(CARD_PADDING)
        .show(ui, |ui| {
            if wide {
                ui.columns(2, |cols| {
                    if let Some(a) = intro(&mut cols[0], state) {
                        action = Some(a);
                    }
                    if let Some(a) = chat_window(&mut cols[1], state, messages) {
                        action = Some(a);
                    }
                });
            } else {
                if let Some(a) = intro(ui, state) {
                    action = Some(a);
                }
                ui.add_space(16.0);
                if let Some(a) = chat_window(ui, state, messages) {
                    action = Some(a);
                }
            }
        });

    action
}

fn intro(ui: &mut egui::Ui, state: &UiState) -> Option<PageAction> {
    let mut action = None;

    ui.label(RichText::new(COACH_TITLE).color(TEXT_ON_DARK).size(28.0).strong());
    ui.label(RichText::new(COACH_BLURB).color(TEXT_ON_DARK.linear_multiply(0.75)));
    ui.add_space(12.0);

    for shortcut in SHORTCUTS {
        let button = egui::Button::new(RichText::new(shortcut.label).color(TEXT_ON_DARK))
            .fill(TEXT_ON_DARK.linear_multiply(0.1))
            .stroke(egui::Stroke::new(1.0, TEXT_ON_DARK.linear_multiply(0.2)))
            .corner_radius(PILL_ROUNDING);
        if ui.add_enabled(!state.responding, button).clicked() {
            action = Some(PageAction::Ask(shortcut.question.to_string()));
        }
    }

    ui.add_space(12.0);
    ui.label(RichText::new(COACH_FOOTNOTE).color(TEXT_ON_DARK.linear_multiply(0.5)).small());

    action
}

fn chat_window(ui: &mut egui::Ui, state: &mut UiState, messages: &[Message]) -> Option<PageAction> {
    let mut action = None;

    egui::Frame::default()
        .fill(BG_PAGE)
        .corner_radius(CARD_ROUNDING)
        .inner_margin(Vec2::new(16.0, 12.0))
        .show(ui, |ui| {
            // Header
            ui.horizontal(|ui| {
                ui.label(RichText::new(COACH_HEADER).color(TEXT_PRIMARY).strong());
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    let color = if state.responding { BRAND_AMBER } else { SUCCESS };
                    ui.label(RichText::new(&state.status_text).color(color).small());
                    ui.label(RichText::new("●").color(color).small());
                });
            });
            ui.separator();

            ScrollArea::vertical()
                .id_salt("coach_messages")
                .max_height(360.0)
                .auto_shrink([false, false])
                .stick_to_bottom(true)
                .show(ui, |ui| {
                    for message in messages {
                        render_message(ui, message);
                        ui.add_space(6.0);
                    }
                    if state.responding {
                        ui.label(RichText::new(COACH_THINKING).color(TEXT_SECONDARY).italics().small());
                    }
                });

            ui.add_space(8.0);

            // Input area
            ui.horizontal(|ui| {
                let input = egui::TextEdit::singleline(&mut state.input_text)
                    .hint_text(COACH_INPUT_HINT)
                    .desired_width(ui.available_width() - 130.0)
                    .font(egui::FontId::proportional(15.0));
                let response = ui.add(input);

                let send_btn = primary_button(ui, COACH_SEND, !state.responding);

                // Submit on Enter or button click; the session decides
                // whether blank or early input counts
                let enter = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                if enter || send_btn.clicked() {
                    action = Some(PageAction::Ask(state.input_text.clone()));
                    response.request_focus();
                }
            });

            ui.label(RichText::new(COACH_SECURE_NOTE).color(TEXT_SECONDARY).small());
            ui.add_space(4.0);
            if ui
                .link(RichText::new(format!("{} →", COACH_FULL_EXPERIENCE)).color(ACCENT).strong())
                .clicked()
            {
                action = Some(PageAction::Navigate(NavTarget::Pricing));
            }
        });

    action
}

fn render_message(ui: &mut egui::Ui, message: &Message) {
    let (layout, fill, text_color) = match message.role {
        Role::User => (Layout::right_to_left(Align::Min), INDIGO, TEXT_ON_DARK),
        Role::Assistant => (Layout::left_to_right(Align::Min), BG_SURFACE, TEXT_PRIMARY),
    };

    ui.with_layout(layout, |ui| {
        let max_width = ui.available_width() * 0.85;
        egui::Frame::default()
            .fill(fill)
            .stroke(egui::Stroke::new(1.0, if message.role == Role::User { fill } else { BORDER }))
            .corner_radius(BUBBLE_ROUNDING)
            .inner_margin(Vec2::new(16.0, 12.0))
            .show(ui, |ui| {
                ui.set_max_width(max_width);
                ui.with_layout(Layout::top_down(Align::Min), |ui| {
                    render_content(ui, &message.content, text_color);
                });
            });
    });
}

fn render_content(ui: &mut egui::Ui, content: &MessageContent, color: egui::Color32) {
    match content {
        MessageContent::Text(text) => {
            ui.label(RichText::new(text).color(color));
        }
        MessageContent::Rich(blocks) => {
            for block in blocks {
                render_block(ui, block, color);
                ui.add_space(6.0);
            }
        }
    }
}

fn render_block(ui: &mut egui::Ui, block: &RichBlock, color: egui::Color32) {
    match block {
        RichBlock::Paragraph { spans } => {
            ui.horizontal_wrapped(|ui| {
                ui.spacing_mut().item_spacing.x = 0.0;
                for span in spans {
                    ui.label(span_text(span, color));
                }
            });
        }
        RichBlock::Callout { label, body, tone } => {
            let bar = match tone {
                CalloutTone::Primary => ACCENT,
                CalloutTone::Secondary => INDIGO,
            };
            egui::Frame::default()
                .fill(BG_MUTED)
                .corner_radius(egui::CornerRadius::same(8))
                .inner_margin(Vec2::new(12.0, 8.0))
                .stroke(egui::Stroke::new(1.0, bar))
                .show(ui, |ui| {
                    eyebrow(ui, label, TEXT_SECONDARY);
                    let body = RichText::new(body).color(color);
                    ui.label(match tone {
                        CalloutTone::Primary => body.italics(),
                        CalloutTone::Secondary => body.strong(),
                    });
                });
        }
        RichBlock::CallToAction { text } => {
            ui.label(RichText::new(text).color(ACCENT).strong());
        }
    }
}

fn span_text(span: &Span, color: egui::Color32) -> RichText {
    let text = RichText::new(&span.text).color(color);
    match span.emphasis {
        Emphasis::Plain => text,
        Emphasis::Strong => text.strong(),
        Emphasis::Italic => text.italics(),
        Emphasis::Accent => text.color(ACCENT).strong(),
    }
}
