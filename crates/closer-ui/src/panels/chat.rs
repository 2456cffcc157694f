//! Chat panel — the negotiation transcript and the input field.

use egui::{self, Align, Layout, RichText, ScrollArea, Vec2};
use closer_types::message::{ChatMessage, Role};
use crate::state::UiState;
use crate::theme::*;

/// Render the transcript. Input is only offered while `accepting` is true.
/// Returns Some(message) when the user submits.
pub fn chat_panel(
    ui: &mut egui::Ui,
    state: &mut UiState,
    history: &[ChatMessage],
    accepting: bool,
) -> Option<String> {
    let mut submitted = None;

    egui::Frame::default()
        .fill(BG_PRIMARY)
        .inner_margin(PANEL_PADDING)
        .show(ui, |ui| {
            ui.vertical(|ui| {
                // Header
                ui.horizontal(|ui| {
                    ui.heading(
                        RichText::new("Boardroom")
                            .color(TEXT_PRIMARY)
                            .strong(),
                    );
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        ui.label(
                            RichText::new(&state.status_text)
                                .color(sentiment_color(state.last_sentiment))
                                .small(),
                        );
                    });
                });

                ui.separator();

                let input_height = if accepting { 60.0 } else { 0.0 };
                let available_height = ui.available_height() - input_height;
                ScrollArea::vertical()
                    .max_height(available_height)
                    .auto_shrink([false, false])
                    .stick_to_bottom(true)
                    .show(ui, |ui| {
                        for message in history {
                            render_message(ui, message);
                            ui.add_space(4.0);
                        }
                    });

                if !accepting {
                    return;
                }

                ui.add_space(8.0);

                ui.horizontal(|ui| {
                    let input = egui::TextEdit::singleline(&mut state.input_text)
                        .hint_text("Enter your negotiation tactic...")
                        .desired_width(ui.available_width() - 70.0)
                        .font(egui::FontId::proportional(14.0));

                    let response = ui.add(input);

                    let send_enabled = !state.input_text.trim().is_empty();
                    let send_btn = ui.add_enabled(
                        send_enabled,
                        egui::Button::new(RichText::new("Send").color(TEXT_PRIMARY))
                            .fill(if send_enabled { ACCENT } else { BG_SURFACE })
                            .corner_radius(PANEL_ROUNDING)
                            .min_size(Vec2::new(60.0, 0.0)),
                    );

                    // Submit on Enter or button click
                    let enter = response.lost_focus()
                        && ui.input(|i| i.key_pressed(egui::Key::Enter));
                    if enter || send_btn.clicked() {
                        submitted = state.take_input();
                        response.request_focus();
                    }
                });
            });
        });

    submitted
}

fn render_message(ui: &mut egui::Ui, message: &ChatMessage) {
    let (label_color, bg) = match message.role {
        Role::User => (ACCENT, BG_SECONDARY),
        Role::Counterparty => (TEXT_SECONDARY, BG_SURFACE),
    };

    egui::Frame::default()
        .fill(bg)
        .corner_radius(PANEL_ROUNDING)
        .inner_margin(8.0)
        .show(ui, |ui| {
            ui.label(
                RichText::new(message.role.label())
                    .color(label_color)
                    .strong()
                    .small(),
            );
            ui.label(RichText::new(&message.text).color(TEXT_PRIMARY));
        });
}
