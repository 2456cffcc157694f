//! Sidebar — start button and the countdown.

use egui::{self, RichText, Vec2};
use closer_types::session::Phase;
use crate::theme::*;

/// Render the sidebar. Returns true when the user asks to start.
pub fn timer_panel(ui: &mut egui::Ui, phase: Phase, remaining_secs: u64) -> bool {
    let mut start_clicked = false;

    egui::Frame::default()
        .fill(BG_SECONDARY)
        .inner_margin(PANEL_PADDING)
        .corner_radius(PANEL_ROUNDING)
        .show(ui, |ui| {
            let can_start = phase != Phase::Active;
            let width = ui.available_width();
            let start_btn = ui.add_enabled(
                can_start,
                egui::Button::new(RichText::new("🚀 Start Negotiation").color(TEXT_PRIMARY))
                    .fill(if can_start { ACCENT } else { BG_SURFACE })
                    .corner_radius(PANEL_ROUNDING)
                    .min_size(Vec2::new(width, 32.0)),
            );
            if start_btn.clicked() {
                start_clicked = true;
            }

            if phase == Phase::Active {
                ui.add_space(12.0);
                ui.label(RichText::new("Time Remaining").color(TEXT_SECONDARY).small());
                ui.label(
                    RichText::new(format!("{}s", remaining_secs))
                        .color(clock_color(remaining_secs))
                        .size(32.0)
                        .strong(),
                );
            }
        });

    start_clicked
}
