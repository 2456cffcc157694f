//! End-of-game banner with the final decision and a retry button.

use egui::{self, RichText};
use closer_types::session::Outcome;
use crate::state::UiState;
use crate::theme::*;

/// Render the final decision. Returns true when the user clicks "Try Again".
pub fn verdict_panel(ui: &mut egui::Ui, state: &UiState, outcome: Outcome) -> bool {
    let (fg, bg) = if outcome.is_success() {
        (SUCCESS, SUCCESS_BG)
    } else {
        (ERROR, ERROR_BG)
    };

    let mut try_again = false;
    egui::Frame::default()
        .fill(bg)
        .corner_radius(PANEL_ROUNDING)
        .inner_margin(PANEL_PADDING)
        .show(ui, |ui| {
            if let Some(notice) = &state.notice {
                ui.label(RichText::new(&notice.text).color(fg));
            }
            if state.celebrate {
                ui.label(RichText::new("🎈 🎉 🎈 🎉 🎈").size(24.0));
            }
            ui.label(
                RichText::new(format!("FINAL DECISION: {}", outcome.status_label()))
                    .color(fg)
                    .strong()
                    .size(18.0),
            );
            ui.add_space(6.0);
            if ui.button(RichText::new("Try Again").color(TEXT_PRIMARY)).clicked() {
                try_again = true;
            }
        });

    try_again
}
