use egui::{self, RichText};
use closer_types::config::ChallengeConfig;
use crate::theme::*;

pub fn briefing_panel(ui: &mut egui::Ui, config: &ChallengeConfig) {
    ui.heading(
        RichText::new(format!("💼 {}", config.title))
            .color(ACCENT)
            .strong(),
    );
    ui.horizontal_wrapped(|ui| {
        ui.label(RichText::new("The Mission:").color(TEXT_PRIMARY).strong());
        ui.label(RichText::new(&config.mission).color(TEXT_SECONDARY));
    });
}
