//! UI theme constants

use egui::{Color32, CornerRadius, Stroke, Vec2};
use closer_types::session::Sentiment;

pub const BG_PRIMARY: Color32 = Color32::from_rgb(18, 22, 28);
pub const BG_SECONDARY: Color32 = Color32::from_rgb(32, 38, 46);
pub const BG_SURFACE: Color32 = Color32::from_rgb(46, 54, 64);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(230, 232, 235);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(150, 158, 170);
pub const ACCENT: Color32 = Color32::from_rgb(212, 175, 55);
pub const SUCCESS: Color32 = Color32::from_rgb(34, 197, 94);
pub const ERROR: Color32 = Color32::from_rgb(239, 68, 68);
pub const WARNING: Color32 = Color32::from_rgb(234, 179, 8);
pub const SUCCESS_BG: Color32 = Color32::from_rgb(18, 48, 30);
pub const ERROR_BG: Color32 = Color32::from_rgb(56, 20, 20);

pub const PANEL_ROUNDING: CornerRadius = CornerRadius::same(6);
pub const PANEL_PADDING: Vec2 = Vec2::new(12.0, 8.0);

/// Seconds left at which the clock turns red
pub const CLOCK_DANGER_SECS: u64 = 20;

pub fn sentiment_color(sentiment: Option<Sentiment>) -> Color32 {
    match sentiment {
        Some(Sentiment::Good) => SUCCESS,
        Some(Sentiment::Bad) => ERROR,
        Some(Sentiment::Neutral) => WARNING,
        None => TEXT_SECONDARY,
    }
}

pub fn clock_color(remaining_secs: u64) -> Color32 {
    if remaining_secs <= CLOCK_DANGER_SECS {
        ERROR
    } else {
        TEXT_PRIMARY
    }
}

/// Apply the boardroom theme to an egui context
pub fn apply_theme(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();

    style.visuals.dark_mode = true;
    style.visuals.panel_fill = BG_PRIMARY;
    style.visuals.window_fill = BG_SECONDARY;

    style.visuals.widgets.inactive.bg_fill = BG_SURFACE;
    style.visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, TEXT_SECONDARY);
    style.visuals.widgets.hovered.bg_fill = BG_SURFACE;
    style.visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, TEXT_PRIMARY);
    style.visuals.widgets.active.bg_fill = ACCENT;
    style.visuals.widgets.active.fg_stroke = Stroke::new(1.0, BG_PRIMARY);

    style.visuals.selection.bg_fill = ACCENT.linear_multiply(0.4);
    style.visuals.selection.stroke = Stroke::new(1.0, ACCENT);

    style.spacing.item_spacing = Vec2::new(8.0, 6.0);

    ctx.set_style(style);
}
