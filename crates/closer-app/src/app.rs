//! Main egui application — composes the panels and drives the session.
//!
//! Each frame is one re-evaluation: tick the clock first, fold session
//! events into the UI state, render, then apply whatever the user did.

use std::time::Duration;

use egui::{self, CentralPanel, SidePanel, TopBottomPanel};

use closer_core::event_bus::EventBus;
use closer_core::negotiation::NegotiationSession;
use closer_types::config::ChallengeConfig;
use closer_types::session::Phase;
use closer_ui::panels::{briefing, chat, timer, verdict};
use closer_ui::state::UiState;
use closer_ui::theme;

/// How often an active clock is re-rendered
const CLOCK_REPAINT: Duration = Duration::from_secs(1);

/// What the user asked for during a frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellAction {
    Start,
    Submit(String),
    Restart,
}

/// The main application state
pub struct CloserApp {
    ui_state: UiState,
    event_bus: EventBus,
    session: NegotiationSession,
    first_frame: bool,
}

impl CloserApp {
    pub fn new(config: ChallengeConfig) -> Self {
        let event_bus = EventBus::new();
        let session = match NegotiationSession::with_config(config, event_bus.clone()) {
            Ok(session) => session,
            Err(e) => {
                log::warn!("{}. Falling back to the default challenge.", e);
                NegotiationSession::new(event_bus.clone())
            }
        };

        Self {
            ui_state: UiState::new(),
            event_bus,
            session,
            first_frame: true,
        }
    }

    pub fn session(&self) -> &NegotiationSession {
        &self.session
    }

    pub fn ui_state(&self) -> &UiState {
        &self.ui_state
    }

    /// Apply one user action to the session
    pub fn handle(&mut self, action: ShellAction) {
        match action {
            ShellAction::Start => {
                self.session.start();
            }
            ShellAction::Submit(text) => {
                if self.session.submit(&text).is_none() {
                    log::info!("message arrived after the negotiation ended; dropped");
                }
            }
            ShellAction::Restart => {
                self.session.restart();
            }
        }
        self.ui_state.sync(&self.event_bus);
    }

    /// Render one frame. Framework-agnostic so it can run headless.
    pub fn frame(&mut self, ctx: &egui::Context) {
        if self.first_frame {
            theme::apply_theme(ctx);
            self.first_frame = false;
        }

        // The clock is checked before any input is looked at
        self.session.tick();
        if self.ui_state.sync(&self.event_bus) {
            ctx.request_repaint();
        }

        let phase = self.session.phase();
        if phase == Phase::Active {
            ctx.request_repaint_after(CLOCK_REPAINT);
        }

        let mut action = None;

        // ── Sidebar: start button + countdown ────────────────
        SidePanel::left("clock_panel")
            .min_width(180.0)
            .show(ctx, |ui| {
                if timer::timer_panel(ui, phase, self.session.remaining_seconds()) {
                    action = Some(ShellAction::Start);
                }
            });

        // ── Briefing ─────────────────────────────────────────
        TopBottomPanel::top("briefing").show(ctx, |ui| {
            briefing::briefing_panel(ui, self.session.config());
        });

        // ── Final decision ───────────────────────────────────
        if phase == Phase::Over {
            TopBottomPanel::bottom("verdict").show(ctx, |ui| {
                if verdict::verdict_panel(ui, &self.ui_state, self.session.outcome()) {
                    action = Some(ShellAction::Restart);
                }
            });
        }

        // ── Transcript ───────────────────────────────────────
        CentralPanel::default().show(ctx, |ui| {
            let accepting = phase == Phase::Active;
            if let Some(text) =
                chat::chat_panel(ui, &mut self.ui_state, self.session.history(), accepting)
            {
                action = Some(ShellAction::Submit(text));
            }
        });

        if let Some(action) = action {
            self.handle(action);
            ctx.request_repaint();
        }
    }
}

/// Parse the optional JSON config handed over by the host page.
/// Anything unusable falls back to the default challenge.
pub fn load_config(raw: Option<&str>) -> ChallengeConfig {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return ChallengeConfig::default();
    };
    match ChallengeConfig::from_json(raw) {
        Ok(config) => {
            log::info!("Challenge config loaded ({}s limit)", config.time_limit_secs);
            config
        }
        Err(e) => {
            log::warn!("Ignoring challenge config: {}", e);
            ChallengeConfig::default()
        }
    }
}

#[cfg(target_arch = "wasm32")]
impl eframe::App for CloserApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.frame(ctx);
    }
}
