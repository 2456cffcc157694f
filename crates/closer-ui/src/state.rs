//! UI-level state that drives rendering.
//! The transcript and clock are read straight from the session; this holds
//! only what the shell adds on top, updated each frame by draining the EventBus.

use closer_core::event_bus::EventBus;
use closer_types::event::NegotiationEvent;
use closer_types::session::{Outcome, Sentiment};
use log::debug;

pub const TIMEOUT_NOTICE: &str = "⏰ Time is up! The CFO walked out of the room.";
pub const ISSUED_NOTICE: &str = "The CFO signed. Purchase order issued!";

/// State visible to UI panels
pub struct UiState {
    /// Input field content
    pub input_text: String,
    /// Status line text
    pub status_text: String,
    /// Banner shown above the transcript once the deal is decided
    pub notice: Option<Notice>,
    /// Set when the PO was issued; drives the celebration row
    pub celebrate: bool,
    /// Sentiment of the CFO's latest reply
    pub last_sentiment: Option<Sentiment>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub text: String,
    pub success: bool,
}

impl UiState {
    pub fn new() -> Self {
        Self {
            input_text: String::new(),
            status_text: "Ready".to_string(),
            notice: None,
            celebrate: false,
            last_sentiment: None,
        }
    }

    /// Process events from the EventBus and update UI state
    pub fn process_events(&mut self, events: Vec<NegotiationEvent>) {
        for event in events {
            debug!("ui event: {:?}", event);
            match event {
                NegotiationEvent::Started { .. } => {
                    self.clear_attempt();
                    self.status_text = "Negotiating".to_string();
                }
                NegotiationEvent::UserSpoke { .. } => {}
                NegotiationEvent::CounterpartyReplied { sentiment, .. } => {
                    self.last_sentiment = Some(sentiment);
                    self.status_text = mood_text(sentiment).to_string();
                }
                NegotiationEvent::DealIssued => {
                    self.celebrate = true;
                    self.status_text = "Deal closed".to_string();
                    self.notice = Some(Notice {
                        text: ISSUED_NOTICE.to_string(),
                        success: true,
                    });
                }
                NegotiationEvent::Rescinded { outcome } => {
                    self.status_text = "Deal rescinded".to_string();
                    let text = match outcome {
                        Outcome::RescindedTimeout => TIMEOUT_NOTICE.to_string(),
                        other => other.status_label().to_string(),
                    };
                    self.notice = Some(Notice { text, success: false });
                }
                NegotiationEvent::Restarted => {
                    self.clear_attempt();
                    self.status_text = "Ready".to_string();
                }
            }
        }
    }

    /// Drain the bus into this state. Returns true if anything changed,
    /// so the caller knows to repaint.
    pub fn sync(&mut self, bus: &EventBus) -> bool {
        let events = bus.drain();
        if events.is_empty() {
            return false;
        }
        self.process_events(events);
        true
    }

    /// Take the trimmed input for submission, clearing the field.
    /// `None` when there is nothing to send.
    pub fn take_input(&mut self) -> Option<String> {
        let text = self.input_text.trim().to_string();
        self.input_text.clear();
        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }

    fn clear_attempt(&mut self) {
        self.input_text.clear();
        self.notice = None;
        self.celebrate = false;
        self.last_sentiment = None;
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}

fn mood_text(sentiment: Sentiment) -> &'static str {
    match sentiment {
        Sentiment::Good => "The CFO is warming up",
        Sentiment::Neutral => "The CFO is unconvinced",
        Sentiment::Bad => "The CFO is offended",
    }
}
