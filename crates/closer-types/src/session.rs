use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::message::ChatMessage;
use crate::Result;

/// Where the negotiation is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    NotStarted,
    Active,
    Over,
}

/// How an attempt ended. Anything but `Pending` means the session is over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Outcome {
    #[default]
    Pending,
    Issued,
    RescindedTimeout,
    /// Declared for the "too aggressive" ending; no rule currently reaches it
    RescindedOffense,
}

impl Outcome {
    pub fn status_label(&self) -> &'static str {
        match self {
            Outcome::Pending => "Pending",
            Outcome::Issued => "ISSUED ✅",
            Outcome::RescindedTimeout => "RESCINDED (Out of Time)",
            Outcome::RescindedOffense => "RESCINDED (Offense)",
        }
    }

    pub fn is_over(&self) -> bool {
        !matches!(self, Outcome::Pending)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Issued)
    }
}

/// Label the classifier puts on a user message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Good,
    Neutral,
    Bad,
}

/// Read-only projection of a session for the presentation shell
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    /// Present once an attempt has started
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attempt_id: Option<Uuid>,
    pub phase: Phase,
    pub remaining_seconds: u64,
    pub history: Vec<ChatMessage>,
    pub is_over: bool,
    pub outcome: Outcome,
}

impl SessionSnapshot {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
