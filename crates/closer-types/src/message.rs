use serde::{Deserialize, Serialize};

/// Who said a line in the negotiation transcript
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    /// The scripted CFO on the other side of the table
    Counterparty,
}

impl Role {
    /// Short speaker label used by the transcript view
    pub fn label(&self) -> &'static str {
        match self {
            Role::User => "You",
            Role::Counterparty => "CFO",
        }
    }
}

/// A single line in the transcript. Immutable once appended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub text: String,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            text: text.into(),
        }
    }

    pub fn counterparty(text: impl Into<String>) -> Self {
        Self {
            role: Role::Counterparty,
            text: text.into(),
        }
    }
}
