use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::session::{Outcome, Sentiment};

/// Identifies one attempt from `start` to its outcome
pub type AttemptId = Uuid;

/// Events emitted by the negotiation session.
/// UI subscribes to these for reactive updates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum NegotiationEvent {
    /// A new attempt began and the clock is running
    Started { attempt_id: AttemptId },

    /// The user's message was accepted into the transcript
    UserSpoke { text: String },

    /// The CFO answered
    CounterpartyReplied { text: String, sentiment: Sentiment },

    /// The purchase order was issued
    DealIssued,

    /// The deal was rescinded (timeout, or offense)
    Rescinded { outcome: Outcome },

    /// The finished attempt was cleared, awaiting the next start
    Restarted,
}
