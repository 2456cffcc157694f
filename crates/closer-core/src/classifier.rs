//! Keyword intent classification for the scripted CFO.
//!
//! Matching is case-insensitive substring search on the raw message; the
//! first rule that matches wins.

use closer_types::session::Sentiment;
use log::debug;
use crate::ports::{Counterparty, Rule, Verdict};

pub const INSULT_REPLY: &str =
    "That is insulting. I'm considering rescinding this offer entirely.";
pub const VALUE_REPLY: &str =
    "I like your focus on value. Tell me more about the implementation timeline.";
pub const FALLBACK_REPLY: &str = "I've heard this before. Give me a hard reason to sign.";
/// Replaces the value reply when the user also asks to sign
pub const CLOSING_REPLY: &str = "You've convinced me. Consider the PO issued. Great negotiating.";

/// Classify a user message into a reply template and sentiment
pub fn classify(text: &str) -> Verdict {
    let lowered = text.to_lowercase();

    let (rule, reply, sentiment) = if lowered.contains("discount") && lowered.contains("50%") {
        (Rule::Insult, INSULT_REPLY, Sentiment::Bad)
    } else if lowered.contains("value") || lowered.contains("roi") {
        (Rule::Value, VALUE_REPLY, Sentiment::Good)
    } else {
        (Rule::Fallback, FALLBACK_REPLY, Sentiment::Neutral)
    };

    debug!("classified message: rule={:?} sentiment={:?}", rule, sentiment);
    Verdict {
        reply: reply.to_string(),
        sentiment,
        rule,
    }
}

/// True when the message asks to close the deal. Plain substring match, so
/// "signature" (even "no signature yet") counts as asking to sign.
pub fn asks_to_sign(text: &str) -> bool {
    text.to_lowercase().contains("sign")
}

/// The mocked AI CFO. Receives the resolved playbook context but decides
/// purely on keywords.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScriptedCfo;

impl Counterparty for ScriptedCfo {
    fn respond(&self, _context: &str, text: &str) -> Verdict {
        classify(text)
    }
}
