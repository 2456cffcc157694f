//! Port traits — the boundary between the state machine and the things it
//! consults but does not own: the wall clock and the counterparty's reasoning.
//!
//! The session only depends on these traits. Production wiring uses
//! `SystemClock` and `classifier::ScriptedCfo`; tests substitute their own.

use chrono::{DateTime, Utc};
use serde::Serialize;
use closer_types::session::Sentiment;

// ─── Clock Port ──────────────────────────────────────────────

/// Source of "now". Elapsed time is always derived from it, never stored.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock. `chrono`'s `wasmbind` feature makes this work in the browser.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

// ─── Counterparty Port ───────────────────────────────────────

/// Which classification rule produced a verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Rule {
    /// Demanded a 50% discount
    Insult,
    /// Talked about value or ROI
    Value,
    /// Nothing recognised
    Fallback,
}

/// The counterparty's answer to one user message
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Verdict {
    pub reply: String,
    pub sentiment: Sentiment,
    pub rule: Rule,
}

pub trait Counterparty {
    /// Answer `text`, given the advisory `context` resolved for it.
    fn respond(&self, context: &str, text: &str) -> Verdict;
}
