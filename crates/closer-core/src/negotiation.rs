//! Negotiation session — the timed state machine.
//!
//! NotStarted → Active → Over, with `restart` returning Over to NotStarted.
//! Every handler is total: a call in the wrong phase is logged and ignored,
//! leaving state untouched. The timer is pulled, not pushed: remaining time
//! is recomputed from the clock whenever it is asked for, and `tick` runs
//! ahead of any submitted text so late input is never honoured.

use std::rc::Rc;

use chrono::{DateTime, Utc};
use log::{debug, info};
use serde::Serialize;
use uuid::Uuid;

use closer_types::{
    CloserError, Result,
    config::ChallengeConfig,
    event::NegotiationEvent,
    message::ChatMessage,
    session::{Outcome, Phase, Sentiment, SessionSnapshot},
};
use crate::classifier::{asks_to_sign, ScriptedCfo, CLOSING_REPLY};
use crate::event_bus::EventBus;
use crate::playbook;
use crate::ports::{Clock, Counterparty, Rule, SystemClock};

/// What happened on one accepted submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TurnResult {
    /// Playbook context resolved for the message
    pub context: String,
    pub sentiment: Sentiment,
    pub rule: Rule,
    /// The line the CFO actually said (closing line if the deal was issued)
    pub reply: String,
    pub outcome: Outcome,
}

pub struct NegotiationSession {
    config: ChallengeConfig,
    event_bus: EventBus,
    clock: Rc<dyn Clock>,
    counterparty: Box<dyn Counterparty>,
    attempt_id: Option<Uuid>,
    started_at: Option<DateTime<Utc>>,
    history: Vec<ChatMessage>,
    outcome: Outcome,
}

impl NegotiationSession {
    /// Default challenge against the wall clock and the scripted CFO
    pub fn new(event_bus: EventBus) -> Self {
        Self::assemble(
            ChallengeConfig::default(),
            event_bus,
            Rc::new(SystemClock),
            Box::new(ScriptedCfo),
        )
    }

    pub fn with_config(config: ChallengeConfig, event_bus: EventBus) -> Result<Self> {
        Self::with_ports(config, event_bus, Rc::new(SystemClock), Box::new(ScriptedCfo))
    }

    pub fn with_ports(
        config: ChallengeConfig,
        event_bus: EventBus,
        clock: Rc<dyn Clock>,
        counterparty: Box<dyn Counterparty>,
    ) -> Result<Self> {
        config.validate()?;
        Ok(Self::assemble(config, event_bus, clock, counterparty))
    }

    fn assemble(
        config: ChallengeConfig,
        event_bus: EventBus,
        clock: Rc<dyn Clock>,
        counterparty: Box<dyn Counterparty>,
    ) -> Self {
        Self {
            config,
            event_bus,
            clock,
            counterparty,
            attempt_id: None,
            started_at: None,
            history: Vec::new(),
            outcome: Outcome::Pending,
        }
    }

    // ─── Projections ─────────────────────────────────────────

    pub fn phase(&self) -> Phase {
        match self.started_at {
            None => Phase::NotStarted,
            Some(_) if self.outcome.is_over() => Phase::Over,
            Some(_) => Phase::Active,
        }
    }

    pub fn config(&self) -> &ChallengeConfig {
        &self.config
    }

    pub fn history(&self) -> &[ChatMessage] {
        &self.history
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_over()
    }

    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        self.started_at
    }

    pub fn attempt_id(&self) -> Option<Uuid> {
        self.attempt_id
    }

    /// Seconds left on the clock, derived from now. The full limit before
    /// the first start.
    pub fn remaining_seconds(&self) -> u64 {
        let limit = self.config.time_limit_secs;
        match self.started_at {
            None => limit,
            Some(started) => {
                let elapsed = (self.clock.now() - started).num_seconds().max(0) as u64;
                limit.saturating_sub(elapsed)
            }
        }
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            attempt_id: self.attempt_id,
            phase: self.phase(),
            remaining_seconds: self.remaining_seconds(),
            history: self.history.clone(),
            is_over: self.is_over(),
            outcome: self.outcome,
        }
    }

    // ─── Event handlers ──────────────────────────────────────

    /// Begin a fresh attempt. Valid from NotStarted or Over.
    pub fn start(&mut self) -> Phase {
        if self.phase() == Phase::Active {
            debug!("start ignored: attempt already running");
            return Phase::Active;
        }

        let attempt_id = Uuid::new_v4();
        self.attempt_id = Some(attempt_id);
        self.started_at = Some(self.clock.now());
        self.outcome = Outcome::Pending;
        self.history.clear();
        self.history
            .push(ChatMessage::counterparty(self.config.opening_line()));

        info!(
            "negotiation {} started ({}s on the clock)",
            attempt_id, self.config.time_limit_secs
        );
        self.event_bus.emit(NegotiationEvent::Started { attempt_id });
        Phase::Active
    }

    /// Re-evaluate the clock. Rescinds the deal once time has run out.
    /// Repeated ticks after that are no-ops.
    pub fn tick(&mut self) -> Phase {
        if self.phase() != Phase::Active {
            return self.phase();
        }
        if self.remaining_seconds() == 0 {
            self.outcome = Outcome::RescindedTimeout;
            info!("negotiation {:?} rescinded: out of time", self.attempt_id);
            self.event_bus.emit(NegotiationEvent::Rescinded {
                outcome: Outcome::RescindedTimeout,
            });
        }
        self.phase()
    }

    /// Submit a user message. Ignored (returns `None`) unless the session is
    /// still Active after the clock has been checked.
    pub fn submit(&mut self, text: &str) -> Option<TurnResult> {
        match self.try_submit(text) {
            Ok(turn) => Some(turn),
            Err(e) => {
                debug!("submit ignored: {}", e);
                None
            }
        }
    }

    /// Like `submit`, but reports a wrong-phase call as `InvalidTransition`.
    pub fn try_submit(&mut self, text: &str) -> Result<TurnResult> {
        let phase = self.tick();
        if phase != Phase::Active {
            return Err(CloserError::InvalidTransition {
                operation: "submit",
                phase,
            });
        }

        self.history.push(ChatMessage::user(text));
        self.event_bus.emit(NegotiationEvent::UserSpoke {
            text: text.to_string(),
        });

        let context = playbook::resolve(text);
        let verdict = self.counterparty.respond(&context, text);

        let mut reply = verdict.reply;
        if asks_to_sign(text) && verdict.sentiment == Sentiment::Good {
            reply = CLOSING_REPLY.to_string();
            self.outcome = Outcome::Issued;
        }

        self.history.push(ChatMessage::counterparty(reply.clone()));
        self.event_bus.emit(NegotiationEvent::CounterpartyReplied {
            text: reply.clone(),
            sentiment: verdict.sentiment,
        });

        if self.outcome == Outcome::Issued {
            info!("negotiation {:?} closed: PO issued", self.attempt_id);
            self.event_bus.emit(NegotiationEvent::DealIssued);
        }

        Ok(TurnResult {
            context,
            sentiment: verdict.sentiment,
            rule: verdict.rule,
            reply,
            outcome: self.outcome,
        })
    }

    /// Clear a finished attempt. Valid only from Over.
    pub fn restart(&mut self) -> Phase {
        if self.phase() != Phase::Over {
            debug!("restart ignored: session is {:?}", self.phase());
            return self.phase();
        }

        info!("negotiation {:?} cleared for another try", self.attempt_id);
        self.attempt_id = None;
        self.started_at = None;
        self.history.clear();
        self.outcome = Outcome::Pending;
        self.event_bus.emit(NegotiationEvent::Restarted);
        Phase::NotStarted
    }
}
