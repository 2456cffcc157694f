//! Negotiation core — the timed CFO challenge as an explicit state machine.
//!
//! The presentation shell owns one `NegotiationSession` and drives it with
//! `start`, `tick`, `submit`, and `restart`; everything it renders is read
//! back from the session or drained from the `EventBus`.

pub mod event_bus;
pub mod playbook;
pub mod classifier;
pub mod ports;
pub mod negotiation;
