//! Event bus carrying session transitions to the presentation shell.
//!
//! Single-threaded (WASM constraint). The session pushes as it transitions
//! and the UI takes the whole batch once per frame; there is no partial
//! read, so the queue is a plain Vec swapped out on drain.

use std::cell::RefCell;
use std::rc::Rc;
use closer_types::event::NegotiationEvent;
use log::trace;

/// Shared event bus — clone-cheap via Rc.
#[derive(Clone, Default)]
pub struct EventBus {
    pending: Rc<RefCell<Vec<NegotiationEvent>>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Publish an event. Called by the negotiation session.
    pub fn emit(&self, event: NegotiationEvent) {
        trace!("emit {:?}", event);
        self.pending.borrow_mut().push(event);
    }

    /// Take every pending event in emission order. Empty means nothing
    /// happened since the last frame.
    pub fn drain(&self) -> Vec<NegotiationEvent> {
        std::mem::take(&mut *self.pending.borrow_mut())
    }
}
