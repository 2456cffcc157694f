//! Context resolver over the static sales playbook.
//!
//! Stands in for a retrieval step: the user's text is matched against fixed
//! keywords and the matching advisory strings are returned. No ranking, no
//! external fetch.

use closer_types::playbook::{PlaybookEntry, PlaybookKey};

const PLAYBOOK: [PlaybookEntry; 3] = [
    PlaybookEntry {
        key: PlaybookKey::Objections,
        advisory: "If the player mentions 'budget', remind them of the ROI of $5M over 3 years.",
    },
    PlaybookEntry {
        key: PlaybookKey::Tactics,
        advisory: "Effective negotiators use 'anchoring' and 'active listening'. Reject aggressive demands.",
    },
    PlaybookEntry {
        key: PlaybookKey::DealTerms,
        advisory: "Minimum price is $2.1M. Delivery must be within 6 months.",
    },
];

const OBJECTION_TRIGGERS: [&str; 2] = ["budget", "price"];
const DEAL_TERM_TRIGGERS: [&str; 2] = ["when", "delivery"];

/// The full static table
pub fn playbook() -> &'static [PlaybookEntry] {
    &PLAYBOOK
}

pub fn advisory(key: PlaybookKey) -> &'static str {
    PLAYBOOK
        .iter()
        .find(|entry| entry.key == key)
        .map(|entry| entry.advisory)
        .unwrap_or_default()
}

/// Resolve advisory context for a user message.
///
/// Objections and deal terms are checked independently and concatenated in
/// that order with no separator. When neither matches, the tactics advisory
/// is returned on its own.
pub fn resolve(text: &str) -> String {
    let lowered = text.to_lowercase();
    let mut context = String::new();

    if OBJECTION_TRIGGERS.iter().any(|kw| lowered.contains(kw)) {
        context.push_str(advisory(PlaybookKey::Objections));
    }
    if DEAL_TERM_TRIGGERS.iter().any(|kw| lowered.contains(kw)) {
        context.push_str(advisory(PlaybookKey::DealTerms));
    }

    if context.is_empty() {
        advisory(PlaybookKey::Tactics).to_string()
    } else {
        context
    }
}
