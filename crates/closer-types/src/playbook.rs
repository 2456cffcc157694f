use serde::{Deserialize, Serialize};

/// Category of sales guidance in the static playbook
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaybookKey {
    Objections,
    Tactics,
    DealTerms,
}

/// One fixed advisory entry. The table is built at compile time and never changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlaybookEntry {
    pub key: PlaybookKey,
    pub advisory: &'static str,
}
