use serde::{Deserialize, Serialize};

use crate::{CloserError, Result};

/// Challenge configuration. Every field has a default, so a partial JSON
/// document is enough to override a single setting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChallengeConfig {
    /// Length of the negotiation clock
    pub time_limit_secs: u64,
    /// Order amount quoted in the CFO's opening line
    pub order_value_usd: u64,
    pub title: String,
    pub mission: String,
}

impl Default for ChallengeConfig {
    fn default() -> Self {
        Self {
            time_limit_secs: DEFAULT_TIME_LIMIT_SECS,
            order_value_usd: DEFAULT_ORDER_VALUE_USD,
            title: DEFAULT_TITLE.to_string(),
            mission: DEFAULT_MISSION.to_string(),
        }
    }
}

impl ChallengeConfig {
    /// Parse and validate a JSON config document
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.time_limit_secs == 0 {
            return Err(CloserError::Config(
                "time_limit_secs must be greater than zero".to_string(),
            ));
        }
        if self.title.trim().is_empty() {
            return Err(CloserError::Config("title must not be empty".to_string()));
        }
        Ok(())
    }

    /// The CFO's fixed opening challenge
    pub fn opening_line(&self) -> String {
        format!(
            "I'm listening. Why should I sign this ${} order today?",
            group_thousands(self.order_value_usd)
        )
    }
}

/// 5000000 -> "5,000,000"
fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

pub const DEFAULT_TIME_LIMIT_SECS: u64 = 120;
pub const DEFAULT_ORDER_VALUE_USD: u64 = 5_000_000;

const DEFAULT_TITLE: &str = "The $10M Purchase Order Challenge";

const DEFAULT_MISSION: &str = "You have 120 seconds to convince the AI CFO to sign a multi-million dollar PO. \
If you are too aggressive, the deal is rescinded. If you are too weak, the deal is lost.";

