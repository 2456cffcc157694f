use thiserror::Error;

use crate::session::Phase;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CloserError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Cannot {operation} while session is {phase:?}")]
    InvalidTransition {
        operation: &'static str,
        phase: Phase,
    },
}

impl From<serde_json::Error> for CloserError {
    fn from(e: serde_json::Error) -> Self {
        CloserError::Serialization(e.to_string())
    }
}
