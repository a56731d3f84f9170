//! Input error for the enumerated fields

use thiserror::Error;

/// Raised when a gender or activity level is not one of the recognized values
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidInput {
    #[error("Invalid gender. Choose 'Male' or 'Female'.")]
    Gender(String),

    #[error("Invalid activity level.")]
    ActivityLevel(String),
}

impl InvalidInput {
    /// The raw text that failed to parse
    pub fn value(&self) -> &str {
        match self {
            InvalidInput::Gender(v) | InvalidInput::ActivityLevel(v) => v,
        }
    }
}
