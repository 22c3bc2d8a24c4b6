use chrono::NaiveDate;
use tracing::{error, warn};

use crate::models::Difficulty;

/// Errors surfaced by the scheduler to its callers
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SchedulerError {
    #[error("Invalid difficulty: {0} is not a valid review rating")]
    InvalidDifficulty(Difficulty),

    /// Only reachable when the base date is today and the clock sits at the end of chrono's calendar
    #[error("Next review date out of range: {base} + {days} days")]
    DateOutOfRange { base: NaiveDate, days: u32 },
}

/// Error context for structured logging
#[derive(Debug)]
pub struct ErrorContext {
    pub operation: String,
    pub card_id: Option<String>,
    pub deck_id: Option<String>,
}

impl ErrorContext {
    pub fn new(operation: &str) -> Self {
        Self {
            operation: operation.to_string(),
            card_id: None,
            deck_id: None,
        }
    }

    pub fn with_card(mut self, id: &str) -> Self {
        self.card_id = Some(id.to_string());
        self
    }

    pub fn with_deck(mut self, id: &str) -> Self {
        self.deck_id = Some(id.to_string());
        self
    }
}

impl SchedulerError {
    /// Caller bugs log at warn, calendar overflow at error
    pub fn log_with_context(&self, context: &ErrorContext) {
        match self {
            SchedulerError::InvalidDifficulty(difficulty) => {
                warn!(
                    operation = %context.operation,
                    card_id = ?context.card_id,
                    deck_id = ?context.deck_id,
                    difficulty = %difficulty,
                    error = %self,
                    "Rejected review rating"
                );
            }
            SchedulerError::DateOutOfRange { .. } => {
                error!(
                    operation = %context.operation,
                    card_id = ?context.card_id,
                    deck_id = ?context.deck_id,
                    error = %self,
                    "Scheduling failed"
                );
            }
        }
    }
}
