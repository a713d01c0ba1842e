//! Unified error types for the FalconBowl backend.

use thiserror::Error;

use crate::quiz::QuestionStatus;

/// Unified error type for the server and its tooling.
#[derive(Error, Debug)]
pub enum ServerError {
    /// Configuration loading error.
    #[error("configuration error: {0}")]
    Config(#[from] envy::Error),

    /// Configuration loaded but failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Quiz rules or question bank error.
    #[error("quiz error: {0}")]
    Quiz(#[from] QuizError),

    /// Prometheus exporter could not be installed.
    #[error("metrics exporter error: {0}")]
    Metrics(String),

    /// JSON parsing error.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Question bank and game flow errors.
#[derive(Error, Debug)]
pub enum QuizError {
    /// The bank holds no questions.
    #[error("question bank is empty")]
    EmptyBank,

    /// Question quarter outside 1..=4.
    #[error("question {number} has invalid quarter {quarter}")]
    InvalidQuarter {
        /// Question number as written in the bank.
        number: String,
        /// Offending quarter.
        quarter: u8,
    },

    /// Question number has no numeric part after the dot.
    #[error("question number {0:?} has no numeric part")]
    MalformedNumber(String),

    /// Category index outside the bank's category list.
    #[error("unknown category {index}: bank has {available} categories")]
    UnknownCategory {
        /// Requested index.
        index: usize,
        /// Number of categories in the bank.
        available: usize,
    },

    /// Action not allowed in the round's current status.
    #[error("cannot {action} while {status}")]
    InvalidTransition {
        /// Attempted action.
        action: &'static str,
        /// Status the round was in.
        status: QuestionStatus,
    },

    /// Game is paused waiting for a category choice.
    #[error("game is paused for category selection")]
    Paused,

    /// No category selection is pending.
    #[error("no category selection pending")]
    NoCategoryPending,

    /// All questions have been played.
    #[error("game over")]
    GameOver,
}

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, ServerError>;
