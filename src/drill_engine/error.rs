//! Error types for the drill engine.

use thiserror::Error;

/// Result alias used across the engine.
pub type Result<T, E = DrillError> = std::result::Result<T, E>;

/// Caller errors raised by the evaluator and the session state machine.
///
/// None of these are raised by the evaluation math itself: normalization and
/// similarity are total over every input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DrillError {
    #[error("cannot start a drill with an empty deck")]
    EmptyDeck,

    #[error("submission is empty or whitespace-only")]
    BlankSubmission,

    #[error("session is already complete")]
    SessionComplete,

    #[error("no correct answer is waiting to auto-advance")]
    NoPendingAdvance,

    #[error("session has not reached completion yet")]
    SessionIncomplete,
}

/// Errors produced while turning lesson content into vocabulary entries.
#[derive(Debug, Error)]
pub enum LessonError {
    #[error("invalid lesson JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("no valid rows found (expected column A = Portuguese, column B = English)")]
    NoValidRows,
}
