//! Completion payloads and the sinks that receive them.
//!
//! The engine persists nothing. Once a session is complete the host hands its
//! [`SessionSummary`] to a [`ProgressSink`] and an [`AttemptReport`] to a
//! [`TelemetrySink`]; both are one-way notifications.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::drill_engine::{error::Result, models::SessionScore, session::DrillSession};

/// Game type tag sent with every attempt report.
pub const GAME_TYPE: &str = "vocab";

/// Final counts of a completed session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub total_prompts: usize,
    pub score: SessionScore,
}

impl SessionSummary {
    /// `correct / total_prompts`, or 0 for an empty deck.
    pub fn accuracy(&self) -> f64 {
        if self.total_prompts == 0 {
            return 0.0;
        }
        self.score.correct as f64 / self.total_prompts as f64
    }

    pub fn attempt_report(&self) -> AttemptReport {
        AttemptReport {
            game_type: GAME_TYPE.to_string(),
            score: self.score.correct,
            accuracy: self.accuracy(),
            total: self.total_prompts,
            correct: self.score.correct,
            incorrect: self.score.wrong,
        }
    }
}

/// Analytics record for one finished drill.
///
/// `incorrect` counts `wrong` verdicts only; `close` answers are in neither
/// bucket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttemptReport {
    pub game_type: String,
    pub score: u32,
    pub accuracy: f64,
    pub total: usize,
    pub correct: u32,
    pub incorrect: u32,
}

/// Receives the final counts of a session (e.g. a learner's running totals).
pub trait ProgressSink {
    fn record_progress(&mut self, summary: &SessionSummary);
}

/// Receives a one-way analytics notification per finished session.
pub trait TelemetrySink {
    fn record_attempt(&mut self, report: &AttemptReport);
}

/// Notify both sinks about a completed session.
///
/// # Errors
///
/// Returns [`DrillError::SessionIncomplete`](crate::drill_engine::error::DrillError::SessionIncomplete)
/// if the session has not finished; neither sink is called in that case.
pub fn publish(
    session: &DrillSession,
    progress: &mut dyn ProgressSink,
    telemetry: &mut dyn TelemetrySink,
) -> Result<SessionSummary> {
    let summary = session.summary()?;
    progress.record_progress(&summary);
    telemetry.record_attempt(&summary.attempt_report());
    debug!(total = summary.total_prompts, accuracy = summary.accuracy(), "session published");
    Ok(summary)
}
