//! # vocab_drill
//!
//! An offline, deterministic vocabulary drill engine.
//!
//! Given a target phrase and a learner's typed answer, the engine decides
//! whether the answer is correct, close, or wrong, and drives a
//! repeat-until-correct loop over a shuffled deck of prompts.
//!
//! ## How it works
//!
//! 1. Load prompts from lessons ([`Lesson`], [`VocabEntry`]) or build
//!    [`Prompt`]s directly.
//! 2. Call [`start_drill`] with a [`DrillRequest`]. The engine shuffles the
//!    prompts (Fisher-Yates) and returns a [`DrillSession`].
//! 3. Feed typed answers to [`DrillSession::submit`]. Answers are compared after
//!    folding case, accents and punctuation; near misses (≥ 85% edit-distance
//!    similarity) count as `close`.
//! 4. A correct answer asks the host to call [`DrillSession::advance`] after
//!    [`AUTO_ADVANCE_DELAY`]. Anything else reveals the answer, which must be
//!    retyped before the session moves on.
//! 5. When the session completes, hand it to [`publish`] (or read
//!    [`DrillSession::summary`]) to record progress.
//!
//! ## Key features
//!
//! - **Deterministic**: pass `rng_seed: Some(u64)` to reproduce the same deck.
//! - **Accent-insensitive**: `"tres"` is a correct answer for `"três"`.
//! - **Infinitive shortcut**: `"eat"` is a correct answer for `"to eat"`.
//! - **Host-owned timing**: the engine never sleeps or spawns timers.
//!
//! ## Quick start
//!
//! ```rust
//! use vocab_drill::{
//!     start_drill, Direction, DrillRequest, Progress, Prompt, SubmitOutcome, Verdict,
//! };
//!
//! let prompts = vec![Prompt::new("um", "one"), Prompt::new("comer", "to eat")];
//! let mut session = start_drill(DrillRequest::new(Direction::PtEn).with_seed(42), &prompts)
//!     .expect("deck is not empty");
//!
//! while let Some(prompt) = session.current_prompt().cloned() {
//!     println!("Translate: {}", prompt.source);
//!     match session.submit(&prompt.target).unwrap() {
//!         SubmitOutcome::Correct { advance_after } => {
//!             // A UI would wait `advance_after` before advancing.
//!             assert_eq!(advance_after.as_millis(), 700);
//!             if let Progress::Complete(score) = session.advance().unwrap() {
//!                 assert_eq!(score.correct, 2);
//!             }
//!         }
//!         SubmitOutcome::Missed { verdict, .. } => assert_ne!(verdict, Verdict::Correct),
//!         _ => {}
//!     }
//! }
//! assert!(session.is_complete());
//! ```

pub mod drill_engine;

// Convenience re-exports so callers can use `vocab_drill::start_drill`
// directly without reaching into `drill_engine::`.
pub use drill_engine::{
    all_presets, evaluate, evaluate_with, find_preset, normalize, publish, similarity,
    start_drill, start_lesson_drill, start_preset_test, AttemptReport, Direction, DrillError,
    DrillRequest, DrillSession, EvaluationPolicy, Lesson, LessonError, PresetLesson,
    PresetQuestion, Progress, ProgressSink, Prompt, SentenceHint, SessionScore, SessionState,
    SessionSummary, SubmitOutcome, TelemetrySink, Verdict, VocabEntry, AUTO_ADVANCE_DELAY,
    CLOSE_THRESHOLD, INFINITIVE_PREFIX,
};

#[cfg(test)]
mod tests;
