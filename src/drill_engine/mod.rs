//! Core drill engine: answer evaluation and the drill session state machine.
//!
//! ## Module overview
//!
//! | Module       | Purpose |
//! |--------------|---------|
//! | `models`     | Shared types: prompts, lessons, verdicts, score, request |
//! | `normalize`  | Case/accent/punctuation folding before comparison |
//! | `similarity` | Levenshtein distance and percentage closeness |
//! | `evaluator`  | `correct` / `close` / `wrong` classification policies |
//! | `deck`       | Fisher-Yates shuffle of a prompt pool into a deck |
//! | `session`    | `DrillSession` state machine with retype-on-miss |
//! | `hints`      | Spelling and example-sentence hints |
//! | `lesson`     | JSON lessons and spreadsheet rows → prompts |
//! | `presets`    | Built-in grammar lessons with test questions |
//! | `report`     | Completion summary, attempt report, sink traits |
//! | `generator`  | `start_drill()` / `start_preset_test()`: shuffle + start |
//! | `error`      | `DrillError` / `LessonError` |

pub mod deck;
pub mod error;
pub mod evaluator;
pub mod generator;
pub mod hints;
pub mod lesson;
pub mod models;
pub mod normalize;
pub mod presets;
pub mod report;
pub mod session;
pub mod similarity;

// Re-export the public API surface so callers can use
// `drill_engine::start_drill` without reaching into sub-modules.
pub use error::{DrillError, LessonError, Result};
pub use evaluator::{evaluate, evaluate_with, EvaluationPolicy, CLOSE_THRESHOLD, INFINITIVE_PREFIX};
pub use generator::{start_drill, start_lesson_drill, start_preset_test};
pub use hints::SentenceHint;
pub use models::{Direction, DrillRequest, Lesson, Prompt, SessionScore, Verdict, VocabEntry};
pub use normalize::normalize;
pub use presets::{all_presets, find_preset, PresetLesson, PresetQuestion};
pub use report::{publish, AttemptReport, ProgressSink, SessionSummary, TelemetrySink};
pub use session::{DrillSession, Progress, SessionState, SubmitOutcome, AUTO_ADVANCE_DELAY};
pub use similarity::similarity;
