use tracing::debug;

use crate::drill_engine::{
    deck::shuffle_seeded,
    error::{DrillError, Result},
    evaluator::EvaluationPolicy,
    lesson::collect_prompts,
    models::{DrillRequest, Lesson, Prompt},
    presets::PresetLesson,
    session::DrillSession,
};

/// Shuffle `prompts` into a deck and start a session over it.
///
/// The prompts must already be oriented: `request.direction` is only logged
/// here. Use [`start_lesson_drill`] to orient lesson entries by it.
///
/// # Errors
///
/// Returns [`DrillError::EmptyDeck`] when `prompts` is empty.
pub fn start_drill(request: DrillRequest, prompts: &[Prompt]) -> Result<DrillSession> {
    if prompts.is_empty() {
        return Err(DrillError::EmptyDeck);
    }
    debug!(
        direction = %request.direction,
        seeded = request.rng_seed.is_some(),
        prompts = prompts.len(),
        "building drill deck"
    );
    DrillSession::start(shuffle_seeded(prompts, request.rng_seed))
}

/// Pool every word of `lessons`, oriented by `request.direction`, and start a
/// shuffled session over them.
///
/// # Errors
///
/// Returns [`DrillError::EmptyDeck`] when the lessons contain no words.
pub fn start_lesson_drill(request: DrillRequest, lessons: &[Lesson]) -> Result<DrillSession> {
    start_drill(request, &collect_prompts(lessons, request.direction))
}

/// Start a preset grammar test: the preset's questions, shuffled, answered in
/// Portuguese under [`EvaluationPolicy::PresetTest`].
///
/// # Errors
///
/// Returns [`DrillError::EmptyDeck`] when the preset has no questions.
pub fn start_preset_test(rng_seed: Option<u64>, preset: &PresetLesson) -> Result<DrillSession> {
    let prompts = preset.test_prompts();
    if prompts.is_empty() {
        return Err(DrillError::EmptyDeck);
    }
    debug!(preset = %preset.id, questions = prompts.len(), "building preset test deck");
    DrillSession::start_with_policy(shuffle_seeded(&prompts, rng_seed), EvaluationPolicy::PresetTest)
}
