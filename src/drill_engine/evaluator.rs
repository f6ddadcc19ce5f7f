use serde::{Deserialize, Serialize};

use crate::drill_engine::{
    error::{DrillError, Result},
    models::Verdict,
    normalize::normalize,
    similarity::similarity,
};

/// Minimum similarity (percent) for a near-miss to count as `Close`.
pub const CLOSE_THRESHOLD: f64 = 85.0;

/// Infinitive marker that may be omitted from an answer ("to eat" → "eat").
pub const INFINITIVE_PREFIX: &str = "to ";

/// Which matching and scoring rules a drill runs under.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvaluationPolicy {
    /// Free vocabulary practice: the infinitive marker may be omitted and
    /// `close` is scored as its own bucket.
    #[default]
    Vocab,
    /// Preset grammar test: exact-or-similar only, and a `close` answer is
    /// credited as correct (it still has to be retyped).
    PresetTest,
}

impl EvaluationPolicy {
    fn allows_infinitive_shortcut(self) -> bool {
        matches!(self, EvaluationPolicy::Vocab)
    }

    /// The score bucket a verdict is counted in.
    pub fn scored_as(self, verdict: Verdict) -> Verdict {
        match (self, verdict) {
            (EvaluationPolicy::PresetTest, Verdict::Close) => Verdict::Correct,
            (_, v) => v,
        }
    }
}

/// Classify `submitted` against `target` under the vocabulary policy.
///
/// Blank submissions are refused with [`DrillError::BlankSubmission`]; they are
/// a caller error, not a verdict.
pub fn evaluate(submitted: &str, target: &str) -> Result<Verdict> {
    evaluate_with(EvaluationPolicy::Vocab, submitted, target)
}

/// Classify `submitted` against `target` under `policy`.
pub fn evaluate_with(policy: EvaluationPolicy, submitted: &str, target: &str) -> Result<Verdict> {
    if submitted.trim().is_empty() {
        return Err(DrillError::BlankSubmission);
    }

    let submitted = normalize(submitted);
    let expected = normalize(target);

    if submitted == expected {
        return Ok(Verdict::Correct);
    }

    if policy.allows_infinitive_shortcut() {
        if let Some(bare) = target.strip_prefix(INFINITIVE_PREFIX) {
            if submitted == normalize(bare) {
                return Ok(Verdict::Correct);
            }
        }
    }

    if similarity(&submitted, &expected) >= CLOSE_THRESHOLD {
        Ok(Verdict::Close)
    } else {
        Ok(Verdict::Wrong)
    }
}

/// Whether a retyped answer matches the revealed one, ignoring case, accents
/// and punctuation.
pub fn matches_revealed(typed: &str, revealed: &str) -> bool {
    normalize(typed) == normalize(revealed)
}
