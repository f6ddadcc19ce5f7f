use std::fmt;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Content primitives
// ---------------------------------------------------------------------------

/// Which side of a vocabulary entry the learner has to type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    /// Show Portuguese, answer in English.
    #[serde(rename = "pt-en")]
    PtEn,
    /// Show English, answer in Portuguese.
    #[serde(rename = "en-pt")]
    EnPt,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::PtEn => write!(f, "PT→EN"),
            Direction::EnPt => write!(f, "EN→PT"),
        }
    }
}

/// One row of a lesson: a word pair plus optional example sentences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabEntry {
    pub pt: String,
    pub en: String,
    /// Example sentence in Portuguese.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sp: Option<String>,
    /// Example sentence in English.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub se: Option<String>,
}

impl VocabEntry {
    pub fn new(pt: impl Into<String>, en: impl Into<String>) -> Self {
        VocabEntry { pt: pt.into(), en: en.into(), sp: None, se: None }
    }

    /// Attach example sentences (Portuguese, English).
    pub fn with_sentences(mut self, sp: impl Into<String>, se: impl Into<String>) -> Self {
        self.sp = Some(sp.into());
        self.se = Some(se.into());
        self
    }

    /// Orient this entry into a [`Prompt`] for the given drill direction.
    pub fn to_prompt(&self, direction: Direction, label: Option<&str>) -> Prompt {
        let (source, target, aux_source, aux_target) = match direction {
            Direction::PtEn => (&self.pt, &self.en, &self.sp, &self.se),
            Direction::EnPt => (&self.en, &self.pt, &self.se, &self.sp),
        };
        Prompt {
            source: source.clone(),
            target: target.clone(),
            aux_source: aux_source.clone(),
            aux_target: aux_target.clone(),
            label: label.map(str::to_string),
            note: None,
        }
    }
}

/// A named group of vocabulary entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lesson {
    pub name: String,
    pub words: Vec<VocabEntry>,
}

/// The atomic unit of a drill: what is shown and what must be typed.
///
/// Immutable once loaded; the session only ever reads it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prompt {
    pub source: String,
    pub target: String,
    /// Example sentence in the source language.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aux_source: Option<String>,
    /// Example sentence in the target language.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aux_target: Option<String>,
    /// Grouping label, usually the lesson name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Grammar rule the prompt exercises (e.g. `"de + o = do"`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl Prompt {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Prompt {
            source: source.into(),
            target: target.into(),
            aux_source: None,
            aux_target: None,
            label: None,
            note: None,
        }
    }
}

// ---------------------------------------------------------------------------
// Evaluation / scoring
// ---------------------------------------------------------------------------

/// Outcome of comparing one submission against one prompt's target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Correct,
    Close,
    Wrong,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Correct => write!(f, "correct"),
            Verdict::Close   => write!(f, "close"),
            Verdict::Wrong   => write!(f, "wrong"),
        }
    }
}

/// Per-session counts of first verdicts. Only ever incremented.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionScore {
    pub correct: u32,
    pub close: u32,
    pub wrong: u32,
}

impl SessionScore {
    pub fn record(&mut self, verdict: Verdict) {
        match verdict {
            Verdict::Correct => self.correct += 1,
            Verdict::Close   => self.close += 1,
            Verdict::Wrong   => self.wrong += 1,
        }
    }

    /// Number of scored submissions.
    pub fn total(&self) -> u32 {
        self.correct + self.close + self.wrong
    }
}

impl fmt::Display for SessionScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} correct / {} close / {} wrong", self.correct, self.close, self.wrong)
    }
}

// ---------------------------------------------------------------------------
// Drill request
// ---------------------------------------------------------------------------

/// Host-side configuration for one drill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrillRequest {
    /// Orients lesson entries in [`start_lesson_drill`](crate::start_lesson_drill).
    /// Prompts handed to [`start_drill`](crate::start_drill) are already
    /// oriented, so there it is only recorded in the log.
    pub direction: Direction,
    /// `Some(seed)` reproduces the same deck order; `None` uses entropy.
    #[serde(default)]
    pub rng_seed: Option<u64>,
}

impl DrillRequest {
    /// Request with an entropy-seeded deck.
    pub fn new(direction: Direction) -> Self {
        DrillRequest { direction, rng_seed: None }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_orients_by_direction() {
        let entry = VocabEntry::new("comer", "to eat")
            .with_sentences("Eu gosto de comer.", "I like to eat.");

        let p = entry.to_prompt(Direction::PtEn, Some("Verbs"));
        assert_eq!(p.source, "comer");
        assert_eq!(p.target, "to eat");
        assert_eq!(p.aux_source.as_deref(), Some("Eu gosto de comer."));
        assert_eq!(p.aux_target.as_deref(), Some("I like to eat."));
        assert_eq!(p.label.as_deref(), Some("Verbs"));

        let p = entry.to_prompt(Direction::EnPt, None);
        assert_eq!(p.source, "to eat");
        assert_eq!(p.target, "comer");
        assert_eq!(p.aux_target.as_deref(), Some("Eu gosto de comer."));
        assert!(p.label.is_none());
    }

    #[test]
    fn score_records_each_verdict() {
        let mut score = SessionScore::default();
        score.record(Verdict::Correct);
        score.record(Verdict::Close);
        score.record(Verdict::Wrong);
        score.record(Verdict::Wrong);
        assert_eq!(score, SessionScore { correct: 1, close: 1, wrong: 2 });
        assert_eq!(score.total(), 4);
    }

    #[test]
    fn request_deserializes_direction_tag() {
        let req: DrillRequest = serde_json::from_str(r#"{"direction":"en-pt"}"#).unwrap();
        assert_eq!(req, DrillRequest::new(Direction::EnPt));
        let req: DrillRequest =
            serde_json::from_str(r#"{"direction":"pt-en","rng_seed":7}"#).unwrap();
        assert_eq!(req, DrillRequest::new(Direction::PtEn).with_seed(7));
    }
}
