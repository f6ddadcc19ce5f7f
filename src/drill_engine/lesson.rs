//! Adapters from lesson content to prompts.
//!
//! Where lessons come from (built-in sets, an uploaded spreadsheet) is
//! up to the host. This module only covers the shapes: JSON lessons and
//! already-split spreadsheet rows.

use tracing::debug;

use crate::drill_engine::{
    error::LessonError,
    models::{Direction, Lesson, Prompt, VocabEntry},
};

impl Lesson {
    pub fn new(name: impl Into<String>, words: Vec<VocabEntry>) -> Self {
        Lesson { name: name.into(), words }
    }

    /// Parse a lesson from JSON: `{"name": "...", "words": [{"pt": "...", "en": "..."}]}`.
    pub fn from_json(json: &str) -> Result<Self, LessonError> {
        Ok(serde_json::from_str(json)?)
    }

    /// This lesson's entries as prompts labelled with the lesson name.
    pub fn prompts(&self, direction: Direction) -> Vec<Prompt> {
        self.words
            .iter()
            .map(|w| w.to_prompt(direction, Some(&self.name)))
            .collect()
    }
}

/// Flatten several lessons into one prompt pool, in lesson order.
pub fn collect_prompts(lessons: &[Lesson], direction: Direction) -> Vec<Prompt> {
    lessons.iter().flat_map(|l| l.prompts(direction)).collect()
}

fn looks_like_header(row: &[String]) -> bool {
    row.first().is_some_and(|cell| {
        let cell = cell.to_lowercase();
        cell.contains("portuguese") || cell.contains("word") || cell == "pt"
    })
}

fn optional_cell(row: &[String], idx: usize) -> Option<String> {
    row.get(idx)
        .map(|c| c.trim())
        .filter(|c| !c.is_empty())
        .map(str::to_string)
}

/// Convert spreadsheet rows into vocabulary entries.
///
/// Column A is Portuguese, B English, C and D optional example sentences.
/// A leading header row is skipped; rows missing either word are dropped.
pub fn import_rows(rows: &[Vec<String>]) -> Result<Vec<VocabEntry>, LessonError> {
    let data = match rows.first() {
        Some(first) if looks_like_header(first) => &rows[1..],
        _ => rows,
    };

    let words: Vec<VocabEntry> = data
        .iter()
        .filter_map(|row| {
            let pt = optional_cell(row, 0)?;
            let en = optional_cell(row, 1)?;
            Some(VocabEntry {
                pt,
                en,
                sp: optional_cell(row, 2),
                se: optional_cell(row, 3),
            })
        })
        .collect();

    if words.is_empty() {
        return Err(LessonError::NoValidRows);
    }
    debug!(rows = rows.len(), imported = words.len(), "lesson rows imported");
    Ok(words)
}
