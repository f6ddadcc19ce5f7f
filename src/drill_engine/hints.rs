//! Optional hints a host can show before the learner answers.

use serde::{Deserialize, Serialize};

const SENTENCE_PUNCTUATION: [char; 4] = ['.', ',', '!', '?'];

/// Example sentences for the current prompt, with the answer masked out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentenceHint {
    pub source: Option<String>,
    pub target: Option<String>,
}

/// First letter of every word followed by one blank per remaining letter.
///
/// `"to eat"` → `"t _   e _ _"`.
pub fn spell_hint(target: &str) -> String {
    target
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            let mut hint = String::new();
            if let Some(first) = chars.next() {
                hint.push(first);
            }
            for _ in chars {
                hint.push_str(" _");
            }
            hint
        })
        .collect::<Vec<_>>()
        .join("   ")
}

fn strip_sentence_punctuation(word: &str) -> String {
    word.chars().filter(|c| !SENTENCE_PUNCTUATION.contains(c)).collect()
}

/// Blank out every word of `sentence` that also appears in `target`, keeping
/// its first letter and trailing punctuation mark.
///
/// `mask_sentence("I like to eat.", "to eat")` → `"I like t_ e__."`.
pub fn mask_sentence(sentence: &str, target: &str) -> String {
    let target_words: Vec<String> = target
        .to_lowercase()
        .split(' ')
        .map(strip_sentence_punctuation)
        .filter(|w| !w.is_empty())
        .collect();

    sentence
        .split(' ')
        .map(|word| {
            let bare = strip_sentence_punctuation(&word.to_lowercase());
            if bare.is_empty() || !target_words.contains(&bare) {
                return word.to_string();
            }
            let trailing = word.chars().last().filter(|c| SENTENCE_PUNCTUATION.contains(c));
            let len = word.chars().count();
            let blanks = len.saturating_sub(1 + usize::from(trailing.is_some()));

            let mut masked = String::with_capacity(word.len());
            masked.extend(word.chars().next());
            masked.push_str(&"_".repeat(blanks));
            masked.extend(trailing);
            masked
        })
        .collect::<Vec<_>>()
        .join(" ")
}
