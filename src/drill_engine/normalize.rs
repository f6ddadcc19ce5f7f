//! Canonical form of a phrase for answer comparison.
//!
//! Learners routinely drop accents, capitalisation and trailing punctuation, so
//! both the submission and the target are folded through [`normalize`] before
//! any comparison happens.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Characters removed outright after accent folding.
pub const STRIPPED_PUNCTUATION: [char; 10] = ['.', ',', '!', '?', ';', ':', '\'', '"', '(', ')'];

/// Letter-to-base mappings applied after decomposition, for precomposed forms
/// that survive NFD in some inputs.
const FALLBACK_FOLDS: [(char, char); 14] = [
    ('ç', 'c'), ('ã', 'a'), ('õ', 'o'),
    ('á', 'a'), ('é', 'e'), ('í', 'i'), ('ó', 'o'), ('ú', 'u'),
    ('â', 'a'), ('ê', 'e'), ('ô', 'o'), ('à', 'a'), ('ü', 'u'),
    ('ñ', 'n'),
];

fn fold_fallback(c: char) -> char {
    FALLBACK_FOLDS
        .iter()
        .find(|(from, _)| *from == c)
        .map_or(c, |(_, to)| *to)
}

/// Normalize `text` for comparison.
///
/// In order: lowercase, NFD decomposition with combining marks stripped,
/// fallback letter folds, removal of [`STRIPPED_PUNCTUATION`], trim.
/// Total and idempotent.
pub fn normalize(text: &str) -> String {
    let folded: String = text
        .to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .map(fold_fallback)
        .filter(|c| !STRIPPED_PUNCTUATION.contains(c))
        .collect();
    folded.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folds_case_and_accents() {
        assert_eq!(normalize("Três"), "tres");
        assert_eq!(normalize("AÇÃO"), "acao");
        assert_eq!(normalize("Não gosto"), "nao gosto");
        assert_eq!(normalize("café"), normalize("cafe"));
    }

    #[test]
    fn strips_punctuation_and_trims() {
        assert_eq!(normalize("  Você lembra disso?  "), "voce lembra disso");
        assert_eq!(normalize("(one) \"two\"; three: four!"), "one two three four");
        assert_eq!(normalize("I don't"), "i dont");
    }

    #[test]
    fn keeps_inner_whitespace_and_hyphens() {
        assert_eq!(normalize("beside / next to"), "beside / next to");
        assert_eq!(normalize("guarda-chuva"), "guarda-chuva");
    }

    #[test]
    fn empty_and_punctuation_only() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   "), "");
        assert_eq!(normalize("?!."), "");
    }

    #[test]
    fn is_idempotent() {
        for s in [
            "Olá, Mundo!",
            "  ÀÉÎÕÜ  ",
            "ﬁ ligature",
            "İstanbul",
            "Straße",
            "日本語のテキスト",
            "한국어",
            "e\u{301}",
            "",
        ] {
            let once = normalize(s);
            assert_eq!(normalize(&once), once, "normalize not idempotent for {s:?}");
        }
    }
}
