//! Edit-distance closeness between two already-normalized strings.
//!
//! Both functions operate on Unicode scalar values (`char`), which is the same
//! unit [`normalize`](super::normalize::normalize) produces after stripping
//! combining marks.

/// Levenshtein distance over `char`s: insertions, deletions and
/// substitutions cost 1.
pub fn edit_distance(a: &str, b: &str) -> usize {
    strsim::levenshtein(a, b)
}

/// Closeness as a percentage in `[0, 100]`:
/// `(maxLen - distance) / maxLen * 100`. Two empty strings score 100.
pub fn similarity(a: &str, b: &str) -> f64 {
    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        return 100.0;
    }
    let distance = edit_distance(a, b);
    (max_len - distance) as f64 * 100.0 / max_len as f64
}
