//! Typo-tolerant word matching.

/// Maximum length difference between two words that may fuzzy-match.
pub const MAX_LENGTH_DIFFERENCE: usize = 2;

/// Best normalized Levenshtein similarity between `word` and any
/// whitespace-separated word of `text`.
///
/// Words whose lengths differ by more than [`MAX_LENGTH_DIFFERENCE`] are not
/// compared. Returns 0.0 when nothing is comparable.
///
/// ```rust
/// use folio_search::fuzzy::fuzzy_score;
///
/// assert!(fuzzy_score("getting started with rust", "strated") > 0.7);
/// assert_eq!(fuzzy_score("rust", "typescript"), 0.0);
/// ```
pub fn fuzzy_score(text: &str, word: &str) -> f64 {
    let word_len = word.chars().count();

    text.split_whitespace()
        .filter(|candidate| candidate.chars().count().abs_diff(word_len) <= MAX_LENGTH_DIFFERENCE)
        .map(|candidate| strsim::normalized_levenshtein(candidate, word))
        .fold(0.0, f64::max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_word_scores_one() {
        assert_eq!(fuzzy_score("hello world", "world"), 1.0);
    }

    #[test]
    fn test_single_typo() {
        // one substitution in six letters
        let score = fuzzy_score("svelte components", "svelta");
        assert!((score - 5.0 / 6.0).abs() < 1e-9);
    }

    #[test]
    fn test_length_gap_skips_comparison() {
        assert_eq!(fuzzy_score("a bb", "abcdefg"), 0.0);
    }

    #[test]
    fn test_empty_text() {
        assert_eq!(fuzzy_score("", "rust"), 0.0);
    }
}
