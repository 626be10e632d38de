//! Term tokenizer for TF-IDF scoring.
//!
//! Lowercases, then takes every run of two or more word characters as a term.
//! Single characters and punctuation never become terms; stop words are kept.

use std::sync::LazyLock;

use regex::Regex;

static TERM_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\w\w+\b").expect("term pattern is a valid regex"));

/// Splits `text` into lowercase terms, in order of appearance.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    TERM_PATTERN
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases_and_splits_on_punctuation() {
        assert_eq!(
            tokenize("Senior Python/AWS engineer, remote."),
            vec!["senior", "python", "aws", "engineer", "remote"]
        );
    }

    #[test]
    fn test_single_character_tokens_are_dropped() {
        assert_eq!(tokenize("C and R a b"), vec!["and"]);
    }

    #[test]
    fn test_digits_and_underscores_are_word_characters() {
        assert_eq!(tokenize("k8s snake_case 2024"), vec!["k8s", "snake_case", "2024"]);
    }

    #[test]
    fn test_unicode_words_are_kept() {
        assert_eq!(tokenize("Développeur Zürich"), vec!["développeur", "zürich"]);
    }

    #[test]
    fn test_empty_and_blank_input() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("  \n\t ").is_empty());
    }
}
