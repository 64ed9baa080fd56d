//! Helpers for pulling query words out of free text.

use ahash::AHashSet;

use crate::spelling::suggest::SuggestionEngine;

/// The word currently being typed: the last whitespace-separated token of
/// `text`, provided it is longer than one character.
pub fn last_word(text: &str) -> Option<&str> {
    text.split_whitespace()
        .next_back()
        .filter(|word| word.chars().count() > 1)
}

/// Extract lowercase words from mixed text, splitting on anything that is
/// not alphabetic.
pub fn extract_words(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphabetic())
        .filter(|word| !word.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// Get suggestions for every misspelled word in `text`.
///
/// Words are reported once, in order of first appearance. Misspellings with
/// no suggestions are left out.
pub fn correct_text(text: &str, engine: &SuggestionEngine) -> Vec<(String, Vec<String>)> {
    let mut seen = AHashSet::new();
    let mut corrections = Vec::new();

    for word in extract_words(text) {
        if engine.is_correct(&word) || !seen.insert(word.clone()) {
            continue;
        }

        let suggestions = engine.suggest(&word);
        if !suggestions.is_empty() {
            corrections.push((word, suggestions));
        }
    }

    corrections
}
