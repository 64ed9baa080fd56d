//! Ranking dictionary words by edit distance.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use log::{debug, warn};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SuggestError};
use crate::spelling::dictionary::Dictionary;
use crate::spelling::levenshtein::LevenshteinMatcher;

/// Default number of suggestions returned for a query.
pub const DEFAULT_MAX_SUGGESTIONS: usize = 5;

/// Dictionary size from which scoring is spread over the rayon pool.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 50_000;

/// A dictionary word paired with its edit distance from the query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    /// The suggested word.
    pub word: String,
    /// Edit distance from the original word.
    pub distance: usize,
}

impl Suggestion {
    /// Create a new suggestion.
    pub fn new(word: impl Into<String>, distance: usize) -> Self {
        Suggestion {
            word: word.into(),
            distance,
        }
    }
}

impl Ord for Suggestion {
    fn cmp(&self, other: &Self) -> Ordering {
        // Closer words first; equal distances fall back to the word itself.
        self.distance
            .cmp(&other.distance)
            .then_with(|| self.word.cmp(&other.word))
    }
}

impl PartialOrd for Suggestion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Configuration for spelling suggestion generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SuggestionConfig {
    /// Maximum number of suggestions to return.
    pub max_suggestions: usize,
    /// Maximum edit distance to consider. `None` ranks every dictionary word.
    pub max_distance: Option<usize>,
    /// Dictionaries with at least this many words are scored in parallel.
    pub parallel_threshold: usize,
}

impl Default for SuggestionConfig {
    fn default() -> Self {
        SuggestionConfig {
            max_suggestions: DEFAULT_MAX_SUGGESTIONS,
            max_distance: None,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

impl SuggestionConfig {
    /// Reject settings that could never produce a suggestion.
    pub fn validate(&self) -> Result<()> {
        if self.max_suggestions == 0 {
            return Err(SuggestError::config("max_suggestions must be at least 1"));
        }
        Ok(())
    }
}

/// Main spelling suggestion engine.
///
/// Owns its [`Dictionary`] and never mutates it, so `suggest` takes `&self`
/// and may be called from many threads at once.
#[derive(Debug, Clone)]
pub struct SuggestionEngine {
    dictionary: Dictionary,
    config: SuggestionConfig,
}

impl SuggestionEngine {
    /// Create a new suggestion engine with the given dictionary.
    pub fn new(dictionary: Dictionary) -> Self {
        SuggestionEngine {
            dictionary,
            config: SuggestionConfig::default(),
        }
    }

    /// Create a new suggestion engine with custom configuration.
    pub fn with_config(dictionary: Dictionary, config: SuggestionConfig) -> Self {
        SuggestionEngine { dictionary, config }
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    pub fn config(&self) -> &SuggestionConfig {
        &self.config
    }

    /// Check if a word exists in the dictionary, ignoring case.
    pub fn is_correct(&self, word: &str) -> bool {
        self.dictionary.contains(&word.to_lowercase())
    }

    /// Get up to `max_suggestions` dictionary words closest to `word`.
    ///
    /// Returns an empty list when the word is empty, already spelled
    /// correctly, or the dictionary has no words.
    pub fn suggest(&self, word: &str) -> Vec<String> {
        self.suggest_scored(word)
            .into_iter()
            .map(|suggestion| suggestion.word)
            .collect()
    }

    /// Like [`suggest`](Self::suggest), keeping the distance of each word.
    pub fn suggest_scored(&self, word: &str) -> Vec<Suggestion> {
        debug!("Suggesting words for: {word}");

        let word_lower = word.to_lowercase();

        if word_lower.is_empty() {
            warn!("Received empty word for suggestions");
            return Vec::new();
        }

        if self.dictionary.contains(&word_lower) {
            debug!("Valid word as found in the dictionary: {word_lower}");
            return Vec::new();
        }

        if self.dictionary.is_empty() {
            warn!("Dictionary is empty, no suggestions available");
            return Vec::new();
        }

        debug!("Calculating suggestions for word: {word_lower}");

        let matcher = LevenshteinMatcher::new(word_lower);
        let limit = self.config.max_suggestions;

        let heap = if self.dictionary.len() >= self.config.parallel_threshold {
            self.dictionary
                .par_iter()
                .filter_map(|candidate| self.score(&matcher, candidate))
                .fold(BinaryHeap::new, |mut heap, suggestion| {
                    push_bounded(&mut heap, suggestion, limit);
                    heap
                })
                .reduce(BinaryHeap::new, |mut left, right| {
                    for suggestion in right {
                        push_bounded(&mut left, suggestion, limit);
                    }
                    left
                })
        } else {
            let mut heap = BinaryHeap::with_capacity(limit.min(self.dictionary.len()) + 1);
            for candidate in self.dictionary.iter() {
                if let Some(suggestion) = self.score(&matcher, candidate) {
                    push_bounded(&mut heap, suggestion, limit);
                }
            }
            heap
        };

        let result = heap.into_sorted_vec();
        debug!("Suggestions for '{}': {:?}", matcher.query(), result);
        result
    }

    fn score(&self, matcher: &LevenshteinMatcher, candidate: &str) -> Option<Suggestion> {
        let distance = match self.config.max_distance {
            Some(max) => matcher.distance_threshold(candidate, max)?,
            None => matcher.distance(candidate),
        };
        Some(Suggestion::new(candidate, distance))
    }
}

/// Keep only the `limit` smallest suggestions in a max-heap.
fn push_bounded(heap: &mut BinaryHeap<Suggestion>, suggestion: Suggestion, limit: usize) {
    if heap.len() < limit {
        heap.push(suggestion);
    } else if let Some(mut worst) = heap.peek_mut()
        && suggestion < *worst
    {
        *worst = suggestion;
    }
}
