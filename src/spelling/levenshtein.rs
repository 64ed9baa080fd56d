//! Levenshtein distance calculation for spelling suggestions.

use std::cmp::min;

/// Calculate the Levenshtein distance between two strings.
/// This is the minimum number of single-character edits (insertions, deletions, or substitutions)
/// required to change one word into another.
///
/// Characters are compared as Unicode scalar values; no case folding is applied.
pub fn levenshtein_distance(s1: &str, s2: &str) -> usize {
    let s1_chars: Vec<char> = s1.chars().collect();
    let s2_chars: Vec<char> = s2.chars().collect();

    distance_chars(&s1_chars, &s2_chars)
}

/// Distance over pre-decoded character slices.
///
/// Keeps two rows of the DP table, sized by the shorter input. The metric is
/// symmetric, so swapping the operands does not change the result.
fn distance_chars(s1: &[char], s2: &[char]) -> usize {
    let (long, short) = if s1.len() >= s2.len() {
        (s1, s2)
    } else {
        (s2, s1)
    };

    if short.is_empty() {
        return long.len();
    }

    // Row 0: turning an empty prefix into `short[..j]` costs j insertions.
    let mut prev_row: Vec<usize> = (0..=short.len()).collect();
    let mut curr_row = vec![0; short.len() + 1];

    for (i, &lc) in long.iter().enumerate() {
        curr_row[0] = i + 1;

        for (j, &sc) in short.iter().enumerate() {
            curr_row[j + 1] = if lc == sc {
                prev_row[j]
            } else {
                1 + min(
                    min(
                        prev_row[j + 1], // deletion
                        curr_row[j],     // insertion
                    ),
                    prev_row[j], // substitution
                )
            };
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[short.len()]
}

/// Calculate Levenshtein distance with a maximum threshold for early termination.
/// Returns None if the distance exceeds the threshold, which can be more efficient
/// for filtering candidates.
pub fn levenshtein_distance_threshold(s1: &str, s2: &str, threshold: usize) -> Option<usize> {
    let s1_chars: Vec<char> = s1.chars().collect();
    let s2_chars: Vec<char> = s2.chars().collect();

    distance_chars_threshold(&s1_chars, &s2_chars, threshold)
}

#[allow(clippy::needless_range_loop)]
fn distance_chars_threshold(s1: &[char], s2: &[char], threshold: usize) -> Option<usize> {
    let len1 = s1.len();
    let len2 = s2.len();

    // Early termination if length difference exceeds threshold
    if len1.abs_diff(len2) > threshold {
        return None;
    }

    if len1 == 0 || len2 == 0 {
        // The length check above already bounded this by `threshold`.
        return Some(len1.max(len2));
    }

    let mut prev_row: Vec<usize> = (0..=len2).collect();
    let mut curr_row = vec![0; len2 + 1];

    for i in 1..=len1 {
        curr_row[0] = i;
        let mut min_in_row = i;

        for j in 1..=len2 {
            curr_row[j] = if s1[i - 1] == s2[j - 1] {
                prev_row[j - 1]
            } else {
                1 + min(min(prev_row[j], curr_row[j - 1]), prev_row[j - 1])
            };

            min_in_row = min(min_in_row, curr_row[j]);
        }

        // Row minima never decrease, so nothing below can come back under the threshold.
        if min_in_row > threshold {
            return None;
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    let distance = prev_row[len2];
    if distance <= threshold {
        Some(distance)
    } else {
        None
    }
}

/// Computes distances from one query to many candidates.
///
/// The query is decoded into characters once, which matters when it is
/// compared against every word of a dictionary.
#[derive(Debug, Clone)]
pub struct LevenshteinMatcher {
    query: String,
    query_chars: Vec<char>,
}

impl LevenshteinMatcher {
    /// Create a new matcher for the given query string.
    pub fn new(query: impl Into<String>) -> Self {
        let query = query.into();
        let query_chars = query.chars().collect();

        LevenshteinMatcher { query, query_chars }
    }

    /// Get the original query string.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Calculate distance to a candidate string.
    pub fn distance(&self, candidate: &str) -> usize {
        let candidate_chars: Vec<char> = candidate.chars().collect();
        distance_chars(&self.query_chars, &candidate_chars)
    }

    /// Calculate distance with threshold for early termination.
    pub fn distance_threshold(&self, candidate: &str, threshold: usize) -> Option<usize> {
        let candidate_chars: Vec<char> = candidate.chars().collect();
        distance_chars_threshold(&self.query_chars, &candidate_chars, threshold)
    }

    /// Check if a candidate is within the given edit distance threshold.
    pub fn is_match(&self, candidate: &str, max_distance: usize) -> bool {
        self.distance_threshold(candidate, max_distance).is_some()
    }
}
