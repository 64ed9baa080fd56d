//! The word list that suggestions are drawn from.

use std::collections::HashSet;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use ahash::AHashSet;
use log::info;
use rayon::prelude::*;

use crate::error::{Result, SuggestError};

/// An immutable set of lowercase words considered correctly spelled.
///
/// A dictionary is built once and then only read. There are no methods that
/// add or remove words, so it can be shared between threads behind an `Arc`
/// without locking.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: AHashSet<String>,
}

impl Dictionary {
    /// Create an empty dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a dictionary from arbitrary words.
    ///
    /// Each word is trimmed and lowercased; blank entries are skipped and
    /// duplicates collapse into one.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .filter_map(|word| normalize_entry(word.as_ref()))
            .collect();

        Dictionary { words }
    }

    /// Read a dictionary from a line-oriented source with one word per line.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut words = AHashSet::new();

        for line in reader.lines() {
            let line = line?;
            if let Some(word) = normalize_entry(&line) {
                words.insert(word);
            }
        }

        Ok(Dictionary { words })
    }

    /// Load a dictionary from a text file with one word per line.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading dictionary from {}", path.display());

        let file = File::open(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => SuggestError::DictionaryNotFound(path.to_path_buf()),
            _ => SuggestError::Io(e),
        })?;
        let dictionary = Self::from_reader(BufReader::new(file))?;

        info!("Dictionary loaded with {} words", dictionary.len());
        Ok(dictionary)
    }

    /// Check if a word exists in the dictionary.
    ///
    /// The lookup is exact: callers lowercase their input first.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Get the total number of unique words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate over all words in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Iterate over all words on the rayon pool.
    pub fn par_iter(&self) -> impl ParallelIterator<Item = &str> {
        let set: &HashSet<String, ahash::RandomState> = &self.words;
        set.par_iter().map(String::as_str)
    }

    /// All words in lexicographic order.
    pub fn words_sorted(&self) -> Vec<&str> {
        let mut words: Vec<&str> = self.iter().collect();
        words.sort_unstable();
        words
    }
}

impl<S: AsRef<str>> FromIterator<S> for Dictionary {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_words(iter)
    }
}

fn normalize_entry(raw: &str) -> Option<String> {
    let word = raw.trim();
    if word.is_empty() {
        None
    } else {
        Some(word.to_lowercase())
    }
}
