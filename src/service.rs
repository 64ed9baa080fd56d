//! Request handling on top of the suggestion engine.
//!
//! A [`SuggestionService`] is what a front end talks to: it is only ever
//! constructed with a successfully loaded dictionary, and turns each query
//! into either "no content" or a response carrying the original word and its
//! suggestions.

use std::path::Path;
use std::sync::Arc;

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::spelling::dictionary::Dictionary;
use crate::spelling::suggest::{SuggestionConfig, SuggestionEngine};

/// Body returned for a query that has suggestions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionResponse {
    /// The query exactly as received.
    pub word: String,
    pub suggestions: Vec<String>,
}

/// Outcome of handling a single query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SuggestionOutcome {
    /// Nothing to suggest: empty query, correctly spelled word, or empty dictionary.
    NoContent,
    Found(SuggestionResponse),
}

impl SuggestionOutcome {
    pub fn into_response(self) -> Option<SuggestionResponse> {
        match self {
            SuggestionOutcome::NoContent => None,
            SuggestionOutcome::Found(response) => Some(response),
        }
    }
}

/// Cheaply cloneable handle to a shared, read-only engine.
#[derive(Debug, Clone)]
pub struct SuggestionService {
    engine: Arc<SuggestionEngine>,
}

impl SuggestionService {
    pub fn new(engine: SuggestionEngine) -> Self {
        SuggestionService {
            engine: Arc::new(engine),
        }
    }

    /// Load the word list at `path` and build a ready service.
    ///
    /// Fails if the word list is missing or unreadable; there is no
    /// half-initialized service.
    pub fn open<P: AsRef<Path>>(path: P, config: SuggestionConfig) -> Result<Self> {
        config.validate()?;
        let dictionary = Dictionary::load_from_file(path)?;

        if dictionary.is_empty() {
            warn!("Dictionary is empty, every query will return no suggestions");
        } else {
            info!("Suggestion service ready with {} words", dictionary.len());
        }

        Ok(Self::new(SuggestionEngine::with_config(dictionary, config)))
    }

    pub fn engine(&self) -> &SuggestionEngine {
        &self.engine
    }

    /// Handle one query.
    pub fn handle(&self, word: &str) -> SuggestionOutcome {
        debug!("Received request for suggestions for word: {word}");
        let suggestions = self.engine.suggest(word);

        if suggestions.is_empty() {
            debug!("No suggestions found for word: {word}");
            return SuggestionOutcome::NoContent;
        }

        debug!("Found {} suggestions for word: {}", suggestions.len(), word);
        SuggestionOutcome::Found(SuggestionResponse {
            word: word.to_string(),
            suggestions,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SuggestError;
    use std::io::Write;
    use std::thread;
    use tempfile::NamedTempFile;

    fn scenario_service() -> SuggestionService {
        SuggestionService::new(SuggestionEngine::new(Dictionary::from_words([
            "apple", "apply", "angle", "ample",
        ])))
    }

    #[test]
    fn test_handle_found_keeps_original_word() {
        let service = scenario_service();

        match service.handle("Appl") {
            SuggestionOutcome::Found(response) => {
                assert_eq!(response.word, "Appl");
                assert_eq!(response.suggestions[0], "apple");
            }
            SuggestionOutcome::NoContent => panic!("Expected suggestions"),
        }
    }

    #[test]
    fn test_handle_no_content() {
        let service = scenario_service();
        assert_eq!(service.handle("apple"), SuggestionOutcome::NoContent);
        assert_eq!(service.handle(""), SuggestionOutcome::NoContent);
        assert!(service.handle("apple").into_response().is_none());
    }

    #[test]
    fn test_response_json_shape() {
        let response = SuggestionResponse {
            word: "appl".to_string(),
            suggestions: vec!["apple".to_string(), "apply".to_string()],
        };
        let json = serde_json::to_string(&response).unwrap();
        assert_eq!(json, r#"{"word":"appl","suggestions":["apple","apply"]}"#);
    }

    #[test]
    fn test_open_missing_dictionary() {
        let dir = tempfile::tempdir().unwrap();
        let result =
            SuggestionService::open(dir.path().join("nope.txt"), SuggestionConfig::default());
        assert!(matches!(result, Err(SuggestError::DictionaryNotFound(_))));
    }

    #[test]
    fn test_open_empty_dictionary() {
        let file = NamedTempFile::new().unwrap();
        let service = SuggestionService::open(file.path(), SuggestionConfig::default()).unwrap();
        assert!(service.engine().dictionary().is_empty());
        assert_eq!(service.handle("anything"), SuggestionOutcome::NoContent);
    }

    #[test]
    fn test_open_and_handle() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "Apple\napply\n  Angle  \nample").unwrap();
        file.flush().unwrap();

        let service = SuggestionService::open(file.path(), SuggestionConfig::default()).unwrap();
        assert_eq!(service.engine().dictionary().len(), 4);
        assert!(matches!(service.handle("appl"), SuggestionOutcome::Found(_)));
    }

    #[test]
    fn test_concurrent_queries() {
        let service = scenario_service();
        let expected = service.handle("appl");

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let service = service.clone();
                thread::spawn(move || service.handle("appl"))
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    }
}
