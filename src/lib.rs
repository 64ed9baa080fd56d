//! # spellsuggest
//!
//! "Did you mean?" suggestions for single words, ranked by edit distance
//! against a fixed word list.
//!
//! ```
//! use spellsuggest::spelling::{Dictionary, SuggestionEngine};
//!
//! let dictionary = Dictionary::from_words(["apple", "apply", "angle", "ample"]);
//! let engine = SuggestionEngine::new(dictionary);
//!
//! assert!(engine.suggest("apple").is_empty());
//! assert_eq!(engine.suggest("appl")[0], "apple");
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod service;
pub mod spelling;

pub mod prelude {
    pub use crate::config::ServiceConfig;
    pub use crate::error::{Result, SuggestError};
    pub use crate::service::{SuggestionOutcome, SuggestionResponse, SuggestionService};
    pub use crate::spelling::{Dictionary, Suggestion, SuggestionConfig, SuggestionEngine};
}
