//! Service configuration.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::spelling::suggest::SuggestionConfig;

/// Word list used when no path is configured.
pub const DEFAULT_DICTIONARY_PATH: &str = "dictionary.txt";

/// Configuration for a [`SuggestionService`](crate::service::SuggestionService).
///
/// Every field has a default, so a JSON file only needs the keys it changes:
///
/// ```json
/// { "dictionary_path": "/usr/share/dict/words", "suggestion": { "max_distance": 3 } }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Path to the word list, one word per line.
    pub dictionary_path: PathBuf,
    /// Ranking settings.
    pub suggestion: SuggestionConfig,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        ServiceConfig {
            dictionary_path: PathBuf::from(DEFAULT_DICTIONARY_PATH),
            suggestion: SuggestionConfig::default(),
        }
    }
}

impl ServiceConfig {
    /// Load and validate a configuration from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let reader = BufReader::new(File::open(path)?);
        let config: ServiceConfig = serde_json::from_reader(reader)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.suggestion.validate()
    }
}
