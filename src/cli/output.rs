//! Output formatting for CLI commands.

use std::io::{self, Write};

use serde::{Deserialize, Serialize};

use crate::cli::args::OutputFormat;
use crate::error::Result;
use crate::spelling::suggest::Suggestion;

/// Suggestions for one word, either bare words or words with distances.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SuggestionList {
    Plain(Vec<String>),
    Scored(Vec<Suggestion>),
}

impl SuggestionList {
    pub fn is_empty(&self) -> bool {
        match self {
            SuggestionList::Plain(words) => words.is_empty(),
            SuggestionList::Scored(scored) => scored.is_empty(),
        }
    }

    fn joined(&self) -> String {
        match self {
            SuggestionList::Plain(words) => words.join(", "),
            SuggestionList::Scored(scored) => scored
                .iter()
                .map(|s| format!("{} ({})", s.word, s.distance))
                .collect::<Vec<_>>()
                .join(", "),
        }
    }
}

/// Result for a single looked-up word.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordReport {
    pub word: String,
    pub correct: bool,
    pub suggestions: SuggestionList,
}

/// Result structure for the suggest command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestReport {
    pub results: Vec<WordReport>,
}

/// Result structure for the distance command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DistanceResult {
    pub from: String,
    pub to: String,
    pub distance: usize,
}

/// A misspelled word found by the check command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Correction {
    pub word: String,
    pub suggestions: Vec<String>,
}

/// Result structure for the check command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckReport {
    pub words_checked: usize,
    pub misspelled: Vec<Correction>,
}

/// Dictionary statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DictionaryStats {
    pub dictionary_path: String,
    pub word_count: usize,
    pub max_suggestions: usize,
    pub max_distance: Option<usize>,
}

/// Plain-text rendering of a command result.
pub trait HumanReadable {
    fn write_human(&self, out: &mut dyn Write) -> io::Result<()>;
}

impl HumanReadable for WordReport {
    fn write_human(&self, out: &mut dyn Write) -> io::Result<()> {
        if self.correct {
            writeln!(out, "{}: correct", self.word)
        } else if self.suggestions.is_empty() {
            writeln!(out, "{}: no suggestions", self.word)
        } else {
            writeln!(out, "{}: {}", self.word, self.suggestions.joined())
        }
    }
}

impl HumanReadable for SuggestReport {
    fn write_human(&self, out: &mut dyn Write) -> io::Result<()> {
        for report in &self.results {
            report.write_human(out)?;
        }
        Ok(())
    }
}

impl HumanReadable for DistanceResult {
    fn write_human(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "{} -> {}: {}", self.from, self.to, self.distance)
    }
}

impl HumanReadable for CheckReport {
    fn write_human(&self, out: &mut dyn Write) -> io::Result<()> {
        if self.misspelled.is_empty() {
            return writeln!(out, "No misspelled words ({} checked)", self.words_checked);
        }

        writeln!(out, "Misspelled words:")?;
        writeln!(out, "─────────────────")?;
        for correction in &self.misspelled {
            writeln!(out, "{}: {}", correction.word, correction.suggestions.join(", "))?;
        }
        Ok(())
    }
}

impl HumanReadable for DictionaryStats {
    fn write_human(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Dictionary Statistics:")?;
        writeln!(out, "═════════════════════")?;
        writeln!(out, "Dictionary: {}", self.dictionary_path)?;
        writeln!(out, "Words: {}", self.word_count)?;
        writeln!(out, "Max suggestions: {}", self.max_suggestions)?;
        match self.max_distance {
            Some(distance) => writeln!(out, "Max distance: {distance}"),
            None => writeln!(out, "Max distance: unlimited"),
        }
    }
}

/// Output a result in the specified format.
pub fn write_result<T>(
    out: &mut dyn Write,
    result: &T,
    format: OutputFormat,
    pretty: bool,
) -> Result<()>
where
    T: Serialize + HumanReadable,
{
    match format {
        OutputFormat::Human => result.write_human(out)?,
        OutputFormat::Json => {
            if pretty {
                serde_json::to_writer_pretty(&mut *out, result)?;
            } else {
                serde_json::to_writer(&mut *out, result)?;
            }
            writeln!(out)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render<T: Serialize + HumanReadable>(result: &T, format: OutputFormat) -> String {
        let mut buf = Vec::new();
        write_result(&mut buf, result, format, false).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_word_report_human() {
        let found = WordReport {
            word: "appl".to_string(),
            correct: false,
            suggestions: SuggestionList::Scored(vec![
                Suggestion::new("apple", 1),
                Suggestion::new("apply", 1),
            ]),
        };
        assert_eq!(render(&found, OutputFormat::Human), "appl: apple (1), apply (1)\n");

        let correct = WordReport {
            word: "apple".to_string(),
            correct: true,
            suggestions: SuggestionList::Plain(Vec::new()),
        };
        assert_eq!(render(&correct, OutputFormat::Human), "apple: correct\n");
    }

    #[test]
    fn test_suggest_report_json() {
        let report = SuggestReport {
            results: vec![WordReport {
                word: "appl".to_string(),
                correct: false,
                suggestions: SuggestionList::Plain(vec!["apple".to_string()]),
            }],
        };
        assert_eq!(
            render(&report, OutputFormat::Json),
            "{\"results\":[{\"word\":\"appl\",\"correct\":false,\"suggestions\":[\"apple\"]}]}\n"
        );
    }

    #[test]
    fn test_distance_human() {
        let result = DistanceResult {
            from: "apple".to_string(),
            to: "fig".to_string(),
            distance: 5,
        };
        assert_eq!(render(&result, OutputFormat::Human), "apple -> fig: 5\n");
    }
}
