//! Command implementations for the spellsuggest CLI.

use std::io::{self, BufRead, Write};

use log::debug;

use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::ServiceConfig;
use crate::error::{Result, SuggestError};
use crate::service::{SuggestionOutcome, SuggestionService};
use crate::spelling::*;

/// Execute a CLI command against the process's stdin and stdout.
pub fn execute_command(args: SuggestArgs) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run(&args, &mut stdin.lock(), &mut stdout.lock())
}

/// Execute a CLI command with explicit input and output streams.
pub fn run(args: &SuggestArgs, input: &mut dyn BufRead, out: &mut dyn Write) -> Result<()> {
    // `distance` is the only command that works without a word list.
    if let Command::Distance(distance_args) = &args.command {
        return show_distance(distance_args, args, out);
    }

    let config = resolve_config(args)?;
    let service = SuggestionService::open(&config.dictionary_path, config.suggestion.clone())?;

    match &args.command {
        Command::Suggest(suggest_args) => suggest_words(&service, suggest_args, args, out),
        Command::Check(check_args) => check_text(&service, check_args, args, out),
        Command::Stats => show_stats(&service, &config, args, out),
        Command::Repl => run_repl(&service, args, input, out),
        Command::Distance(_) => Ok(()),
    }
}

/// Merge the optional config file with command line overrides.
pub fn resolve_config(args: &SuggestArgs) -> Result<ServiceConfig> {
    let mut config = match &args.config {
        Some(path) => {
            debug!("Loading configuration from {}", path.display());
            ServiceConfig::from_file(path)?
        }
        None => ServiceConfig::default(),
    };

    if let Some(path) = &args.dictionary {
        config.dictionary_path = path.clone();
    }
    if let Some(max_suggestions) = args.max_suggestions {
        if max_suggestions == 0 {
            return Err(SuggestError::invalid_argument("--max-suggestions must be at least 1"));
        }
        config.suggestion.max_suggestions = max_suggestions;
    }
    if args.max_distance.is_some() {
        config.suggestion.max_distance = args.max_distance;
    }

    config.validate()?;
    Ok(config)
}

fn suggest_words(
    service: &SuggestionService,
    suggest_args: &SuggestWordsArgs,
    cli_args: &SuggestArgs,
    out: &mut dyn Write,
) -> Result<()> {
    let engine = service.engine();

    let results = suggest_args
        .words
        .iter()
        .map(|word| {
            let suggestions = if suggest_args.scores {
                SuggestionList::Scored(engine.suggest_scored(word))
            } else {
                SuggestionList::Plain(engine.suggest(word))
            };
            WordReport {
                word: word.clone(),
                correct: engine.is_correct(word),
                suggestions,
            }
        })
        .collect();

    write_result(
        out,
        &SuggestReport { results },
        cli_args.output_format,
        cli_args.pretty,
    )
}

fn show_distance(
    distance_args: &DistanceArgs,
    cli_args: &SuggestArgs,
    out: &mut dyn Write,
) -> Result<()> {
    let result = DistanceResult {
        from: distance_args.from.clone(),
        to: distance_args.to.clone(),
        distance: levenshtein_distance(&distance_args.from, &distance_args.to),
    };
    write_result(out, &result, cli_args.output_format, cli_args.pretty)
}

fn check_text(
    service: &SuggestionService,
    check_args: &CheckArgs,
    cli_args: &SuggestArgs,
    out: &mut dyn Write,
) -> Result<()> {
    let misspelled = correct_text(&check_args.text, service.engine())
        .into_iter()
        .map(|(word, suggestions)| Correction { word, suggestions })
        .collect();

    let report = CheckReport {
        words_checked: extract_words(&check_args.text).len(),
        misspelled,
    };
    write_result(out, &report, cli_args.output_format, cli_args.pretty)
}

fn show_stats(
    service: &SuggestionService,
    config: &ServiceConfig,
    cli_args: &SuggestArgs,
    out: &mut dyn Write,
) -> Result<()> {
    let engine = service.engine();
    let stats = DictionaryStats {
        dictionary_path: config.dictionary_path.display().to_string(),
        word_count: engine.dictionary().len(),
        max_suggestions: engine.config().max_suggestions,
        max_distance: engine.config().max_distance,
    };
    write_result(out, &stats, cli_args.output_format, cli_args.pretty)
}

/// Look up the word being typed on each input line.
fn run_repl(
    service: &SuggestionService,
    cli_args: &SuggestArgs,
    input: &mut dyn BufRead,
    out: &mut dyn Write,
) -> Result<()> {
    for line in input.lines() {
        let line = line?;
        let Some(word) = last_word(&line) else {
            continue;
        };

        match (service.handle(word), cli_args.output_format) {
            (SuggestionOutcome::Found(response), OutputFormat::Json) => {
                serde_json::to_writer(&mut *out, &response)?;
                writeln!(out)?;
            }
            (SuggestionOutcome::Found(response), OutputFormat::Human) => {
                writeln!(out, "{}: {}", response.word, response.suggestions.join(", "))?;
            }
            (SuggestionOutcome::NoContent, OutputFormat::Json) => writeln!(out, "null")?,
            (SuggestionOutcome::NoContent, OutputFormat::Human) => {
                writeln!(out, "{word}: no suggestions")?;
            }
        }
        out.flush()?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::Cursor;
    use tempfile::NamedTempFile;

    fn word_list() -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "apple\napply\nangle\nample").unwrap();
        file.flush().unwrap();
        file
    }

    fn run_cli(argv: &[&str], stdin: &str) -> Result<String> {
        let args = SuggestArgs::try_parse_from(argv).unwrap();
        let mut input = Cursor::new(stdin.as_bytes().to_vec());
        let mut out = Vec::new();
        run(&args, &mut input, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_suggest_command() {
        let file = word_list();
        let path = file.path().to_str().unwrap();

        let output =
            run_cli(&["spellsuggest", "-d", path, "suggest", "appl", "apple"], "").unwrap();
        assert_eq!(output, "appl: apple, apply, ample, angle\napple: correct\n");
    }

    #[test]
    fn test_suggest_command_json_with_limit() {
        let file = word_list();
        let path = file.path().to_str().unwrap();

        let output = run_cli(
            &[
                "spellsuggest",
                "-f",
                "json",
                "--max-suggestions",
                "2",
                "-d",
                path,
                "suggest",
                "--scores",
                "appl",
            ],
            "",
        )
        .unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        let suggestions = &value["results"][0]["suggestions"];
        assert_eq!(suggestions.as_array().unwrap().len(), 2);
        assert_eq!(suggestions[0]["word"], "apple");
        assert_eq!(suggestions[0]["distance"], 1);
    }

    #[test]
    fn test_suggest_command_with_huge_limit() {
        let file = word_list();
        let path = file.path().to_str().unwrap();
        let limit = usize::MAX.to_string();

        let output = run_cli(
            &["spellsuggest", "--max-suggestions", limit.as_str(), "-d", path, "suggest", "appl"],
            "",
        )
        .unwrap();
        assert_eq!(output, "appl: apple, apply, ample, angle\n");
    }

    #[test]
    fn test_distance_needs_no_dictionary() {
        let output = run_cli(
            &["spellsuggest", "-d", "/definitely/missing.txt", "distance", "apple", "fig"],
            "",
        )
        .unwrap();
        assert_eq!(output, "apple -> fig: 5\n");
    }

    #[test]
    fn test_missing_dictionary_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.txt");

        let err =
            run_cli(&["spellsuggest", "-d", path.to_str().unwrap(), "stats"], "").unwrap_err();
        assert!(matches!(err, SuggestError::DictionaryNotFound(_)));
    }

    #[test]
    fn test_check_command() {
        let file = word_list();
        let path = file.path().to_str().unwrap();

        let output = run_cli(
            &["spellsuggest", "-f", "json", "-d", path, "check", "apple appl"],
            "",
        )
        .unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["words_checked"], 2);
        assert_eq!(value["misspelled"][0]["word"], "appl");
    }

    #[test]
    fn test_repl_uses_last_word() {
        let file = word_list();
        let path = file.path().to_str().unwrap();

        let output = run_cli(
            &["spellsuggest", "-f", "json", "-d", path, "repl"],
            "I ate an appl\nthe apple\nx\n",
        )
        .unwrap();
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[0],
            r#"{"word":"appl","suggestions":["apple","apply","ample","angle"]}"#
        );
        assert_eq!(lines[1], "null");
    }

    #[test]
    fn test_resolve_config_overrides() {
        let args = SuggestArgs::try_parse_from([
            "spellsuggest",
            "-d",
            "words.txt",
            "--max-distance",
            "2",
            "stats",
        ])
        .unwrap();
        let config = resolve_config(&args).unwrap();
        assert_eq!(config.dictionary_path, std::path::PathBuf::from("words.txt"));
        assert_eq!(config.suggestion.max_distance, Some(2));

        let args =
            SuggestArgs::try_parse_from(["spellsuggest", "--max-suggestions", "0", "stats"])
                .unwrap();
        assert!(matches!(resolve_config(&args), Err(SuggestError::InvalidArgument(_))));
    }
}
