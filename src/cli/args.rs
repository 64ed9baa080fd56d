//! Command line argument parsing for the spellsuggest CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// spellsuggest - "Did you mean?" suggestions from a word list
#[derive(Parser, Debug, Clone)]
#[command(name = "spellsuggest")]
#[command(about = "Edit-distance spelling suggestions from a word list")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct SuggestArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Word list, one word per line (overrides the config file)
    #[arg(short, long, value_name = "WORD_LIST", env = "SPELLSUGGEST_DICTIONARY")]
    pub dictionary: Option<PathBuf>,

    /// JSON configuration file
    #[arg(short, long, value_name = "CONFIG_FILE")]
    pub config: Option<PathBuf>,

    /// Maximum number of suggestions per word
    #[arg(long)]
    pub max_suggestions: Option<usize>,

    /// Ignore dictionary words further than this edit distance
    #[arg(long)]
    pub max_distance: Option<usize>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl SuggestArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Suggest corrections for one or more words
    Suggest(SuggestWordsArgs),

    /// Print the edit distance between two words
    Distance(DistanceArgs),

    /// Report misspelled words in a piece of text
    Check(CheckArgs),

    /// Show dictionary statistics
    Stats,

    /// Read lines from stdin and suggest for the last word of each
    Repl,
}

/// Arguments for suggesting words
#[derive(Parser, Debug, Clone)]
pub struct SuggestWordsArgs {
    /// Words to look up
    #[arg(value_name = "WORD", required = true)]
    pub words: Vec<String>,

    /// Include the edit distance of each suggestion
    #[arg(long)]
    pub scores: bool,
}

/// Arguments for the distance command
#[derive(Parser, Debug, Clone)]
pub struct DistanceArgs {
    #[arg(value_name = "FROM")]
    pub from: String,

    #[arg(value_name = "TO")]
    pub to: String,
}

/// Arguments for checking text
#[derive(Parser, Debug, Clone)]
pub struct CheckArgs {
    /// Text to check
    #[arg(value_name = "TEXT")]
    pub text: String,
}

/// Output formats available in CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
