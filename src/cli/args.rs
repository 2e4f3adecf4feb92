//! Command line argument parsing for the Strigil CLI using clap.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::pipeline::PreprocessingOptions;

/// Strigil - a configurable text normalization and tokenization pipeline
#[derive(Parser, Debug, Clone)]
#[command(name = "strigil")]
#[command(about = "A configurable text normalization and tokenization pipeline")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct StrigilArgs {
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

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl StrigilArgs {
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
    /// Process a single text
    Process(ProcessArgs),

    /// Process an uploaded file as a batch
    Batch(BatchArgs),
}

/// Arguments for single-text processing
#[derive(Args, Debug, Clone)]
pub struct ProcessArgs {
    /// The text to process
    pub text: String,

    #[command(flatten)]
    pub options: OptionArgs,
}

/// Arguments for batch processing
#[derive(Args, Debug, Clone)]
pub struct BatchArgs {
    /// The file to process (.txt, .csv, or .tsv)
    pub file: PathBuf,

    /// Column to extract from delimited files (default: "text")
    #[arg(short, long)]
    pub column: Option<String>,

    /// Process rows one at a time instead of in parallel
    #[arg(long)]
    pub sequential: bool,

    #[command(flatten)]
    pub options: OptionArgs,
}

/// Preprocessing option switches, shared by both commands.
///
/// Each switch takes an explicit true/false value so the service defaults
/// can stay on without awkward `--no-*` flags.
#[derive(Args, Debug, Clone)]
pub struct OptionArgs {
    /// Fold text to lowercase
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    pub lowercase: bool,

    /// Delete punctuation characters
    #[arg(long = "remove-punctuation", default_value_t = true, action = clap::ArgAction::Set)]
    pub remove_punctuation: bool,

    /// Delete characters that are neither alphanumeric nor whitespace
    #[arg(long = "remove-special", default_value_t = false, action = clap::ArgAction::Set)]
    pub remove_special: bool,

    /// Split the normalized text into tokens
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    pub tokenize: bool,

    /// Drop stopword tokens
    #[arg(long = "remove-stopwords", default_value_t = true, action = clap::ArgAction::Set)]
    pub remove_stopwords: bool,

    /// Replace tokens with their dictionary base form
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    pub lemmatize: bool,

    /// Replace tokens with their stem
    #[arg(long, default_value_t = false, action = clap::ArgAction::Set)]
    pub stem: bool,
}

impl OptionArgs {
    /// Convert the CLI switches into pipeline options.
    pub fn to_options(&self) -> PreprocessingOptions {
        PreprocessingOptions {
            lowercase: self.lowercase,
            remove_punctuation: self.remove_punctuation,
            remove_special: self.remove_special,
            tokenize: self.tokenize,
            remove_stopwords: self.remove_stopwords,
            lemmatize: self.lemmatize,
            stem: self.stem,
        }
    }
}

/// Output format options
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
