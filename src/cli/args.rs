//! Command line argument parsing for the Thesaurus CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// Thesaurus - A concurrent synonym registry
#[derive(Parser, Debug, Clone)]
#[command(name = "thesaurus")]
#[command(about = "A concurrent, in-memory synonym registry")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct ThesaurusArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human", global = true)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Registry configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE", env = "THESAURUS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Number of lock shards (overrides the configuration file)
    #[arg(long, value_name = "COUNT")]
    pub shards: Option<usize>,

    /// Subcommand to execute (defaults to the interactive menu)
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl ThesaurusArgs {
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
    /// Run the interactive menu
    Interactive,

    /// Load synonym groups from a file and answer queries
    Batch(BatchArgs),
}

/// Arguments for batch mode
#[derive(Parser, Debug, Clone)]
pub struct BatchArgs {
    /// File with one comma-separated synonym group per line
    #[arg(short, long, value_name = "GROUPS_FILE")]
    pub groups: PathBuf,

    /// Words to look up after loading (repeatable)
    #[arg(short, long = "word", value_name = "WORD")]
    pub words: Vec<String>,

    /// Print every known word
    #[arg(long)]
    pub list_words: bool,

    /// Print registry statistics
    #[arg(long)]
    pub stats: bool,
}

/// Output format options
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
