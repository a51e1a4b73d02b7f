//! CLI argument definitions using clap derive

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::cli::commands::{completions::CompletionsArgs, config::ConfigCommands};

#[derive(Parser)]
#[command(name = "clinic-desk")]
#[command(author, version, about = "Clinic Desk")]
#[command(long_about = "An interactive desk for patient records, emergency intake, treatment history and critical triage. State is kept in memory for the length of one run.")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub global: GlobalOpts,
}

#[derive(clap::Args, Clone, Debug, Default)]
pub struct GlobalOpts {
    /// Output format for listings
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Border style for table output
    #[arg(long, global = true)]
    pub style: Option<TableStyle>,

    /// Read menu input from a file instead of the terminal
    #[arg(long, global = true)]
    pub script: Option<PathBuf>,

    /// Suppress the menu banner and prompts
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Enable debug logging on stderr
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the interactive menu (the default)
    Run,

    /// Generate shell completion scripts
    Completions(CompletionsArgs),

    /// Show effective configuration
    #[command(subcommand)]
    Config(ConfigCommands),
}

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Bordered tables
    #[default]
    Table,
    /// One "Field: value" line per record
    Plain,
    /// JSON array (for programming)
    Json,
    /// CSV with a header row (for spreadsheets)
    Csv,
}

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TableStyle {
    #[default]
    Rounded,
    Ascii,
    Markdown,
    Psql,
}
