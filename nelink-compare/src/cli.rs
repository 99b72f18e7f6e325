use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "nelink-compare")]
#[command(about = "Compare and reconcile network element link exports")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Compare two link tables and classify every NE pair.
    Compare(CompareArgs),
    /// List duplicate NE-pair keys in a single table.
    Dupes(DupesArgs),
    /// Show basic structure of a single table.
    Inspect(InspectArgs),
}

#[derive(Parser, Debug)]
pub struct CompareArgs {
    pub file1: PathBuf,
    pub file2: PathBuf,
    /// Treat A->B and B->A as the same link.
    #[arg(long)]
    pub ignore_direction: bool,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
    #[arg(long)]
    pub summary: bool,
    #[arg(short, long)]
    pub quiet: bool,
    /// Write the full report as CSV.
    #[arg(long)]
    pub output: Option<PathBuf>,
    /// Write a corrected copy of FILE1 (right-table ports win, missing links appended).
    #[arg(long)]
    pub fix_output: Option<PathBuf>,
    /// Fail when any pair is missing on one side or has mismatched ports.
    #[arg(long)]
    pub strict: bool,
}

#[derive(Parser, Debug)]
pub struct DupesArgs {
    pub file: PathBuf,
    /// Treat A->B and B->A as the same link.
    #[arg(long)]
    pub ignore_direction: bool,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Parser, Debug)]
pub struct InspectArgs {
    pub file: PathBuf,
    /// Treat A->B and B->A as the same link when counting duplicates.
    #[arg(long)]
    pub ignore_direction: bool,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
