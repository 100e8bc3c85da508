use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Reconstruct spreadsheet-ready grids from positioned text fragments.
#[derive(Debug, Parser)]
#[command(name = "textgrid", about, version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Reconstruct the cell grid for each page
    Grid {
        /// Path to the fragment JSON file: an array of pages, each an
        /// array of `{"x": .., "y": .., "text": ".."}` objects
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Page to process (1-indexed). Default: all pages
        #[arg(long)]
        page: Option<usize>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Percent-decode fragment text (for pdf2json-style extractor dumps)
        #[arg(long)]
        percent_decode: bool,
    },

    /// Show inferred column clusters and width hints
    Columns {
        /// Path to the fragment JSON file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Page to process (1-indexed). Default: all pages
        #[arg(long)]
        page: Option<usize>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Percent-decode fragment text (for pdf2json-style extractor dumps)
        #[arg(long)]
        percent_decode: bool,
    },
}

/// Output format for subcommands.
#[derive(Debug, Clone, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable, tab-separated
    Text,
    /// JSON
    Json,
    /// CSV
    Csv,
}
