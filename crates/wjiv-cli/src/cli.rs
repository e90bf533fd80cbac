use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Parse text extracted from WJ IV score reports into keyed records.
#[derive(Debug, Parser)]
#[command(name = "wjiv", about, version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Parse one or more extracted reports into records
    Parse {
        /// Extracted text files, one report line per line ('-' for stdin)
        #[arg(value_name = "FILE", required = true)]
        files: Vec<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        #[command(flatten)]
        options: ParseArgs,
    },

    /// Print the report lines with their indices
    Lines {
        /// Extracted text file ('-' for stdin)
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Show the detected language and section anchors
    Layout {
        /// Extracted text file ('-' for stdin)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

/// Parsing options shared by subcommands that build records.
#[derive(Debug, Args)]
pub struct ParseArgs {
    /// Header field the record ID is derived from
    #[arg(long, default_value = "Name")]
    pub id_field: String,

    /// Fail a report on any partial extraction
    #[arg(long)]
    pub strict: bool,

    /// Lines skipped after a page footer marker (default: 4)
    #[arg(long, default_value_t = 4)]
    pub footer_skip: usize,

    /// Lookahead from an entry to text resumed after a page break (default: 6)
    #[arg(long, default_value_t = 6)]
    pub footer_lookahead: usize,
}

/// Output format for records and layouts.
#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
