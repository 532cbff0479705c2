//! CLI argument parsing for memlog

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "ml")]
#[command(author, version, about = "Append-only memory log with hybrid recall", long_about = None)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Path to the memory log file (overrides config)
    #[arg(short, long)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Append text to the memory log
    Append {
        /// Text to remember; omit to read from stdin
        text: Option<String>,
    },

    /// Search the log by relevance
    Search {
        /// Query text
        #[arg(required = true)]
        query: String,

        /// Maximum results to return (default: 10)
        #[arg(short, long)]
        max_results: Option<usize>,

        /// Emit results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show lines by number: "7", "2-5", or "1,3,9"
    Show {
        /// Line selector expression
        #[arg(required = true)]
        selector: String,
    },
}
