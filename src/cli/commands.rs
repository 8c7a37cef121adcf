//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use uuid::Uuid;

/// Organization folder lookup CLI
#[derive(Parser, Debug)]
#[command(name = "org-folders")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Settings file (YAML or JSON)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Catalog file (YAML or JSON); overrides the settings file
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List every folder of an organization
    List {
        /// Organization id
        #[arg(long)]
        org: Uuid,
    },

    /// Fetch one page of an organization's folders
    Page {
        /// Organization id
        #[arg(long)]
        org: Uuid,

        /// Page size (defaults to the configured page size)
        #[arg(long, allow_negative_numbers = true)]
        limit: Option<i64>,

        /// Cursor from a previous page
        #[arg(long, default_value = "")]
        cursor: String,
    },

    /// Fetch every page of an organization in sequence
    Walk {
        /// Organization id
        #[arg(long)]
        org: Uuid,

        /// Page size (defaults to the configured page size)
        #[arg(long, allow_negative_numbers = true)]
        limit: Option<i64>,
    },

    /// List organizations in the catalog
    Orgs,

    /// Encode a page offset as a cursor
    EncodeCursor {
        /// Zero-based offset
        offset: usize,
    },

    /// Decode a cursor into its page offset
    DecodeCursor {
        /// Cursor token
        cursor: String,
    },
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Compact JSON on one line
    Json,
    /// Indented JSON
    Pretty,
}
