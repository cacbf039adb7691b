use chrono::NaiveDate;
use clap::{Parser, Subcommand};

/// CLI arguments for eclipsedb-cli
#[derive(Debug, Parser)]
#[command(
    name = "eclipsedb",
    version,
    about = "CLI for matching locations against the bundled eclipse catalog"
)]
pub struct CliArgs {
    /// Directory containing the catalog CSV files (default: bundled data)
    #[arg(short = 'd', long = "data-dir", global = true)]
    pub data_dir: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Find the next visible solar and lunar eclipse for a location
    Next {
        /// Free-form location ("Austin, TX, USA", "78701", "K1A 0B1", ...)
        location: String,

        /// Reference date, YYYY-MM-DD (default: today)
        #[arg(long)]
        date: Option<NaiveDate>,

        /// Emit machine-readable JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Show how a location string is parsed
    Parse {
        /// Free-form location text
        location: String,

        /// Emit machine-readable JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// List a catalog with one-line summaries
    Events {
        /// Catalog kind: solar or lunar
        kind: String,
    },

    /// Show a summary of the catalog contents
    Stats,
}
