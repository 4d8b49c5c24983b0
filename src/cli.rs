use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Blockdash - Bitcoin blocks and mining statistics in the terminal",
    long_about = "Blockdash shows the blocks mined on a date, per-day transaction and mining \
                  statistics, and the latest blocks of a Bitcoin-family network. Data comes \
                  from the Bitquery GraphQL API; the API key is read from the environment."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to configuration file
    #[arg(short, long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Print the dashboard state as JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Print Prometheus metrics after the command finishes
    #[arg(long, global = true)]
    pub metrics: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Commands {
    /// Blocks mined on a date (defaults to today, UTC)
    Blocks {
        /// Date in YYYY-MM-DD format
        #[arg(short, long, value_parser = parse_date)]
        date: Option<NaiveDate>,
    },
    /// Per-day statistics charts for a trailing window
    Stats {
        /// Window length in days (defaults to the configured window)
        #[arg(short = 'n', long)]
        days: Option<u32>,
    },
    /// Latest blocks, optionally with one block expanded
    Explore {
        /// Height of the block to expand
        #[arg(short, long, value_name = "HEIGHT")]
        expand: Option<u64>,
    },
    /// Every section (default behavior)
    Dashboard,
}

fn parse_date(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|e| format!("invalid date '{value}', expected YYYY-MM-DD: {e}"))
}
