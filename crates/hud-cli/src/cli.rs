//! CLI argument definitions for pokerhud.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "pokerhud")]
#[command(about = "Preflop VPIP/PFR tracker for table logs", version)]
pub struct Args {
    /// Engine config file (ignored when absent)
    #[arg(long, value_name = "FILE", default_value = "hud.toml", env = "POKERHUD_CONFIG")]
    pub config: String,

    /// Log engine decisions at debug level
    #[arg(long, short)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Ingest a feed file and update the stored statistics
    Replay {
        /// Feed file, one log line per line
        feed: String,
        /// Snapshot file to restore from and save back to
        #[arg(long, short, default_value = "hud-stats.json")]
        snapshot: String,
        /// Feed line format
        #[arg(long, short, value_enum, default_value = "plain")]
        format: FeedFormat,
    },
    /// Render stored statistics
    Show {
        #[arg(long, short, default_value = "hud-stats.json")]
        snapshot: String,
        /// Output format
        #[arg(long, short, value_enum, default_value = "table")]
        format: OutputFormat,
    },
    /// Show players tracked and total hands
    Summary {
        #[arg(long, short, default_value = "hud-stats.json")]
        snapshot: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Remove players not seen within the retention window
    Prune {
        #[arg(long, short, default_value = "hud-stats.json")]
        snapshot: String,
        /// Retention window in days (defaults to the config value)
        #[arg(long)]
        retention_days: Option<u32>,
    },
    /// Clear all statistics
    Reset {
        #[arg(long, short, default_value = "hud-stats.json")]
        snapshot: String,
    },
    /// Print how a single log line is classified
    Classify {
        /// Raw log line
        line: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum FeedFormat {
    /// Raw lines, no sequence tokens
    Plain,
    /// `<seq>\t<line>` with a monotonic sequence token
    Seq,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Table,
    Tsv,
    Json,
    Hud,
}
