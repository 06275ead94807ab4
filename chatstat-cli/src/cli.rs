//! CLI parser.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::config::ConfigOverrides;

#[derive(Parser)]
#[command(name = "chatstat")]
#[command(about = "Chat export analyzer: top senders, repeated messages, first and last messages", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Load one or more exports in order and print a report after each successful load.
    Analyze {
        #[arg(required = true)]
        files: Vec<PathBuf>,
        /// Leaderboard size (overrides CHATSTAT_TOP_LIMIT).
        #[arg(short, long)]
        top: Option<usize>,
        /// Earliest/latest list size (overrides CHATSTAT_CHRONO_COUNT).
        #[arg(short, long)]
        count: Option<usize>,
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Print message and sender totals for one export.
    Summary { file: PathBuf },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

impl Commands {
    pub fn overrides(&self) -> ConfigOverrides {
        match self {
            Commands::Analyze { top, count, .. } => ConfigOverrides {
                top_limit: *top,
                chrono_count: *count,
            },
            Commands::Summary { .. } => ConfigOverrides::default(),
        }
    }
}
