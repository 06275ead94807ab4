//! # chatstat-cli
//!
//! Terminal front-end: argument parsing, config loading, and rendering of analysis reports.

pub mod cli;
pub mod config;
pub mod render;
pub mod run;

pub use cli::{Cli, Commands, OutputFormat};
pub use config::{AnalyzerConfig, ConfigOverrides};
pub use run::{run_analyze, run_summary};
