use crate::core::runner::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "pattern-catalog")]
#[command(about = "Runnable catalog of classic object-oriented design pattern demos")]
#[command(version)]
pub struct CliConfig {
    /// Optional TOML file tuning the demo inputs
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format for demo transcripts
    #[arg(long, value_enum, default_value = "text", global = true)]
    pub format: OutputFormat,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// List the available demos
    List {
        /// Only show one category (behavioral, creational, structural, oops)
        #[arg(long)]
        category: Option<String>,
    },

    /// Run the named demos in the given order
    Run {
        /// Demo names, e.g. observer or chain-of-responsibility
        #[arg(required = true)]
        names: Vec<String>,
    },

    /// Run every demo
    All {
        /// Only run one category
        #[arg(long)]
        category: Option<String>,
    },
}
