//! CLI argument definitions using clap

use clap::{Parser, ValueEnum};

/// Interactive red-black tree: insert, print and delete integer keys
#[derive(Parser, Debug, Clone)]
#[command(name = "rbtree-set")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Increase log verbosity (-d info, -dd debug, -ddd trace). RUST_LOG overrides.
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub debug: u8,

    /// Output format for the print command
    #[arg(short, long, value_enum, env = "RBTREE_FORMAT", default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Suppress the banner and prompts (for piped input)
    #[arg(short, long, env = "RBTREE_QUIET")]
    pub quiet: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One block per node, in key order
    #[default]
    Text,
    /// A JSON array of node views
    Json,
}
