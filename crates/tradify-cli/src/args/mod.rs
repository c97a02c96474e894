// NOTE: Command Organization
//
// Read-only catalog commands (products, search, show) are flat because they
// are what people type most. Everything that writes or needs a terminal
// (contact, browse, config) is its own subcommand with its own flags.

mod commands;

pub use commands::*;

use crate::types::{LogLevel, OutputFormat};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "tradify")]
#[command(about = "Browse, search and share curated product deals", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Data directory (default: $TRADIFY_PATH or XDG data dir)")]
    pub data_dir: Option<String>,

    #[arg(long, global = true, help = "Storefront JSON to use instead of the built-in catalog")]
    pub catalog: Option<PathBuf>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
