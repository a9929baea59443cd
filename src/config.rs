use std::path::PathBuf;

use clap::Parser;

use crate::store::DEFAULT_INVENTORY_FILE;

/// Interactive single-user inventory tracker.
#[derive(Debug, Clone, Parser)]
#[command(name = "inventory", version, about)]
pub struct Config {
    /// Inventory file, read at startup and rewritten on save
    #[arg(short, long, default_value = DEFAULT_INVENTORY_FILE)]
    pub file: PathBuf,

    /// Log filter used when RUST_LOG is not set (e.g. "info", "inventory=debug")
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}
