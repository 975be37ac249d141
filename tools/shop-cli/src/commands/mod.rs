//! CLI command implementations.

pub mod categories;
pub mod config;
pub mod list;
pub mod show;
pub mod validate;

use clap::{Args, Subcommand};

/// Arguments for the list command.
#[derive(Args)]
pub struct ListArgs {
    /// Case-insensitive search over name, description and tags.
    #[arg(short, long)]
    pub search: Option<String>,

    /// Category name, or "all".
    #[arg(short, long)]
    pub category: Option<String>,

    /// Sort order: featured, price-low, price-high, rating, newest.
    #[arg(long)]
    pub sort: Option<String>,

    /// Layout: grid or list.
    #[arg(long)]
    pub view: Option<String>,
}

/// Arguments for the show command.
#[derive(Args)]
pub struct ShowArgs {
    /// Product id.
    pub id: i64,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
}
