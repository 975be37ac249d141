//! Shop CLI - Browse and check the shop catalog from the terminal.
//!
//! Commands:
//! - `shop list` - Search, filter and sort the catalog
//! - `shop show` - Show product details
//! - `shop categories` - List categories with product counts
//! - `shop validate` - Check the catalog snapshot for inconsistencies
//! - `shop config` - Manage configuration

mod commands;
mod config;
mod context;
mod logging;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{ConfigArgs, ListArgs, ShowArgs};

/// Shop CLI - Browse and validate the shop catalog
#[derive(Parser)]
#[command(name = "shop")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short = 'C', long, global = true)]
    config: Option<String>,

    /// Catalog snapshot path (overrides the config)
    #[arg(long, global = true)]
    catalog: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List products matching a search, category and sort order
    List(ListArgs),

    /// Show the details of one product
    Show(ShowArgs),

    /// List categories with product counts
    Categories,

    /// Check the catalog snapshot for inconsistencies
    Validate,

    /// Manage configuration
    Config(ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup output formatting
    let output = output::Output::new(cli.json);

    // Load config
    let ctx = context::Context::load(cli.config.as_deref(), cli.catalog.as_deref(), output)?;
    logging::init(&ctx.config.logging, cli.verbose);

    // Execute command
    let result = match cli.command {
        Commands::List(args) => commands::list::run(args, &ctx),
        Commands::Show(args) => commands::show::run(args, &ctx),
        Commands::Categories => commands::categories::run(&ctx),
        Commands::Validate => commands::validate::run(&ctx),
        Commands::Config(args) => commands::config::run(args, &ctx),
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
