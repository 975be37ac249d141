//! Configuration management commands.

use std::fs;

use anyhow::{bail, Result};
use dialoguer::Confirm;

use super::{ConfigArgs, ConfigCommand};
use crate::config::{generate_default_config, CONFIG_NAMES};
use crate::context::Context;

/// Run the config command.
pub fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Init { force } => init_config(force, ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    match &ctx.config_path {
        Some(path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.kv("file", "(none, using defaults)"),
    }

    ctx.output.info("[catalog]");
    ctx.output.kv("path", &ctx.config.catalog.path);
    ctx.output.kv("resolved", &ctx.catalog_path().display().to_string());

    ctx.output.info("[display]");
    ctx.output.kv("currency", &ctx.config.display.currency);
    ctx.output.kv("sort", ctx.config.display.sort.as_str());
    ctx.output.kv("view", ctx.config.display.view.as_str());

    ctx.output.info("[logging]");
    ctx.output.kv("level", &ctx.config.logging.level);
    ctx.output.kv("format", &format!("{:?}", ctx.config.logging.format).to_lowercase());

    Ok(())
}

fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join(CONFIG_NAMES[0]);

    if config_path.exists() && !force {
        if ctx.output.is_json() {
            bail!(
                "Config file already exists: {}. Use --force to overwrite.",
                config_path.display()
            );
        }

        let confirmed = Confirm::new()
            .with_prompt(format!("{} already exists. Overwrite?", config_path.display()))
            .default(false)
            .interact()?;

        if !confirmed {
            ctx.output.warn("Config init cancelled");
            return Ok(());
        }
    }

    fs::write(&config_path, generate_default_config())?;
    tracing::debug!(path = %config_path.display(), "config written");

    ctx.output.success(&format!("Created: {}", config_path.display()));

    Ok(())
}
