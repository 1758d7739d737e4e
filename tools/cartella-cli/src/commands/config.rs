//! Config command.

use std::fs;

use anyhow::{bail, Result};
use cartella_store::StorefrontConfig;

use super::{ConfigArgs, ConfigCommand};
use crate::config::{generate_default_config, save};
use crate::context::Context;

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
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

    ctx.output.header("Configuration");
    match &ctx.config_path {
        Some(path) => ctx.output.kv("File", &path.display().to_string()),
        None => ctx.output.kv("File", "(defaults)"),
    }
    println!();
    print!("{}", toml::to_string_pretty(&ctx.config)?);

    Ok(())
}

/// Write a starter config. JSON mode writes `cartella.json` instead of the
/// commented TOML template.
fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let json = ctx.output.is_json();
    let config_path = ctx
        .cwd
        .join(if json { "cartella.json" } else { "cartella.toml" });

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    if json {
        save(&StorefrontConfig::default(), &config_path)?;
        ctx.output
            .json(&serde_json::json!({ "created": config_path.display().to_string() }));
    } else {
        fs::write(&config_path, generate_default_config())?;
        ctx.output.success(&format!("Created: {}", config_path.display()));
    }

    Ok(())
}
