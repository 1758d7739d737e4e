//! Cartella CLI - browse and edit a remote catalog from the terminal.
//!
//! Commands:
//! - `cartella list` - Load the catalog, optionally as a landing-page shelf
//! - `cartella search` - Search the catalog service
//! - `cartella create` - Create a product
//! - `cartella filter` - Load products and narrow them client-side
//! - `cartella config` - Manage configuration

mod commands;
mod config;
mod context;
mod logging;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{ConfigArgs, CreateArgs, FilterArgs, ListArgs, SearchArgs};

/// Cartella CLI - Browse and edit a storefront catalog
#[derive(Parser)]
#[command(name = "cartella")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List catalog products
    List(ListArgs),

    /// Search the catalog
    Search(SearchArgs),

    /// Create a product
    Create(CreateArgs),

    /// Filter products by category, price and rating
    Filter(FilterArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let output = output::Output::new(cli.verbose, cli.json);

    let ctx = context::Context::load(cli.config.as_deref(), output)?;
    logging::init(&ctx.config.log, cli.verbose);
    tracing::debug!(
        config_file = ?ctx.config_path,
        api = %ctx.config.api.base_url,
        "configuration loaded"
    );

    let result = match cli.command {
        Commands::List(args) => commands::list::run(args, &ctx).await,
        Commands::Search(args) => commands::search::run(args, &ctx).await,
        Commands::Create(args) => commands::create::run(args, &ctx).await,
        Commands::Filter(args) => commands::filter::run(args, &ctx).await,
        Commands::Config(args) => commands::config::run(args, &ctx).await,
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
