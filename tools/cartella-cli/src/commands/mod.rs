//! CLI commands.

pub mod config;
pub mod create;
pub mod filter;
pub mod list;
pub mod search;

use clap::{Args, Subcommand, ValueEnum};

/// Arguments for the list command.
#[derive(Args)]
pub struct ListArgs {
    /// Which slice of the catalog to show.
    #[arg(long, value_enum, default_value = "all")]
    pub view: View,

    /// Show at most this many products.
    #[arg(short, long)]
    pub limit: Option<usize>,
}

/// Landing-page shelves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum View {
    /// The whole catalog.
    All,
    /// New or on-sale products.
    Featured,
    /// Most-rated products.
    BestSellers,
    /// Phones, earphones, laptops and watches.
    Electronics,
}

/// Arguments for the search command.
#[derive(Args)]
pub struct SearchArgs {
    /// Search text. A blank query lists the whole catalog.
    #[arg(num_args = 0.., trailing_var_arg = true)]
    pub query: Vec<String>,
}

/// Arguments for the create command.
#[derive(Args)]
pub struct CreateArgs {
    /// Product name.
    #[arg(long)]
    pub name: String,

    /// Category.
    #[arg(long)]
    pub category: String,

    /// Price, e.g. 24.99.
    #[arg(long)]
    pub price: String,

    /// Brand.
    #[arg(long)]
    pub company: Option<String>,

    /// Description.
    #[arg(long)]
    pub description: Option<String>,

    /// Image URL.
    #[arg(long)]
    pub image: Option<String>,

    /// Target audience (men, women, kids, unisex).
    #[arg(long)]
    pub gender: Option<String>,

    /// Color.
    #[arg(long)]
    pub color: Option<String>,

    /// Skip confirmation prompt.
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for the filter command.
#[derive(Args)]
pub struct FilterArgs {
    /// Search the service first instead of loading the whole catalog.
    #[arg(short, long)]
    pub query: Option<String>,

    /// Accepted category (repeatable). None accepts all.
    #[arg(long = "category")]
    pub categories: Vec<String>,

    /// Lowest accepted price. Defaults to the cheapest loaded product.
    #[arg(long)]
    pub min_price: Option<f64>,

    /// Highest accepted price. Defaults to the dearest loaded product.
    #[arg(long)]
    pub max_price: Option<f64>,

    /// Minimum average rating (1-5). 0 disables the check.
    #[arg(long, default_value = "0")]
    pub min_rating: f64,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
}
