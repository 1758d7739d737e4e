//! List command.

use anyhow::{Context as _, Result};
use cartella_commerce::catalog::Product;
use cartella_commerce::search::{best_sellers, featured, in_categories, ELECTRONICS_CATEGORIES};

use super::{ListArgs, View};
use crate::context::Context;

/// Load the catalog and print one of its shelves.
pub async fn run(args: ListArgs, ctx: &Context) -> Result<()> {
    let storefront = ctx.storefront();

    let spinner = ctx.output.spinner("Loading catalog...");
    let loaded = storefront.catalog().fetch_all().await;
    spinner.finish_and_clear();
    let products = loaded.context("Could not load the catalog")?;

    let mut shown = shelf(args.view, &products);
    if let Some(limit) = args.limit {
        shown.truncate(limit);
    }

    ctx.output.header(view_title(args.view));
    ctx.output.products(&shown);

    Ok(())
}

/// The products a view shows, in display order.
pub fn shelf(view: View, products: &[Product]) -> Vec<Product> {
    match view {
        View::All => products.to_vec(),
        View::Featured => featured(products),
        View::BestSellers => best_sellers(products),
        View::Electronics => in_categories(products, &ELECTRONICS_CATEGORIES),
    }
}

fn view_title(view: View) -> &'static str {
    match view {
        View::All => "Catalog",
        View::Featured => "Featured",
        View::BestSellers => "Best sellers",
        View::Electronics => "Latest electronics",
    }
}
