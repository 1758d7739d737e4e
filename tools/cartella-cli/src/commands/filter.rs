//! Filter command.

use anyhow::{bail, Context as _, Result};
use cartella_commerce::catalog::Product;
use cartella_commerce::search::{categories, FilterCriteria};

use super::FilterArgs;
use crate::context::Context;
use crate::output::format_price;

/// Load products (whole catalog or a search) and narrow them client-side.
pub async fn run(args: FilterArgs, ctx: &Context) -> Result<()> {
    let storefront = ctx.storefront();

    let spinner = ctx.output.spinner("Loading products...");
    let loaded = match args.query.as_deref() {
        Some(query) => storefront.catalog().search(query).await,
        None => storefront.catalog().fetch_all().await,
    };
    spinner.finish_and_clear();
    let products = loaded.context("Could not load products")?;

    let criteria = criteria_from_args(&args, &products)?;
    let (min, max) = criteria.price_range;
    ctx.output.header("Filtered products");
    ctx.output
        .kv("Price", &format!("{} - {}", format_price(min), format_price(max)));
    if !args.categories.is_empty() {
        ctx.output.kv("Categories", &args.categories.join(", "));
    } else {
        ctx.output.kv("Available", &categories(&products).join(", "));
    }

    ctx.output.products(&storefront.visible_products(&criteria));

    Ok(())
}

/// Build criteria; unset price bounds fall back to the loaded price range.
fn criteria_from_args(args: &FilterArgs, products: &[Product]) -> Result<FilterCriteria> {
    if !(0.0..=5.0).contains(&args.min_rating) {
        bail!("--min-rating must be between 0 and 5");
    }

    let observed = FilterCriteria::unrestricted(products).price_range;
    let min = args.min_price.unwrap_or(observed.0);
    let max = args.max_price.unwrap_or(observed.1);
    if min > max {
        bail!("--min-price must not exceed --max-price");
    }

    Ok(FilterCriteria::new(min, max)
        .with_categories(args.categories.iter().cloned())
        .with_min_rating(args.min_rating))
}
