//! Search command.

use anyhow::{Context as _, Result};

use super::SearchArgs;
use crate::context::Context;

pub async fn run(args: SearchArgs, ctx: &Context) -> Result<()> {
    let query = args.query.join(" ");
    let storefront = ctx.storefront();

    let spinner = ctx.output.spinner(&format!("Searching for \"{}\"...", query.trim()));
    let found = storefront.catalog().search(&query).await;
    spinner.finish_and_clear();
    let products = found.with_context(|| format!("Search for \"{}\" failed", query.trim()))?;

    if query.trim().is_empty() {
        ctx.output.header("Catalog");
    } else {
        ctx.output.header(&format!("Results for \"{}\"", query.trim()));
    }
    ctx.output.products(&products);

    Ok(())
}
