//! Create command.

use anyhow::{Context as _, Result};
use cartella_commerce::catalog::{to_remote, Gender, ProductDraft, UNKNOWN_COMPANY};
use dialoguer::Confirm;

use super::CreateArgs;
use crate::context::Context;
use crate::output::format_price;

/// Run the create command.
pub async fn run(args: CreateArgs, ctx: &Context) -> Result<()> {
    let skip_prompt = args.yes || ctx.output.is_json();
    let draft = draft_from_args(args);

    // Validate before asking, so a bad price fails without a prompt.
    let payload = to_remote(&draft).context("Invalid product")?;

    ctx.output.header("New product");
    ctx.output.kv("Name", &payload.name);
    ctx.output.kv("Category", &payload.category);
    ctx.output.kv("Price", &format_price(payload.price));
    ctx.output
        .kv("Company", payload.brand.as_deref().unwrap_or(UNKNOWN_COMPANY));
    if let Some(gender) = &payload.gender {
        ctx.output.kv("Gender", gender);
    }

    if !skip_prompt {
        let confirmed = Confirm::new()
            .with_prompt("Create this product?")
            .default(true)
            .interact()?;

        if !confirmed {
            ctx.output.warn("Create cancelled");
            return Ok(());
        }
    }

    let storefront = ctx.storefront();
    let spinner = ctx.output.spinner("Creating product...");
    let created = storefront.catalog().create(&draft).await;
    spinner.finish_and_clear();
    let product = created.context("Could not create the product")?;

    if ctx.output.is_json() {
        ctx.output.json(&product);
    } else {
        ctx.output
            .success(&format!("Created {} ({})", product.name, product.id));
    }

    Ok(())
}

fn draft_from_args(args: CreateArgs) -> ProductDraft {
    let mut draft = ProductDraft::new(args.name, args.category, args.price);
    if let Some(company) = args.company {
        draft = draft.with_company(company);
    }
    if let Some(description) = args.description {
        draft = draft.with_description(description);
    }
    if let Some(image) = args.image {
        draft = draft.with_image(image);
    }
    if let Some(gender) = args.gender {
        draft = draft.with_gender(Gender::parse(&gender));
    }
    if let Some(color) = args.color {
        draft = draft.with_color(color);
    }
    draft
}
