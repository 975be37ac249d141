//! Product detail command.

use anyhow::Result;
use shop_catalog::prelude::*;

use super::ShowArgs;
use crate::context::Context;
use crate::output::{stars, stock_badge};

/// Run the show command.
pub fn run(args: ShowArgs, ctx: &Context) -> Result<()> {
    let snapshot = ctx.load_catalog()?;
    let formatter = ctx.price_formatter()?;

    let mut state = ListingState::new();
    state.open_by_id(&snapshot, ProductId::new(args.id))?;
    let Some(product) = state.overlay.product() else {
        return Ok(());
    };

    if ctx.output.is_json() {
        ctx.output.json(product);
        return Ok(());
    }

    ctx.output.header(&product.name);
    ctx.output.kv("category", &product.category);
    ctx.output.kv(
        "rating",
        &format!("{} ({} reviews)", stars(product.rating), product.review_count),
    );
    ctx.output.kv("price", &formatter.format(product.price));
    if product.is_on_sale() {
        ctx.output.kv("was", &formatter.format(product.compare_price));
        if let Some(savings) = product.savings(formatter.currency()) {
            ctx.output.kv("you save", &savings.to_string());
        }
    }
    ctx.output.kv("stock", &stock_badge(&product.stock_status(), true));
    ctx.output.kv("image", product.display_image());

    ctx.output.header("Description");
    ctx.output.line(&product.description);

    if !product.features.is_empty() {
        ctx.output.header("Features");
        for feature in &product.features {
            ctx.output.list_item(feature);
        }
    }

    let specs = product.specification_rows();
    if !specs.is_empty() {
        ctx.output.header("Specifications");
        for row in &specs {
            ctx.output.kv(&row.label, row.value);
        }
    }

    Ok(())
}
