//! Catalog validation command.

use anyhow::{bail, Result};

use crate::context::Context;

/// Run the validate command.
pub fn run(ctx: &Context) -> Result<()> {
    ctx.output.header("Validating catalog");

    let snapshot = ctx.load_catalog()?;
    let issues = snapshot.validate();

    if ctx.output.is_json() {
        let issues: Vec<String> = issues.iter().map(ToString::to_string).collect();
        ctx.output.json(&serde_json::json!({
            "valid": issues.is_empty(),
            "products": snapshot.products.len(),
            "categories": snapshot.categories.len(),
            "issues": issues,
        }));
    } else {
        for issue in &issues {
            ctx.output.error(&format!("Error: {}", issue));
        }
    }

    if !issues.is_empty() {
        bail!("Catalog has {} issue(s)", issues.len());
    }

    ctx.output.success(&format!(
        "Catalog is valid ({} products, {} categories)",
        snapshot.products.len(),
        snapshot.categories.len()
    ));

    Ok(())
}
