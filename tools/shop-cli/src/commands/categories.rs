//! Category listing command.

use anyhow::Result;
use serde::Serialize;
use shop_catalog::listing::ALL_CATEGORIES;
use shop_catalog::CatalogSnapshot;

use crate::context::Context;

#[derive(Debug, Serialize, PartialEq)]
struct CategoryRow {
    token: String,
    name: String,
    slug: String,
    products: usize,
}

/// Run the categories command.
pub fn run(ctx: &Context) -> Result<()> {
    let snapshot = ctx.load_catalog()?;
    let rows = category_rows(&snapshot);

    if ctx.output.is_json() {
        ctx.output.json(&rows);
        return Ok(());
    }

    ctx.output.header("Categories");
    let widths = [18, 24, 8];
    ctx.output.table_row(&["Filter", "Slug", "Products"], &widths);
    for row in &rows {
        ctx.output
            .table_row(&[&row.token, &row.slug, &row.products.to_string()], &widths);
    }

    Ok(())
}

/// The "all" entry followed by each category in snapshot order.
fn category_rows(snapshot: &CatalogSnapshot) -> Vec<CategoryRow> {
    let all = CategoryRow {
        token: ALL_CATEGORIES.to_string(),
        name: "All".to_string(),
        slug: String::new(),
        products: snapshot.products.len(),
    };

    std::iter::once(all)
        .chain(snapshot.categories.iter().map(|category| CategoryRow {
            token: category.name.clone(),
            name: category.name.clone(),
            slug: category.slug.clone(),
            products: snapshot.count_in_category(&category.name),
        }))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use shop_catalog::catalog::Category;

    #[test]
    fn test_category_rows() {
        let snapshot = CatalogSnapshot::new(
            Vec::new(),
            vec![
                Category::new(1, "Home & Kitchen", "home-kitchen"),
                Category::new(2, "Books", "books"),
            ],
        );

        let rows = category_rows(&snapshot);
        let tokens: Vec<&str> = rows.iter().map(|r| r.token.as_str()).collect();
        assert_eq!(tokens, vec!["all", "Home & Kitchen", "Books"]);
        assert!(rows.iter().all(|r| r.products == 0));
    }
}
