//! Product listing command.

use anyhow::{anyhow, Result};
use serde::Serialize;
use shop_catalog::prelude::*;

use super::ListArgs;
use crate::config::ShopConfig;
use crate::context::Context;
use crate::output::{pad_columns, stars, stock_badge, truncate};

/// Column widths for the grid table: id, name, price.
const GRID_WIDTHS: [usize; 3] = [4, 36, 22];

/// Run the list command.
pub fn run(args: ListArgs, ctx: &Context) -> Result<()> {
    let snapshot = ctx.load_catalog()?;
    let formatter = ctx.price_formatter()?;

    if let Some(sort) = &args.sort {
        if !SortKey::ALL.iter().any(|key| key.as_str() == sort) {
            ctx.output.warn(&format!("Unknown sort key '{}', using featured order", sort));
        }
    }

    let state = build_state(&args, &ctx.config)?;
    if let CategoryToken::Named(name) = &state.category {
        if snapshot.category_by_name(name).is_err() {
            ctx.output.warn(&format!("No category named '{}'", name));
        }
    }

    let results = state.results(&snapshot);

    if ctx.output.is_json() {
        ctx.output.json(&ListingReport {
            summary: results.summary(),
            search: &state.search_term,
            category: &state.category,
            sort: state.sort,
            view: state.view_mode,
            products: results.iter().collect(),
        });
        return Ok(());
    }

    ctx.output.header(&results.summary());

    if results.is_empty() {
        ctx.output.info("No products found");
        ctx.output.info("Try adjusting your search terms or browse all categories.");
        return Ok(());
    }

    for line in render(&results, &formatter, state.view_mode) {
        ctx.output.line(&line);
    }

    Ok(())
}

#[derive(Serialize)]
struct ListingReport<'a> {
    summary: String,
    search: &'a str,
    category: &'a CategoryToken,
    sort: SortKey,
    view: ViewMode,
    products: Vec<&'a Product>,
}

/// Listing state from the configured defaults and the command-line options.
fn build_state(args: &ListArgs, config: &ShopConfig) -> Result<ListingState> {
    let view = match &args.view {
        Some(view) => ViewMode::from_str(view)
            .ok_or_else(|| anyhow!("Unknown view '{}': expected grid or list", view))?,
        None => config.display.view,
    };

    let mut state = ListingState::with_preferences(config.display.sort, view);
    if let Some(search) = &args.search {
        state.apply(ListingAction::SetSearch(search.clone()));
    }
    if let Some(category) = &args.category {
        state.apply(ListingAction::SelectCategory(CategoryToken::parse(category)));
    }
    if let Some(sort) = &args.sort {
        state.apply(ListingAction::SetSort(SortKey::parse(sort)));
    }

    Ok(state)
}

/// Render the ordered results as terminal lines.
fn render(results: &ListingResults<'_>, formatter: &PriceFormatter, view: ViewMode) -> Vec<String> {
    match view {
        ViewMode::Grid => {
            let mut lines = vec![format!(
                "  {}",
                pad_columns(&["ID", "Name", "Price"], &GRID_WIDTHS)
            )];
            for product in results.iter() {
                let id = product.id.to_string();
                let price = price_text(product, formatter);
                lines.push(format!(
                    "  {}  {}  {}",
                    pad_columns(&[&id, &product.name, &price], &GRID_WIDTHS),
                    stars(product.rating),
                    stock_badge(&product.stock_status(), false)
                ));
            }
            lines
        }
        ViewMode::List => results
            .iter()
            .flat_map(|product| {
                [
                    format!("  #{} {} [{}]", product.id, product.name, product.category),
                    format!(
                        "     {} ({})  {}",
                        stars(product.rating),
                        product.review_count,
                        price_text(product, formatter)
                    ),
                    format!("     {}", truncate(&product.short_description, 72)),
                    format!("     {}", stock_badge(&product.stock_status(), false)),
                    String::new(),
                ]
            })
            .collect(),
    }
}

fn price_text(product: &Product, formatter: &PriceFormatter) -> String {
    let price = formatter.format(product.price);
    if product.is_on_sale() {
        format!("{} (was {})", price, formatter.format(product.compare_price))
    } else {
        price
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot() -> CatalogSnapshot {
        CatalogSnapshot::from_json_str(
            r#"{
                "products": [
                    {"id": 1, "name": "Desk Lamp", "slug": "desk-lamp", "description": "Warm LED lamp", "price": 45.0,
                     "comparePrice": 60.0, "category": "Home", "categoryId": 1, "inStock": true,
                     "stockQuantity": 4, "rating": 4.5, "reviewCount": 12, "tags": ["lighting"],
                     "shortDescription": "LED lamp"},
                    {"id": 2, "name": "Floor Lamp", "slug": "floor-lamp", "description": "Tall lamp", "price": 120.0,
                     "comparePrice": 120.0, "category": "Home", "categoryId": 1, "inStock": false,
                     "stockQuantity": 0, "rating": 3.0, "reviewCount": 2, "tags": ["lighting"],
                     "shortDescription": "Tall lamp"},
                    {"id": 3, "name": "Notebook", "slug": "notebook", "description": "Dotted pages", "price": 8.5,
                     "comparePrice": 8.5, "category": "Office", "categoryId": 2, "inStock": true,
                     "stockQuantity": 100, "rating": 5.0, "reviewCount": 40, "tags": ["paper"],
                     "shortDescription": "A5 notebook"}
                ],
                "categories": [
                    {"id": 1, "name": "Home", "slug": "home"},
                    {"id": 2, "name": "Office", "slug": "office"}
                ]
            }"#,
        )
        .unwrap()
    }

    fn args(search: Option<&str>, category: Option<&str>, sort: Option<&str>) -> ListArgs {
        ListArgs {
            search: search.map(str::to_string),
            category: category.map(str::to_string),
            sort: sort.map(str::to_string),
            view: None,
        }
    }

    #[test]
    fn test_build_state_from_config_defaults() {
        let mut config = ShopConfig::default();
        config.display.sort = SortKey::Rating;
        config.display.view = ViewMode::List;

        let state = build_state(&args(None, None, None), &config).unwrap();
        assert_eq!(state.sort, SortKey::Rating);
        assert_eq!(state.view_mode, ViewMode::List);
        assert!(!state.has_active_filters());
    }

    #[test]
    fn test_build_state_args_override() {
        let state = build_state(
            &args(Some("lamp"), Some("Home"), Some("price-high")),
            &ShopConfig::default(),
        )
        .unwrap();

        let snapshot = snapshot();
        let ids: Vec<i64> = state.results(&snapshot).iter().map(|p| p.id.get()).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn test_build_state_all_category_and_unknown_sort() {
        let state = build_state(&args(None, Some("all"), Some("cheapest")), &ShopConfig::default()).unwrap();
        assert_eq!(state.category, CategoryToken::All);
        assert_eq!(state.sort, SortKey::Featured);
    }

    #[test]
    fn test_build_state_rejects_unknown_view() {
        let mut a = args(None, None, None);
        a.view = Some("table".to_string());
        assert!(build_state(&a, &ShopConfig::default()).is_err());
    }

    #[test]
    fn test_render_grid() {
        console::set_colors_enabled(false);
        let snapshot = snapshot();
        let results = derive_listing(&snapshot.products, &ListingFilter::default(), SortKey::PriceLow);

        let lines = render(&results, &PriceFormatter::default(), ViewMode::Grid);
        assert_eq!(lines.len(), 4);
        assert!(lines[0].contains("Name"));
        assert!(lines[1].contains("Notebook"));
        assert!(lines[2].contains("$45.00 (was $60.00)"));
        assert!(lines[2].ends_with("\u{2713} In Stock (4)"));
        assert!(lines[3].ends_with("\u{2717} Out of Stock"));
    }

    #[test]
    fn test_render_list() {
        console::set_colors_enabled(false);
        let snapshot = snapshot();
        let filter = ListingFilter::new("notebook", CategoryToken::All);
        let results = derive_listing(&snapshot.products, &filter, SortKey::Featured);

        let lines = render(&results, &PriceFormatter::default(), ViewMode::List);
        assert_eq!(lines[0], "  #3 Notebook [Office]");
        assert_eq!(lines[1], "     \u{2605}\u{2605}\u{2605}\u{2605}\u{2605} (40)  $8.50");
        assert_eq!(lines[2], "     A5 notebook");
    }
}
