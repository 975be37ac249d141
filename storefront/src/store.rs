//! Page state shared by the listing components.
//!
//! The catalog snapshot is embedded at build time and parsed once. The
//! listing page keeps one [`ListingState`] signal; the ordered results are a
//! memo over the (search, category, sort) triple only, so opening the detail
//! overlay or switching the view mode never re-runs filter and sort.

use std::sync::OnceLock;

use leptos::prelude::*;
use shop_catalog::prelude::*;

const SHOP_JSON: &str = include_str!("../data/shop.json");

static CATALOG: OnceLock<std::result::Result<CatalogSnapshot, String>> = OnceLock::new();

/// The embedded catalog snapshot, parsed on first use.
pub fn catalog() -> std::result::Result<&'static CatalogSnapshot, &'static str> {
    CATALOG
        .get_or_init(|| {
            CatalogSnapshot::from_json_str(SHOP_JSON).map_err(|e| {
                tracing::error!(error = %e, "embedded catalog failed to parse");
                e.to_string()
            })
        })
        .as_ref()
        .map_err(String::as_str)
}

/// Reactive handle to the listing page, provided through context.
#[derive(Clone, Copy)]
pub struct ShopStore {
    pub catalog: &'static CatalogSnapshot,
    pub formatter: PriceFormatter,
    state: RwSignal<ListingState>,
    results: Memo<Vec<Product>>,
}

impl ShopStore {
    pub fn new(catalog: &'static CatalogSnapshot, formatter: PriceFormatter) -> Self {
        let state = RwSignal::new(ListingState::new());
        let criteria = Memo::new(move |_| state.with(|s| (s.filter(), s.sort)));
        let results = Memo::new(move |_| {
            let (filter, sort) = criteria.get();
            derive_listing(&catalog.products, &filter, sort).to_owned_items()
        });

        Self {
            catalog,
            formatter,
            state,
            results,
        }
    }

    pub fn dispatch(&self, action: ListingAction) {
        self.state.update(|s| s.apply(action));
    }

    pub fn results(&self) -> Vec<Product> {
        self.results.get()
    }

    pub fn summary(&self) -> String {
        self.results
            .with(|items| ListingResults::new(items.iter().collect(), self.catalog.products.len()).summary())
    }

    pub fn search_term(&self) -> String {
        self.state.with(|s| s.search_term.clone())
    }

    pub fn sort(&self) -> SortKey {
        self.state.with(|s| s.sort)
    }

    pub fn view_mode(&self) -> ViewMode {
        self.state.with(|s| s.view_mode)
    }

    pub fn is_category_selected(&self, token: &CategoryToken) -> bool {
        self.state.with(|s| &s.category == token)
    }

    pub fn has_active_filters(&self) -> bool {
        self.state.with(|s| s.has_active_filters())
    }

    pub fn selected(&self) -> Option<Product> {
        self.state.with(|s| s.overlay.product().cloned())
    }
}

/// Current and struck-through prices for a card or the detail view.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceLine {
    pub current: String,
    pub compare: Option<String>,
    pub discount: Option<String>,
}

pub fn price_line(product: &Product, formatter: &PriceFormatter) -> PriceLine {
    let sale = product.is_on_sale();
    PriceLine {
        current: formatter.format(product.price),
        compare: sale.then(|| formatter.format(product.compare_price)),
        discount: product
            .discount_percentage()
            .map(|pct| format!("-{}%", pct.round() as i64)),
    }
}

pub fn button_class(active: bool) -> &'static str {
    if active {
        "btn btn--active"
    } else {
        "btn btn--ghost"
    }
}

pub fn results_class(mode: ViewMode) -> &'static str {
    match mode {
        ViewMode::Grid => "products products--grid",
        ViewMode::List => "products products--list",
    }
}

pub fn stock_class(status: &StockStatus) -> &'static str {
    if status.is_available() {
        "stock stock--in"
    } else {
        "stock stock--out"
    }
}

pub fn reviews_label(count: u32) -> String {
    format!("({} reviews)", count)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: i64) -> &'static Product {
        catalog()
            .expect("embedded catalog")
            .product(ProductId::new(id))
            .expect("product")
    }

    #[test]
    fn test_embedded_catalog_is_valid() {
        let snapshot = catalog().expect("embedded catalog");
        assert!(!snapshot.products.is_empty());
        assert!(snapshot.validate().is_empty());
    }

    #[test]
    fn test_price_line_on_sale() {
        let line = price_line(product(1), &PriceFormatter::default());
        assert_eq!(line.current, "$249.99");
        assert_eq!(line.compare.as_deref(), Some("$299.99"));
        assert_eq!(line.discount.as_deref(), Some("-17%"));
    }

    #[test]
    fn test_price_line_full_price() {
        let line = price_line(product(2), &PriceFormatter::default());
        assert_eq!(line.current, "$129.00");
        assert_eq!(line.compare, None);
        assert_eq!(line.discount, None);
    }

    #[test]
    fn test_classes() {
        assert_eq!(button_class(true), "btn btn--active");
        assert_eq!(button_class(false), "btn btn--ghost");
        assert_eq!(results_class(ViewMode::List), "products products--list");
        assert_eq!(stock_class(&StockStatus::OutOfStock), "stock stock--out");
        assert_eq!(stock_class(&StockStatus::InStock(3)), "stock stock--in");
    }

    #[test]
    fn test_reviews_label() {
        assert_eq!(reviews_label(1287), "(1287 reviews)");
    }
}
