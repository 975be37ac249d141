//! Listing module.
//!
//! Filter, sort, rating glyphs and the view state of the shop listing page.
//! The ordered listing is a pure function of the catalog and three inputs
//! (search term, category, sort key) and is recomputed in full on change.

mod filter;
mod rating;
mod results;
mod sort;
mod view;

pub use filter::{filter_products, CategoryToken, ListingFilter, ALL_CATEGORIES};
pub use rating::{star_glyphs, star_string, StarGlyph, STAR_COUNT};
pub use results::ListingResults;
pub use sort::{sort_products, SortKey};
pub use view::{DetailOverlay, ListingAction, ListingState, ViewMode};

use crate::catalog::Product;

/// Filter then sort `products`.
pub fn derive_listing<'a>(
    products: &'a [Product],
    filter: &ListingFilter,
    sort: SortKey,
) -> ListingResults<'a> {
    let filtered = filter_products(products, filter);
    let items = sort_products(filtered, sort);
    tracing::debug!(
        search = %filter.search,
        category = %filter.category,
        sort = %sort,
        matched = items.len(),
        total = products.len(),
        "listing derived"
    );
    ListingResults::new(items, products.len())
}
