//! Catalog types and listing logic for the shop page.
//!
//! - **Catalog**: products, categories and the read-only snapshot holding them
//! - **Listing**: search/category filter, sort keys, star ratings, view state
//! - **Money**: price formatting for a fixed `en-US` locale
//!
//! # Example
//!
//! ```rust
//! use shop_catalog::prelude::*;
//!
//! let snapshot = CatalogSnapshot::default();
//! let mut state = ListingState::new();
//! state.apply(ListingAction::SetSearch("wireless".to_string()));
//! state.apply(ListingAction::SetSort(SortKey::PriceLow));
//!
//! let results = state.results(&snapshot);
//! assert_eq!(results.summary(), "Showing 0 of 0 products");
//! ```

pub mod catalog;
pub mod error;
pub mod ids;
pub mod listing;
pub mod money;

pub use catalog::{CatalogSnapshot, Category, Product, StockStatus};
pub use error::{CatalogError, Result};
pub use ids::{CategoryId, ProductId};
pub use money::{Currency, Money, PriceFormatter};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::{CatalogError, Result};
    pub use crate::ids::{CategoryId, ProductId};
    pub use crate::money::{Currency, Money, PriceFormatter};

    // Catalog
    pub use crate::catalog::{
        CatalogIssue, CatalogSnapshot, Category, Product, SpecificationRow, StockStatus,
    };

    // Listing
    pub use crate::listing::{
        derive_listing, filter_products, sort_products, star_glyphs, CategoryToken,
        DetailOverlay, ListingAction, ListingFilter, ListingResults, ListingState, SortKey,
        StarGlyph, ViewMode,
    };
}
