//! Product catalog module.
//!
//! Contains the product and category records and the snapshot that holds them.

mod category;
mod product;
mod snapshot;

pub use category::Category;
pub use product::{humanize_key, Product, SpecificationRow, StockStatus, MAX_RATING};
pub use snapshot::{CatalogIssue, CatalogSnapshot};

#[cfg(test)]
pub(crate) use product::fixtures;
