//! The derived, ordered listing.

use crate::catalog::Product;

/// Products left after filtering and sorting, with the catalog size they came from.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingResults<'a> {
    /// Ordered result items.
    pub items: Vec<&'a Product>,
    /// Number of products in the whole catalog.
    pub catalog_total: usize,
}

impl<'a> ListingResults<'a> {
    pub fn new(items: Vec<&'a Product>, catalog_total: usize) -> Self {
        Self {
            items,
            catalog_total,
        }
    }

    /// Check if nothing matched. Rendered as the "no results" view.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// "Showing N of M products".
    pub fn summary(&self) -> String {
        format!(
            "Showing {} of {} products",
            self.items.len(),
            self.catalog_total
        )
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Product> + '_ {
        self.items.iter().copied()
    }

    /// Owned copies, for views that outlive the snapshot borrow.
    pub fn to_owned_items(&self) -> Vec<Product> {
        self.items.iter().map(|p| (*p).clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures::product;

    #[test]
    fn test_summary() {
        let products = vec![product(1, "A", 1.0), product(2, "B", 2.0)];
        let results = ListingResults::new(vec![&products[1]], products.len());
        assert_eq!(results.summary(), "Showing 1 of 2 products");
        assert_eq!(results.len(), 1);
        assert!(!results.is_empty());
        assert_eq!(results.iter().next().map(|p| p.id.get()), Some(2));
    }

    #[test]
    fn test_empty_results() {
        let results = ListingResults::new(Vec::new(), 12);
        assert!(results.is_empty());
        assert_eq!(results.summary(), "Showing 0 of 12 products");
        assert!(results.to_owned_items().is_empty());
    }
}
