//! Listing filter: free-text search plus category.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::catalog::Product;

/// Token that selects every category.
pub const ALL_CATEGORIES: &str = "all";

/// Selected category: everything, or one category by exact display name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CategoryToken {
    #[default]
    All,
    Named(String),
}

impl CategoryToken {
    /// Parse a token; `"all"` selects every category.
    pub fn parse(token: &str) -> Self {
        if token == ALL_CATEGORIES {
            CategoryToken::All
        } else {
            CategoryToken::Named(token.to_string())
        }
    }

    pub fn named(name: impl Into<String>) -> Self {
        CategoryToken::Named(name.into())
    }

    pub fn as_str(&self) -> &str {
        match self {
            CategoryToken::All => ALL_CATEGORIES,
            CategoryToken::Named(name) => name,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, CategoryToken::All)
    }

    /// Exact, case-sensitive comparison against the product's category name.
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            CategoryToken::All => true,
            CategoryToken::Named(name) => product.category == *name,
        }
    }
}

impl fmt::Display for CategoryToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for CategoryToken {
    fn from(s: String) -> Self {
        CategoryToken::parse(&s)
    }
}

impl From<&str> for CategoryToken {
    fn from(s: &str) -> Self {
        CategoryToken::parse(s)
    }
}

impl From<CategoryToken> for String {
    fn from(token: CategoryToken) -> Self {
        token.as_str().to_string()
    }
}

/// The (search term, category) pair currently applied.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ListingFilter {
    pub search: String,
    pub category: CategoryToken,
}

impl ListingFilter {
    pub fn new(search: impl Into<String>, category: CategoryToken) -> Self {
        Self {
            search: search.into(),
            category,
        }
    }

    /// Check a product against both criteria.
    pub fn matches(&self, product: &Product) -> bool {
        self.category.matches(product) && matches_search(product, &self.search.to_lowercase())
    }

    /// Whether either criterion differs from its default.
    pub fn is_active(&self) -> bool {
        !self.search.is_empty() || !self.category.is_all()
    }
}

/// Case-insensitive substring match against name, description and tags.
///
/// `needle` must already be lower-cased.
fn matches_search(product: &Product, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    product.name.to_lowercase().contains(needle)
        || product.description.to_lowercase().contains(needle)
        || product
            .tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(needle))
}

/// Keep the products matching `filter`, in input order.
pub fn filter_products<'a, I>(products: I, filter: &ListingFilter) -> Vec<&'a Product>
where
    I: IntoIterator<Item = &'a Product>,
{
    let needle = filter.search.to_lowercase();
    products
        .into_iter()
        .filter(|p| filter.category.matches(p) && matches_search(p, &needle))
        .collect()
}
