//! Sort options for the listing.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::catalog::Product;

/// Ordering applied after filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SortKey {
    /// Snapshot order.
    #[default]
    Featured,
    /// Price, low to high.
    PriceLow,
    /// Price, high to low.
    PriceHigh,
    /// Highest rated first.
    Rating,
    /// Highest identifier first.
    Newest,
}

impl SortKey {
    /// Options in menu order.
    pub const ALL: [SortKey; 5] = [
        SortKey::Featured,
        SortKey::PriceLow,
        SortKey::PriceHigh,
        SortKey::Rating,
        SortKey::Newest,
    ];

    /// Parse a sort key. Unrecognized keys fall back to `Featured`.
    pub fn parse(s: &str) -> Self {
        match s {
            "price-low" => SortKey::PriceLow,
            "price-high" => SortKey::PriceHigh,
            "rating" => SortKey::Rating,
            "newest" => SortKey::Newest,
            _ => SortKey::Featured,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Featured => "featured",
            SortKey::PriceLow => "price-low",
            SortKey::PriceHigh => "price-high",
            SortKey::Rating => "rating",
            SortKey::Newest => "newest",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SortKey::Featured => "Featured",
            SortKey::PriceLow => "Price: Low to High",
            SortKey::PriceHigh => "Price: High to Low",
            SortKey::Rating => "Highest Rated",
            SortKey::Newest => "Newest",
        }
    }

    /// Comparator for this key, or `None` when input order is kept.
    fn comparator(&self) -> Option<fn(&Product, &Product) -> Ordering> {
        match self {
            SortKey::Featured => None,
            SortKey::PriceLow => Some(|a: &Product, b: &Product| a.price.total_cmp(&b.price)),
            SortKey::PriceHigh => Some(|a: &Product, b: &Product| b.price.total_cmp(&a.price)),
            SortKey::Rating => Some(|a: &Product, b: &Product| b.rating.total_cmp(&a.rating)),
            SortKey::Newest => Some(|a: &Product, b: &Product| b.id.cmp(&a.id)),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for SortKey {
    fn from(s: String) -> Self {
        SortKey::parse(&s)
    }
}

impl From<&str> for SortKey {
    fn from(s: &str) -> Self {
        SortKey::parse(s)
    }
}

impl From<SortKey> for String {
    fn from(key: SortKey) -> Self {
        key.as_str().to_string()
    }
}

/// Order `items` by `key`. Stable: equal keys keep their input order.
pub fn sort_products(mut items: Vec<&Product>, key: SortKey) -> Vec<&Product> {
    if let Some(compare) = key.comparator() {
        items.sort_by(|a, b| compare(a, b));
    }
    items
}
