//! Product records as they appear in the catalog snapshot.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::ids::{CategoryId, ProductId};
use crate::money::{Currency, Money};

/// Highest rating a product can carry.
pub const MAX_RATING: f64 = 5.0;

/// A product in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique, stable product identifier.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// URL-friendly slug.
    pub slug: String,
    /// Full description, shown in the detail overlay.
    pub description: String,
    /// Short description for listings.
    pub short_description: String,
    /// Current price.
    pub price: f64,
    /// Compare-at (pre-discount) price.
    pub compare_price: f64,
    /// Category display name. This is the filter key.
    pub category: String,
    /// Category identifier.
    pub category_id: CategoryId,
    /// Image references.
    #[serde(default)]
    pub images: Vec<String>,
    /// Primary image reference.
    #[serde(default)]
    pub main_image: String,
    /// Whether the product can be bought.
    pub in_stock: bool,
    /// Units on hand. Only meaningful when `in_stock`.
    #[serde(default)]
    pub stock_quantity: u32,
    /// Average rating in [0, 5].
    #[serde(default)]
    pub rating: f64,
    /// Number of reviews behind `rating`.
    #[serde(default)]
    pub review_count: u32,
    /// Free-text tags, searched alongside name and description.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Feature bullet points.
    #[serde(default)]
    pub features: Vec<String>,
    /// Specification key to optional value.
    #[serde(default)]
    pub specifications: BTreeMap<String, Option<String>>,
}

/// Stock availability as shown on cards and in the detail overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockStatus {
    InStock(u32),
    OutOfStock,
}

impl StockStatus {
    /// Label for listing cards.
    pub fn label(&self) -> String {
        match self {
            StockStatus::InStock(qty) => format!("\u{2713} In Stock ({})", qty),
            StockStatus::OutOfStock => "\u{2717} Out of Stock".to_string(),
        }
    }

    /// Label for the detail overlay.
    pub fn detail_label(&self) -> String {
        match self {
            StockStatus::InStock(qty) => format!("\u{2713} In Stock ({} available)", qty),
            StockStatus::OutOfStock => "\u{2717} Out of Stock".to_string(),
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, StockStatus::InStock(_))
    }
}

/// A specification entry with a present value and a humanized label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecificationRow<'a> {
    pub key: &'a str,
    pub label: String,
    pub value: &'a str,
}

impl Product {
    /// Check if a discount should be shown.
    pub fn is_on_sale(&self) -> bool {
        self.compare_price > self.price
    }

    /// Discount relative to the compare price, if on sale.
    pub fn discount_percentage(&self) -> Option<f64> {
        if self.is_on_sale() && self.compare_price > 0.0 {
            Some((self.compare_price - self.price) / self.compare_price * 100.0)
        } else {
            None
        }
    }

    /// Amount saved against the compare price, if on sale.
    pub fn savings(&self, currency: Currency) -> Option<Money> {
        if !self.is_on_sale() {
            return None;
        }
        let price = Money::from_decimal(self.price, currency);
        let compare = Money::from_decimal(self.compare_price, currency);
        Some(Money::new(compare.amount_cents - price.amount_cents, currency))
    }

    pub fn stock_status(&self) -> StockStatus {
        if self.in_stock {
            StockStatus::InStock(self.stock_quantity)
        } else {
            StockStatus::OutOfStock
        }
    }

    /// Image to show on cards: `main_image`, falling back to the first image.
    pub fn display_image(&self) -> &str {
        if !self.main_image.is_empty() {
            &self.main_image
        } else {
            self.images.first().map(String::as_str).unwrap_or_default()
        }
    }

    /// Specifications that carry a value, in key order.
    pub fn specification_rows(&self) -> Vec<SpecificationRow<'_>> {
        self.specifications
            .iter()
            .filter_map(|(key, value)| {
                let value = value.as_deref().filter(|v| !v.is_empty())?;
                Some(SpecificationRow {
                    key,
                    label: humanize_key(key),
                    value,
                })
            })
            .collect()
    }

    /// Whether the rating lies in [0, 5].
    pub fn has_valid_rating(&self) -> bool {
        (0.0..=MAX_RATING).contains(&self.rating)
    }
}

/// Turn a camelCase specification key into a label ("batteryLife" -> "Battery Life").
pub fn humanize_key(key: &str) -> String {
    let mut label = String::with_capacity(key.len() + 4);
    for (i, ch) in key.chars().enumerate() {
        if ch.is_uppercase() && i > 0 {
            label.push(' ');
        }
        if i == 0 {
            label.extend(ch.to_uppercase());
        } else {
            label.push(ch);
        }
    }
    label.trim().to_string()
}
