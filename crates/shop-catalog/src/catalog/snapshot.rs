//! The static catalog snapshot and its loading step.

use std::collections::HashSet;
use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::catalog::{Category, Product, MAX_RATING};
use crate::error::{CatalogError, Result};
use crate::ids::{CategoryId, ProductId};

/// Read-only `{ products, categories }` snapshot, in source order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CatalogSnapshot {
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub categories: Vec<Category>,
}

impl CatalogSnapshot {
    pub fn new(products: Vec<Product>, categories: Vec<Category>) -> Self {
        Self {
            products,
            categories,
        }
    }

    /// Parse a snapshot from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let snapshot: Self = serde_json::from_str(json)?;
        tracing::debug!(
            products = snapshot.products.len(),
            categories = snapshot.categories.len(),
            "catalog snapshot parsed"
        );
        Ok(snapshot)
    }

    /// Read and parse a snapshot file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&content)
    }

    /// Look up a product by id.
    pub fn product(&self, id: ProductId) -> Result<&Product> {
        self.products
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| CatalogError::ProductNotFound(id.to_string()))
    }

    /// Look up a category by its display name.
    pub fn category_by_name(&self, name: &str) -> Result<&Category> {
        self.categories
            .iter()
            .find(|c| c.name == name)
            .ok_or_else(|| CatalogError::CategoryNotFound(name.to_string()))
    }

    pub fn category(&self, id: CategoryId) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Number of products carrying a category name.
    pub fn count_in_category(&self, name: &str) -> usize {
        self.products.iter().filter(|p| p.category == name).count()
    }

    /// Check the snapshot for data problems.
    ///
    /// Nothing here is enforced on the listing path; callers decide how to
    /// report the issues, so each one is only logged at debug level.
    pub fn validate(&self) -> Vec<CatalogIssue> {
        let mut issues = Vec::new();
        let mut seen = HashSet::new();

        for product in &self.products {
            if !seen.insert(product.id) {
                issues.push(CatalogIssue::DuplicateProductId(product.id));
            }

            if !product.has_valid_rating() {
                issues.push(CatalogIssue::RatingOutOfRange {
                    product: product.id,
                    rating: product.rating,
                });
            }

            if product.in_stock && product.stock_quantity == 0 {
                issues.push(CatalogIssue::InStockWithoutQuantity(product.id));
            }

            // Filtering matches on the name, so a drifted name silently hides products.
            match self.category(product.category_id) {
                Some(category) if category.name != product.category => {
                    issues.push(CatalogIssue::CategoryNameMismatch {
                        product: product.id,
                        product_category: product.category.clone(),
                        category_name: category.name.clone(),
                    });
                }
                Some(_) => {}
                None => {
                    issues.push(CatalogIssue::UnknownCategoryId {
                        product: product.id,
                        category_id: product.category_id,
                    });
                    if self.category_by_name(&product.category).is_err() {
                        issues.push(CatalogIssue::UnknownCategory {
                            product: product.id,
                            category: product.category.clone(),
                        });
                    }
                }
            }
        }

        for issue in &issues {
            tracing::debug!(%issue, "catalog issue");
        }
        issues
    }

    /// Validate, turning any issue into an error.
    pub fn ensure_valid(&self) -> Result<()> {
        let issues = self.validate();
        if issues.is_empty() {
            Ok(())
        } else {
            Err(CatalogError::Validation(issues))
        }
    }
}

/// A data problem found in a snapshot.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogIssue {
    DuplicateProductId(ProductId),
    RatingOutOfRange {
        product: ProductId,
        rating: f64,
    },
    InStockWithoutQuantity(ProductId),
    UnknownCategory {
        product: ProductId,
        category: String,
    },
    UnknownCategoryId {
        product: ProductId,
        category_id: CategoryId,
    },
    CategoryNameMismatch {
        product: ProductId,
        product_category: String,
        category_name: String,
    },
}

impl fmt::Display for CatalogIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateProductId(id) => write!(f, "duplicate product id {}", id),
            Self::RatingOutOfRange { product, rating } => write!(
                f,
                "product {} has rating {} outside 0..={}",
                product, rating, MAX_RATING
            ),
            Self::InStockWithoutQuantity(id) => {
                write!(f, "product {} is in stock with quantity 0", id)
            }
            Self::UnknownCategory { product, category } => {
                write!(f, "product {} references unknown category '{}'", product, category)
            }
            Self::UnknownCategoryId {
                product,
                category_id,
            } => write!(
                f,
                "product {} references unknown category id {}",
                product, category_id
            ),
            Self::CategoryNameMismatch {
                product,
                product_category,
                category_name,
            } => write!(
                f,
                "product {} says category '{}' but its category id names '{}'",
                product, product_category, category_name
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures::product;

    fn snapshot() -> CatalogSnapshot {
        let mut a = product(1, "Wireless Mouse", 20.0);
        a.category = "Electronics".into();
        a.category_id = CategoryId::new(1);
        let mut b = product(2, "Desk Lamp", 35.0);
        b.category = "Home".into();
        b.category_id = CategoryId::new(2);

        CatalogSnapshot::new(
            vec![a, b],
            vec![
                Category::new(1, "Electronics", "electronics"),
                Category::new(2, "Home", "home"),
            ],
        )
    }

    #[test]
    fn test_lookup() {
        let snap = snapshot();
        assert_eq!(snap.product(ProductId::new(2)).unwrap().name, "Desk Lamp");
        assert!(matches!(
            snap.product(ProductId::new(9)),
            Err(CatalogError::ProductNotFound(_))
        ));
        assert_eq!(snap.category_by_name("Home").unwrap().slug, "home");
        assert!(snap.category_by_name("home").is_err());
        assert_eq!(snap.count_in_category("Electronics"), 1);
    }

    #[test]
    fn test_valid_snapshot_has_no_issues() {
        assert!(snapshot().validate().is_empty());
        assert!(snapshot().ensure_valid().is_ok());
    }

    #[test]
    fn test_validation_issues() {
        let mut snap = snapshot();
        snap.products[1].id = ProductId::new(1);
        snap.products[0].rating = 5.5;
        snap.products[0].stock_quantity = 0;
        snap.products[1].category = "Household".into();

        let issues = snap.validate();
        assert!(issues.contains(&CatalogIssue::DuplicateProductId(ProductId::new(1))));
        assert!(issues.contains(&CatalogIssue::InStockWithoutQuantity(ProductId::new(1))));
        assert!(issues
            .iter()
            .any(|i| matches!(i, CatalogIssue::RatingOutOfRange { rating, .. } if *rating == 5.5)));
        assert!(issues
            .iter()
            .any(|i| matches!(i, CatalogIssue::CategoryNameMismatch { category_name, .. } if category_name == "Home")));

        assert!(matches!(snap.ensure_valid(), Err(CatalogError::Validation(v)) if v.len() == 4));
    }

    #[test]
    fn test_unknown_category() {
        let mut snap = snapshot();
        snap.products[0].category_id = CategoryId::new(42);
        snap.products[0].category = "Toys".into();
        assert_eq!(
            snap.validate(),
            vec![
                CatalogIssue::UnknownCategoryId {
                    product: ProductId::new(1),
                    category_id: CategoryId::new(42),
                },
                CatalogIssue::UnknownCategory {
                    product: ProductId::new(1),
                    category: "Toys".into(),
                },
            ]
        );
    }

    #[test]
    fn test_dangling_category_id_with_matching_name() {
        let mut snap = snapshot();
        snap.products[0].category_id = CategoryId::new(99);
        assert_eq!(snap.products[0].category, "Electronics");

        let issues = snap.validate();
        assert_eq!(
            issues,
            vec![CatalogIssue::UnknownCategoryId {
                product: ProductId::new(1),
                category_id: CategoryId::new(99),
            }]
        );
        assert_eq!(
            issues[0].to_string(),
            "product 1 references unknown category id 99"
        );
    }

    #[derive(Clone, Default)]
    struct Captured(std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

    impl std::io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_issues_are_not_logged_at_info() {
        let mut snap = snapshot();
        snap.products[0].rating = 7.0;

        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::INFO)
            .with_writer(move || writer.clone())
            .finish();

        let issues = tracing::subscriber::with_default(subscriber, || snap.validate());
        assert_eq!(issues.len(), 1);
        assert!(captured.0.lock().unwrap().is_empty());
    }

    #[test]
    fn test_from_path_missing_file() {
        let err = CatalogSnapshot::from_path("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
    }

    #[test]
    fn test_from_path_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shop.json");
        std::fs::write(&path, serde_json::to_string(&snapshot()).unwrap()).unwrap();

        let loaded = CatalogSnapshot::from_path(&path).unwrap();
        assert_eq!(loaded, snapshot());
    }

    #[test]
    fn test_from_json_str_rejects_garbage() {
        assert!(matches!(
            CatalogSnapshot::from_json_str("{ not json"),
            Err(CatalogError::Json(_))
        ));
    }
}
