//! Category records.

use serde::{Deserialize, Serialize};

use crate::ids::CategoryId;

/// A product category.
///
/// `name` doubles as the filter key: products are matched against it by
/// their `category` display name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub description: String,
}

impl Category {
    pub fn new(id: i64, name: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            id: CategoryId::new(id),
            name: name.into(),
            slug: slug.into(),
            description: String::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}
