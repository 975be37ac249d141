//! CLI configuration.

use std::path::Path;

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use shop_catalog::{Currency, PriceFormatter};
use shop_catalog::listing::{SortKey, ViewMode};

/// Config file names, in lookup order.
pub const CONFIG_NAMES: [&str; 3] = ["shop.toml", ".shop.toml", "shop.json"];

/// CLI configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShopConfig {
    /// Catalog snapshot location.
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Listing defaults.
    #[serde(default)]
    pub display: DisplayConfig,

    /// Log output.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl ShopConfig {
    /// Load config from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        if is_json(path) {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path.display()))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path.display()))
        }
    }

    /// Formatter for the configured display currency.
    pub fn price_formatter(&self) -> Result<PriceFormatter> {
        let currency = Currency::from_code(&self.display.currency)
            .ok_or_else(|| anyhow!("Unknown currency in display.currency: {}", self.display.currency))?;
        Ok(PriceFormatter::new(currency))
    }
}

fn is_json(path: &Path) -> bool {
    path.extension().map_or(false, |ext| ext == "json")
}

/// Catalog snapshot location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Path to the snapshot, relative to the config file's directory.
    #[serde(default = "default_catalog_path")]
    pub path: String,
}

fn default_catalog_path() -> String {
    "storefront/data/shop.json".to_string()
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: default_catalog_path(),
        }
    }
}

/// Listing defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Currency code used for prices.
    #[serde(default = "default_currency")]
    pub currency: String,

    /// Initial sort key.
    #[serde(default)]
    pub sort: SortKey,

    /// Initial layout.
    #[serde(default)]
    pub view: ViewMode,
}

fn default_currency() -> String {
    Currency::default().code().to_string()
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            currency: default_currency(),
            sort: SortKey::default(),
            view: ViewMode::default(),
        }
    }
}

/// Log output settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive (e.g. `info`, `shop_catalog=debug`).
    #[serde(default = "default_level")]
    pub level: String,

    #[serde(default)]
    pub format: LogFormat,
}

fn default_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: LogFormat::default(),
        }
    }
}

/// Output format for logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable format (for development).
    #[default]
    Human,
    /// JSON format (for log aggregation).
    Json,
}

/// Generate a default shop.toml config file.
pub fn generate_default_config() -> String {
    r#"# Shop CLI configuration

[catalog]
# Relative to this file
path = "storefront/data/shop.json"

[display]
currency = "USD"
# featured | price-low | price-high | rating | newest
sort = "featured"
# grid | list
view = "grid"

[logging]
level = "info"
# human | json
format = "human"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses_to_defaults() {
        let config: ShopConfig = toml::from_str(&generate_default_config()).unwrap();
        assert_eq!(config, ShopConfig::default());
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: ShopConfig = toml::from_str("").unwrap();
        assert_eq!(config.catalog.path, "storefront/data/shop.json");
        assert_eq!(config.display.currency, "USD");
        assert_eq!(config.display.sort, SortKey::Featured);
        assert_eq!(config.display.view, ViewMode::Grid);
        assert_eq!(config.logging.format, LogFormat::Human);
    }

    #[test]
    fn test_partial_toml() {
        let config: ShopConfig = toml::from_str(
            r#"
            [display]
            sort = "price-high"
            view = "list"

            [logging]
            format = "json"
            "#,
        )
        .unwrap();
        assert_eq!(config.display.sort, SortKey::PriceHigh);
        assert_eq!(config.display.view, ViewMode::List);
        assert_eq!(config.display.currency, "USD");
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_unknown_sort_falls_back_to_featured() {
        let config: ShopConfig = toml::from_str("[display]\nsort = \"cheapest\"\n").unwrap();
        assert_eq!(config.display.sort, SortKey::Featured);
    }

    #[test]
    fn test_load_json_by_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shop.json");
        std::fs::write(&path, r#"{"display": {"currency": "EUR"}}"#).unwrap();

        let config = ShopConfig::load(&path).unwrap();
        assert_eq!(config.display.currency, "EUR");
        assert_eq!(config.price_formatter().unwrap().currency(), Currency::EUR);
    }

    #[test]
    fn test_unknown_currency_is_an_error() {
        let mut config = ShopConfig::default();
        config.display.currency = "XYZ".to_string();
        assert!(config.price_formatter().is_err());
    }

    #[test]
    fn test_malformed_toml_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shop.toml");
        std::fs::write(&path, "[display\n").unwrap();

        let err = ShopConfig::load(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to parse TOML config"));
    }
}
