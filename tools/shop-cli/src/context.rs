//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use shop_catalog::{CatalogSnapshot, PriceFormatter};

use crate::config::{ShopConfig, CONFIG_NAMES};
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: ShopConfig,
    /// File the configuration was loaded from, if any.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
    /// Catalog path given on the command line.
    catalog_override: Option<PathBuf>,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, catalog: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;
        Self::load_in(cwd, config_path, catalog, output)
    }

    fn load_in(
        cwd: PathBuf,
        config_path: Option<&str>,
        catalog: Option<&str>,
        output: Output,
    ) -> Result<Self> {
        let config_path = match config_path {
            Some(path) => Some(resolve(&cwd, path)),
            // Try to find config in current directory or parent directories
            None => Self::find_config(&cwd),
        };

        let config = match &config_path {
            Some(path) => ShopConfig::load(path)?,
            None => ShopConfig::default(),
        };

        Ok(Self {
            config,
            config_path,
            output,
            catalog_override: catalog.map(|path| resolve(&cwd, path)),
            cwd,
        })
    }

    /// Find config file in directory tree.
    fn find_config(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();
        loop {
            for name in &CONFIG_NAMES {
                let config_path = current.join(name);
                if config_path.is_file() {
                    return Some(config_path);
                }
            }

            if !current.pop() {
                break;
            }
        }

        None
    }

    /// Directory that relative paths in the config are resolved against.
    pub fn config_dir(&self) -> &Path {
        self.config_path
            .as_deref()
            .and_then(Path::parent)
            .unwrap_or(&self.cwd)
    }

    /// Catalog snapshot path: command line, then config, then the default.
    pub fn catalog_path(&self) -> PathBuf {
        match &self.catalog_override {
            Some(path) => path.clone(),
            None => resolve(self.config_dir(), &self.config.catalog.path),
        }
    }

    /// Read and parse the catalog snapshot.
    pub fn load_catalog(&self) -> Result<CatalogSnapshot> {
        let path = self.catalog_path();
        tracing::debug!(path = %path.display(), "loading catalog");
        let snapshot = CatalogSnapshot::from_path(&path)
            .with_context(|| format!("Failed to load catalog: {}", path.display()))?;
        tracing::info!(
            path = %path.display(),
            products = snapshot.products.len(),
            categories = snapshot.categories.len(),
            "catalog loaded"
        );
        Ok(snapshot)
    }

    pub fn price_formatter(&self) -> Result<PriceFormatter> {
        self.config.price_formatter()
    }
}

/// Resolve a path relative to a base directory.
fn resolve(base: &Path, path: &str) -> PathBuf {
    let path = PathBuf::from(path);
    if path.is_absolute() {
        path
    } else {
        base.join(path)
    }
}
