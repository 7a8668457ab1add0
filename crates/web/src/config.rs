//! Environment-driven configuration.

use std::path::PathBuf;

use agrisite_catalog::{BuiltinCatalog, CatalogSource, JsonFileCatalog};
use agrisite_core::{SiteError, SiteResult};

/// Process configuration, read from the environment.
#[derive(Debug, Clone)]
pub struct Config {
    /// Listen address, `BIND_ADDR` (default `0.0.0.0:8080`).
    pub bind_addr: String,
    /// Optional JSON catalog file, `CATALOG_PATH`. When unset the
    /// compiled-in catalog is served.
    pub catalog_path: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> SiteResult<Self> {
        let bind_addr =
            std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
        if bind_addr.trim().is_empty() {
            return Err(SiteError::config("BIND_ADDR must not be empty"));
        }
        let catalog_path = std::env::var_os("CATALOG_PATH").map(PathBuf::from);
        Ok(Self {
            bind_addr,
            catalog_path,
        })
    }

    /// Pick the catalog source this process serves from.
    pub fn catalog_source(&self) -> Box<dyn CatalogSource> {
        match &self.catalog_path {
            Some(path) => {
                tracing::info!(path = %path.display(), "serving catalog from file");
                Box::new(JsonFileCatalog::new(path))
            }
            None => Box::new(BuiltinCatalog),
        }
    }
}
