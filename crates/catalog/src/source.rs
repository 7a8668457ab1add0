//! Catalog sources.
//!
//! The registry content is an injected configuration artifact: the site is
//! wired against [`CatalogSource`], so the compiled-in catalog can be swapped
//! for a file-backed one without touching resolver logic.

use std::path::PathBuf;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use agrisite_core::{SiteError, SiteResult, Slug};

use crate::category::{Category, Product};
use crate::data;
use crate::registry::CatalogRegistry;

/// Something that can produce the catalog registry.
pub trait CatalogSource {
    fn load(&self) -> SiteResult<CatalogRegistry>;
}

/// The compiled-in catalog (the default source).
#[derive(Debug, Default)]
pub struct BuiltinCatalog;

impl CatalogSource for BuiltinCatalog {
    fn load(&self) -> SiteResult<CatalogRegistry> {
        data::builtin()
    }
}

/// A catalog loaded from a JSON file.
#[derive(Debug)]
pub struct JsonFileCatalog {
    path: PathBuf,
}

impl JsonFileCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CatalogSource for JsonFileCatalog {
    fn load(&self) -> SiteResult<CatalogRegistry> {
        let raw = std::fs::read_to_string(&self.path)
            .map_err(|e| SiteError::io(format!("{}: {e}", self.path.display())))?;
        let file: CatalogFile = serde_json::from_str(&raw)
            .map_err(|e| SiteError::deserialize(format!("{}: {e}", self.path.display())))?;
        file.into_registry()
    }
}

/// On-disk catalog shape.
#[derive(Debug, Serialize, Deserialize)]
pub struct CatalogFile {
    pub categories: Vec<CategoryRecord>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CategoryRecord {
    pub slug: Slug,
    pub title: String,
    pub products: Vec<Product>,
}

impl CatalogFile {
    /// Convert the file shape into a validated registry.
    ///
    /// Products repeated across categories with an identical record are
    /// interned to a single shared instance, matching the cross-listing
    /// semantics of the compiled-in catalog.
    pub fn into_registry(self) -> SiteResult<CatalogRegistry> {
        let mut interned: Vec<Arc<Product>> = Vec::new();
        let mut categories = Vec::with_capacity(self.categories.len());
        for record in self.categories {
            let mut products = Vec::with_capacity(record.products.len());
            for product in record.products {
                let shared = match interned.iter().find(|p| ***p == product) {
                    Some(existing) => existing.clone(),
                    None => {
                        let fresh = Arc::new(product);
                        interned.push(fresh.clone());
                        fresh
                    }
                };
                products.push(shared);
            }
            categories.push(Category::new(record.slug, record.title, products));
        }
        CatalogRegistry::new(categories)
    }
}
