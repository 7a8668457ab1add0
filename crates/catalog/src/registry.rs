//! The catalog registry: the one source of truth for category/product lookup.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use agrisite_core::{SiteError, SiteResult, Slug};

use crate::category::{Category, Product};

/// Static, read-only mapping from category slug to category and from
/// (category slug, product slug) to product.
///
/// Built once at startup from a [`crate::source::CatalogSource`] and never
/// mutated. Lookup misses are `None`, never errors — callers treat "not
/// found" as a first-class outcome.
#[derive(Debug, Clone)]
pub struct CatalogRegistry {
    categories: Vec<Category>,
    index: HashMap<Slug, usize>,
}

impl CatalogRegistry {
    /// Build a registry, enforcing the registry invariants:
    /// category slugs are unique, and product slugs are unique within each
    /// category (cross-listing the same product under several categories is
    /// allowed).
    pub fn new(categories: Vec<Category>) -> SiteResult<Self> {
        let mut index = HashMap::with_capacity(categories.len());
        for (pos, category) in categories.iter().enumerate() {
            if index.insert(category.slug().clone(), pos).is_some() {
                return Err(SiteError::validation(format!(
                    "duplicate category slug: {}",
                    category.slug()
                )));
            }
            let mut seen = HashSet::new();
            for product in category.products() {
                if !seen.insert(product.slug().clone()) {
                    return Err(SiteError::validation(format!(
                        "duplicate product slug {} in category {}",
                        product.slug(),
                        category.slug()
                    )));
                }
            }
        }
        Ok(Self { categories, index })
    }

    /// Look up a category by slug.
    pub fn category(&self, slug: &Slug) -> Option<&Category> {
        self.index.get(slug).map(|&pos| &self.categories[pos])
    }

    /// Look up a product by (category slug, product slug).
    ///
    /// Resolves the category first; if the category is absent the result is
    /// `None` without inspecting the product slug.
    pub fn product(&self, category: &Slug, product: &Slug) -> Option<(&Category, &Arc<Product>)> {
        let category = self.category(category)?;
        let product = category.product(product)?;
        Some((category, product))
    }

    /// Categories in configured display order.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Every (category slug, product slug) pair in the catalog, in display
    /// order. Cross-listed products appear once per listing category.
    pub fn listings(&self) -> impl Iterator<Item = (&Slug, &Arc<Product>)> {
        self.categories
            .iter()
            .flat_map(|c| c.products().iter().map(move |p| (c.slug(), p)))
    }
}
