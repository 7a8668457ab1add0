//! Categories and products.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use agrisite_core::Slug;

/// A single catalog product.
///
/// Products are owned by exactly one category for canonical navigation, but a
/// product may be cross-listed under further categories; cross-listed entries
/// share one `Arc<Product>` rather than duplicating the record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    slug: Slug,
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
}

impl Product {
    pub fn new(slug: Slug, name: impl Into<String>, description: Option<String>) -> Self {
        Self {
            slug,
            name: name.into(),
            description,
        }
    }

    pub fn slug(&self) -> &Slug {
        &self.slug
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

/// A catalog category: a slug, a display title and an ordered product list.
///
/// Product order is meaningful — it is the catalog display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    slug: Slug,
    title: String,
    products: Vec<Arc<Product>>,
}

impl Category {
    pub fn new(slug: Slug, title: impl Into<String>, products: Vec<Arc<Product>>) -> Self {
        Self {
            slug,
            title: title.into(),
            products,
        }
    }

    pub fn slug(&self) -> &Slug {
        &self.slug
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Products in display order.
    pub fn products(&self) -> &[Arc<Product>] {
        &self.products
    }

    /// Find a product in this category's list by slug.
    ///
    /// Linear scan; category sizes are small (at most a handful of products).
    pub fn product(&self, slug: &Slug) -> Option<&Arc<Product>> {
        self.products.iter().find(|p| p.slug() == slug)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slug(raw: &str) -> Slug {
        Slug::parse(raw).unwrap()
    }

    #[test]
    fn product_lookup_scans_in_order() {
        let products = vec![
            Arc::new(Product::new(slug("tensile"), "Tensile™", None)),
            Arc::new(Product::new(slug("kickstart"), "Kickstart™", None)),
        ];
        let category = Category::new(slug("phosphite-range"), "Phosphite Range", products);

        let hit = category.product(&slug("kickstart")).unwrap();
        assert_eq!(hit.name(), "Kickstart™");
        assert!(category.product(&slug("missing")).is_none());
    }

    #[test]
    fn products_preserve_configured_order() {
        let products = vec![
            Arc::new(Product::new(slug("b"), "B", None)),
            Arc::new(Product::new(slug("a"), "A", None)),
        ];
        let category = Category::new(slug("c"), "C", products);
        let order: Vec<&str> = category.products().iter().map(|p| p.slug().as_str()).collect();
        assert_eq!(order, vec!["b", "a"]);
    }
}
