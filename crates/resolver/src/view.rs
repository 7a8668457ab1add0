//! Resolution outcomes.

use std::sync::Arc;

use agrisite_catalog::{Category, Product};
use agrisite_core::{Slug, StaticPageKind};

/// The tagged outcome of a successful resolution, consumed by rendering.
///
/// Invariants: `ProductDetail` and `GenericProductDetail` are only built when
/// the product is confirmed to belong to the category's product list;
/// `CategoryListing` only for registered category slugs.
#[derive(Debug, Clone, PartialEq)]
pub enum ResolvedView<'a> {
    Home,
    CategoryListing(&'a Category),
    /// A product with a bespoke rendering unit registered for it.
    ProductDetail {
        category: &'a Category,
        product: &'a Arc<Product>,
    },
    /// A catalog-valid product with no bespoke unit: rendered through the
    /// generic fallback template. A degrade-gracefully path, not a failure.
    GenericProductDetail {
        category: &'a Category,
        product: &'a Arc<Product>,
    },
    StaticPage(StaticPageKind),
    NotFound,
}

impl ResolvedView<'_> {
    /// Stable name of the variant, for logging and test assertions.
    pub fn kind(&self) -> &'static str {
        match self {
            ResolvedView::Home => "home",
            ResolvedView::CategoryListing(_) => "category_listing",
            ResolvedView::ProductDetail { .. } => "product_detail",
            ResolvedView::GenericProductDetail { .. } => "generic_product_detail",
            ResolvedView::StaticPage(_) => "static_page",
            ResolvedView::NotFound => "not_found",
        }
    }
}

/// A corrective navigation side effect: nothing is rendered, the client is
/// sent to the nearest valid ancestor context instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Redirect {
    /// Unknown category: back to the home page.
    Home,
    /// Known category, unknown product: back to that category's listing.
    Category(Slug),
}

impl Redirect {
    /// Target location for the redirect response.
    pub fn location(&self) -> String {
        match self {
            Redirect::Home => "/".to_string(),
            Redirect::Category(slug) => format!("/products/{slug}"),
        }
    }
}

/// Exactly one of: a view to render, or a redirect to issue.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution<'a> {
    View(ResolvedView<'a>),
    Redirect(Redirect),
}
