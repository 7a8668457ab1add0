//! The resolution state machine.

use agrisite_catalog::{Category, CatalogRegistry};
use agrisite_core::Slug;

use crate::dispatch::RendererTable;
use crate::request::{NavigationRequest, ParsedPath};
use crate::view::{Redirect, Resolution, ResolvedView};

/// Resolves navigation requests against the catalog registry.
///
/// One synchronous pass per navigation event. The fallback policy narrows a
/// bad deep link to the most specific context still known to be good:
/// unknown category redirects home, an unknown product inside a known
/// category redirects to that category's listing, and a known product with no
/// bespoke rendering unit falls through to the generic detail template.
#[derive(Debug, Clone)]
pub struct RouteResolver {
    registry: CatalogRegistry,
    renderers: RendererTable,
}

impl RouteResolver {
    pub fn new(registry: CatalogRegistry, renderers: RendererTable) -> Self {
        Self {
            registry,
            renderers,
        }
    }

    pub fn registry(&self) -> &CatalogRegistry {
        &self.registry
    }

    pub fn renderers(&self) -> &RendererTable {
        &self.renderers
    }

    /// Resolve a catalog navigation request into exactly one outcome.
    pub fn resolve(&self, request: &NavigationRequest) -> Resolution<'_> {
        let Some(category_segment) = request.category_segment() else {
            return Resolution::View(ResolvedView::Home);
        };

        let Some(category) = self.lookup_category(category_segment) else {
            return Resolution::Redirect(Redirect::Home);
        };

        let Some(product_segment) = request.product_segment() else {
            return Resolution::View(ResolvedView::CategoryListing(category));
        };

        let product = Slug::parse(product_segment)
            .ok()
            .and_then(|slug| category.product(&slug));
        let Some(product) = product else {
            return Resolution::Redirect(Redirect::Category(category.slug().clone()));
        };

        if self.renderers.is_registered(product.slug()) {
            Resolution::View(ResolvedView::ProductDetail { category, product })
        } else {
            Resolution::View(ResolvedView::GenericProductDetail { category, product })
        }
    }

    /// Resolve a full URL path, covering the static pages and the wildcard
    /// catch-all in addition to the catalog surface.
    pub fn resolve_path(&self, path: &str) -> Resolution<'_> {
        match ParsedPath::parse(path) {
            ParsedPath::Navigation(request) => self.resolve(&request),
            ParsedPath::Static(kind) => Resolution::View(ResolvedView::StaticPage(kind)),
            ParsedPath::Unknown => Resolution::View(ResolvedView::NotFound),
        }
    }

    fn lookup_category(&self, raw: &str) -> Option<&Category> {
        // A segment that is not even a well-formed slug cannot be a
        // registered key; it takes the same miss path.
        Slug::parse(raw).ok().and_then(|s| self.registry.category(&s))
    }
}
