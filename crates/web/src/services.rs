//! Shared, immutable site services handed to every handler.

use agrisite_catalog::{CatalogRegistry, CatalogSource, MenuItem, main_menu};
use agrisite_core::{SiteResult, Slug};
use agrisite_resolver::{RendererTable, RouteResolver};

use crate::contact::{ContactSink, LoggingContactSink};
use crate::render::content;

/// Everything a request handler needs: the resolver (registry + dispatch
/// table), the navigation menu, and the contact sink. Built once at startup,
/// shared read-only behind an `Arc`.
pub struct SiteServices {
    resolver: RouteResolver,
    menu: Vec<MenuItem>,
    contact: Box<dyn ContactSink>,
}

impl SiteServices {
    /// Load the catalog from `source` and wire the dispatch table from the
    /// bespoke content records.
    pub fn build(source: &dyn CatalogSource) -> SiteResult<Self> {
        let registry = source.load()?;
        let renderers = content::bespoke_slugs()
            .map(Slug::parse)
            .collect::<SiteResult<RendererTable>>()?;
        let menu = main_menu(&registry);
        tracing::info!(
            categories = registry.categories().len(),
            bespoke_units = renderers.len(),
            "site services ready"
        );
        Ok(Self {
            resolver: RouteResolver::new(registry, renderers),
            menu,
            contact: Box::new(LoggingContactSink),
        })
    }

    /// Swap the contact delivery collaborator.
    pub fn with_contact_sink(mut self, sink: Box<dyn ContactSink>) -> Self {
        self.contact = sink;
        self
    }

    pub fn resolver(&self) -> &RouteResolver {
        &self.resolver
    }

    pub fn registry(&self) -> &CatalogRegistry {
        self.resolver.registry()
    }

    pub fn menu(&self) -> &[MenuItem] {
        &self.menu
    }

    pub fn contact(&self) -> &dyn ContactSink {
        self.contact.as_ref()
    }
}
