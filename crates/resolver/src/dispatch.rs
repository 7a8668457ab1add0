//! The slug→renderer dispatch table.

use std::collections::HashSet;

use agrisite_core::Slug;

/// The static table of product slugs that have a bespoke rendering unit.
///
/// The rendering units themselves live with the presentation layer; the
/// resolver only needs to know whether one is registered so it can pick the
/// `ProductDetail` or `GenericProductDetail` terminal state. Every catalog
/// product resolves to one of the two — there is no unhandled case.
#[derive(Debug, Clone, Default)]
pub struct RendererTable {
    slugs: HashSet<Slug>,
}

impl RendererTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, slug: Slug) {
        self.slugs.insert(slug);
    }

    pub fn is_registered(&self, slug: &Slug) -> bool {
        self.slugs.contains(slug)
    }

    pub fn len(&self) -> usize {
        self.slugs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slugs.is_empty()
    }
}

impl FromIterator<Slug> for RendererTable {
    fn from_iter<T: IntoIterator<Item = Slug>>(iter: T) -> Self {
        Self {
            slugs: iter.into_iter().collect(),
        }
    }
}
