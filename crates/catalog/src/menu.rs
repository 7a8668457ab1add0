//! The hand-authored navigation menu tree.

use agrisite_core::StaticPageKind;

use crate::registry::CatalogRegistry;

/// One entry in the navigation bar; dropdown entries carry children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    pub label: String,
    pub href: String,
    pub children: Vec<MenuItem>,
}

impl MenuItem {
    fn leaf(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
            children: Vec::new(),
        }
    }
}

/// Build the main menu: Home, a Products dropdown of categories, then the
/// static pages in their fixed order.
pub fn main_menu(registry: &CatalogRegistry) -> Vec<MenuItem> {
    let mut items = vec![MenuItem::leaf("Home", "/")];

    let categories = registry
        .categories()
        .iter()
        .map(|c| MenuItem::leaf(c.title(), format!("/products/{}", c.slug())))
        .collect();
    items.push(MenuItem {
        label: "Products".to_string(),
        href: "/products".to_string(),
        children: categories,
    });

    for kind in StaticPageKind::ALL {
        items.push(MenuItem::leaf(
            kind.title(),
            format!("/{}", kind.path_segment()),
        ));
    }

    items
}
