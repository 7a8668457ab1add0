//! Navigation requests derived from incoming URLs.

use core::str::FromStr;

use agrisite_core::StaticPageKind;

/// A catalog navigation request: an optional category path segment and an
/// optional product path segment, exactly as they appeared in the URL.
///
/// Segments are kept as raw strings — an arbitrary string that is not even a
/// well-formed slug is simply a key that cannot be registered, and resolves
/// through the same miss path as any other unknown key. Transient: built per
/// navigation event, discarded after resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationRequest {
    category: Option<String>,
    product: Option<String>,
}

impl NavigationRequest {
    pub fn home() -> Self {
        Self {
            category: None,
            product: None,
        }
    }

    pub fn category(category: impl Into<String>) -> Self {
        Self {
            category: Some(category.into()),
            product: None,
        }
    }

    pub fn product(category: impl Into<String>, product: impl Into<String>) -> Self {
        Self {
            category: Some(category.into()),
            product: Some(product.into()),
        }
    }

    pub fn category_segment(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub fn product_segment(&self) -> Option<&str> {
        self.product.as_deref()
    }
}

/// A parsed URL path: the full addressable surface of the site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedPath {
    /// `/` and the bare `/products` index.
    Navigation(NavigationRequest),
    /// One of the fixed static pages.
    Static(StaticPageKind),
    /// Anything else: the wildcard catch-all.
    Unknown,
}

impl ParsedPath {
    /// Parse a URL path (ignoring query strings) into its route.
    pub fn parse(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or(path);
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] => ParsedPath::Navigation(NavigationRequest::home()),
            // The bare products index shows the same category grid as home.
            ["products"] => ParsedPath::Navigation(NavigationRequest::home()),
            ["products", category] => {
                ParsedPath::Navigation(NavigationRequest::category(*category))
            }
            ["products", category, product] => {
                ParsedPath::Navigation(NavigationRequest::product(*category, *product))
            }
            [page] => match StaticPageKind::from_str(page) {
                Ok(kind) => ParsedPath::Static(kind),
                Err(_) => ParsedPath::Unknown,
            },
            _ => ParsedPath::Unknown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_parses_to_home() {
        assert_eq!(
            ParsedPath::parse("/"),
            ParsedPath::Navigation(NavigationRequest::home())
        );
    }

    #[test]
    fn category_path_parses() {
        assert_eq!(
            ParsedPath::parse("/products/phosphite-range"),
            ParsedPath::Navigation(NavigationRequest::category("phosphite-range"))
        );
    }

    #[test]
    fn product_path_parses() {
        assert_eq!(
            ParsedPath::parse("/products/phosphite-range/tensile"),
            ParsedPath::Navigation(NavigationRequest::product("phosphite-range", "tensile"))
        );
    }

    #[test]
    fn static_pages_parse() {
        assert_eq!(
            ParsedPath::parse("/how-to-buy"),
            ParsedPath::Static(StaticPageKind::HowToBuy)
        );
    }

    #[test]
    fn trailing_slash_and_query_are_ignored() {
        assert_eq!(
            ParsedPath::parse("/products/foliar-range/?utm=x"),
            ParsedPath::Navigation(NavigationRequest::category("foliar-range"))
        );
    }

    #[test]
    fn deep_unknown_paths_hit_the_catch_all() {
        assert_eq!(ParsedPath::parse("/no/such/page/here"), ParsedPath::Unknown);
        assert_eq!(ParsedPath::parse("/admin"), ParsedPath::Unknown);
    }
}
