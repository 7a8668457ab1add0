//! URL-safe identifiers for categories and products.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::SiteError;

/// A URL-safe string key identifying a category or product.
///
/// Slugs are lowercase ASCII alphanumerics separated by single hyphens
/// (`phosphite-range`, `beet-raiser`). Category slugs are globally unique;
/// product slugs are unique only within their owning category — a product
/// may legitimately be cross-listed under more than one category.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Slug(String);

impl Slug {
    /// Parse a slug, rejecting anything that is not URL-safe.
    pub fn parse(raw: impl AsRef<str>) -> Result<Self, SiteError> {
        let raw = raw.as_ref();
        if raw.is_empty() {
            return Err(SiteError::invalid_slug("empty"));
        }
        if raw.starts_with('-') || raw.ends_with('-') || raw.contains("--") {
            return Err(SiteError::invalid_slug(format!(
                "{raw}: stray hyphen placement"
            )));
        }
        if !raw
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        {
            return Err(SiteError::invalid_slug(format!(
                "{raw}: only lowercase ascii, digits and hyphens allowed"
            )));
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for Slug {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for Slug {
    type Err = SiteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Slug {
    type Error = SiteError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<Slug> for String {
    fn from(value: Slug) -> Self {
        value.0
    }
}

impl AsRef<str> for Slug {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
