//! Static informational pages outside the product catalog.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::SiteError;

/// The fixed set of static pages the site serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StaticPageKind {
    About,
    Contact,
    HowToBuy,
    Regulatory,
    ProductGuide,
    Testimonials,
    Media,
}

impl StaticPageKind {
    /// All static pages, in navigation-menu order.
    pub const ALL: [StaticPageKind; 7] = [
        StaticPageKind::About,
        StaticPageKind::Contact,
        StaticPageKind::HowToBuy,
        StaticPageKind::Regulatory,
        StaticPageKind::ProductGuide,
        StaticPageKind::Testimonials,
        StaticPageKind::Media,
    ];

    /// URL path segment for this page (no leading slash).
    pub fn path_segment(self) -> &'static str {
        match self {
            StaticPageKind::About => "about",
            StaticPageKind::Contact => "contact",
            StaticPageKind::HowToBuy => "how-to-buy",
            StaticPageKind::Regulatory => "regulatory",
            StaticPageKind::ProductGuide => "product-guide",
            StaticPageKind::Testimonials => "testimonials",
            StaticPageKind::Media => "media",
        }
    }

    /// Human-readable page title.
    pub fn title(self) -> &'static str {
        match self {
            StaticPageKind::About => "About Us",
            StaticPageKind::Contact => "Contact",
            StaticPageKind::HowToBuy => "How to Buy",
            StaticPageKind::Regulatory => "Regulatory Information",
            StaticPageKind::ProductGuide => "Product Guide",
            StaticPageKind::Testimonials => "Testimonials",
            StaticPageKind::Media => "Media",
        }
    }
}

impl FromStr for StaticPageKind {
    type Err = SiteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StaticPageKind::ALL
            .into_iter()
            .find(|kind| kind.path_segment() == s)
            .ok_or_else(|| SiteError::validation(format!("unknown static page: {s}")))
    }
}
