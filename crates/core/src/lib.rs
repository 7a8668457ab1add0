//! `agrisite-core` — site domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod error;
pub mod page;
pub mod slug;

pub use error::{SiteError, SiteResult};
pub use page::StaticPageKind;
pub use slug::Slug;
