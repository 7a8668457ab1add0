//! Catalog domain module.
//!
//! This crate contains the product catalog: the static mapping from category
//! slugs to categories and from (category, product) slug pairs to products,
//! implemented purely as deterministic domain logic (no IO beyond the optional
//! file-backed source, no HTTP).

pub mod category;
pub mod data;
pub mod menu;
pub mod registry;
pub mod source;

pub use category::{Category, Product};
pub use menu::{MenuItem, main_menu};
pub use registry::CatalogRegistry;
pub use source::{BuiltinCatalog, CatalogSource, JsonFileCatalog};
