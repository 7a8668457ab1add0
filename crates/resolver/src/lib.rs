//! Route resolution.
//!
//! Turns a navigation request into exactly one [`Resolution`]: either a view
//! to render or a corrective redirect. Pure and deterministic — the same
//! request against the same registry always resolves the same way, and no
//! lookup here can fail with an error (misses are first-class outcomes).

pub mod dispatch;
pub mod request;
pub mod resolve;
pub mod view;

pub use dispatch::RendererTable;
pub use request::{NavigationRequest, ParsedPath};
pub use resolve::RouteResolver;
pub use view::{Redirect, Resolution, ResolvedView};
