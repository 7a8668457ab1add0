//! HTML rendering: one layout, a small set of page templates, and the
//! per-product content records the bespoke template consumes.

pub mod content;
pub mod layout;
pub mod page;
