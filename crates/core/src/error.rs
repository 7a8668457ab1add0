//! Site error model.

use thiserror::Error;

/// Result type used across the site crates.
pub type SiteResult<T> = Result<T, SiteError>;

/// Site-level error.
///
/// Keep this focused on deterministic failures (validation, malformed
/// configuration). Catalog lookup misses are **not** errors — they are
/// `Option::None` and are handled by the resolver's fallback policy.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SiteError {
    /// A value failed validation (e.g. duplicate slug in a category).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A slug was not URL-safe or otherwise malformed.
    #[error("invalid slug: {0}")]
    InvalidSlug(String),

    /// Configuration was missing or malformed.
    #[error("configuration error: {0}")]
    Config(String),

    /// A catalog source could not be read.
    #[error("catalog source unreadable: {0}")]
    Io(String),

    /// A catalog source could not be decoded.
    #[error("catalog source undecodable: {0}")]
    Deserialize(String),
}

impl SiteError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_slug(msg: impl Into<String>) -> Self {
        Self::InvalidSlug(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn io(msg: impl Into<String>) -> Self {
        Self::Io(msg.into())
    }

    pub fn deserialize(msg: impl Into<String>) -> Self {
        Self::Deserialize(msg.into())
    }
}
