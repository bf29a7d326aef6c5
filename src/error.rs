//! Error types.
//!
//! Errors only surface while building a page or loading configuration.
//! Notification handlers never fail; a missing collaborator makes them no-ops.

use thiserror::Error;

use crate::types::ElementId;

/// Errors raised while configuring or registering a page.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("invalid config value for `{field}`: {reason}")]
    InvalidConfig { field: &'static str, reason: String },

    #[error("section `{0}` registered twice")]
    DuplicateSection(String),

    #[error("element {0} registered twice for the same behavior")]
    DuplicateElement(ElementId),

    #[error("layout engine failed: {0}")]
    Layout(String),
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;
