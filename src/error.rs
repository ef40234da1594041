//! Error types for machinetypes
//!
//! There are two error types: `CatalogError` (main error enum) and
//! `ConfigError` (configuration-specific).
//!
//! Catalog code returns `crate::error::Result<T>`. Reading and writing config
//! files returns `anyhow::Result<T>` so that file paths travel along as context.
//!
//! ## Fatal errors
//!
//! `UnsupportedDiskCount` means a disk list ran past the device letters the
//! naming scheme covers. No catalog entry can reach it, so hitting it is a data
//! bug. Callers must stop rather than continue with a partial device list.
//! `CatalogError::is_fatal` identifies it.
//!
//! Nothing here is retryable: every error is a deterministic function of the
//! input.

use thiserror::Error;

/// Main error type for machinetypes
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("instance type not handled: {instance_type:?}")]
    InstanceTypeNotFound { instance_type: String },

    #[error(
        "ephemeral devices for > {max} not yet implemented (disk index {index} of {count})",
        max = crate::aws::MAX_EPHEMERAL_DEVICES
    )]
    UnsupportedDiskCount { index: usize, count: usize },

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CatalogError {
    /// Whether the error is a broken invariant rather than a bad request.
    pub fn is_fatal(&self) -> bool {
        matches!(self, CatalogError::UnsupportedDiskCount { .. })
    }
}

/// Configuration-specific errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required field: {0}")]
    MissingField(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, CatalogError>;
