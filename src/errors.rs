//! Error types for dataset variant discovery
//!
//! Malformed directory names and missing marker files are classification
//! signals, not errors, so they never surface here. What does surface is
//! bad caller input (an unusable dataset path or name), I/O failures
//! reported by the filesystem adapter, and configuration problems.

use std::path::PathBuf;
use thiserror::Error;

/// Version string errors, raised only by the strict `FromStr` entry point
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VersionError {
    /// Input is not three dot-separated decimal components
    #[error("Invalid version '{input}'. Expected MAJOR.MINOR.PATCH with decimal components")]
    Malformed { input: String },
}

/// Variant discovery and catalog errors
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Path has no final component to use as the dataset name
    #[error("Cannot derive a dataset name from path: {path}")]
    InvalidDatasetDir { path: PathBuf },

    /// Canonical dataset name could not be parsed
    #[error("Invalid dataset name '{name}': {reason}")]
    InvalidDatasetName { name: String, reason: String },

    /// Version part of a canonical dataset name is malformed
    #[error(transparent)]
    Version(#[from] VersionError),

    /// Listing a directory failed for a reason other than absence
    #[error("Failed to list directory {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Background enumeration task panicked or was cancelled
    #[error("Scan task failed: {reason}")]
    TaskFailed { reason: String },
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Configuration file not found
    #[error("Configuration file not found: {path}")]
    NotFound { path: PathBuf },

    /// Invalid configuration format
    #[error("Invalid configuration format in {path}: {source}")]
    InvalidFormat {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// Configuration could not be rendered as TOML
    #[error("Failed to serialize configuration")]
    Serialize(#[from] toml::ser::Error),

    /// Invalid configuration value
    #[error("Invalid configuration value for {field}: {value}. {reason}")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    /// User configuration directory could not be determined
    #[error("Could not determine user config directory")]
    NoConfigDir,

    /// File I/O error reading or writing configuration
    #[error("Configuration file I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Top-level application error that can represent any error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Variant discovery error
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// Configuration error
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON output error
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error with custom message
    #[error("{message}")]
    Generic { message: String },
}

impl AppError {
    /// Create a generic error with a custom message
    pub fn generic<S: Into<String>>(message: S) -> Self {
        AppError::Generic {
            message: message.into(),
        }
    }

    /// Get error category for logging
    pub fn category(&self) -> &'static str {
        match self {
            AppError::Catalog(_) => "catalog",
            AppError::Config(_) => "config",
            AppError::Io(_) => "io",
            AppError::Json(_) => "json",
            AppError::Generic { .. } => "generic",
        }
    }
}

impl From<VersionError> for AppError {
    fn from(error: VersionError) -> Self {
        AppError::Catalog(CatalogError::Version(error))
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, AppError>;

/// Catalog result type alias
pub type CatalogResult<T> = std::result::Result<T, CatalogError>;

/// Configuration result type alias
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
