//! Dataset Variants Library
//!
//! Reconstructs which `(dataset, config, version)` variants are
//! materialized in a dataset data directory, purely from directory
//! listings and the presence of marker files.

pub mod app;
pub mod cli;
pub mod config;
pub mod constants;
pub mod errors;
pub mod prelude;

// Re-export commonly used types for convenience
pub use errors::{AppError, Result};
