//! Prelude module for the Dataset Variants Library
//!
//! Re-exports the items needed for typical usage with a single
//! `use dataset_variants::prelude::*;` statement.
//!
//! # Usage
//!
//! ```rust,no_run
//! use dataset_variants::prelude::*;
//! use std::path::PathBuf;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let data_dirs = resolve_data_dirs(&[], &[]);
//!     let variants =
//!         scan_data_dirs(Arc::new(LocalFs), &data_dirs, &ScanOptions::default(), 8).await?;
//!     for reference in variants {
//!         println!("{}", reference);
//!     }
//!     Ok(())
//! }
//! ```

// Core result types
pub use crate::errors::{AppError, CatalogError, Result};

pub use crate::app::{
    // Data types
    DatasetReference,
    Version,

    // Filesystem access
    DirectoryLister,
    LocalFs,
    MemoryFs,

    // Enumeration
    ListOptions,
    ScanOptions,
    VariantEnumerator,
    default_data_dir,
    find_variants,
    list_dataset_variants,
    list_datasets_in_data_dir,
    resolve_data_dirs,
    scan_data_dirs,
};

pub use crate::config::AppConfig;
