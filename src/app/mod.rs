//! Core discovery logic
//!
//! This module contains the version grammar, the dataset reference type,
//! the filesystem capability, layout classification, variant enumeration
//! and data-directory level catalog operations.
//!
//! # Examples
//!
//! ```rust,no_run
//! use std::path::Path;
//! use dataset_variants::app::{list_dataset_variants, ListOptions, LocalFs};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let options = ListOptions::default().with_old_format_versions(true);
//! for reference in list_dataset_variants(&LocalFs, Path::new("/data/mnist"), &options)? {
//!     println!("{} -> {}", reference, reference.dataset_dir().display());
//! }
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod fs;
pub mod layout;
pub mod reference;
pub mod variants;
pub mod version;

// Re-export main public API
pub use catalog::{
    default_data_dir, find_variants, list_dataset_dirs, list_datasets_in_data_dir,
    resolve_data_dirs, scan::DataDirScanner, scan::ScanEvent, scan_data_dirs, ScanOptions,
};
pub use fs::{DirectoryLister, LocalFs, MemoryFs};
pub use layout::Layout;
pub use reference::DatasetReference;
pub use variants::{list_dataset_variants, ListOptions, VariantEnumerator};
pub use version::Version;
