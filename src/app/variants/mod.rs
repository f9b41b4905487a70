//! Dataset variant enumeration
//!
//! Reconstructs the `(config, version)` variants materialized under a
//! dataset directory purely from directory listings. Three on-disk
//! layouts are handled:
//!
//! - `my_ds/<version>/` for datasets without configurations
//! - `my_ds/<config>/<version>/` for datasets with configurations
//! - either of the above written by an older storage format, where the
//!   version directory lacks `features.json`
//!
//! A version directory only qualifies when it contains
//! `dataset_info.json`. Whether old-format versions are kept is up to the
//! caller through [`ListOptions`].
//!
//! # Module Organization
//!
//! - [`config`] - Inclusion policy
//! - [`enumerator`] - The directory walk
//!
//! # Examples
//!
//! ```rust
//! use std::path::Path;
//! use dataset_variants::app::fs::MemoryFs;
//! use dataset_variants::app::variants::{list_dataset_variants, ListOptions};
//!
//! let mut fs = MemoryFs::new();
//! fs.add_file("/a/my_ds/x/1.0.0/dataset_info.json")
//!     .add_file("/a/my_ds/x/1.0.0/features.json");
//!
//! let variants = list_dataset_variants(&fs, Path::new("/a/my_ds"), &ListOptions::default())?;
//! let names: Vec<String> = variants.iter().map(|r| r.tfds_name()).collect();
//! assert_eq!(names, vec!["my_ds/x:1.0.0"]);
//! # Ok::<(), dataset_variants::errors::CatalogError>(())
//! ```

pub mod config;
pub mod enumerator;

#[cfg(test)]
mod tests;

pub use config::ListOptions;
pub use enumerator::{list_dataset_variants, VariantEnumerator};
