//! Data-directory level discovery
//!
//! A data directory holds one directory per dataset, plus shared areas
//! such as `downloads/`. This module resolves which data directories to
//! look at and lifts per-dataset variant enumeration to whole data
//! directories.
//!
//! # Module Organization
//!
//! - [`data_dirs`] - Default and configured data directory resolution
//! - [`scan`] - Concurrent scans over several data directories

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::app::fs::DirectoryLister;
use crate::app::reference::DatasetReference;
use crate::app::variants::{ListOptions, VariantEnumerator};
use crate::constants::data_dir::RESERVED_NAMES;
use crate::errors::{CatalogError, CatalogResult};

pub mod data_dirs;
pub mod scan;

pub use data_dirs::{default_data_dir, resolve_data_dirs};
pub use scan::scan_data_dirs;

/// Options for listing whole data directories
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanOptions {
    /// Descend into dataset directories; when false, list dataset names only
    pub include_configs: bool,
    /// Policy applied inside each dataset directory
    pub list: ListOptions,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            include_configs: true,
            list: ListOptions::default(),
        }
    }
}

impl ScanOptions {
    /// Options that report dataset names only
    pub fn datasets_only() -> Self {
        Self {
            include_configs: false,
            ..Default::default()
        }
    }

    /// Set the per-dataset listing policy
    pub fn with_list_options(mut self, list: ListOptions) -> Self {
        self.list = list;
        self
    }
}

/// Dataset directories directly under `data_dir`
///
/// Hidden entries, reserved names such as `downloads` and plain files
/// are skipped.
pub fn list_dataset_dirs<L: DirectoryLister + ?Sized>(
    lister: &L,
    data_dir: &Path,
) -> CatalogResult<Vec<PathBuf>> {
    let children = lister
        .list_children(data_dir)
        .map_err(|source| CatalogError::Io {
            path: data_dir.to_path_buf(),
            source,
        })?;

    let mut dataset_dirs = Vec::new();
    for name in children {
        if name.starts_with('.') || RESERVED_NAMES.contains(&name.as_str()) {
            debug!("Skipping reserved entry {} in {}", name, data_dir.display());
            continue;
        }
        let path = data_dir.join(&name);
        if lister.is_dir(&path) {
            dataset_dirs.push(path);
        }
    }
    Ok(dataset_dirs)
}

/// References for every dataset found under `data_dir`
///
/// With `include_configs` off, yields one bare `{dataset_name}` reference
/// per dataset directory without inspecting it. Otherwise yields the union
/// of the variants of each dataset directory.
pub fn list_datasets_in_data_dir<L: DirectoryLister + ?Sized>(
    lister: &L,
    data_dir: &Path,
    options: &ScanOptions,
) -> CatalogResult<BTreeSet<DatasetReference>> {
    let mut references = BTreeSet::new();
    let enumerator = VariantEnumerator::new(lister);

    for dataset_dir in list_dataset_dirs(lister, data_dir)? {
        if options.include_configs {
            references.extend(enumerator.list_variants(&dataset_dir, &options.list)?);
        } else if let Some(name) = dataset_dir.file_name().and_then(|name| name.to_str()) {
            references.insert(DatasetReference::new(name, data_dir));
        }
    }

    debug!(
        "Found {} references in {}",
        references.len(),
        data_dir.display()
    );
    Ok(references)
}

/// Variants across `data_dirs` that match a canonical name pattern
///
/// `pattern` is `dataset[/config][:version]`; the config and version parts
/// narrow the match only when present.
pub fn find_variants<L: DirectoryLister + ?Sized>(
    lister: &L,
    data_dirs: &[PathBuf],
    pattern: &str,
    options: &ListOptions,
) -> CatalogResult<BTreeSet<DatasetReference>> {
    let pattern = DatasetReference::from_tfds_name(pattern, PathBuf::new())?;
    let enumerator = VariantEnumerator::new(lister);

    let mut matches = BTreeSet::new();
    for data_dir in data_dirs {
        let dataset_dir = data_dir.join(&pattern.dataset_name);
        if !lister.is_dir(&dataset_dir) {
            continue;
        }
        let variants = enumerator.list_variants(&dataset_dir, options)?;
        matches.extend(variants.into_iter().filter(|r| pattern.matches(r)));
    }
    Ok(matches)
}
