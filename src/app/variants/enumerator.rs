//! Walk a dataset directory and collect its qualifying variants

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::config::ListOptions;
use crate::app::fs::DirectoryLister;
use crate::app::layout::Layout;
use crate::app::reference::DatasetReference;
use crate::app::version::Version;
use crate::constants::markers;
use crate::errors::{CatalogError, CatalogResult};

/// Version directory that carries the primary marker
#[derive(Debug, Clone, PartialEq, Eq)]
struct Candidate {
    version: Version,
    /// Directory name as listed, which may differ from `version.to_string()`
    dir_name: String,
    /// Secondary marker present, i.e. written by the newer storage format
    has_secondary_marker: bool,
}

/// Enumerates the variants materialized under one dataset directory
pub struct VariantEnumerator<'a, L: DirectoryLister + ?Sized> {
    lister: &'a L,
}

impl<'a, L: DirectoryLister + ?Sized> VariantEnumerator<'a, L> {
    pub fn new(lister: &'a L) -> Self {
        Self { lister }
    }

    /// List the variants found under `dataset_root`
    ///
    /// `dataset_root` is the dataset's own directory; its final component
    /// becomes `dataset_name` and its parent becomes `data_dir`. A missing
    /// or empty directory yields an empty set.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::InvalidDatasetDir` when no dataset name can be
    /// derived from the path, and `CatalogError::Io` when the lister fails.
    pub fn list_variants(
        &self,
        dataset_root: &Path,
        options: &ListOptions,
    ) -> CatalogResult<BTreeSet<DatasetReference>> {
        let base = base_reference(dataset_root)?;
        let children = self.children(dataset_root)?;
        let layout = Layout::classify(&children);
        debug!(
            "Dataset {} at {} has a {} layout",
            base.dataset_name,
            dataset_root.display(),
            layout.kind()
        );

        let mut references = BTreeSet::new();
        match layout {
            Layout::Empty => {}
            Layout::Configs { configs } => {
                for config in configs {
                    let config_dir = dataset_root.join(&config);
                    if !self.lister.is_dir(&config_dir) {
                        debug!("Skipping non-directory entry {}", config_dir.display());
                        continue;
                    }

                    if !options.include_versions {
                        references.insert(base.clone().with_config(config));
                        continue;
                    }

                    let config_base = base.clone().with_config(config);
                    for candidate in self.version_candidates(&config_dir)? {
                        if options.accepts(candidate.has_secondary_marker) {
                            references.insert(
                                config_base
                                    .clone()
                                    .with_version_dir(candidate.version, &candidate.dir_name),
                            );
                        }
                    }
                }
            }
            Layout::Versions { versions, skipped } => {
                for name in &skipped {
                    debug!("Skipping stray entry {} in {}", name, dataset_root.display());
                }
                if !options.include_versions {
                    debug!(
                        "Dataset {} has no configurations to list without versions",
                        base.dataset_name
                    );
                    return Ok(references);
                }

                for (name, version) in versions {
                    if let Some(candidate) = self.inspect(dataset_root, &name, version) {
                        if options.accepts(candidate.has_secondary_marker) {
                            references.insert(
                                base.clone()
                                    .with_version_dir(candidate.version, &candidate.dir_name),
                            );
                        }
                    }
                }
            }
        }

        Ok(references)
    }

    /// Version directories under a configuration directory that carry the primary marker
    fn version_candidates(&self, config_dir: &Path) -> CatalogResult<Vec<Candidate>> {
        let mut candidates = Vec::new();
        for name in self.children(config_dir)? {
            match Version::parse(&name) {
                Some(version) => {
                    if let Some(candidate) = self.inspect(config_dir, &name, version) {
                        candidates.push(candidate);
                    }
                }
                None => debug!("Skipping stray entry {} in {}", name, config_dir.display()),
            }
        }
        Ok(candidates)
    }

    /// Check the marker files of one version directory
    fn inspect(&self, parent: &Path, dir_name: &str, version: Version) -> Option<Candidate> {
        let version_dir = parent.join(dir_name);
        if !self
            .lister
            .exists(&version_dir.join(markers::DATASET_INFO_FILENAME))
        {
            debug!(
                "Skipping {}: missing {}",
                version_dir.display(),
                markers::DATASET_INFO_FILENAME
            );
            return None;
        }

        let has_secondary_marker = self
            .lister
            .exists(&version_dir.join(markers::FEATURES_FILENAME));
        if !has_secondary_marker {
            debug!("{} was written by an older storage format", version_dir.display());
        }

        Some(Candidate {
            version,
            dir_name: dir_name.to_string(),
            has_secondary_marker,
        })
    }

    fn children(&self, path: &Path) -> CatalogResult<Vec<String>> {
        self.lister
            .list_children(path)
            .map_err(|source| CatalogError::Io {
                path: path.to_path_buf(),
                source,
            })
    }
}

/// Reference carrying the dataset name and data dir derived from `dataset_root`
fn base_reference(dataset_root: &Path) -> CatalogResult<DatasetReference> {
    let dataset_name = dataset_root
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| CatalogError::InvalidDatasetDir {
            path: dataset_root.to_path_buf(),
        })?;
    let data_dir = dataset_root
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(PathBuf::new);

    Ok(DatasetReference::new(dataset_name, data_dir))
}

/// List the variants under `dataset_root` with the given lister
///
/// Convenience wrapper around [`VariantEnumerator::list_variants`].
pub fn list_dataset_variants<L: DirectoryLister + ?Sized>(
    lister: &L,
    dataset_root: &Path,
    options: &ListOptions,
) -> CatalogResult<BTreeSet<DatasetReference>> {
    VariantEnumerator::new(lister).list_variants(dataset_root, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::fs::MemoryFs;

    #[test]
    fn test_base_reference_splits_path() {
        let base = base_reference(Path::new("/a/my_ds")).unwrap();
        assert_eq!(base.dataset_name, "my_ds");
        assert_eq!(base.data_dir, PathBuf::from("/a"));

        let base = base_reference(Path::new("my_ds")).unwrap();
        assert_eq!(base.data_dir, PathBuf::new());
    }

    #[test]
    fn test_base_reference_rejects_nameless_paths() {
        for path in ["/", "..", "."] {
            assert!(matches!(
                base_reference(Path::new(path)),
                Err(CatalogError::InvalidDatasetDir { .. })
            ));
        }
    }

    #[test]
    fn test_inspect_marker_states() {
        let mut fs = MemoryFs::new();
        fs.add_file("/a/my_ds/1.0.0/dataset_info.json")
            .add_file("/a/my_ds/1.0.1/dataset_info.json")
            .add_file("/a/my_ds/1.0.1/features.json")
            .add_file("/a/my_ds/1.0.2/features.json");
        let enumerator = VariantEnumerator::new(&fs);
        let version = Version::new(1, 0, 0);

        let root = Path::new("/a/my_ds");

        let legacy = enumerator.inspect(root, "1.0.0", version).unwrap();
        assert!(!legacy.has_secondary_marker);
        assert_eq!(legacy.dir_name, "1.0.0");

        let current = enumerator.inspect(root, "1.0.1", version).unwrap();
        assert!(current.has_secondary_marker);

        assert!(enumerator.inspect(root, "1.0.2", version).is_none());
    }
}
