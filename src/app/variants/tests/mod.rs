//! Scenario tests for variant enumeration over in-memory fixtures

use std::collections::BTreeSet;
use std::io;
use std::path::{Path, PathBuf};

use crate::app::fs::{DirectoryLister, MemoryFs};
use crate::app::reference::DatasetReference;
use crate::app::variants::{list_dataset_variants, ListOptions, VariantEnumerator};
use crate::errors::CatalogError;

const DATA_DIR: &str = "/a";
const DATASET_DIR: &str = "/a/my_ds";

fn add_variant(fs: &mut MemoryFs, relative: &str, primary: bool, secondary: bool) {
    let dir = Path::new(DATASET_DIR).join(relative);
    fs.add_dir(&dir);
    if primary {
        fs.add_file(dir.join("dataset_info.json"));
    }
    if secondary {
        fs.add_file(dir.join("features.json"));
    }
}

fn reference(config: Option<&str>, version: Option<&str>) -> DatasetReference {
    let mut reference = DatasetReference::new("my_ds", DATA_DIR);
    if let Some(config) = config {
        reference = reference.with_config(config);
    }
    if let Some(version) = version {
        reference = reference.with_version(version.parse().unwrap());
    }
    reference
}

fn list(fs: &MemoryFs, options: ListOptions) -> Vec<DatasetReference> {
    list_dataset_variants(fs, Path::new(DATASET_DIR), &options)
        .unwrap()
        .into_iter()
        .collect()
}

fn configs_fixture() -> MemoryFs {
    let mut fs = MemoryFs::new();
    for (config, versions) in [("x", vec!["1.0.0", "1.0.1"]), ("y", vec!["2.0.0"])] {
        for version in versions {
            add_variant(&mut fs, &format!("{}/{}", config, version), true, true);
        }
    }
    fs
}

#[test]
fn test_configs_and_versions() {
    let fs = configs_fixture();

    assert_eq!(
        list(&fs, ListOptions::default()),
        vec![
            reference(Some("x"), Some("1.0.0")),
            reference(Some("x"), Some("1.0.1")),
            reference(Some("y"), Some("2.0.0")),
        ]
    );
}

#[test]
fn test_configs_without_versions() {
    let fs = configs_fixture();

    assert_eq!(
        list(&fs, ListOptions::configs_only()),
        vec![reference(Some("x"), None), reference(Some("y"), None)]
    );
}

#[test]
fn test_configs_only_ignores_markers_and_versions() {
    let mut fs = MemoryFs::new();
    add_variant(&mut fs, "x/1.0.0", false, false);
    add_variant(&mut fs, "y/not-a-version", true, true);
    fs.add_dir(Path::new(DATASET_DIR).join("z"));

    assert_eq!(
        list(&fs, ListOptions::configs_only()),
        vec![
            reference(Some("x"), None),
            reference(Some("y"), None),
            reference(Some("z"), None),
        ]
    );
}

#[test]
fn test_versions_without_configs() {
    let mut fs = MemoryFs::new();
    // 1.0.0 predates features.json
    add_variant(&mut fs, "1.0.0", true, false);
    add_variant(&mut fs, "1.0.1", true, true);

    assert_eq!(
        list(&fs, ListOptions::default().with_old_format_versions(true)),
        vec![reference(None, Some("1.0.0")), reference(None, Some("1.0.1"))]
    );
    assert_eq!(
        list(&fs, ListOptions::default()),
        vec![reference(None, Some("1.0.1"))]
    );
}

#[test]
fn test_versions_layout_without_version_descent_is_empty() {
    let mut fs = MemoryFs::new();
    add_variant(&mut fs, "1.0.0", true, true);

    assert!(list(&fs, ListOptions::configs_only()).is_empty());
}

#[test]
fn test_missing_secondary_marker_affects_only_its_pair() {
    let mut fs = configs_fixture();
    fs.remove(Path::new(DATASET_DIR).join("x/1.0.1/features.json"));

    let strict = list(&fs, ListOptions::default());
    assert_eq!(
        strict,
        vec![
            reference(Some("x"), Some("1.0.0")),
            reference(Some("y"), Some("2.0.0")),
        ]
    );

    let lenient = list(&fs, ListOptions::default().with_old_format_versions(true));
    assert_eq!(
        lenient,
        vec![
            reference(Some("x"), Some("1.0.0")),
            reference(Some("x"), Some("1.0.1")),
            reference(Some("y"), Some("2.0.0")),
        ]
    );
}

#[test]
fn test_missing_primary_marker_always_excludes() {
    let mut fs = configs_fixture();
    fs.remove(Path::new(DATASET_DIR).join("y/2.0.0/dataset_info.json"));

    for options in [
        ListOptions::default(),
        ListOptions::default().with_old_format_versions(true),
    ] {
        assert_eq!(
            list(&fs, options),
            vec![
                reference(Some("x"), Some("1.0.0")),
                reference(Some("x"), Some("1.0.1")),
            ]
        );
    }
}

#[test]
fn test_stray_entries_are_skipped() {
    let mut fs = MemoryFs::new();
    add_variant(&mut fs, "1.0.0", true, true);
    add_variant(&mut fs, "1.0.1.incomplete_abc", true, true);
    add_variant(&mut fs, "tmp", true, true);
    fs.add_file(Path::new(DATASET_DIR).join("README.md"));

    assert_eq!(
        list(&fs, ListOptions::default()),
        vec![reference(None, Some("1.0.0"))]
    );
}

#[test]
fn test_stray_entries_under_config_are_skipped() {
    let mut fs = MemoryFs::new();
    add_variant(&mut fs, "x/1.0.0", true, true);
    add_variant(&mut fs, "x/latest", true, true);
    fs.add_file(Path::new(DATASET_DIR).join("x/notes.txt"));
    // A file next to the configs is not a configuration
    fs.add_file(Path::new(DATASET_DIR).join(".config_tags"));

    assert_eq!(
        list(&fs, ListOptions::default()),
        vec![reference(Some("x"), Some("1.0.0"))]
    );
    assert_eq!(
        list(&fs, ListOptions::configs_only()),
        vec![reference(Some("x"), None)]
    );
}

#[test]
fn test_config_without_versions_yields_nothing_with_descent() {
    let mut fs = configs_fixture();
    fs.add_dir(Path::new(DATASET_DIR).join("empty_config"));

    let references = list(&fs, ListOptions::default());
    assert_eq!(references.len(), 3);
    assert!(references
        .iter()
        .all(|r| r.config.as_deref() != Some("empty_config")));
}

#[test]
fn test_missing_or_empty_root_is_empty() {
    let mut fs = MemoryFs::new();
    assert!(list(&fs, ListOptions::default()).is_empty());

    fs.add_dir(DATASET_DIR);
    assert!(list(&fs, ListOptions::default()).is_empty());
}

#[test]
fn test_numeric_version_order() {
    let mut fs = MemoryFs::new();
    for version in ["1.0.10", "1.0.9", "1.0.1", "2.0.0"] {
        add_variant(&mut fs, version, true, true);
    }

    let names: Vec<String> = list(&fs, ListOptions::default())
        .iter()
        .map(|r| r.tfds_name())
        .collect();
    assert_eq!(
        names,
        vec!["my_ds:1.0.1", "my_ds:1.0.9", "my_ds:1.0.10", "my_ds:2.0.0"]
    );
}

#[test]
fn test_every_pair_enumerated_once() {
    let configs = ["a", "b", "c"];
    let versions = ["0.1.0", "1.0.0", "1.2.3", "10.0.0"];
    let mut fs = MemoryFs::new();
    for config in configs {
        for version in versions {
            add_variant(&mut fs, &format!("{}/{}", config, version), true, true);
        }
    }

    let references = list(&fs, ListOptions::default().with_old_format_versions(true));
    assert_eq!(references.len(), configs.len() * versions.len());
    for config in configs {
        for version in versions {
            assert!(references.contains(&reference(Some(config), Some(version))));
        }
    }
    assert!(references.iter().all(|r| r.dataset_name == "my_ds"));
}

#[test]
fn test_idempotent_listing() {
    let fs = configs_fixture();
    let enumerator = VariantEnumerator::new(&fs);
    let options = ListOptions::default();

    let first = enumerator
        .list_variants(Path::new(DATASET_DIR), &options)
        .unwrap();
    let second = enumerator
        .list_variants(Path::new(DATASET_DIR), &options)
        .unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_data_dir_is_parent_of_dataset_dir() {
    let fs = configs_fixture();
    let references = list(&fs, ListOptions::default());

    for reference in &references {
        assert_eq!(reference.data_dir, PathBuf::from(DATA_DIR));
        assert!(fs.is_dir(&reference.dataset_dir()));
    }
}

/// Lister that fails every listing with a permission error
struct DeniedFs;

impl DirectoryLister for DeniedFs {
    fn list_children(&self, _path: &Path) -> io::Result<Vec<String>> {
        Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied"))
    }

    fn exists(&self, _path: &Path) -> bool {
        false
    }

    fn is_dir(&self, _path: &Path) -> bool {
        false
    }
}

#[test]
fn test_lister_errors_propagate() {
    let result = list_dataset_variants(&DeniedFs, Path::new(DATASET_DIR), &ListOptions::default());

    match result {
        Err(CatalogError::Io { path, source }) => {
            assert_eq!(path, PathBuf::from(DATASET_DIR));
            assert_eq!(source.kind(), io::ErrorKind::PermissionDenied);
        }
        other => panic!("expected I/O error, got {:?}", other.map(|s| s.len())),
    }
}

#[test]
fn test_result_is_a_set() {
    let fs = configs_fixture();
    let references: BTreeSet<DatasetReference> =
        list_dataset_variants(&fs, Path::new(DATASET_DIR), &ListOptions::default()).unwrap();
    let unique: BTreeSet<String> = references.iter().map(|r| r.tfds_name()).collect();
    assert_eq!(unique.len(), references.len());
}

#[test]
fn test_zero_padded_version_points_at_its_own_directory() {
    let mut fs = MemoryFs::new();
    add_variant(&mut fs, "01.0.0", true, true);
    add_variant(&mut fs, "1.0.0", false, false);

    let references = list(&fs, ListOptions::default());
    assert_eq!(references.len(), 1);
    let padded = &references[0];
    assert_eq!(padded.tfds_name(), "my_ds:1.0.0");
    assert_eq!(padded.dataset_dir(), Path::new(DATASET_DIR).join("01.0.0"));
    assert!(fs.exists(&padded.dataset_dir().join("dataset_info.json")));
}

#[test]
fn test_padded_and_canonical_versions_stay_distinct() {
    let mut fs = MemoryFs::new();
    add_variant(&mut fs, "x/01.0.0", true, true);
    add_variant(&mut fs, "x/1.0.0", true, true);

    let references = list(&fs, ListOptions::default());
    let dirs: Vec<PathBuf> = references.iter().map(|r| r.dataset_dir()).collect();
    assert_eq!(
        dirs,
        vec![
            Path::new(DATASET_DIR).join("x").join("1.0.0"),
            Path::new(DATASET_DIR).join("x").join("01.0.0"),
        ]
    );
    assert_eq!(references[0], reference(Some("x"), Some("1.0.0")));
}
