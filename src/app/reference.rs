//! Structured identity of one materialized dataset variant
//!
//! A [`DatasetReference`] is a transient description of on-disk state: it
//! is produced by the variant enumerator, never mutated, and may be stale
//! as soon as the filesystem changes.

use std::cmp::Ordering;
use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

use super::version::Version;
use crate::errors::{CatalogError, CatalogResult};

/// One `(dataset, config, version)` combination under a data directory
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct DatasetReference {
    /// Name of the dataset directory
    pub dataset_name: String,
    /// Named configuration, absent for datasets without configurations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<String>,
    /// Version, absent when enumeration stopped at the configuration level
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<Version>,
    /// Name of the version directory when it differs from the canonical
    /// rendering of `version`, e.g. `01.0.0`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version_dir: Option<String>,
    /// Directory containing the dataset directory (not the dataset directory itself)
    pub data_dir: PathBuf,
}

impl DatasetReference {
    /// Create a reference to a dataset with no config or version
    pub fn new(dataset_name: impl Into<String>, data_dir: impl Into<PathBuf>) -> Self {
        Self {
            dataset_name: dataset_name.into(),
            config: None,
            version: None,
            version_dir: None,
            data_dir: data_dir.into(),
        }
    }

    /// Set the configuration name
    pub fn with_config(mut self, config: impl Into<String>) -> Self {
        self.config = Some(config.into());
        self
    }

    /// Set the version
    pub fn with_version(mut self, version: Version) -> Self {
        self.version = Some(version);
        self.version_dir = None;
        self
    }

    /// Set the version read from the directory named `dir_name`
    ///
    /// Non-canonical names such as `01.0.0` are kept so that
    /// [`dataset_dir`](Self::dataset_dir) still designates that directory.
    pub fn with_version_dir(mut self, version: Version, dir_name: &str) -> Self {
        self.version = Some(version);
        self.version_dir = (dir_name != version.to_string()).then(|| dir_name.to_string());
        self
    }

    /// Directory this reference designates on disk
    ///
    /// `data_dir/dataset_name[/config][/version]`
    pub fn dataset_dir(&self) -> PathBuf {
        let mut path = self.data_dir.join(&self.dataset_name);
        if let Some(config) = &self.config {
            path.push(config);
        }
        if let Some(version) = &self.version {
            match &self.version_dir {
                Some(dir_name) => path.push(dir_name),
                None => path.push(version.to_string()),
            }
        }
        path
    }

    /// Canonical text name, `dataset_name[/config][:version]`
    pub fn tfds_name(&self) -> String {
        let mut name = self.dataset_name.clone();
        if let Some(config) = &self.config {
            name.push('/');
            name.push_str(config);
        }
        if let Some(version) = &self.version {
            name.push(':');
            name.push_str(&version.to_string());
        }
        name
    }

    /// Parse a canonical name such as `my_ds/x:1.0.0`
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::InvalidDatasetName` for empty components or
    /// more than one `/`, and `CatalogError::Version` when the part after
    /// `:` is not a version.
    pub fn from_tfds_name(name: &str, data_dir: impl Into<PathBuf>) -> CatalogResult<Self> {
        let invalid = |reason: &str| CatalogError::InvalidDatasetName {
            name: name.to_string(),
            reason: reason.to_string(),
        };

        let (path_part, version) = match name.split_once(':') {
            Some((path_part, version)) => (path_part, Some(version.parse::<Version>()?)),
            None => (name, None),
        };

        let mut segments = path_part.split('/');
        let dataset_name = segments.next().unwrap_or_default();
        let config = segments.next();
        if segments.next().is_some() {
            return Err(invalid("expected at most one '/' separating dataset and config"));
        }
        if dataset_name.is_empty() {
            return Err(invalid("dataset name is empty"));
        }
        if config.is_some_and(str::is_empty) {
            return Err(invalid("config name is empty"));
        }

        Ok(Self {
            dataset_name: dataset_name.to_string(),
            config: config.map(str::to_string),
            version,
            version_dir: None,
            data_dir: data_dir.into(),
        })
    }

    /// Check whether `other` matches this reference used as a pattern
    ///
    /// Dataset names must be equal; config and version only constrain
    /// the match when set on `self`. Data dirs are ignored.
    pub fn matches(&self, other: &DatasetReference) -> bool {
        self.dataset_name == other.dataset_name
            && self.config.as_ref().map_or(true, |c| other.config.as_ref() == Some(c))
            && self.version.map_or(true, |v| other.version == Some(v))
    }
}

impl Ord for DatasetReference {
    fn cmp(&self, other: &Self) -> Ordering {
        self.dataset_name
            .cmp(&other.dataset_name)
            .then_with(|| {
                let lhs = self.config.as_deref().unwrap_or_default();
                let rhs = other.config.as_deref().unwrap_or_default();
                lhs.cmp(rhs)
            })
            .then_with(|| {
                let lhs = self.version.unwrap_or(Version::ZERO);
                let rhs = other.version.unwrap_or(Version::ZERO);
                lhs.cmp(&rhs)
            })
            // Tie-breakers keep Ord consistent with Eq
            .then_with(|| self.config.cmp(&other.config))
            .then_with(|| self.version.cmp(&other.version))
            .then_with(|| self.version_dir.cmp(&other.version_dir))
            .then_with(|| self.data_dir.cmp(&other.data_dir))
    }
}

impl PartialOrd for DatasetReference {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for DatasetReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tfds_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference(config: Option<&str>, version: Option<&str>) -> DatasetReference {
        DatasetReference {
            dataset_name: "my_ds".to_string(),
            config: config.map(str::to_string),
            version: version.map(|v| v.parse().unwrap()),
            version_dir: None,
            data_dir: PathBuf::from("/a"),
        }
    }

    #[test]
    fn test_ordering_by_name_config_version() {
        let mut references = vec![
            reference(Some("y"), Some("2.0.0")),
            reference(Some("x"), Some("1.0.10")),
            reference(Some("x"), Some("1.0.1")),
            reference(Some("x"), Some("1.0.9")),
        ];
        references.sort();

        let names: Vec<String> = references.iter().map(|r| r.tfds_name()).collect();
        assert_eq!(
            names,
            vec!["my_ds/x:1.0.1", "my_ds/x:1.0.9", "my_ds/x:1.0.10", "my_ds/y:2.0.0"]
        );
    }

    #[test]
    fn test_absent_fields_sort_first() {
        let bare = reference(None, None);
        let versioned = reference(None, Some("0.0.1"));
        let configured = reference(Some("a"), None);

        assert!(bare < versioned);
        assert!(versioned < configured);
    }

    #[test]
    fn test_ord_consistent_with_eq() {
        let none_config = reference(None, Some("1.0.0"));
        let empty_config = reference(Some(""), Some("1.0.0"));
        assert_ne!(none_config, empty_config);
        assert_ne!(none_config.cmp(&empty_config), Ordering::Equal);

        let zero = reference(None, Some("0.0.0"));
        let absent = reference(None, None);
        assert_ne!(zero.cmp(&absent), Ordering::Equal);

        let mut other_dir = reference(None, None);
        other_dir.data_dir = PathBuf::from("/b");
        assert_ne!(absent.cmp(&other_dir), Ordering::Equal);
        assert_eq!(absent.cmp(&absent.clone()), Ordering::Equal);
    }

    #[test]
    fn test_dataset_dir() {
        assert_eq!(
            reference(Some("x"), Some("1.0.0")).dataset_dir(),
            PathBuf::from("/a/my_ds/x/1.0.0")
        );
        assert_eq!(
            reference(None, Some("1.0.0")).dataset_dir(),
            PathBuf::from("/a/my_ds/1.0.0")
        );
        assert_eq!(reference(Some("x"), None).dataset_dir(), PathBuf::from("/a/my_ds/x"));
    }

    #[test]
    fn test_dataset_dir_keeps_non_canonical_version_name() {
        let version = Version::new(1, 0, 0);
        let padded = DatasetReference::new("my_ds", "/a").with_version_dir(version, "01.0.0");
        assert_eq!(padded.dataset_dir(), PathBuf::from("/a/my_ds/01.0.0"));
        assert_eq!(padded.tfds_name(), "my_ds:1.0.0");

        let canonical = DatasetReference::new("my_ds", "/a").with_version_dir(version, "1.0.0");
        assert_eq!(canonical.version_dir, None);
        assert_eq!(canonical, reference(None, Some("1.0.0")));

        assert_ne!(padded, canonical);
        assert_ne!(padded.cmp(&canonical), Ordering::Equal);
        assert_eq!(padded.clone().with_version(version), canonical);
    }

    #[test]
    fn test_tfds_name_and_display() {
        assert_eq!(reference(Some("x"), Some("1.0.0")).to_string(), "my_ds/x:1.0.0");
        assert_eq!(reference(None, Some("1.0.0")).tfds_name(), "my_ds:1.0.0");
        assert_eq!(reference(Some("x"), None).tfds_name(), "my_ds/x");
        assert_eq!(reference(None, None).tfds_name(), "my_ds");
    }

    #[test]
    fn test_from_tfds_name() {
        for name in ["my_ds", "my_ds/x", "my_ds:1.0.0", "my_ds/x:1.0.0"] {
            let parsed = DatasetReference::from_tfds_name(name, "/a").unwrap();
            assert_eq!(parsed.tfds_name(), name);
            assert_eq!(parsed.data_dir, PathBuf::from("/a"));
        }
    }

    #[test]
    fn test_from_tfds_name_rejects_malformed() {
        for name in ["", "/x", "my_ds/", "my_ds/x/y", ":1.0.0"] {
            assert!(
                matches!(
                    DatasetReference::from_tfds_name(name, "/a"),
                    Err(CatalogError::InvalidDatasetName { .. })
                ),
                "{name:?} should be rejected"
            );
        }
        assert!(matches!(
            DatasetReference::from_tfds_name("my_ds:1.0", "/a"),
            Err(CatalogError::Version(_))
        ));
    }

    #[test]
    fn test_matches_as_pattern() {
        let target = reference(Some("x"), Some("1.0.0"));

        assert!(DatasetReference::new("my_ds", "/other").matches(&target));
        assert!(reference(Some("x"), None).matches(&target));
        assert!(reference(None, Some("1.0.0")).matches(&target));
        assert!(!reference(Some("y"), None).matches(&target));
        assert!(!reference(None, Some("1.0.1")).matches(&target));
        assert!(!DatasetReference::new("other_ds", "/a").matches(&target));
    }

    #[test]
    fn test_json_shape() {
        let json = serde_json::to_value(reference(Some("x"), Some("1.0.0"))).unwrap();
        assert_eq!(json["dataset_name"], "my_ds");
        assert_eq!(json["config"], "x");
        assert_eq!(json["version"], "1.0.0");
        assert_eq!(json["data_dir"], "/a");

        let json = serde_json::to_value(reference(None, None)).unwrap();
        assert!(json.get("config").is_none());
        assert!(json.get("version").is_none());
    }
}
