//! Semantic version directory names
//!
//! Version directories are named `MAJOR.MINOR.PATCH` with plain decimal
//! components. Parsing is total: anything that does not match the grammar
//! exactly is "not a version", which callers use to tell configuration
//! directories and stray entries apart from version directories.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::VersionError;

/// Three-part numeric version parsed from a directory name
///
/// Field order gives the derived ordering: major first, then minor, then
/// patch, all compared numerically (`1.0.10` sorts after `1.0.9`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl Version {
    /// Version used in place of an absent one when ordering references
    pub const ZERO: Version = Version::new(0, 0, 0);

    /// Create a version from its components
    pub const fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Parse a directory name as a version
    ///
    /// Returns `None` unless `name` is exactly three dot-separated,
    /// non-empty runs of ASCII digits, each fitting a `u64`. Signs,
    /// whitespace, pre-release and build suffixes are all rejected.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dataset_variants::app::Version;
    ///
    /// assert_eq!(Version::parse("1.0.10"), Some(Version::new(1, 0, 10)));
    /// assert_eq!(Version::parse("1.0.0-beta"), None);
    /// assert_eq!(Version::parse("config_a"), None);
    /// ```
    pub fn parse(name: &str) -> Option<Self> {
        let mut parts = name.split('.');
        let major = parse_component(parts.next()?)?;
        let minor = parse_component(parts.next()?)?;
        let patch = parse_component(parts.next()?)?;
        if parts.next().is_some() {
            return None;
        }
        Some(Self::new(major, minor, patch))
    }

    /// Check whether a name follows the version grammar
    pub fn is_valid(name: &str) -> bool {
        Self::parse(name).is_some()
    }
}

/// Parse one version component, digits only
fn parse_component(part: &str) -> Option<u64> {
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    // u64::from_str would also accept a leading '+', hence the digit check
    part.parse().ok()
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl FromStr for Version {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| VersionError::Malformed {
            input: s.to_string(),
        })
    }
}

// Serialize as the directory-name string so JSON output matches the disk layout
impl Serialize for Version {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Version {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
