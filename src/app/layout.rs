//! Dataset directory layout classification
//!
//! A dataset directory holds either configuration directories (each with
//! version directories below it) or version directories directly. The
//! decision is made once per dataset directory from its child names.

use super::version::Version;

/// Interpretation of the children of a dataset directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Layout {
    /// The dataset directory has no children
    Empty,
    /// No child parses as a version, so every child is a configuration name
    Configs { configs: Vec<String> },
    /// At least one child parses as a version
    Versions {
        /// Children that parsed, with their versions
        versions: Vec<(String, Version)>,
        /// Children that did not parse and are treated as stray entries
        skipped: Vec<String>,
    },
}

impl Layout {
    /// Classify the child names of a dataset directory
    ///
    /// Mixed listings are partitioned child by child: once any child is a
    /// version the level is a version level, and everything else at that
    /// level is skipped rather than reported.
    pub fn classify<S: AsRef<str>>(children: &[S]) -> Self {
        if children.is_empty() {
            return Layout::Empty;
        }

        let mut versions = Vec::new();
        let mut skipped = Vec::new();
        for child in children {
            let name = child.as_ref();
            match Version::parse(name) {
                Some(version) => versions.push((name.to_string(), version)),
                None => skipped.push(name.to_string()),
            }
        }

        if versions.is_empty() {
            Layout::Configs { configs: skipped }
        } else {
            Layout::Versions { versions, skipped }
        }
    }

    /// Short label used in log lines
    pub fn kind(&self) -> &'static str {
        match self {
            Layout::Empty => "empty",
            Layout::Configs { .. } => "configs",
            Layout::Versions { .. } => "versions",
        }
    }
}
