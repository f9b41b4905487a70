//! In-memory directory tree
//!
//! Mirrors the behavior of [`LocalFs`](super::LocalFs) for the three
//! listing operations so discovery can be exercised without touching disk.

use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};

use super::DirectoryLister;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EntryKind {
    File,
    Dir,
}

/// [`DirectoryLister`] over a tree held in memory
///
/// Parent directories are created implicitly, so a fixture only needs to
/// name its leaf files.
#[derive(Debug, Clone, Default)]
pub struct MemoryFs {
    entries: BTreeMap<PathBuf, EntryKind>,
}

impl MemoryFs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an empty file, creating all parent directories
    pub fn add_file(&mut self, path: impl AsRef<Path>) -> &mut Self {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            self.add_dir(parent);
        }
        self.entries.insert(path.to_path_buf(), EntryKind::File);
        self
    }

    /// Add a directory and all of its ancestors
    pub fn add_dir(&mut self, path: impl AsRef<Path>) -> &mut Self {
        for ancestor in path.as_ref().ancestors() {
            if ancestor.as_os_str().is_empty() {
                continue;
            }
            self.entries
                .entry(ancestor.to_path_buf())
                .or_insert(EntryKind::Dir);
        }
        self
    }

    /// Remove a file or a directory with everything below it
    pub fn remove(&mut self, path: impl AsRef<Path>) -> &mut Self {
        let path = path.as_ref();
        self.entries.retain(|entry, _| !entry.starts_with(path));
        self
    }

    /// Number of files and directories in the tree
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl DirectoryLister for MemoryFs {
    fn list_children(&self, path: &Path) -> io::Result<Vec<String>> {
        if !self.is_dir(path) {
            return Ok(Vec::new());
        }
        // BTreeMap order keeps the names sorted
        let names = self
            .entries
            .keys()
            .filter(|entry| entry.parent() == Some(path))
            .filter_map(|entry| entry.file_name())
            .map(|name| name.to_string_lossy().into_owned())
            .collect();
        Ok(names)
    }

    fn exists(&self, path: &Path) -> bool {
        self.entries.contains_key(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.entries.get(path) == Some(&EntryKind::Dir)
    }
}
