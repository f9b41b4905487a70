//! Filesystem access for variant discovery
//!
//! Discovery never touches the filesystem directly. It goes through the
//! [`DirectoryLister`] capability, which has a production adapter over
//! `std::fs` and an in-memory adapter for deterministic fixtures.
//!
//! # Module Organization
//!
//! - [`local`] - Adapter over the local filesystem
//! - [`memory`] - In-memory directory tree
//!
//! # Examples
//!
//! ```rust
//! use std::path::Path;
//! use dataset_variants::app::fs::{DirectoryLister, MemoryFs};
//!
//! let mut fs = MemoryFs::new();
//! fs.add_file("/data/my_ds/1.0.0/dataset_info.json");
//!
//! assert_eq!(fs.list_children(Path::new("/data/my_ds")).unwrap(), vec!["1.0.0"]);
//! assert!(fs.is_dir(Path::new("/data/my_ds/1.0.0")));
//! assert!(fs.exists(Path::new("/data/my_ds/1.0.0/dataset_info.json")));
//! ```

use std::io;
use std::path::Path;
use std::sync::Arc;

pub mod local;
pub mod memory;

pub use local::LocalFs;
pub use memory::MemoryFs;

/// Read-only directory listing capability
///
/// Implementations must be safe to share between threads; discovery may
/// run several enumerations against the same lister concurrently.
pub trait DirectoryLister: Send + Sync {
    /// Names of the immediate children of `path`, sorted
    ///
    /// Returns an empty list when `path` does not exist or is not a
    /// directory. Any other failure is returned as an error.
    fn list_children(&self, path: &Path) -> io::Result<Vec<String>>;

    /// Whether `path` exists as a file or directory
    fn exists(&self, path: &Path) -> bool;

    /// Whether `path` exists and is a directory
    fn is_dir(&self, path: &Path) -> bool;
}

impl<T: DirectoryLister + ?Sized> DirectoryLister for &T {
    fn list_children(&self, path: &Path) -> io::Result<Vec<String>> {
        (**self).list_children(path)
    }

    fn exists(&self, path: &Path) -> bool {
        (**self).exists(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        (**self).is_dir(path)
    }
}

impl<T: DirectoryLister + ?Sized> DirectoryLister for Arc<T> {
    fn list_children(&self, path: &Path) -> io::Result<Vec<String>> {
        (**self).list_children(path)
    }

    fn exists(&self, path: &Path) -> bool {
        (**self).exists(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        (**self).is_dir(path)
    }
}
