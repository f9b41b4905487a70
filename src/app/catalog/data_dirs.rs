//! Data directory resolution
//!
//! Precedence, highest first:
//! 1. Directories given explicitly by the caller
//! 2. Directories from configuration
//! 3. `TFDS_DATA_DIR`
//! 4. `~/tensorflow_datasets`

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::constants::{data_dir, env};

/// Data directory used when the caller gives none
///
/// Returns `given` when set, else `TFDS_DATA_DIR`, else
/// `~/tensorflow_datasets` (or `./tensorflow_datasets` without a home
/// directory).
pub fn default_data_dir(given: Option<&Path>) -> PathBuf {
    let from_env = std::env::var_os(env::DATA_DIR)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from);
    choose_data_dir(given, from_env, dirs::home_dir())
}

fn choose_data_dir(given: Option<&Path>, from_env: Option<PathBuf>, home: Option<PathBuf>) -> PathBuf {
    if let Some(given) = given {
        return given.to_path_buf();
    }
    if let Some(from_env) = from_env {
        debug!("Using data dir from {}: {}", env::DATA_DIR, from_env.display());
        return from_env;
    }
    home.unwrap_or_else(|| PathBuf::from("."))
        .join(data_dir::DEFAULT_DIR_NAME)
}

/// Data directories to scan
///
/// Uses `given` when non-empty, else `configured` when non-empty, else the
/// single [`default_data_dir`]. Duplicates are dropped, first occurrence wins.
pub fn resolve_data_dirs(given: &[PathBuf], configured: &[PathBuf]) -> Vec<PathBuf> {
    let candidates = if !given.is_empty() {
        given.to_vec()
    } else if !configured.is_empty() {
        configured.to_vec()
    } else {
        vec![default_data_dir(None)]
    };

    let mut resolved: Vec<PathBuf> = Vec::with_capacity(candidates.len());
    for dir in candidates {
        if !resolved.contains(&dir) {
            resolved.push(dir);
        }
    }
    resolved
}
