//! Application constants for dataset variant discovery
//!
//! This module centralizes the constants used throughout the crate,
//! organized by functional domain. The marker file names are the only
//! bit-exact contract with the on-disk storage format.

/// Marker files that qualify a version directory as a complete variant
pub mod markers {
    /// Primary marker, required for every valid variant
    pub const DATASET_INFO_FILENAME: &str = "dataset_info.json";

    /// Secondary marker, written only by the newer storage format
    pub const FEATURES_FILENAME: &str = "features.json";
}

/// Environment variable names
pub mod env {
    /// Overrides the default data directory
    pub const DATA_DIR: &str = "TFDS_DATA_DIR";
}

/// Data directory layout constants
pub mod data_dir {
    /// Directory name used under the home directory when nothing else is set
    pub const DEFAULT_DIR_NAME: &str = "tensorflow_datasets";

    /// Shared download area that lives next to dataset directories
    pub const DOWNLOADS_DIR_NAME: &str = "downloads";

    /// Names of data-dir children that are never datasets
    pub const RESERVED_NAMES: &[&str] = &[DOWNLOADS_DIR_NAME];
}

/// Concurrent scan settings
pub mod scan {
    /// Default number of dataset directories enumerated in parallel
    pub const DEFAULT_CONCURRENCY: usize = 8;

    /// Upper bound accepted from configuration
    pub const MAX_CONCURRENCY: usize = 256;
}

/// Configuration file locations
pub mod config {
    /// Project-local configuration file name
    pub const LOCAL_FILE_NAME: &str = "dataset-variants.toml";

    /// Directory name under the user config directory
    pub const APP_DIR_NAME: &str = "dataset-variants";

    /// File name under the user config directory
    pub const USER_FILE_NAME: &str = "config.toml";

    /// Accepted values for `logging.level`
    pub const LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];
}
