//! Command-line argument parsing for Dataset Variants
//!
//! This module defines the CLI structure using clap derive macros.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::app::{ListOptions, ScanOptions};

/// Dataset Variants - find the dataset versions materialized on disk
#[derive(Parser, Debug)]
#[command(
    name = "dataset_variants",
    version,
    about = "List the dataset configurations and versions present in a data directory",
    long_about = "Reconstructs which dataset variants (config and version) are materialized under a data directory.
Handles layouts with and without configurations, and versions written by older storage formats."
)]
pub struct Cli {
    /// Global options
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Global arguments available to all subcommands
#[derive(Args, Debug)]
pub struct GlobalArgs {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Very verbose logging (debug level)
    #[arg(long, global = true)]
    pub very_verbose: bool,

    /// Quiet mode - suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Configuration file path
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the variants of one dataset directory
    List(ListArgs),

    /// List the variants of every dataset in one or more data directories
    Scan(ScanArgs),

    /// Find a dataset by name across data directories
    Find(FindArgs),

    /// Manage the configuration file
    Config(ConfigArgs),
}

/// Filters shared by the listing commands
#[derive(Args, Debug, Clone)]
pub struct FilterArgs {
    /// Stop at configurations instead of listing versions
    #[arg(long)]
    pub configs_only: bool,

    /// Include versions written before features.json existed
    #[arg(long)]
    pub include_old_format: bool,

    /// Print references as JSON
    #[arg(long)]
    pub json: bool,
}

impl FilterArgs {
    /// Listing policy, with the config file's old-format default as fallback
    pub fn list_options(&self, include_old_format_default: bool) -> ListOptions {
        ListOptions::default()
            .with_versions(!self.configs_only)
            .with_old_format_versions(self.include_old_format || include_old_format_default)
    }
}

/// Arguments for the list command
#[derive(Args, Debug, Clone)]
pub struct ListArgs {
    /// Dataset directory, e.g. ~/tensorflow_datasets/mnist
    #[arg(value_name = "DATASET_DIR")]
    pub dataset_dir: PathBuf,

    #[command(flatten)]
    pub filters: FilterArgs,
}

/// Arguments for the scan command
#[derive(Args, Debug, Clone)]
pub struct ScanArgs {
    /// Data directories to scan (defaults to configured or TFDS_DATA_DIR)
    #[arg(value_name = "DATA_DIR")]
    pub data_dirs: Vec<PathBuf>,

    /// Only list dataset names
    #[arg(long, conflicts_with = "configs_only")]
    pub datasets_only: bool,

    /// Number of datasets enumerated in parallel
    #[arg(short = 'j', long)]
    pub concurrency: Option<usize>,

    #[command(flatten)]
    pub filters: FilterArgs,
}

impl ScanArgs {
    /// Data-dir scan policy
    pub fn scan_options(&self, include_old_format_default: bool) -> ScanOptions {
        ScanOptions {
            include_configs: !self.datasets_only,
            list: self.filters.list_options(include_old_format_default),
        }
    }
}

/// Arguments for the find command
#[derive(Args, Debug, Clone)]
pub struct FindArgs {
    /// Dataset name, optionally with config and version: NAME[/CONFIG][:VERSION]
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Data directories to search (repeatable)
    #[arg(long = "data-dir", value_name = "DIR")]
    pub data_dirs: Vec<PathBuf>,

    #[command(flatten)]
    pub filters: FilterArgs,
}

/// Arguments for configuration management
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Configuration actions
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Print the effective configuration
    Show,

    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },

    /// Print the default configuration file location
    Path,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the logging level from the global flags, if any was given
    pub fn log_level(&self) -> Option<tracing::Level> {
        if self.global.quiet {
            Some(tracing::Level::ERROR)
        } else if self.global.very_verbose {
            Some(tracing::Level::DEBUG)
        } else if self.global.verbose {
            Some(tracing::Level::INFO)
        } else {
            None
        }
    }
}
