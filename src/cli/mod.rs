//! Command-line interface components
//!
//! This module contains CLI-specific code for the Dataset Variants
//! application: argument parsing and command handlers.

pub mod args;
pub mod commands;

pub use args::{
    Cli, Commands, ConfigAction, ConfigArgs, FilterArgs, FindArgs, GlobalArgs, ListArgs, ScanArgs,
};
pub use commands::{handle_config, handle_find, handle_list, handle_scan};
