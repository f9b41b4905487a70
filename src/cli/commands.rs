//! Command handlers for the CLI
//!
//! Each handler resolves its inputs against the loaded configuration,
//! runs the discovery operation and prints the result.

use std::collections::BTreeSet;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

use indicatif::{ProgressBar, ProgressStyle};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{info, warn};

use super::args::{ConfigAction, ConfigArgs, FindArgs, ListArgs, ScanArgs};
use crate::app::{
    find_variants, list_dataset_variants, resolve_data_dirs, DataDirScanner, DatasetReference,
    LocalFs, ScanEvent,
};
use crate::config::AppConfig;
use crate::errors::{AppError, Result};

/// Handle the list command
pub async fn handle_list(args: ListArgs, config: &AppConfig) -> Result<()> {
    let options = args
        .filters
        .list_options(config.discovery.include_old_format_versions);
    info!(
        "Listing variants of {} ({:?})",
        args.dataset_dir.display(),
        options
    );

    let dataset_dir = args.dataset_dir.clone();
    let references = tokio::task::spawn_blocking(move || {
        list_dataset_variants(&LocalFs, &dataset_dir, &options)
    })
    .await
    .map_err(|e| AppError::generic(format!("Listing task failed: {}", e)))??;

    print_references(&references, args.filters.json)
}

/// Handle the scan command
pub async fn handle_scan(args: ScanArgs, config: &AppConfig) -> Result<()> {
    let data_dirs = resolve_data_dirs(&args.data_dirs, &config.discovery.data_dirs);
    let options = args.scan_options(config.discovery.include_old_format_versions);
    let concurrency = args
        .concurrency
        .unwrap_or(config.discovery.scan_concurrency);
    info!(
        "Scanning {} data directories with concurrency {}",
        data_dirs.len(),
        concurrency
    );

    let start_time = Instant::now();
    let (sender, receiver) = mpsc::unbounded_channel();
    let spinner = if args.filters.json {
        None
    } else {
        Some(create_spinner())
    };
    let progress_task = spinner
        .clone()
        .map(|spinner| tokio::spawn(track_scan_progress(spinner, receiver)));

    let scanner = DataDirScanner::new(Arc::new(LocalFs))
        .with_concurrency(concurrency)
        .with_progress(sender);
    let result = scanner.scan(&data_dirs, &options).await;
    drop(scanner);

    if let Some(task) = progress_task {
        // Channel closed with the scanner, so the task finishes on its own
        finish_progress_task(task).await;
    }
    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }

    let references = result?;
    if !args.filters.json {
        println!(
            "🔍 Scanned {} data directories in {:.1}s",
            data_dirs.len(),
            start_time.elapsed().as_secs_f64()
        );
    }
    print_references(&references, args.filters.json)
}

/// Handle the find command
pub async fn handle_find(args: FindArgs, config: &AppConfig) -> Result<()> {
    let data_dirs = resolve_data_dirs(&args.data_dirs, &config.discovery.data_dirs);
    let options = args
        .filters
        .list_options(config.discovery.include_old_format_versions);
    info!("Looking for {} in {} data directories", args.name, data_dirs.len());

    let name = args.name.clone();
    let references =
        tokio::task::spawn_blocking(move || find_variants(&LocalFs, &data_dirs, &name, &options))
            .await
            .map_err(|e| {
                AppError::generic(format!("Search task failed: {}", e))
            })??;

    print_references(&references, args.filters.json)
}

/// Handle configuration management
pub async fn handle_config(
    args: ConfigArgs,
    config_override: Option<PathBuf>,
    config: &AppConfig,
) -> Result<()> {
    match args.action {
        ConfigAction::Show => {
            print!("{}", config.to_toml_string()?);
            Ok(())
        }
        ConfigAction::Init { force } => {
            let path = match config_override {
                Some(path) => path,
                None => AppConfig::default_config_path()?,
            };
            if AppConfig::initialize(&path, force).await? {
                println!("📁 Created default configuration file:");
                println!("   {}", path.display());
            } else {
                println!("ℹ️  Configuration file already exists: {}", path.display());
                println!("   Use --force to overwrite it.");
            }
            Ok(())
        }
        ConfigAction::Path => {
            println!("{}", AppConfig::default_config_path()?.display());
            Ok(())
        }
    }
}

/// Print references as text lines or a JSON array
fn print_references(references: &BTreeSet<DatasetReference>, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(references)?);
        return Ok(());
    }

    if references.is_empty() {
        println!("ℹ️  No dataset variants found");
        return Ok(());
    }

    let width = references
        .iter()
        .map(|r| r.tfds_name().len())
        .max()
        .unwrap_or_default();
    for reference in references {
        println!(
            "{:<width$}  {}",
            reference.tfds_name(),
            reference.dataset_dir().display(),
            width = width
        );
    }
    println!();
    println!("📊 {} variant(s)", references.len());
    Ok(())
}

fn create_spinner() -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    let style = ProgressStyle::default_spinner()
        .template("{spinner:.green} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
        .tick_strings(&["◐", "◓", "◑", "◒"]);
    spinner.set_style(style);
    spinner.set_message("📂 Listing data directories...");
    spinner.enable_steady_tick(Duration::from_millis(120));
    spinner
}

async fn track_scan_progress(spinner: ProgressBar, mut receiver: mpsc::UnboundedReceiver<ScanEvent>) {
    let mut total = 0;
    let mut scanned = 0;
    let mut variants_found = 0;

    while let Some(event) = receiver.recv().await {
        match event {
            ScanEvent::DataDirListed { datasets, .. } => total += datasets,
            ScanEvent::DatasetScanned { variants, .. } => {
                scanned += 1;
                variants_found += variants;
            }
        }
        spinner.set_message(format!(
            "🔍 Scanned {}/{} datasets, {} variants",
            scanned, total, variants_found
        ));
    }
}

/// Wait for the progress task, logging instead of propagating a failure
///
/// Returns whether the task ran to completion.
async fn finish_progress_task(task: JoinHandle<()>) -> bool {
    match task.await {
        Ok(()) => true,
        Err(e) => {
            warn!("Progress task failed: {}", e);
            false
        }
    }
}
