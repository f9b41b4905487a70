//! Concurrent scans over several data directories
//!
//! Enumeration itself is synchronous; this module fans it out over tokio
//! blocking tasks, one per dataset directory, bounded by a semaphore.

use std::collections::BTreeSet;
use std::path::PathBuf;
use std::sync::Arc;

use tokio::sync::{mpsc, Semaphore};
use tokio::task::JoinSet;
use tracing::{debug, info};

use super::{list_dataset_dirs, list_datasets_in_data_dir, ScanOptions};
use crate::app::fs::DirectoryLister;
use crate::app::reference::DatasetReference;
use crate::app::variants::VariantEnumerator;
use crate::constants::scan;
use crate::errors::{CatalogError, CatalogResult};

/// Progress notifications emitted while scanning
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanEvent {
    /// Dataset directories found in a data directory
    DataDirListed { data_dir: PathBuf, datasets: usize },
    /// One dataset directory was enumerated
    DatasetScanned { dataset_dir: PathBuf, variants: usize },
}

/// Scans data directories with bounded concurrency
pub struct DataDirScanner<L: DirectoryLister + 'static> {
    lister: Arc<L>,
    concurrency: usize,
    progress: Option<mpsc::UnboundedSender<ScanEvent>>,
}

impl<L: DirectoryLister + 'static> DataDirScanner<L> {
    pub fn new(lister: Arc<L>) -> Self {
        Self {
            lister,
            concurrency: scan::DEFAULT_CONCURRENCY,
            progress: None,
        }
    }

    /// Set the number of dataset directories enumerated at once
    ///
    /// Clamped to `1..=MAX_CONCURRENCY`.
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.clamp(1, scan::MAX_CONCURRENCY);
        self
    }

    /// Send progress events to `sender`
    pub fn with_progress(mut self, sender: mpsc::UnboundedSender<ScanEvent>) -> Self {
        self.progress = Some(sender);
        self
    }

    /// Scan every data directory and merge the results
    ///
    /// The first failing dataset aborts the scan with its error.
    pub async fn scan(
        &self,
        data_dirs: &[PathBuf],
        options: &ScanOptions,
    ) -> CatalogResult<BTreeSet<DatasetReference>> {
        let mut references = BTreeSet::new();

        if !options.include_configs {
            for data_dir in data_dirs {
                references.extend(list_datasets_in_data_dir(&*self.lister, data_dir, options)?);
            }
            return Ok(references);
        }

        let semaphore = Arc::new(Semaphore::new(self.concurrency));
        let mut tasks = JoinSet::new();

        for data_dir in data_dirs {
            let dataset_dirs = list_dataset_dirs(&*self.lister, data_dir)?;
            debug!(
                "Scanning {} dataset directories in {}",
                dataset_dirs.len(),
                data_dir.display()
            );
            self.emit(ScanEvent::DataDirListed {
                data_dir: data_dir.clone(),
                datasets: dataset_dirs.len(),
            });

            for dataset_dir in dataset_dirs {
                let permit = Arc::clone(&semaphore)
                    .acquire_owned()
                    .await
                    .map_err(|e| CatalogError::TaskFailed {
                        reason: e.to_string(),
                    })?;
                let lister = Arc::clone(&self.lister);
                let list_options = options.list;

                tasks.spawn_blocking(move || {
                    let _permit = permit;
                    let variants =
                        VariantEnumerator::new(&*lister).list_variants(&dataset_dir, &list_options);
                    (dataset_dir, variants)
                });
            }
        }

        while let Some(joined) = tasks.join_next().await {
            let (dataset_dir, variants) = joined.map_err(|e| CatalogError::TaskFailed {
                reason: e.to_string(),
            })?;
            let variants = variants?;
            self.emit(ScanEvent::DatasetScanned {
                dataset_dir,
                variants: variants.len(),
            });
            references.extend(variants);
        }

        info!(
            "Scanned {} data directories, found {} variants",
            data_dirs.len(),
            references.len()
        );
        Ok(references)
    }

    fn emit(&self, event: ScanEvent) {
        if let Some(sender) = &self.progress {
            // Receiver may have gone away; progress is best effort
            let _ = sender.send(event);
        }
    }
}

/// Scan `data_dirs` with `concurrency` parallel dataset enumerations
pub async fn scan_data_dirs<L: DirectoryLister + 'static>(
    lister: Arc<L>,
    data_dirs: &[PathBuf],
    options: &ScanOptions,
    concurrency: usize,
) -> CatalogResult<BTreeSet<DatasetReference>> {
    DataDirScanner::new(lister)
        .with_concurrency(concurrency)
        .scan(data_dirs, options)
        .await
}
