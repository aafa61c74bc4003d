//! Directory scan: one file at a time, metadata → search → report.
//!
//! Files are processed strictly in sequence. Between files the runner waits
//! `pace_ms` when `await_pace` is set; otherwise pacing is skipped. At most
//! `max_files` entries are processed per run.
//!
//! Failure policy follows `stop_on_error`: when unset, a failing file is
//! logged and counted and the scan moves on; when set, the first failure is
//! logged and the remaining files are left unprocessed. Either way a started
//! run completes with a summary.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use tracing::{debug, error, info};

use crate::catalog::CatalogClient;
use crate::config::RunConfig;
use crate::error::{Result, ScoutError};
use crate::metadata::MetadataSource;
use crate::pipeline::SearchPipeline;
use crate::report::write_track_report;

/// Counters for a completed run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Files whose results were reported.
    pub processed: usize,
    /// Files that failed (metadata or search) and were skipped.
    pub failed: usize,
    /// Entries left untouched because of the file cap.
    pub skipped: usize,
    /// Wall time of the whole run, in milliseconds.
    pub duration_ms: u64,
    /// Set when `stop_on_error` ended the run at a failing file.
    pub stopped_early: bool,
}

/// List the immediate entries of `dir`, sorted by file name.
///
/// Every entry is returned regardless of extension.
pub fn list_track_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(ScoutError::Config(format!(
            "Track directory not found: {}",
            dir.display()
        )));
    }

    let mut files = std::fs::read_dir(dir)?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<std::io::Result<Vec<_>>>()?;
    files.sort();
    Ok(files)
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Drives the per-file loop.
pub struct ScanRunner<M, C> {
    source: M,
    pipeline: SearchPipeline<C>,
    config: RunConfig,
}

impl<M: MetadataSource, C: CatalogClient> ScanRunner<M, C> {
    pub fn new(source: M, pipeline: SearchPipeline<C>, config: RunConfig) -> Self {
        Self {
            source,
            pipeline,
            config,
        }
    }

    /// Process the entries of `dir`, writing one report block per file to `out`.
    pub async fn run<W: Write + ?Sized>(&self, dir: &Path, out: &mut W) -> Result<RunSummary> {
        let started = Instant::now();
        let files = list_track_files(dir)?;
        let total = files.len();
        let selected: Vec<PathBuf> = files.into_iter().take(self.config.max_files).collect();

        info!(
            "Scanning {} of {} entries in {}",
            selected.len(),
            total,
            dir.display()
        );

        let mut summary = RunSummary {
            skipped: total - selected.len(),
            ..RunSummary::default()
        };

        for (index, path) in selected.iter().enumerate() {
            if index > 0 {
                self.pace().await;
            }

            match self.process_file(path, out).await {
                Ok(()) => summary.processed += 1,
                Err(e) if self.config.stop_on_error => {
                    error!("Stopping run at {}: {}", path.display(), e);
                    summary.failed += 1;
                    summary.skipped += selected.len() - index - 1;
                    summary.stopped_early = true;
                    break;
                }
                Err(e) => {
                    error!("Failed to process {}: {}", path.display(), e);
                    summary.failed += 1;
                }
            }
        }

        summary.duration_ms = started.elapsed().as_millis() as u64;
        info!(
            "Run finished: {} processed, {} failed, {} skipped ({} ms)",
            summary.processed, summary.failed, summary.skipped, summary.duration_ms
        );
        Ok(summary)
    }

    async fn process_file<W: Write + ?Sized>(&self, path: &Path, out: &mut W) -> Result<()> {
        let track = self.source.read(path)?;
        info!("Searching for {}", track);

        let results = self.pipeline.search(&track).await?;
        write_track_report(out, &display_name(path), &track, &results)?;
        out.flush()?;
        Ok(())
    }

    async fn pace(&self) {
        if self.config.pace_ms == 0 {
            return;
        }
        if self.config.await_pace {
            tokio::time::sleep(Duration::from_millis(self.config.pace_ms)).await;
        } else {
            debug!("Pacing of {} ms not awaited", self.config.pace_ms);
        }
    }
}
