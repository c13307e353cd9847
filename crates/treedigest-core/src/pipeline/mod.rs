//! Pipeline: The sequential walk → filter → digest → print loop
//!
//! Exactly one entry is in flight at a time. An entry's line is written
//! before the next path is pulled from the walker, so output order always
//! equals traversal order.

use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{debug, error, info, warn};

use crate::digest::{digest_file, FileRecord};
use crate::error::ScanError;
use crate::scanner::{EntryFilter, SkipReason, Walker};

/// Settings for a single scan
#[derive(Debug, Clone)]
pub struct ScanConfig {
    root: PathBuf,
    filter: EntryFilter,
}

impl ScanConfig {
    /// Create a config that digests every entry under `root`
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            filter: EntryFilter::default(),
        }
    }

    /// Set the entry filter
    #[must_use]
    pub fn with_filter(mut self, filter: EntryFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Get the root directory being scanned
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Get the entry filter
    #[must_use]
    pub fn filter(&self) -> &EntryFilter {
        &self.filter
    }
}

/// Counts collected over one scan
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanSummary {
    /// Lines written, degraded records included
    pub emitted: usize,
    /// Entries that produced a degraded record
    pub failed: usize,
    /// Entries rejected by the filter
    pub skipped: usize,
}

impl ScanSummary {
    /// Whether any entry failed to digest
    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }
}

/// Run a scan, writing one JSON line per digested entry to `out`
///
/// Per-entry failures never abort the scan: they are logged and a
/// degraded record is written in place of the real one.
///
/// # Errors
/// Returns an error only if writing to `out` fails.
pub async fn run<W: Write>(config: &ScanConfig, out: &mut W) -> Result<ScanSummary, ScanError> {
    info!("Scanning directory: {}", config.root().display());

    let mut paths = Walker::new(config.root()).spawn();
    let mut summary = ScanSummary::default();

    while let Some(path) = paths.recv().await {
        if let Some(reason) = check_filter(config.filter(), &path).await {
            log_skip(&path, reason);
            summary.skipped += 1;
            continue;
        }

        let record = match digest_file(&path).await {
            Ok(record) => record,
            Err(e) => {
                error!("Failed to digest {}: {}", path.display(), e);
                FileRecord::degraded(&e)
            }
        };
        if record.is_degraded() {
            summary.failed += 1;
        } else {
            debug!(
                "{} sha256={}",
                record.path,
                record.hex_digest().unwrap_or_default()
            );
        }

        write_record(out, &record)?;
        summary.emitted += 1;
    }

    log_scan_summary(&summary);
    Ok(summary)
}

/// Apply the filter, stat'ing the entry only when a size limit is set
async fn check_filter(filter: &EntryFilter, path: &Path) -> Option<SkipReason> {
    let file_len = match filter.max_file_size() {
        Some(_) => tokio::fs::metadata(path)
            .await
            .ok()
            .filter(std::fs::Metadata::is_file)
            .map(|metadata| metadata.len()),
        None => None,
    };
    filter.skip_reason(path, file_len)
}

fn log_skip(path: &Path, reason: SkipReason) {
    match reason {
        SkipReason::NotAnImage => debug!("Skipping {}: {}", path.display(), reason),
        SkipReason::TooLarge { .. } => warn!("Skipping {}: {}", path.display(), reason),
    }
}

/// Serialize and write one record as a single line
///
/// A record that fails to serialize is logged and written as an empty line.
fn write_record<W: Write>(out: &mut W, record: &FileRecord) -> Result<(), ScanError> {
    let line = serde_json::to_string(record).unwrap_or_else(|e| {
        error!("Failed to serialize record for {}: {}", record.path, e);
        String::new()
    });
    writeln!(out, "{line}")?;
    out.flush()?;
    Ok(())
}

fn log_scan_summary(summary: &ScanSummary) {
    info!(
        "✓ Scan completed: {} records, {} failed, {} skipped",
        summary.emitted, summary.failed, summary.skipped
    );
}
