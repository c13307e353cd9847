//! Command-line arguments and the top-level run

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::warn;
use treedigest_core::{ByteSize, EntryFilter, ScanConfig};

#[derive(Debug, Parser)]
#[command(name = "treedigest")]
#[command(
    author,
    version,
    about = "Recursively digest a directory as line-delimited JSON",
    long_about = None
)]
pub struct Cli {
    /// Directory to scan
    pub directory: PathBuf,

    /// Skip regular files larger than this size (e.g. 10MB, 512k)
    pub max_file_size: Option<ByteSize>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Only digest jpg, jpeg, gif, png, bmp and webp files
    #[arg(long)]
    pub images_only: bool,

    /// Exit with status 1 if any entry could not be digested
    #[arg(long)]
    pub strict: bool,
}

impl Cli {
    /// Build the scan configuration described by these arguments
    #[must_use]
    pub fn scan_config(&self) -> ScanConfig {
        let filter = EntryFilter::new()
            .with_images_only(self.images_only)
            .with_max_file_size(self.max_file_size);
        ScanConfig::new(&self.directory).with_filter(filter)
    }
}

/// Scan the requested directory, writing records to stdout
///
/// # Errors
/// Returns an error if stdout can no longer be written to.
pub async fn run(cli: &Cli) -> Result<ExitCode> {
    let config = cli.scan_config();
    let mut stdout = std::io::stdout();

    let summary = treedigest_core::run(&config, &mut stdout)
        .await
        .context("scan aborted")?;

    if cli.strict && summary.has_failures() {
        warn!(
            "{} of {} entries could not be digested",
            summary.failed, summary.emitted
        );
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}
