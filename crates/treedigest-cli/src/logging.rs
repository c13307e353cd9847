//! Diagnostic logging to stderr

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Filter for the requested verbosity
#[must_use]
pub fn log_filter(verbose: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    }
}

/// Install the global subscriber
///
/// Everything goes to stderr; stdout is reserved for records.
pub fn setup_logging(verbose: bool) {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(log_filter(verbose))
        .init();
}
