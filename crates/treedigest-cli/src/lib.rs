//! treedigest-cli library
//!
//! Exposes argument parsing, logging setup and the top-level run so the
//! binary stays a thin shell and the pieces can be tested directly.

pub mod cli;
pub mod logging;

pub use cli::{run, Cli};
pub use logging::{log_filter, setup_logging};
