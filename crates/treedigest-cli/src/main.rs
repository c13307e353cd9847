//! treedigest: Digest every entry of a directory tree as JSON lines

use std::process::ExitCode;

use clap::Parser;
use treedigest_cli::{setup_logging, Cli};

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Usage errors exit 1; --help and --version exit 0
            let code = if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
            e.print()?;
            return Ok(code);
        }
    };
    setup_logging(cli.verbose);

    treedigest_cli::run(&cli).await
}
