//! Main entry point for the mailtar CLI application.
//!
//! Validates the archive paths given on the command line and prints a summary
//! block for every mail found inside them.

use anyhow::Result;
use clap::Parser;

use mailtar::{ArchiveScanner, Cli, scan_paths, validate_paths};

/// Application entry point.
///
/// Only fatal errors make the process exit non-zero; archives and members
/// that fail are reported on stderr and skipped.
fn main() -> Result<()> {
    let cli = Cli::parse();
    mailtar::logging::init(cli.default_log_level());

    let paths = validate_paths(&cli.files);
    if paths.len() < cli.files.len() {
        tracing::warn!(
            "{} of {} arguments skipped",
            cli.files.len() - paths.len(),
            cli.files.len()
        );
    }

    let stdout = std::io::stdout().lock();
    let mut scanner = ArchiveScanner::new(std::io::BufWriter::new(stdout));

    scan_paths(&mut scanner, &paths, cli.fail_fast)?;

    Ok(())
}
