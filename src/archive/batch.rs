use std::io::Write;
use std::path::{Path, PathBuf};

use super::scanner::{ArchiveScanner, ArchiveStats};
use crate::error::ScanError;

/// Outcome of a run over several archives.
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Archives that were attempted
    pub archives: usize,
    /// Archives that could not be read to the end, with the reason
    pub failed: Vec<(PathBuf, ScanError)>,
    pub totals: ArchiveStats,
}

impl BatchReport {
    pub fn succeeded(&self) -> usize {
        self.archives - self.failed.len()
    }
}

/// Scan every archive in `paths`, in order.
///
/// A broken archive is logged and recorded in the report, and the next one is
/// processed. With `fail_fast` the first broken archive ends the run instead.
/// Fatal errors always end the run.
pub fn scan_paths<W, P>(
    scanner: &mut ArchiveScanner<W>,
    paths: &[P],
    fail_fast: bool,
) -> Result<BatchReport, ScanError>
where
    W: Write,
    P: AsRef<Path>,
{
    let mut report = BatchReport::default();

    for path in paths {
        let path = path.as_ref();
        report.archives += 1;

        match scanner.scan_file(path) {
            Ok(stats) => report.totals += stats,
            Err(e) if e.is_fatal() => return Err(e),
            Err(e) if fail_fast => {
                return Err(ScanError::Aborted {
                    path: path.to_path_buf(),
                    source: Box::new(e),
                });
            }
            Err(e) => {
                tracing::error!("File \"{}\" failed: {}", path.display(), e);
                report.failed.push((path.to_path_buf(), e));
            }
        }
    }

    tracing::info!(
        "{} mails from {} archives ({} failed)",
        report.totals.emitted,
        report.archives,
        report.failed.len()
    );
    Ok(report)
}
