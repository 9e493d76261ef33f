use std::io::{BufRead, BufReader, Read, Write};
use std::ops::AddAssign;
use std::path::Path;

use tar::EntryType;

use crate::error::ScanError;
use crate::io::{GzipReader, LocalFileReader};
use crate::mail::{MessageSummary, read_header_block};

/// Counters for one archive (or, summed, for a whole run).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ArchiveStats {
    /// Archive members seen, tar metadata records excluded
    pub entries: usize,
    pub directories: usize,
    /// Summary blocks written
    pub emitted: usize,
    /// Members that were not valid mails
    pub skipped: usize,
}

impl AddAssign for ArchiveStats {
    fn add_assign(&mut self, other: Self) {
        self.entries += other.entries;
        self.directories += other.directories;
        self.emitted += other.emitted;
        self.skipped += other.skipped;
    }
}

/// Walks gzip-compressed tar archives and writes one summary block per mail.
pub struct ArchiveScanner<W: Write> {
    out: W,
}

impl<W: Write> ArchiveScanner<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Scan the archive stored at `path`.
    ///
    /// The file handle lives only for the duration of this call.
    pub fn scan_file(&mut self, path: &Path) -> Result<ArchiveStats, ScanError> {
        let reader = LocalFileReader::open(path)?;
        tracing::info!("Processing \"{}\"", path.display());
        self.scan_reader(reader)
    }

    /// Scan a gzip-compressed tar stream.
    ///
    /// Per-entry problems are logged and the entry is skipped. Errors reading
    /// the archive itself end the scan with a per-file error; a failing output
    /// sink ends it with a fatal one.
    pub fn scan_reader<R: BufRead>(&mut self, reader: R) -> Result<ArchiveStats, ScanError> {
        let decoder = GzipReader::new(reader)?;
        let mut archive = tar::Archive::new(decoder);
        let mut stats = ArchiveStats::default();

        for entry in archive.entries().map_err(ScanError::Tar)? {
            let entry = entry.map_err(ScanError::Tar)?;
            let entry_type = entry.header().entry_type();

            if is_tar_metadata(entry_type) {
                continue;
            }
            stats.entries += 1;

            let name = entry
                .path()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|_| String::from("<invalid path>"));

            if is_directory(&entry) {
                tracing::debug!("Skipping directory {}", name);
                stats.directories += 1;
                continue;
            }

            match summarize_entry(entry) {
                Ok(summary) => {
                    write!(self.out, "{summary}").map_err(ScanError::Output)?;
                    stats.emitted += 1;
                }
                Err(e) => {
                    tracing::error!("{}: {}", name, e);
                    stats.skipped += 1;
                }
            }
        }

        self.out.flush().map_err(ScanError::Output)?;
        tracing::debug!(
            "{} entries, {} directories, {} mails, {} skipped",
            stats.entries,
            stats.directories,
            stats.emitted,
            stats.skipped
        );
        Ok(stats)
    }
}

/// Parse the header block of one archive member.
///
/// Only the header block is pulled from the entry; the tar reader skips the
/// rest of the member when it advances.
fn summarize_entry<R: Read>(entry: R) -> Result<MessageSummary, ScanError> {
    let block = read_header_block(BufReader::new(entry))?;
    MessageSummary::from_header_block(&block)
}

/// Directory members, including old-style ones that only mark themselves
/// with a trailing slash or the directory bit in their mode.
fn is_directory<R: Read>(entry: &tar::Entry<'_, R>) -> bool {
    let header = entry.header();
    header.entry_type().is_dir()
        || entry.path_bytes().ends_with(b"/")
        || header
            .mode()
            .is_ok_and(|mode| mode & S_IFMT == S_IFDIR)
}

const S_IFMT: u32 = 0o170000;
const S_IFDIR: u32 = 0o040000;

/// Records that describe other members rather than being members themselves.
fn is_tar_metadata(entry_type: EntryType) -> bool {
    entry_type.is_pax_global_extensions()
        || entry_type.is_pax_local_extensions()
        || entry_type.is_gnu_longname()
        || entry_type.is_gnu_longlink()
}
