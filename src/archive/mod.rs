//! Reading mails out of gzip-compressed tar archives.
//!
//! ## Architecture
//!
//! - [`scanner`]: the per-archive pipeline. A file is opened, decompressed,
//!   split into tar members, and every member that is not a directory is read
//!   as a mail. Each mail with a usable `Date` produces one summary block.
//! - [`batch`]: runs the scanner over a list of archives, keeping a broken
//!   archive from affecting the others.
//!
//! ## Failure scopes
//!
//! - A member that is not a mail, or has no usable `Date`, is logged and
//!   skipped. The rest of the archive is still read.
//! - An archive that cannot be opened, is not gzip, or has a corrupt tar
//!   stream is abandoned. The batch moves on to the next archive.
//! - A failure writing to the output ends the run.
//!
//! Archives are processed strictly one after another, and members in archive
//! order, so output order is deterministic.

mod batch;
mod scanner;

pub use batch::{BatchReport, scan_paths};
pub use scanner::{ArchiveScanner, ArchiveStats};
