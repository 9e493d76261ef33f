//! # mailtar
//!
//! Print the date, sender and subject of every mail stored in gzip-compressed
//! tar archives.
//!
//! Each archive is decompressed and walked member by member. Every member that
//! is not a directory is read as an RFC 5322 message; only its header block is
//! parsed. For each message with a usable `Date` header a block like this is
//! written:
//!
//! ```text
//! Date Sent: 2006-01-02 15:04:05 +0000
//! Sender: alice@example.com
//! Subject: Hello
//!
//! ```
//!
//! ## Features
//!
//! - Streaming: archives are never unpacked to disk, mail bodies are never read
//! - Multi-member gzip files are decoded as one stream
//! - Broken members and broken archives are reported and skipped
//!
//! ## Example
//!
//! ```no_run
//! use mailtar::{ArchiveScanner, scan_paths, validate_paths};
//!
//! fn main() -> anyhow::Result<()> {
//!     let paths = validate_paths(["mail-2019.tar.gz", "mail-2020.tar.gz"]);
//!     let mut scanner = ArchiveScanner::new(std::io::stdout().lock());
//!     let report = scan_paths(&mut scanner, &paths, false)?;
//!     eprintln!("{} mails", report.totals.emitted);
//!     Ok(())
//! }
//! ```

pub mod archive;
pub mod cli;
pub mod error;
pub mod io;
pub mod logging;
pub mod mail;

pub use archive::{ArchiveScanner, ArchiveStats, BatchReport, scan_paths};
pub use cli::Cli;
pub use error::{DateError, MessageError, ScanError, Severity};
pub use io::{GzipReader, LocalFileReader, validate_paths};
pub use mail::MessageSummary;
