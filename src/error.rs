//! Error types and their severity.
//!
//! Every failure the pipeline can hit is a [`ScanError`]. What the caller does
//! with it depends only on [`ScanError::severity`]: advisory and per-entry
//! errors are logged where they happen, per-file errors end the current
//! archive, and fatal errors end the run.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// How far a failure reaches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Nothing further can be done; the run stops.
    Fatal,
    /// The current archive is abandoned, the next one is processed.
    PerFile,
    /// The current archive member is skipped.
    PerEntry,
    /// Reported, but nothing is skipped beyond the item itself.
    Advisory,
}

/// Reasons a mail could not be read from an archive member.
#[derive(Debug, Error)]
pub enum MessageError {
    #[error("empty message")]
    Empty,

    #[error("malformed initial continuation line: {0:?}")]
    LeadingContinuation(String),

    #[error("malformed header line: {0:?}")]
    MalformedLine(String),

    #[error("header block exceeds {0} bytes")]
    TooLarge(usize),

    #[error("header block could not be parsed")]
    Unparseable,

    #[error("read error: {0}")]
    Io(#[from] io::Error),
}

/// Reasons the `Date` header could not be turned into a timestamp.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DateError {
    #[error("mail: header not in message")]
    Missing,

    #[error("mail: could not parse date {0:?}")]
    Malformed(String),
}

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("{}: {source}", .path.display())]
    Stat { path: PathBuf, source: io::Error },

    #[error("{} is a Directory", .0.display())]
    IsDirectory(PathBuf),

    #[error("could not open file: {0}")]
    Open(#[source] io::Error),

    #[error("gzip error: {0}")]
    Gzip(#[source] io::Error),

    #[error("tar error: {0}")]
    Tar(#[source] io::Error),

    #[error("message error: {0}")]
    Message(#[from] MessageError),

    #[error("date error: {0}")]
    Date(#[from] DateError),

    #[error("could not write summary: {0}")]
    Output(#[source] io::Error),

    #[error("aborting after \"{}\" failed: {source}", .path.display())]
    Aborted {
        path: PathBuf,
        #[source]
        source: Box<ScanError>,
    },
}

impl ScanError {
    pub fn severity(&self) -> Severity {
        match self {
            ScanError::Stat { .. } | ScanError::IsDirectory(_) => Severity::Advisory,
            ScanError::Open(_) | ScanError::Gzip(_) | ScanError::Tar(_) => Severity::PerFile,
            ScanError::Message(_) | ScanError::Date(_) => Severity::PerEntry,
            ScanError::Output(_) | ScanError::Aborted { .. } => Severity::Fatal,
        }
    }

    pub fn is_fatal(&self) -> bool {
        self.severity() == Severity::Fatal
    }
}
