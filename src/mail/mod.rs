//! RFC 5322 message handling.
//!
//! - [`header`]: reads the header block of a message from a stream and checks
//!   that it is syntactically a header block
//! - [`summary`]: turns the header block into a [`MessageSummary`] using
//!   `mail-parser`, and renders it as text
//!
//! Bodies are never read; everything printed comes from the `Date`, `From`
//! and `Subject` header fields.

mod header;
mod summary;

pub use header::{MAX_HEADER_BLOCK, read_header_block, unfold};
pub use summary::{DATE_FORMAT, MessageSummary};
