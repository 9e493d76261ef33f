use std::io::BufRead;

use flate2::bufread::MultiGzDecoder;

use crate::error::ScanError;

/// The two magic bytes every gzip member starts with (RFC 1952).
pub const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Gzip decompression stage.
///
/// Construction peeks at the buffered input and rejects anything that does not
/// start with a gzip header, so a plain file fails here instead of somewhere
/// inside the tar reader. Concatenated gzip members are decoded as one stream.
pub struct GzipReader;

impl GzipReader {
    pub fn new<R: BufRead>(mut reader: R) -> Result<MultiGzDecoder<R>, ScanError> {
        let head = reader.fill_buf().map_err(ScanError::Gzip)?;
        if head.is_empty() {
            return Err(ScanError::Gzip(std::io::ErrorKind::UnexpectedEof.into()));
        }
        if !has_gzip_magic(head) {
            return Err(ScanError::Gzip(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                "invalid header",
            )));
        }
        Ok(MultiGzDecoder::new(reader))
    }
}

fn has_gzip_magic(head: &[u8]) -> bool {
    match head {
        [a, b, ..] => [*a, *b] == GZIP_MAGIC,
        // A single buffered byte: judge on what we have, the decoder reports truncation
        [a] => *a == GZIP_MAGIC[0],
        [] => false,
    }
}
