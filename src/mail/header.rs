//! Reading the header block of an RFC 5322 message.
//!
//! Only the header block is consumed from the entry stream. Reading stops at
//! the first empty line, so mail bodies are never read.

use std::io::BufRead;

use crate::error::MessageError;

/// Upper bound for a header block; anything larger is not a mail we can summarize.
pub const MAX_HEADER_BLOCK: usize = 1 << 20;

/// Read the header block from `reader`, including the terminating empty line
/// if there is one.
pub fn read_header_block<R: BufRead>(mut reader: R) -> Result<Vec<u8>, MessageError> {
    let mut block = Vec::new();
    let mut line = Vec::new();
    let mut first = true;

    loop {
        line.clear();
        let n = reader.read_until(b'\n', &mut line)?;
        if n == 0 {
            break;
        }

        let text = trim_line_ending(&line);
        if text.is_empty() {
            // A lone blank line with nothing after it is not a message.
            if first && is_eof(&mut reader)? {
                return Err(MessageError::Empty);
            }
            block.extend_from_slice(&line);
            return Ok(block);
        }

        validate_line(text, first)?;
        first = false;

        if block.len() + line.len() > MAX_HEADER_BLOCK {
            return Err(MessageError::TooLarge(MAX_HEADER_BLOCK));
        }
        block.extend_from_slice(&line);
    }

    if block.is_empty() {
        return Err(MessageError::Empty);
    }
    Ok(block)
}

fn is_eof<R: BufRead>(reader: &mut R) -> std::io::Result<bool> {
    Ok(reader.fill_buf()?.is_empty())
}

fn trim_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

fn validate_line(line: &[u8], first: bool) -> Result<(), MessageError> {
    if matches!(line.first(), Some(b' ' | b'\t')) {
        if first {
            return Err(MessageError::LeadingContinuation(lossy(line)));
        }
        return Ok(());
    }

    let Some(colon) = line.iter().position(|&b| b == b':') else {
        return Err(MessageError::MalformedLine(lossy(line)));
    };
    let name = &line[..colon];
    if name.is_empty() || !name.iter().all(|&b| (33..=126).contains(&b)) {
        return Err(MessageError::MalformedLine(lossy(line)));
    }
    Ok(())
}

fn lossy(line: &[u8]) -> String {
    String::from_utf8_lossy(line).into_owned()
}

/// Raw value of the first header field called `name` (case-insensitive),
/// unfolded. Bytes that are not UTF-8 are replaced, never dropped.
pub fn first_value(block: &[u8], name: &str) -> Option<String> {
    let mut value: Option<Vec<u8>> = None;

    for line in block.split_inclusive(|&b| b == b'\n') {
        let text = trim_line_ending(line);
        if text.is_empty() {
            break;
        }
        if matches!(text.first(), Some(b' ' | b'\t')) {
            if let Some(value) = value.as_mut() {
                value.push(b'\n');
                value.extend_from_slice(text);
            }
            continue;
        }
        if value.is_some() {
            break;
        }
        if let Some(colon) = text.iter().position(|&b| b == b':') {
            if text[..colon].eq_ignore_ascii_case(name.as_bytes()) {
                value = Some(text[colon + 1..].to_vec());
            }
        }
    }

    value.map(|raw| unfold(&String::from_utf8_lossy(&raw)))
}

/// Unfold a raw header value: continuation lines are joined with a single
/// space and surrounding whitespace is dropped.
pub fn unfold(raw: &str) -> String {
    raw.lines()
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
