use std::fmt;

use chrono::{DateTime, FixedOffset, NaiveDate};
use mail_parser::MessageParser;

use super::header::first_value;
use crate::error::{DateError, MessageError, ScanError};

/// Rendering of the `Date Sent:` line.
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S %z";

/// What gets printed for one mail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageSummary {
    pub date: DateTime<FixedOffset>,
    pub sender: String,
    pub subject: String,
}

impl MessageSummary {
    /// Build a summary from a raw RFC 5322 header block.
    ///
    /// `From` and `Subject` are taken verbatim from their first occurrence
    /// (unfolded, not decoded). A missing or unusable `Date` rejects the
    /// whole message.
    pub fn from_header_block(block: &[u8]) -> Result<Self, ScanError> {
        let message = MessageParser::new()
            .parse_headers(block)
            .ok_or(MessageError::Unparseable)?;

        let date = match message.date() {
            Some(date) => to_chrono(date).ok_or_else(|| {
                DateError::Malformed(first_value(block, "Date").unwrap_or_default())
            })?,
            None => {
                return Err(match first_value(block, "Date") {
                    Some(raw) => DateError::Malformed(raw),
                    None => DateError::Missing,
                }
                .into());
            }
        };

        Ok(Self {
            date,
            sender: first_value(block, "From").unwrap_or_default(),
            subject: first_value(block, "Subject").unwrap_or_default(),
        })
    }
}

/// Convert a parsed mail date into a chrono timestamp in the mail's own offset.
///
/// Returns `None` for dates that do not exist on the calendar.
fn to_chrono(date: &mail_parser::DateTime) -> Option<DateTime<FixedOffset>> {
    let offset_secs = (date.tz_hour as i32) * 3600 + (date.tz_minute as i32) * 60;
    let offset = if date.tz_before_gmt {
        FixedOffset::west_opt(offset_secs)?
    } else {
        FixedOffset::east_opt(offset_secs)?
    };
    NaiveDate::from_ymd_opt(date.year as i32, date.month as u32, date.day as u32)?
        .and_hms_opt(date.hour as u32, date.minute as u32, date.second as u32)?
        .and_local_timezone(offset)
        .single()
}

impl fmt::Display for MessageSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Date Sent: {}", self.date.format(DATE_FORMAT))?;
        writeln!(f, "Sender: {}", self.sender)?;
        writeln!(f, "Subject: {}", self.subject)?;
        writeln!(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summarize(block: &str) -> Result<MessageSummary, ScanError> {
        MessageSummary::from_header_block(block.as_bytes())
    }

    #[test]
    fn extracts_date_sender_subject() {
        let summary = summarize(
            "Date: Tue, 1 Jul 2003 10:52:37 +0200\r\n\
             From: Alice <alice@example.com>\r\n\
             Subject: Quarterly report\r\n\r\n",
        )
        .unwrap();
        assert_eq!(summary.sender, "Alice <alice@example.com>");
        assert_eq!(summary.subject, "Quarterly report");
        assert_eq!(
            summary.date.format(DATE_FORMAT).to_string(),
            "2003-07-01 10:52:37 +0200"
        );
    }

    #[test]
    fn negative_offsets_are_kept() {
        let summary = summarize("Date: Fri, 21 Nov 1997 09:55:06 -0600\n\n").unwrap();
        assert_eq!(
            summary.date.format(DATE_FORMAT).to_string(),
            "1997-11-21 09:55:06 -0600"
        );
        assert_eq!(summary.date.timestamp(), 880_127_706);
    }

    #[test]
    fn missing_from_and_subject_are_empty() {
        let summary = summarize("Date: Mon, 02 Jan 2006 15:04:05 +0000\n\n").unwrap();
        assert_eq!(summary.sender, "");
        assert_eq!(summary.subject, "");
    }

    #[test]
    fn subject_is_not_decoded() {
        let summary = summarize(
            "Date: Mon, 02 Jan 2006 15:04:05 +0000\n\
             Subject: =?utf-8?q?caf=C3=A9?=\n\n",
        )
        .unwrap();
        assert_eq!(summary.subject, "=?utf-8?q?caf=C3=A9?=");
    }

    #[test]
    fn folded_subject_is_unfolded() {
        let summary = summarize(
            "Date: Mon, 02 Jan 2006 15:04:05 +0000\n\
             Subject: a rather long\n  subject line\n\n",
        )
        .unwrap();
        assert_eq!(summary.subject, "a rather long subject line");
    }

    #[test]
    fn missing_date_is_rejected() {
        let err = summarize("From: bob@example.com\nSubject: no date\n\n").unwrap_err();
        assert!(matches!(err, ScanError::Date(DateError::Missing)));
    }

    #[test]
    fn garbage_date_is_rejected() {
        let err = summarize("Date: sometime last week\nFrom: bob@example.com\n\n").unwrap_err();
        assert!(matches!(err, ScanError::Date(_)));
    }

    #[test]
    fn impossible_calendar_date_is_rejected() {
        let err = summarize("Date: Mon, 31 Feb 2006 15:04:05 +0000\n\n").unwrap_err();
        assert!(matches!(err, ScanError::Date(DateError::Malformed(_))));
    }

    #[test]
    fn renders_summary_block() {
        let summary = summarize(
            "Date: Mon, 02 Jan 2006 15:04:05 MST\n\
             From: alice@example.com\n\
             Subject: Hello\n\n",
        )
        .unwrap();
        assert_eq!(
            summary.to_string(),
            "Date Sent: 2006-01-02 15:04:05 -0700\n\
             Sender: alice@example.com\n\
             Subject: Hello\n\n"
        );
    }

    #[test]
    fn obsolete_zone_names_map_to_offsets() {
        let summary = summarize("Date: Mon, 02 Jan 2006 10:00:00 EST\n\n").unwrap();
        assert_eq!(
            summary.date.format(DATE_FORMAT).to_string(),
            "2006-01-02 10:00:00 -0500"
        );
    }

    #[test]
    fn non_utf8_values_are_kept() {
        let block = b"Date: Mon, 02 Jan 2006 15:04:05 +0000\n\
                      From: Jos\xe9 <jose@example.com>\n\
                      Subject: caf\xe9\n\n";
        let summary = MessageSummary::from_header_block(block).unwrap();
        assert_eq!(summary.sender, "Jos\u{fffd} <jose@example.com>");
        assert_eq!(summary.subject, "caf\u{fffd}");
    }

    #[test]
    fn first_of_repeated_headers_wins() {
        let summary = summarize(
            "Date: Mon, 02 Jan 2006 15:04:05 +0000\n\
             From: first@example.com\n\
             Subject: one\n\
             From: second@example.com\n\
             Subject: two\n\n",
        )
        .unwrap();
        assert_eq!(summary.sender, "first@example.com");
        assert_eq!(summary.subject, "one");
    }
}
