use mailtrace_types::LogRecord;
use regex::Regex;
use std::sync::LazyLock;

use crate::timestamp;

/// Email token: local part, `@`, dotted domain, TLD of two or more letters
static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").unwrap());

/// Timestamp token: 3-letter month, 1-2 digit day, HH:MM:SS, 4-digit year
static TIMESTAMP_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[A-Za-z]{3} \d{1,2} \d{2}:\d{2}:\d{2} \d{4}\b").unwrap());

/// Lazy scan over raw log text yielding paired (email, timestamp) records.
///
/// Pairing is one-shot closest-forward: the next email at or after the
/// cursor pairs with the first timestamp after it, and the whole span is
/// consumed. An email with no timestamp following it never produces a
/// record; anything inside a consumed span (including other emails) is
/// skipped. Duplicate pairs in the source yield duplicate records.
///
/// The scanner holds only a cursor into borrowed text; constructing a new
/// one restarts the scan from the top.
pub struct RecordScanner<'a> {
    text: &'a str,
    cursor: usize,
}

impl<'a> RecordScanner<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text, cursor: 0 }
    }
}

impl Iterator for RecordScanner<'_> {
    type Item = LogRecord;

    fn next(&mut self) -> Option<LogRecord> {
        let email = EMAIL_REGEX.find_at(self.text, self.cursor)?;
        // No timestamp after this email means no pair for it, and none for
        // any later email either.
        let stamp = TIMESTAMP_REGEX.find_at(self.text, email.end())?;
        self.cursor = stamp.end();

        Some(LogRecord::new(
            email.as_str(),
            timestamp::canonicalize(stamp.as_str()),
        ))
    }
}

/// Run a full scan and collect every record in match order.
pub fn extract(text: &str) -> Vec<LogRecord> {
    RecordScanner::new(text).collect()
}
