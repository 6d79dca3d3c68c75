use chrono::NaiveDateTime;

/// Timestamp format as it appears in mail logs: `Jan 5 14:22:01 2024`
pub const SOURCE_FORMAT: &str = "%b %d %H:%M:%S %Y";

/// Canonical storage format, lexicographically sortable by calendar time
pub const CANONICAL_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Normalize a captured timestamp token to the canonical form.
///
/// Tokens that fail the strict parse are passed through unchanged so the
/// record still flows downstream with its raw value.
pub fn canonicalize(raw: &str) -> String {
    match NaiveDateTime::parse_from_str(raw, SOURCE_FORMAT) {
        Ok(ts) => ts.format(CANONICAL_FORMAT).to_string(),
        Err(_) => raw.to_string(),
    }
}
