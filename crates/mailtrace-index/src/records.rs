use serde_json::Value;

/// Result of one migration pass over the staged documents.
///
/// Failures are collected, not raised: a bad row never blocks the rest
/// of the batch. Rows that did insert are committed together at the end
/// of the pass.
#[derive(Debug)]
pub struct MigrationOutcome {
    /// Documents the pass attempted to insert.
    pub attempted: usize,
    /// Rows that inserted and were committed.
    pub inserted: usize,
    /// Rows that failed, with the offending document for reporting.
    pub failures: Vec<RowFailure>,
}

impl MigrationOutcome {
    pub(crate) fn new(attempted: usize) -> Self {
        Self {
            attempted,
            inserted: 0,
            failures: Vec::new(),
        }
    }
}

/// A single row that failed to insert.
#[derive(Debug, Clone)]
pub struct RowFailure {
    /// The staged document as read back from the collection.
    pub document: Value,
    /// Error text from the storage engine.
    pub error: String,
}

/// Per-calendar-day record count.
#[derive(Debug, Clone)]
pub struct DailyCount {
    /// `YYYY-MM-DD`, or None when the stored date never canonicalized
    /// and `DATE()` could not interpret it.
    pub day: Option<String>,
    pub count: i64,
}

/// First and last sighting per address.
///
/// Min/max are lexicographic over the stored strings. That matches
/// calendar order for canonical timestamps only; rows holding raw
/// fallback strings compare as text.
#[derive(Debug, Clone)]
pub struct EmailSpan {
    pub email: String,
    pub first: String,
    pub last: String,
}

/// Per-domain total count.
#[derive(Debug, Clone)]
pub struct DomainCount {
    /// Substring after `@` as stored.
    pub domain: String,
    pub count: i64,
}
