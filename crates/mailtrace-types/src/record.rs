use serde::{Deserialize, Serialize};

/// One email sighting pulled out of a raw log.
///
/// `timestamp` holds the canonical `YYYY-MM-DD HH:MM:SS` form when the
/// source token parsed, otherwise the raw captured token unchanged.
/// Records are immutable once extracted; they are persisted twice
/// (staging store, then history table) without further mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogRecord {
    pub email: String,
    pub timestamp: String,
}

impl LogRecord {
    pub fn new(email: impl Into<String>, timestamp: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            timestamp: timestamp.into(),
        }
    }

    /// Domain part of the address (everything after the first `@`).
    pub fn domain(&self) -> Option<&str> {
        self.email.split_once('@').map(|(_, domain)| domain)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_split() {
        let record = LogRecord::new("bob@example.com", "2024-01-05 14:22:01");
        assert_eq!(record.domain(), Some("example.com"));
    }

    #[test]
    fn test_serde_round_trip() {
        let record = LogRecord::new("a@x.com", "2024-01-01 00:00:00");
        let json = serde_json::to_string(&record).unwrap();
        let back: LogRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }
}
