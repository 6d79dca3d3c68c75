//! Integration tests for the on-disk history database
//!
//! Everything here runs against a real SQLite file to cover reopen and
//! commit behavior that in-memory tests cannot.

use mailtrace_index::Database;
use serde_json::json;
use tempfile::TempDir;

#[test]
fn test_rows_survive_reopen() {
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("history.db");

    {
        let mut db = Database::open(&db_path).unwrap();
        let outcome = db
            .migrate(&[
                json!({ "email": "a@x.com", "timestamp": "2024-01-01 00:00:00" }),
                json!({ "email": "b@y.org", "timestamp": "2024-01-02 00:00:00" }),
            ])
            .unwrap();
        assert_eq!(outcome.inserted, 2);
    }

    let db = Database::open(&db_path).unwrap();
    assert_eq!(db.count_history().unwrap(), 2);
}

#[test]
fn test_reopen_does_not_duplicate_table_or_rows() {
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("history.db");

    {
        let db = Database::open(&db_path).unwrap();
        db.insert_history(Some("a@x.com"), Some("2024-01-01 00:00:00"))
            .unwrap();
    }

    // Second open runs the bootstrap again over the existing file.
    let db = Database::open(&db_path).unwrap();
    db.init_schema().unwrap();
    assert_eq!(db.count_history().unwrap(), 1);
}

#[test]
fn test_partial_failure_commits_surviving_rows() {
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("history.db");

    let docs: Vec<_> = (0..5)
        .map(|i| {
            if i == 2 {
                json!({ "email": null, "timestamp": format!("2024-01-0{} 00:00:00", i + 1) })
            } else {
                json!({
                    "email": format!("user{}@x.com", i),
                    "timestamp": format!("2024-01-0{} 00:00:00", i + 1),
                })
            }
        })
        .collect();

    {
        let mut db = Database::open(&db_path).unwrap();
        let outcome = db.migrate(&docs).unwrap();
        assert_eq!(outcome.inserted, 4);
        assert_eq!(outcome.failures.len(), 1);
    }

    // After the pass commits, exactly the surviving rows are on disk.
    let db = Database::open(&db_path).unwrap();
    assert_eq!(db.count_history().unwrap(), 4);
}
