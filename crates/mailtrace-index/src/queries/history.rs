use rusqlite::{Connection, params};
use serde_json::Value;

use crate::Result;
use crate::records::{MigrationOutcome, RowFailure};

/// Insert one history row. Nullable bindings let the NOT NULL
/// constraints reject documents with absent or non-text fields.
pub fn insert(conn: &Connection, email: Option<&str>, date: Option<&str>) -> Result<()> {
    conn.execute(
        "INSERT INTO user_history (email, date) VALUES (?1, ?2)",
        params![email, date],
    )?;

    Ok(())
}

/// Move staged documents into `user_history`.
///
/// Each row is attempted independently: a failed insert is recorded in
/// the outcome and the loop continues. Everything that inserted is
/// committed together after the loop, so a crash mid-pass loses the
/// whole pass.
pub fn migrate(conn: &mut Connection, documents: &[Value]) -> Result<MigrationOutcome> {
    let tx = conn.transaction()?;
    let mut outcome = MigrationOutcome::new(documents.len());

    for document in documents {
        let email = document.get("email").and_then(Value::as_str);
        let date = document.get("timestamp").and_then(Value::as_str);

        let result = tx.execute(
            "INSERT INTO user_history (email, date) VALUES (?1, ?2)",
            params![email, date],
        );

        match result {
            Ok(_) => outcome.inserted += 1,
            Err(err) => outcome.failures.push(RowFailure {
                document: document.clone(),
                error: err.to_string(),
            }),
        }
    }

    tx.commit()?;
    Ok(outcome)
}

pub fn count(conn: &Connection) -> Result<usize> {
    let count: i64 = conn.query_row("SELECT COUNT(*) FROM user_history", [], |row| row.get(0))?;

    Ok(count as usize)
}
