use rusqlite::Connection;

use crate::Result;

/// Create the history table if it does not exist yet.
///
/// Idempotent: safe to run on every open, never drops or alters an
/// existing table.
pub fn init_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS user_history (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            email TEXT NOT NULL,
            date TEXT NOT NULL
        );
        "#,
    )?;

    Ok(())
}
