use rusqlite::Connection;
use serde_json::Value;
use std::path::Path;

use crate::records::{DailyCount, DomainCount, EmailSpan, MigrationOutcome};
use crate::{Result, queries, schema};

pub struct Database {
    conn: Connection,
}

impl Database {
    pub fn open(db_path: &Path) -> Result<Self> {
        let conn = Connection::open(db_path)?;

        let db = Self { conn };
        db.init_schema()?;
        Ok(db)
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let db = Self { conn };
        db.init_schema()?;
        Ok(db)
    }

    pub fn init_schema(&self) -> Result<()> {
        schema::init_schema(&self.conn)
    }

    pub fn insert_history(&self, email: Option<&str>, date: Option<&str>) -> Result<()> {
        queries::history::insert(&self.conn, email, date)
    }

    /// Migrate staged documents into the history table, tolerating
    /// per-row failures. See [`queries::history::migrate`].
    pub fn migrate(&mut self, documents: &[Value]) -> Result<MigrationOutcome> {
        queries::history::migrate(&mut self.conn, documents)
    }

    pub fn count_history(&self) -> Result<usize> {
        queries::history::count(&self.conn)
    }

    pub fn distinct_emails(&self) -> Result<Vec<String>> {
        queries::aggregates::distinct_emails(&self.conn)
    }

    pub fn counts_per_day(&self) -> Result<Vec<DailyCount>> {
        queries::aggregates::counts_per_day(&self.conn)
    }

    pub fn first_last_per_email(&self) -> Result<Vec<EmailSpan>> {
        queries::aggregates::first_last_per_email(&self.conn)
    }

    pub fn counts_per_domain(&self) -> Result<Vec<DomainCount>> {
        queries::aggregates::counts_per_domain(&self.conn)
    }
}
