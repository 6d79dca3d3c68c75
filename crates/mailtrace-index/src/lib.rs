// SQLite history index
// Durable, query-able destination for staged log records

mod db;
mod error;
mod queries;
mod records;
mod schema;

// Public API
pub use db::Database;
pub use error::{Error, Result};
pub use records::{DailyCount, DomainCount, EmailSpan, MigrationOutcome, RowFailure};
