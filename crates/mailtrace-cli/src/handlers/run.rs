use crate::config::Config;
use crate::views;
use anyhow::{Context, Result};
use mailtrace_extract::extract;
use mailtrace_index::Database;
use mailtrace_store::StoreClient;
use std::fs;
use std::path::Path;

/// Full pipeline pass: read, extract, stage, migrate, report.
///
/// Stages run strictly in order and each consumes the previous stage's
/// full output. Early returns cover the terminal short-circuits (missing
/// file, zero extracted records); store handles are scoped to this
/// function and released by drop on every path.
pub fn handle(data_dir: &Path, config: &Config, log_file: &Path, verbose: bool) -> Result<()> {
    // The log is read before either store is touched, so a bad path
    // aborts without any store interaction.
    let text = fs::read_to_string(log_file)
        .with_context(|| format!("Failed to read log file: {}", log_file.display()))?;

    if verbose {
        println!("Read {} bytes from {}", text.len(), log_file.display());
    }

    let records = extract(&text);
    if records.is_empty() {
        println!("No records extracted; nothing to stage.");
        return Ok(());
    }

    if verbose {
        println!("Extracted {} records", records.len());
    }

    let client = StoreClient::connect(&config.staging_root(data_dir))?;
    let collection = client
        .database(&config.staging.database)
        .collection(&config.staging.collection);

    let staged = collection.insert_many(&records)?;
    println!(
        "Staged {} records into '{}/{}'",
        staged, config.staging.database, config.staging.collection
    );

    // Migration consumes the read-back documents, not the in-memory
    // records, so earlier staged batches flow through as well.
    let documents = collection.find_all()?;
    if verbose {
        println!("Read back {} staged documents", documents.len());
    }

    let db_path = config.history_db_path(data_dir);
    let mut db = Database::open(&db_path)
        .with_context(|| format!("Failed to open history database: {}", db_path.display()))?;

    let outcome = db.migrate(&documents)?;
    for failure in &outcome.failures {
        eprintln!(
            "Warning: failed to insert record {}: {}",
            failure.document, failure.error
        );
    }
    println!(
        "Migrated {} of {} records into user_history",
        outcome.inserted, outcome.attempted
    );

    views::report::print_report(&db)
}
