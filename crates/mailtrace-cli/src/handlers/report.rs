use crate::config::Config;
use crate::views;
use anyhow::Result;
use mailtrace_index::Database;
use std::path::Path;

pub fn handle(data_dir: &Path, config: &Config) -> Result<()> {
    let db_path = config.history_db_path(data_dir);
    if !db_path.exists() {
        anyhow::bail!(
            "No history database at {} (run `mailtrace run <LOG_FILE>` first)",
            db_path.display()
        );
    }

    let db = Database::open(&db_path)?;
    views::report::print_report(&db)
}
