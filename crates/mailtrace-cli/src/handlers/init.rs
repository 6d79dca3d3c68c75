use crate::config::Config;
use anyhow::Result;
use std::path::Path;

pub fn handle(data_dir: &Path) -> Result<()> {
    let config_path = data_dir.join("config.toml");

    if config_path.exists() {
        println!("Config already exists: {}", config_path.display());
        return Ok(());
    }

    Config::default().save_to(&config_path)?;
    println!("Wrote default config: {}", config_path.display());
    Ok(())
}
