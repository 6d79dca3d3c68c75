use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Staging store addressing: database + collection under the staging root
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StagingConfig {
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default = "default_collection")]
    pub collection: String,
}

impl Default for StagingConfig {
    fn default() -> Self {
        Self {
            database: default_database(),
            collection: default_collection(),
        }
    }
}

/// History database settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryConfig {
    /// SQLite file name, resolved against the data dir
    #[serde(default = "default_db_file")]
    pub db_file: String,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            db_file: default_db_file(),
        }
    }
}

/// Main configuration for mailtrace
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub staging: StagingConfig,
    #[serde(default)]
    pub history: HistoryConfig,
}

impl Config {
    /// Load config from a specific path, falling back to defaults when
    /// the file does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save config to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Root directory of the staging store
    pub fn staging_root(&self, data_dir: &Path) -> PathBuf {
        data_dir.join("staging")
    }

    /// Path of the SQLite history database
    pub fn history_db_path(&self, data_dir: &Path) -> PathBuf {
        data_dir.join(&self.history.db_file)
    }
}

fn default_database() -> String {
    "maillogs".to_string()
}

fn default_collection() -> String {
    "user_activity".to_string()
}

fn default_db_file() -> String {
    "history.db".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_loads_defaults() {
        let dir = TempDir::new().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();

        assert_eq!(config.staging.database, "maillogs");
        assert_eq!(config.staging.collection, "user_activity");
        assert_eq!(config.history.db_file, "history.db");
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.toml");

        let mut config = Config::default();
        config.staging.collection = "logins".to_string();
        config.save_to(&config_path).unwrap();

        let loaded = Config::load_from(&config_path).unwrap();
        assert_eq!(loaded.staging.collection, "logins");
        assert_eq!(loaded.staging.database, "maillogs");
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.toml");
        std::fs::write(&config_path, "[staging]\ndatabase = \"other\"\n").unwrap();

        let config = Config::load_from(&config_path).unwrap();
        assert_eq!(config.staging.database, "other");
        assert_eq!(config.staging.collection, "user_activity");
        assert_eq!(config.history.db_file, "history.db");
    }

    #[test]
    fn test_paths_resolve_against_data_dir() {
        let config = Config::default();
        let data_dir = Path::new("/tmp/mailtrace-data");

        assert_eq!(
            config.staging_root(data_dir),
            Path::new("/tmp/mailtrace-data/staging")
        );
        assert_eq!(
            config.history_db_path(data_dir),
            Path::new("/tmp/mailtrace-data/history.db")
        );
    }
}
