use assert_cmd::Command;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub struct TestFixture {
    _temp_dir: TempDir,
    data_dir: PathBuf,
    log_dir: PathBuf,
}

impl TestFixture {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_dir = temp_dir.path().join(".mailtrace");
        let log_dir = temp_dir.path().join("logs");

        fs::create_dir_all(&data_dir).expect("Failed to create data dir");
        fs::create_dir_all(&log_dir).expect("Failed to create log dir");

        Self {
            _temp_dir: temp_dir,
            data_dir,
            log_dir,
        }
    }

    pub fn data_dir(&self) -> &PathBuf {
        &self.data_dir
    }

    pub fn write_log(&self, name: &str, content: &str) -> PathBuf {
        let path = self.log_dir.join(name);
        fs::write(&path, content).expect("Failed to write log file");
        path
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("mailtrace").expect("Failed to find mailtrace binary");
        cmd.arg("--data-dir").arg(self.data_dir());
        cmd
    }

    pub fn staging_root(&self) -> PathBuf {
        self.data_dir.join("staging")
    }

    pub fn collection_path(&self) -> PathBuf {
        self.staging_root()
            .join("maillogs")
            .join("user_activity.jsonl")
    }

    pub fn history_db(&self) -> PathBuf {
        self.data_dir.join("history.db")
    }
}
