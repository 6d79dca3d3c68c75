use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::collection::Collection;

/// Handle on a staging store root directory.
///
/// Addressing follows database + collection naming: a database is a
/// directory under the root, a collection is a JSONL file inside it.
pub struct StoreClient {
    root: PathBuf,
}

impl StoreClient {
    /// Open the staging root, creating it if absent.
    ///
    /// Failure here aborts the whole batch; there is no retry.
    pub fn connect(root: &Path) -> Result<Self> {
        fs::create_dir_all(root)
            .with_context(|| format!("Failed to open staging store at {}", root.display()))?;

        Ok(Self {
            root: root.to_path_buf(),
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn database(&self, name: &str) -> DocDatabase {
        DocDatabase {
            path: self.root.join(name),
        }
    }
}

/// A named database: one directory of collections under the store root.
pub struct DocDatabase {
    path: PathBuf,
}

impl DocDatabase {
    pub fn collection(&self, name: &str) -> Collection {
        Collection::new(self.path.join(format!("{name}.jsonl")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_connect_creates_root() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join("staging");

        let client = StoreClient::connect(&root).unwrap();
        assert!(root.is_dir());
        assert_eq!(client.root(), root);
    }

    #[test]
    fn test_collection_addressing() {
        let dir = TempDir::new().unwrap();
        let client = StoreClient::connect(dir.path()).unwrap();

        let collection = client.database("maillogs").collection("user_activity");
        assert_eq!(
            collection.path(),
            dir.path().join("maillogs").join("user_activity.jsonl")
        );
    }
}
