use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;
use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Identifier field attached to every stored document.
pub const ID_FIELD: &str = "_id";

/// One JSONL-backed collection: one JSON document per line.
pub struct Collection {
    path: PathBuf,
}

impl Collection {
    pub(crate) fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append every record as a stored document in a single bulk write.
    ///
    /// Each document receives a fresh `_id`. The write succeeds or fails
    /// as a unit at this layer; partial batches are not distinguished.
    pub fn insert_many<T: Serialize>(&self, records: &[T]) -> Result<usize> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create database dir {}", parent.display()))?;
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .with_context(|| format!("Failed to open collection {}", self.path.display()))?;
        let mut writer = BufWriter::new(file);

        for record in records {
            let mut doc = serde_json::to_value(record)?;
            let Value::Object(map) = &mut doc else {
                anyhow::bail!("Stored documents must serialize to JSON objects");
            };
            map.insert(
                ID_FIELD.to_string(),
                Value::String(Uuid::new_v4().to_string()),
            );

            serde_json::to_writer(&mut writer, &doc)?;
            writer.write_all(b"\n")?;
        }

        writer.flush()?;
        Ok(records.len())
    }

    /// Read back the entire collection in insertion order, `_id` stripped.
    ///
    /// A collection that was never written reads as empty.
    pub fn find_all(&self) -> Result<Vec<Value>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(&self.path)
            .with_context(|| format!("Failed to read collection {}", self.path.display()))?;
        let reader = BufReader::new(file);

        let mut documents = Vec::new();
        for line in reader.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            let mut doc: Value = serde_json::from_str(&line)
                .with_context(|| format!("Malformed document in {}", self.path.display()))?;
            if let Value::Object(map) = &mut doc {
                map.remove(ID_FIELD);
            }
            documents.push(doc);
        }

        Ok(documents)
    }

    pub fn count(&self) -> Result<usize> {
        Ok(self.find_all()?.len())
    }
}
