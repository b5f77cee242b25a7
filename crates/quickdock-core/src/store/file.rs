//! File-backed settings store with atomic writes.
//!
//! The settings document is a flat JSON object (string keys to string
//! values), so several engine instances can share one file, each bound
//! to its own key. Writes go to a temp file with a unique PID+TID
//! suffix, are flushed and synced, then renamed over the target.

use crate::config::DockConfig;
use crate::error::{DockError, Result};
use crate::platform;
use crate::store::TargetStore;
use serde_json::{Map, Value};
use std::fs::{self, File, OpenOptions};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use std::process;
use std::thread;
use tracing::debug;

/// Store adapter bound to one key of a JSON settings document on disk.
pub struct FileStore {
    path: PathBuf,
    key: String,
}

impl FileStore {
    /// Create a store for `key` inside the document at `path`.
    ///
    /// The file and its parent directories are created on first write;
    /// a missing file reads as an absent value.
    pub fn new(path: impl Into<PathBuf>, key: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            key: key.into(),
        }
    }

    /// Store for the standard settings key at the platform settings path.
    pub fn at_default_location() -> Result<Self> {
        Ok(Self::new(platform::settings_path()?, DockConfig::SETTINGS_KEY))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    fn read_document(&self) -> Result<Map<String, Value>> {
        if !self.path.exists() {
            return Ok(Map::new());
        }

        let mut file =
            File::open(&self.path).map_err(|e| DockError::io_with_path(e, &self.path))?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)
            .map_err(|e| DockError::io_with_path(e, &self.path))?;

        if contents.trim().is_empty() {
            return Ok(Map::new());
        }

        let document: Value = serde_json::from_str(&contents).map_err(|e| DockError::Json {
            message: format!("Failed to parse {}: {}", self.path.display(), e),
            source: Some(e),
        })?;

        match document {
            Value::Object(map) => Ok(map),
            _ => Err(DockError::Json {
                message: format!("{} is not a JSON object", self.path.display()),
                source: None,
            }),
        }
    }

    fn write_document(&self, document: &Map<String, Value>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| DockError::Io {
                    message: format!("Failed to create directory {}", parent.display()),
                    path: Some(parent.to_path_buf()),
                    source: Some(e),
                })?;
            }
        }

        // Unique temp file name so concurrent writers never collide
        let pid = process::id();
        let tid = thread_id();
        let temp_path = self.path.with_extension(format!("json.{}.{}.tmp", pid, tid));

        let serialized = serde_json::to_string_pretty(document).map_err(|e| DockError::Json {
            message: format!("Failed to serialize settings document: {}", e),
            source: Some(e),
        })?;

        {
            let mut file = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .open(&temp_path)
                .map_err(|e| DockError::io_with_path(e, &temp_path))?;

            file.write_all(serialized.as_bytes())
                .map_err(|e| DockError::io_with_path(e, &temp_path))?;
            file.flush()
                .map_err(|e| DockError::io_with_path(e, &temp_path))?;
            // Data must reach disk before the rename makes it visible
            file.sync_all()
                .map_err(|e| DockError::io_with_path(e, &temp_path))?;
        }

        fs::rename(&temp_path, &self.path).map_err(|e| DockError::Io {
            message: format!(
                "Failed to rename {} to {}",
                temp_path.display(),
                self.path.display()
            ),
            path: Some(self.path.clone()),
            source: Some(e),
        })?;

        debug!("Atomically wrote {}", self.path.display());
        Ok(())
    }
}

impl TargetStore for FileStore {
    fn read(&self) -> Result<Option<String>> {
        let document = self.read_document()?;
        match document.get(&self.key) {
            Some(Value::String(value)) => Ok(Some(value.clone())),
            Some(other) => Err(DockError::Json {
                message: format!(
                    "key '{}' in {} is not a string: {}",
                    self.key,
                    self.path.display(),
                    other
                ),
                source: None,
            }),
            None => Ok(None),
        }
    }

    fn write(&self, value: &str) -> Result<()> {
        let mut document = self.read_document()?;
        document.insert(self.key.clone(), Value::String(value.to_string()));
        self.write_document(&document)
    }
}

/// Get a unique thread identifier.
fn thread_id() -> u64 {
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};
    let mut hasher = DefaultHasher::new();
    format!("{:?}", thread::current().id()).hash(&mut hasher);
    hasher.finish()
}
