//! JSON file storage implementation.

use crate::config::StorageConfig;
use crate::error::{Result, StoreError};
use crate::storage::BaseStorage;
use crate::types::{decode_record, encode_document, to_document, validate_key, Record, RECORD_EXTENSION};
use std::fs::{self, ReadDir};
use std::io::{ErrorKind, Write};
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use tempfile::Builder;
use tracing::{debug, warn};

/// Stores each record as `<base_path>/<key>.json`.
pub struct JsonFilesStorage<T> {
    /// Directory holding the record files.
    path: PathBuf,

    /// Record field used as key by `put_record`.
    key_name: String,

    /// Write indented JSON.
    pretty: bool,

    _record: PhantomData<fn() -> T>,
}

impl<T> Clone for JsonFilesStorage<T> {
    fn clone(&self) -> Self {
        Self {
            path: self.path.clone(),
            key_name: self.key_name.clone(),
            pretty: self.pretty,
            _record: PhantomData,
        }
    }
}

impl<T: Record> JsonFilesStorage<T> {
    /// Open a storage at `base_path` with the default configuration,
    /// creating the directory if needed.
    pub fn new(base_path: impl Into<PathBuf>) -> Result<Self> {
        Self::with_config(StorageConfig::at(base_path))
    }

    /// Open a storage from an explicit configuration.
    pub fn with_config(config: StorageConfig) -> Result<Self> {
        let StorageConfig {
            base_path,
            key_name,
            create_if_missing,
            pretty,
        } = config;

        match fs::metadata(&base_path) {
            Ok(meta) if meta.is_dir() => {}
            Ok(_) => {
                return Err(StoreError::InvalidFormat(format!(
                    "{} is not a directory",
                    base_path.display()
                )));
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                if !create_if_missing {
                    return Err(StoreError::NotInitialized);
                }
                fs::create_dir_all(&base_path)?;
                debug!(path = %base_path.display(), "Created storage directory");
            }
            Err(e) => return Err(StoreError::Io(e)),
        }

        Ok(Self {
            path: base_path,
            key_name,
            pretty,
            _record: PhantomData,
        })
    }

    /// Base directory of this storage.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File a record with `key` is stored in.
    pub fn path_for(&self, key: &str) -> Result<PathBuf> {
        validate_key(key)?;
        Ok(self.path.join(format!("{key}.{RECORD_EXTENSION}")))
    }
}

impl<T: Record> BaseStorage<T> for JsonFilesStorage<T> {
    type Keys = JsonKeys;

    fn key_name(&self) -> &str {
        &self.key_name
    }

    fn put(&self, key: &str, value: &T) -> Result<()> {
        let path = self.path_for(key)?;
        debug!(key, path = %path.display(), "Writing record");

        let doc = to_document(value)?;
        let content = encode_document(&doc, self.pretty)?;

        // Each write gets its own temp file, removed on drop if never persisted.
        // Readers see either the previous record or the complete new one.
        let mut temp = Builder::new()
            .prefix(".")
            .suffix(&format!(".{RECORD_EXTENSION}.tmp"))
            .tempfile_in(&self.path)?;
        temp.write_all(content.as_bytes())?;
        temp.persist(&path).map_err(|e| StoreError::Io(e.error))?;

        Ok(())
    }

    fn get(&self, key: &str) -> Result<Option<T>> {
        let path = self.path_for(key)?;
        debug!(key, path = %path.display(), "Reading record");

        match fs::read(&path) {
            Ok(content) => decode_record(key, &content).map(Some),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::Io(e)),
        }
    }

    fn keys(&self) -> Result<JsonKeys> {
        debug!(path = %self.path.display(), "Listing records");
        Ok(JsonKeys {
            entries: fs::read_dir(&self.path)?,
        })
    }

    fn delete(&self, key: &str) -> Result<()> {
        let path = self.path_for(key)?;
        debug!(key, path = %path.display(), "Removing record");

        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Err(StoreError::NotFound(key.to_string())),
            Err(e) => Err(StoreError::Io(e)),
        }
    }

    fn contains(&self, key: &str) -> Result<bool> {
        match fs::metadata(self.path_for(key)?) {
            Ok(meta) => Ok(meta.is_file()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(StoreError::Io(e)),
        }
    }
}

/// Keys of a [`JsonFilesStorage`], read lazily from its directory.
pub struct JsonKeys {
    entries: ReadDir,
}

impl Iterator for JsonKeys {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let entry = match self.entries.next()? {
                Ok(entry) => entry,
                Err(e) => return Some(Err(StoreError::Io(e))),
            };

            match entry.file_type() {
                Ok(ft) if ft.is_dir() => continue,
                Ok(_) => {}
                Err(e) => return Some(Err(StoreError::Io(e))),
            }

            let name = match entry.file_name().into_string() {
                Ok(name) => name,
                Err(raw) => {
                    warn!(name = ?raw, "Skipping non UTF-8 entry");
                    continue;
                }
            };

            let stem = name
                .strip_suffix(RECORD_EXTENSION)
                .and_then(|s| s.strip_suffix('.'));
            match stem {
                Some(key) if !key.is_empty() => return Some(Ok(key.to_string())),
                _ => continue,
            }
        }
    }
}
