//! In-memory storage implementation.

use crate::error::{Result, StoreError};
use crate::storage::BaseStorage;
use crate::types::{decode_record, encode_document, to_document, validate_key, Record, DEFAULT_KEY_NAME};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::marker::PhantomData;
use std::vec;
use tracing::debug;

/// Non-persistent storage keeping encoded documents in a map.
///
/// Records go through the same encoding as [`JsonFilesStorage`](super::JsonFilesStorage),
/// so a value that round-trips here round-trips on disk too.
pub struct MemoryStorage<T> {
    data: RwLock<HashMap<String, String>>,
    key_name: String,
    _record: PhantomData<fn() -> T>,
}

impl<T: Record> MemoryStorage<T> {
    pub fn new() -> Self {
        Self::with_key_name(DEFAULT_KEY_NAME)
    }

    pub fn with_key_name(key_name: impl Into<String>) -> Self {
        Self {
            data: RwLock::new(HashMap::new()),
            key_name: key_name.into(),
            _record: PhantomData,
        }
    }

    /// Number of records held.
    pub fn len(&self) -> usize {
        self.data.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.read().is_empty()
    }
}

impl<T: Record> Default for MemoryStorage<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Record> BaseStorage<T> for MemoryStorage<T> {
    type Keys = MemoryKeys;

    fn key_name(&self) -> &str {
        &self.key_name
    }

    fn put(&self, key: &str, value: &T) -> Result<()> {
        validate_key(key)?;
        debug!(key, "Writing record");

        let doc = to_document(value)?;
        let content = encode_document(&doc, false)?;
        self.data.write().insert(key.to_string(), content);
        Ok(())
    }

    fn get(&self, key: &str) -> Result<Option<T>> {
        validate_key(key)?;
        debug!(key, "Reading record");

        let data = self.data.read();
        data.get(key)
            .map(|content| decode_record(key, content.as_bytes()))
            .transpose()
    }

    fn keys(&self) -> Result<MemoryKeys> {
        let keys: Vec<String> = self.data.read().keys().cloned().collect();
        Ok(MemoryKeys(keys.into_iter()))
    }

    fn delete(&self, key: &str) -> Result<()> {
        validate_key(key)?;
        debug!(key, "Removing record");

        match self.data.write().remove(key) {
            Some(_) => Ok(()),
            None => Err(StoreError::NotFound(key.to_string())),
        }
    }

    fn contains(&self, key: &str) -> Result<bool> {
        validate_key(key)?;
        Ok(self.data.read().contains_key(key))
    }
}

/// Keys of a [`MemoryStorage`], captured when `keys()` was called.
pub struct MemoryKeys(vec::IntoIter<String>);

impl Iterator for MemoryKeys {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(Ok)
    }
}
