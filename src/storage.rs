//! The storage contract shared by all backends.

use crate::error::Result;
use crate::types::{key_from_document, to_document, Record};
use std::marker::PhantomData;

/// Key/value persistence for records of a single schema `T`.
///
/// A read miss is soft (`Ok(None)`), a delete miss is hard
/// (`Err(StoreError::NotFound)`). Implementations hold no cache; every call
/// goes to the backing medium.
pub trait BaseStorage<T: Record> {
    /// Iterator returned by [`keys`](BaseStorage::keys).
    type Keys: Iterator<Item = Result<String>>;

    /// Name of the record field used as key by [`put_record`](BaseStorage::put_record).
    fn key_name(&self) -> &str;

    /// Persist `value` under `key`, replacing any previous record.
    fn put(&self, key: &str, value: &T) -> Result<()>;

    /// Load the record stored under `key`.
    ///
    /// Returns `None` if the key doesn't exist. Malformed content is an error.
    fn get(&self, key: &str) -> Result<Option<T>>;

    /// List every key currently persisted.
    ///
    /// Each call re-reads the backing medium. No ordering is guaranteed, and
    /// writes made while iterating may or may not show up.
    fn keys(&self) -> Result<Self::Keys>;

    /// Remove the record stored under `key`.
    ///
    /// Fails with `StoreError::NotFound` if there is none.
    fn delete(&self, key: &str) -> Result<()>;

    /// Check whether a record exists under `key`.
    fn contains(&self, key: &str) -> Result<bool> {
        Ok(self.get(key)?.is_some())
    }

    /// Persist `value` under the key read from its `key_name` field.
    ///
    /// Returns the derived key.
    fn put_record(&self, value: &T) -> Result<String> {
        let doc = to_document(value)?;
        let key = key_from_document(&doc, self.key_name())?;
        self.put(&key, value)?;
        Ok(key)
    }

    /// Iterate over `(key, record)` pairs.
    ///
    /// Keys that disappear between listing and reading are skipped.
    fn values(&self) -> Result<Values<'_, Self, T>>
    where
        Self: Sized,
    {
        Ok(Values {
            storage: self,
            keys: self.keys()?,
            _record: PhantomData,
        })
    }
}

/// Iterator over the records of a store, see [`BaseStorage::values`].
pub struct Values<'a, S, T>
where
    S: BaseStorage<T>,
    T: Record,
{
    storage: &'a S,
    keys: S::Keys,
    _record: PhantomData<fn() -> T>,
}

impl<S, T> Iterator for Values<'_, S, T>
where
    S: BaseStorage<T>,
    T: Record,
{
    type Item = Result<(String, T)>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let key = match self.keys.next()? {
                Ok(key) => key,
                Err(e) => return Some(Err(e)),
            };

            match self.storage.get(&key) {
                Ok(Some(value)) => return Some(Ok((key, value))),
                Ok(None) => continue,
                Err(e) => return Some(Err(e)),
            }
        }
    }
}
