//! Core types for the record store.

use crate::error::{Result, StoreError};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

/// File extension used for persisted records.
pub const RECORD_EXTENSION: &str = "json";

/// Default name of the record field used as key.
pub const DEFAULT_KEY_NAME: &str = "id";

/// A value a store can persist.
///
/// Field naming follows the type's serde attributes, so `rename`,
/// `rename_all` and `alias` declared on the schema are honored on both
/// the write and read paths.
pub trait Record: Serialize + DeserializeOwned {}

impl<T: Serialize + DeserializeOwned> Record for T {}

/// Check that a key can be mapped to a single file directly under the
/// base path.
pub fn validate_key(key: &str) -> Result<()> {
    if key.is_empty()
        || key == "."
        || key == ".."
        || key.contains('/')
        || key.contains('\\')
        || key.contains('\0')
    {
        return Err(StoreError::InvalidKey(key.to_string()));
    }
    Ok(())
}

/// Serialize a record into its stored JSON document.
///
/// Object fields holding `null` are dropped, at every nesting level.
/// Array elements are kept as-is.
pub fn to_document<T: Serialize>(value: &T) -> Result<Value> {
    let mut doc = serde_json::to_value(value)?;
    strip_nulls(&mut doc);
    Ok(doc)
}

/// Render a document as stored text.
pub(crate) fn encode_document(doc: &Value, pretty: bool) -> Result<String> {
    let text = if pretty {
        serde_json::to_string_pretty(doc)?
    } else {
        serde_json::to_string(doc)?
    };
    Ok(text)
}

/// Decode stored text back into a record.
pub(crate) fn decode_record<T: Record>(key: &str, bytes: &[u8]) -> Result<T> {
    serde_json::from_slice(bytes).map_err(|e| StoreError::deserialization(key, e))
}

/// Read the key out of a document's `field`.
///
/// Strings are used verbatim and integers in their decimal form.
pub fn key_from_document(doc: &Value, field: &str) -> Result<String> {
    let missing = || StoreError::MissingKeyField {
        field: field.to_string(),
    };

    match doc.get(field).ok_or_else(missing)? {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) if n.is_i64() || n.is_u64() => Ok(n.to_string()),
        _ => Err(missing()),
    }
}

fn strip_nulls(value: &mut Value) {
    match value {
        Value::Object(map) => {
            map.retain(|_, v| !v.is_null());
            map.values_mut().for_each(strip_nulls);
        }
        Value::Array(items) => items.iter_mut().for_each(strip_nulls),
        _ => {}
    }
}
