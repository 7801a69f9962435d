//! Error types for the record store.

use thiserror::Error;

/// Main error type for store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Key not found: {0}")]
    NotFound(String),

    #[error("Invalid key: {0:?}")]
    InvalidKey(String),

    #[error("Record has no usable key field: {field}")]
    MissingKeyField { field: String },

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error for key {key:?}: {message}")]
    Deserialization { key: String, message: String },

    #[error("Store not initialized")]
    NotInitialized,

    #[error("Invalid store format: {0}")]
    InvalidFormat(String),
}

impl StoreError {
    pub(crate) fn deserialization(key: &str, e: serde_json::Error) -> Self {
        StoreError::Deserialization {
            key: key.to_string(),
            message: e.to_string(),
        }
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        StoreError::Serialization(e.to_string())
    }
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_names_key() {
        let err = StoreError::NotFound("movie-42".into());
        assert_eq!(err.to_string(), "Key not found: movie-42");
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = StoreError::from(io);
        assert!(matches!(err, StoreError::Io(_)));
        assert!(err.to_string().contains("denied"));
    }

    #[test]
    fn test_deserialization_keeps_key() {
        let json_err = serde_json::from_str::<u32>("nope").unwrap_err();
        let err = StoreError::deserialization("broken", json_err);
        match err {
            StoreError::Deserialization { key, .. } => assert_eq!(key, "broken"),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
