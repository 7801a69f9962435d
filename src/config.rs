//! Storage configuration.

use crate::types::DEFAULT_KEY_NAME;
use serde::Deserialize;
use std::path::PathBuf;

/// Configuration for a [`JsonFilesStorage`](crate::JsonFilesStorage).
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory holding one `<key>.json` file per record.
    pub base_path: PathBuf,

    /// Record field used as key by `put_record`.
    /// Default: "id"
    pub key_name: String,

    /// Whether to create the base path if it doesn't exist.
    pub create_if_missing: bool,

    /// Write indented JSON (two spaces) instead of a single line.
    pub pretty: bool,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            base_path: PathBuf::from("data"),
            key_name: DEFAULT_KEY_NAME.to_string(),
            create_if_missing: true,
            pretty: true,
        }
    }
}

impl StorageConfig {
    /// Default configuration rooted at `base_path`.
    pub fn at(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = StorageConfig::default();
        assert_eq!(config.base_path, PathBuf::from("data"));
        assert_eq!(config.key_name, "id");
        assert!(config.create_if_missing);
        assert!(config.pretty);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: StorageConfig =
            serde_json::from_str(r#"{"base_path": "/srv/movies", "key_name": "slug"}"#).unwrap();
        assert_eq!(config.base_path, PathBuf::from("/srv/movies"));
        assert_eq!(config.key_name, "slug");
        assert!(config.create_if_missing);
    }
}
