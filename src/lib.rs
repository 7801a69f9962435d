//! # JSON Files Storage
//!
//! A generic key/value store for typed records, persisted as one JSON file
//! per key.
//!
//! ## Core Concepts
//!
//! - **Records**: any `Serialize + DeserializeOwned` type; one schema per store
//! - **Keys**: caller-chosen strings, mapped to `<base_path>/<key>.json`
//! - **Backends**: `JsonFilesStorage` on disk, `MemoryStorage` for tests
//!
//! A missing key reads back as `None`, while deleting a missing key is an
//! error. Fields holding `None` are left out of the stored document.
//!
//! ## Example
//!
//! ```no_run
//! use json_files_storage::{BaseStorage, JsonFilesStorage};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Debug, PartialEq, Serialize, Deserialize)]
//! struct Movie {
//!     id: u32,
//!     title: String,
//!     tagline: Option<String>,
//! }
//!
//! # fn main() -> json_files_storage::Result<()> {
//! let movies = JsonFilesStorage::<Movie>::new("data/movies")?;
//!
//! movies.put("heat", &Movie { id: 1, title: "Heat".into(), tagline: None })?;
//! assert!(movies.get("heat")?.is_some());
//!
//! for key in movies.keys()? {
//!     println!("{}", key?);
//! }
//!
//! movies.delete("heat")?;
//! assert!(movies.get("heat")?.is_none());
//! # Ok(())
//! # }
//! ```

pub mod backends;
pub mod config;
pub mod error;
pub mod storage;
pub mod types;

// Re-exports
pub use backends::{JsonFilesStorage, JsonKeys, MemoryKeys, MemoryStorage};
pub use config::StorageConfig;
pub use error::{Result, StoreError};
pub use storage::{BaseStorage, Values};
pub use types::{key_from_document, to_document, validate_key, Record, DEFAULT_KEY_NAME, RECORD_EXTENSION};
