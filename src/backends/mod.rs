//! Storage backends.
//!
//! `JsonFilesStorage` persists one JSON file per key under a base
//! directory. `MemoryStorage` keeps the same encoded documents in a map
//! and is meant for tests and throwaway state.

mod json_files;
mod memory;

pub use json_files::{JsonFilesStorage, JsonKeys};
pub use memory::{MemoryKeys, MemoryStorage};
