//! Property tests for round-trip and enumeration behavior.

use json_files_storage::{BaseStorage, JsonFilesStorage};
use proptest::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use tempfile::TempDir;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Reading {
    sensor: String,
    value: i64,
    unit: Option<String>,
    tags: Vec<String>,
}

fn reading() -> impl Strategy<Value = Reading> {
    (
        ".{0,16}",
        any::<i64>(),
        proptest::option::of("[a-z]{1,4}"),
        proptest::collection::vec("[a-z0-9 ]{0,8}", 0..4),
    )
        .prop_map(|(sensor, value, unit, tags)| Reading {
            sensor,
            value,
            unit,
            tags,
        })
}

fn key() -> impl Strategy<Value = String> {
    "[a-z0-9_-][a-z0-9_.-]{0,15}"
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn put_then_get_returns_value(k in key(), v in reading()) {
        let dir = TempDir::new().unwrap();
        let storage = JsonFilesStorage::<Reading>::new(dir.path()).unwrap();

        storage.put(&k, &v).unwrap();
        prop_assert_eq!(storage.get(&k).unwrap(), Some(v));
    }

    #[test]
    fn last_write_wins(k in key(), v1 in reading(), v2 in reading()) {
        let dir = TempDir::new().unwrap();
        let storage = JsonFilesStorage::<Reading>::new(dir.path()).unwrap();

        storage.put(&k, &v1).unwrap();
        storage.put(&k, &v2).unwrap();
        prop_assert_eq!(storage.get(&k).unwrap(), Some(v2));
    }

    #[test]
    fn keys_match_live_records(
        writes in proptest::collection::vec((key(), reading()), 0..12),
        delete_mask in proptest::collection::vec(any::<bool>(), 12),
    ) {
        let dir = TempDir::new().unwrap();
        let storage = JsonFilesStorage::<Reading>::new(dir.path()).unwrap();

        let mut expected: HashMap<String, Reading> = HashMap::new();
        for (k, v) in &writes {
            storage.put(k, v).unwrap();
            expected.insert(k.clone(), v.clone());
        }

        let written: Vec<String> = expected.keys().cloned().collect();
        for (k, delete) in written.iter().zip(&delete_mask) {
            if *delete {
                storage.delete(k).unwrap();
                expected.remove(k);
            }
        }

        let listed: HashSet<String> = storage.keys().unwrap().map(|k| k.unwrap()).collect();
        prop_assert_eq!(listed, expected.keys().cloned().collect::<HashSet<_>>());

        for (k, v) in &expected {
            let stored = storage.get(k).unwrap();
            prop_assert_eq!(stored.as_ref(), Some(v));
        }
    }
}
