//! Test fixture loader for Base120 catalogs and scenario data.
//!
//! Provides typed deserialization of fixture JSON files and helpers for
//! loading them in tests across crates.

use serde::de::DeserializeOwned;
use std::path::PathBuf;

use base120_core::MentalModel;

/// Root directory of the fixtures folder inside this crate.
fn fixtures_root() -> PathBuf {
    // Works from any crate in the workspace: walk up to find test-fixtures.
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    while !path.join("crates/test-fixtures/fixtures").exists() {
        if !path.pop() {
            panic!(
                "Could not find test-fixtures/fixtures from CARGO_MANIFEST_DIR={}",
                manifest_dir
            );
        }
    }
    path.join("crates/test-fixtures/fixtures")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Load a fixture file as a raw JSON value.
pub fn load_fixture_value(relative_path: &str) -> serde_json::Value {
    load_fixture(relative_path)
}

/// The 30-model sample catalog: 5 models per transformation, priorities 1–5,
/// in canonical catalog order (P, IN, CO, DE, RE, SY).
pub fn sample_catalog() -> Vec<MentalModel> {
    load_fixture("catalog.json")
}
