//! Test fixture loader for the ICD-10 sample data and golden search scenarios.
//!
//! Fixture files live next to this crate: `icd/` holds ingestion input,
//! `golden/` holds expected search and lookup outcomes.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::path::PathBuf;

/// Sample ingestion file: category rows first, then their subcodes.
pub const SAMPLE_CODES_CSV: &str = "icd/sample_codes.csv";

/// Same rows as [`SAMPLE_CODES_CSV`] but every subcode precedes its category row.
pub const REVERSED_CODES_CSV: &str = "icd/reversed_codes.csv";

/// Root directory of the fixtures.
fn fixtures_root() -> PathBuf {
    // Works from any crate in the workspace: walk up until the fixture data is found.
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    loop {
        if path.join("icd").is_dir() && path.join("golden").is_dir() {
            return path;
        }
        let candidate = path.join("test-fixtures");
        if candidate.join("icd").is_dir() {
            return candidate;
        }
        if !path.pop() {
            panic!(
                "Could not find test-fixtures directory from CARGO_MANIFEST_DIR={}",
                manifest_dir
            );
        }
    }
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

/// Load a fixture file as raw JSON Value.
pub fn load_fixture_value(relative_path: &str) -> serde_json::Value {
    load_fixture(relative_path)
}

/// Get the absolute path to a fixture file.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}

/// One golden free-text search case.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchScenario {
    pub name: String,
    pub query: String,
    /// Expected first result, when the case pins one.
    #[serde(default)]
    pub first: Option<String>,
    /// Codes that must appear in the results.
    #[serde(default)]
    pub includes: Vec<String>,
    /// Codes that must not appear in the results.
    #[serde(default)]
    pub excludes: Vec<String>,
    /// Terms the expansion must produce.
    #[serde(default)]
    pub expanded_terms: Vec<String>,
    /// Expected result size, when the case pins one.
    #[serde(default)]
    pub count: Option<usize>,
}

/// One golden lookup case.
#[derive(Debug, Clone, Deserialize)]
pub struct LookupScenario {
    pub code: String,
    pub found: bool,
    #[serde(default)]
    pub display_code: Option<String>,
    #[serde(default)]
    pub category_name: Option<String>,
    #[serde(default)]
    pub parents: Vec<String>,
    #[serde(default)]
    pub children: Vec<String>,
}

pub fn search_scenarios() -> Vec<SearchScenario> {
    load_fixture("golden/search_scenarios.json")
}

pub fn lookup_scenarios() -> Vec<LookupScenario> {
    load_fixture("golden/lookup_scenarios.json")
}
