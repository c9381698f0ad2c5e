use serde::{Deserialize, Serialize};

/// One row handed to the store by ingestion. Keys are `full_code` and `category_name`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeEntry {
    pub category_name: String,
    /// 3-character class prefix, e.g. `A00`.
    pub category_code: String,
    pub subcategory: Option<String>,
    /// Canonical code without separators, e.g. `A001`.
    pub full_code: String,
    pub short_desc: String,
    pub long_desc: String,
}

impl CodeEntry {
    pub fn new(
        category_name: impl Into<String>,
        category_code: impl Into<String>,
        subcategory: Option<&str>,
        full_code: impl Into<String>,
        short_desc: impl Into<String>,
        long_desc: impl Into<String>,
    ) -> Self {
        Self {
            category_name: category_name.into(),
            category_code: category_code.into(),
            subcategory: subcategory.map(str::to_string),
            full_code: full_code.into(),
            short_desc: short_desc.into(),
            long_desc: long_desc.into(),
        }
    }
}

/// A Code node as stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IcdCode {
    pub code: String,
    pub category_code: String,
    pub subcategory: Option<String>,
    pub short_desc: String,
    pub long_desc: String,
}

/// A Code node plus the name of the Category it belongs to, when the store has one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeRecord {
    pub code: IcdCode,
    pub category_name: Option<String>,
}

/// Result of a lookup by code: the record and its immediate hierarchy neighbours.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeDetails {
    pub record: CodeRecord,
    /// Codes one `HAS_SUBCATEGORY` hop above, sorted ascending.
    pub parents: Vec<String>,
    /// Codes one `HAS_SUBCATEGORY` hop below, sorted ascending.
    pub children: Vec<String>,
}
