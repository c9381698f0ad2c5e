use serde::{Deserialize, Serialize};

/// Presentation record handed to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeView {
    pub code: String,
    pub display_code: String,
    pub short_desc: String,
    pub long_desc: String,
    pub category_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_name: Option<String>,
}
