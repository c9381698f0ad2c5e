//! Display transforms for codes and records.

use serde::{Deserialize, Serialize};

use icd_core::constants::{DISPLAY_SEPARATOR, DISPLAY_SEPARATOR_POS};
use icd_core::models::{CodeDetails, CodeRecord, CodeView};

/// Display form of a canonical code: `A001` becomes `A00.1`, `A00` stays `A00`.
/// Works on characters, so it never splits a multi-byte sequence.
pub fn format_code(code: &str) -> String {
    if code.chars().count() <= DISPLAY_SEPARATOR_POS {
        return code.to_string();
    }
    let mut out = String::with_capacity(code.len() + 1);
    for (i, c) in code.chars().enumerate() {
        if i == DISPLAY_SEPARATOR_POS {
            out.push(DISPLAY_SEPARATOR);
        }
        out.push(c);
    }
    out
}

/// Presentation record for a stored code.
pub fn to_view(record: &CodeRecord) -> CodeView {
    let code = &record.code;
    CodeView {
        code: code.code.clone(),
        display_code: format_code(&code.code),
        short_desc: code.short_desc.clone(),
        long_desc: code.long_desc.clone(),
        category_code: code.category_code.clone(),
        category_name: record.category_name.clone(),
    }
}

/// A looked-up code with its immediate neighbours in display form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LookupView {
    #[serde(flatten)]
    pub code: CodeView,
    pub parents: Vec<String>,
    pub children: Vec<String>,
}

impl From<&CodeDetails> for LookupView {
    fn from(details: &CodeDetails) -> Self {
        Self {
            code: to_view(&details.record),
            parents: details.parents.iter().map(|c| format_code(c)).collect(),
            children: details.children.iter().map(|c| format_code(c)).collect(),
        }
    }
}
