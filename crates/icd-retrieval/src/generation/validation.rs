//! Scan generated text for ICD-10-shaped codes the engine did not return.

use std::collections::{BTreeSet, HashSet};
use std::sync::LazyLock;

use regex::Regex;

use icd_core::constants::DISPLAY_SEPARATOR;
use icd_core::models::CodeView;

/// Letter, two digits, optional separator and up to four more characters.
static RE_ICD_CODE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"\b[A-Z][0-9]{2}(?:\.?[0-9A-Z]{1,4})?\b").ok());

/// Canonical codes mentioned in `text` that are neither a candidate code nor a
/// candidate's category code. Sorted, deduplicated.
pub fn ungrounded_mentions(text: &str, codes: &[CodeView]) -> Vec<String> {
    let Some(re) = RE_ICD_CODE.as_ref() else {
        return Vec::new();
    };

    let grounded: HashSet<&str> = codes
        .iter()
        .flat_map(|c| [c.code.as_str(), c.category_code.as_str()])
        .collect();

    re.find_iter(text)
        .map(|m| m.as_str().replace(DISPLAY_SEPARATOR, ""))
        .filter(|code| !grounded.contains(code.as_str()))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view(code: &str) -> CodeView {
        CodeView {
            code: code.to_string(),
            display_code: code.to_string(),
            short_desc: String::new(),
            long_desc: String::new(),
            category_code: code[..3].to_string(),
            category_name: None,
        }
    }

    #[test]
    fn display_and_canonical_forms_are_grounded() {
        let codes = [view("J120"), view("J129")];
        let text = "Use J12.0 for adenoviral cases, J129 otherwise; both sit under J12.";
        assert!(ungrounded_mentions(text, &codes).is_empty());
    }

    #[test]
    fn invented_codes_are_reported_once() {
        let codes = [view("J120")];
        let text = "Consider E11.21 or J18.9. E11.21 is common.";
        assert_eq!(ungrounded_mentions(text, &codes), vec!["E1121", "J189"]);
    }

    #[test]
    fn ordinary_words_are_not_codes() {
        assert!(ungrounded_mentions("Take 200 mg for 3 days.", &[]).is_empty());
    }
}
