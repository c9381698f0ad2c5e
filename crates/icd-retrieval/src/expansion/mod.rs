//! Query canonicalization and synonym expansion.
//!
//! `normalize` feeds the exact-code branch; `expand` feeds substring matching.

pub mod synonym_table;

use std::collections::BTreeSet;

use icd_core::constants::MIN_TOKEN_LEN;

pub use synonym_table::SynonymTable;

/// Canonical form of a query: every non-alphanumeric character removed, upper-cased.
/// `" a00.1 "` becomes `"A001"`.
pub fn normalize(raw: &str) -> String {
    raw.trim()
        .chars()
        .flat_map(char::to_uppercase)
        .filter(|c| c.is_alphanumeric())
        .collect()
}

/// Lower-cased query with punctuation removed, split into tokens.
fn tokenize(raw: &str) -> Vec<String> {
    let cleaned: String = raw
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace())
        .collect();
    cleaned.split_whitespace().map(str::to_string).collect()
}

/// Expand a query into the set of lower-case terms used for substring matching.
///
/// Adjacent token pairs found in the table contribute their mapped terms. Each
/// single token contributes its mapped terms when it is in the table, or itself
/// when it is longer than [`MIN_TOKEN_LEN`] characters.
pub fn expand(raw: &str, table: &SynonymTable) -> BTreeSet<String> {
    let tokens = tokenize(raw);
    let mut terms = BTreeSet::new();

    for pair in tokens.windows(2) {
        let phrase = format!("{} {}", pair[0], pair[1]);
        if let Some(mapped) = table.get(&phrase) {
            terms.extend(mapped.iter().cloned());
        }
    }

    for token in &tokens {
        match table.get(token) {
            Some(mapped) => terms.extend(mapped.iter().cloned()),
            None if token.chars().count() > MIN_TOKEN_LEN => {
                terms.insert(token.clone());
            }
            None => {}
        }
    }

    terms
}
