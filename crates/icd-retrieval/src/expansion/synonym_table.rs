//! Domain synonym table: lay terms and abbreviations mapped to the words and
//! code prefixes that appear in ICD-10 descriptions.
//!
//! The built-in table can be extended or overridden from a TOML file:
//!
//! ```toml
//! [synonyms]
//! "heart attack" = ["myocardial", "infarction", "i21"]
//! gout = ["gout", "m10"]
//! ```

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::path::Path;

use serde::Deserialize;

use icd_core::errors::{IcdResult, RetrievalError};

/// Built-in entries. Keys are single tokens or two-word phrases.
fn builtin_entries() -> Vec<(&'static str, &'static [&'static str])> {
    vec![
        ("typhoid", &["typhoid", "a01", "fever"][..]),
        ("paratyphoid", &["paratyphoid", "a01"]),
        ("pneumonia", &["pneumonia", "j12", "respiratory"]),
        ("cholera", &["cholera", "a00", "vibrio"]),
        ("salmonella", &["salmonella", "a02"]),
        ("shigella", &["shigellosis", "a03"]),
        ("dysentery", &["dysentery", "shigellosis", "a03", "a06"]),
        ("e coli", &["escherichia", "a04"]),
        ("food poisoning", &["foodborne", "intoxication", "a05"]),
        ("tuberculosis", &["tuberculosis", "a15"]),
        ("tb", &["tuberculosis", "a15"]),
        ("flu", &["influenza", "j11"]),
        ("influenza", &["influenza", "j09", "j10", "j11"]),
        ("covid", &["covid", "u07"]),
        ("asthma", &["asthma", "j45"]),
        ("copd", &["obstructive", "pulmonary", "j44"]),
        ("diabetes", &["diabetes", "mellitus", "e11"]),
        ("hypertension", &["hypertension", "i10"]),
        ("blood pressure", &["hypertension", "i10"]),
        ("heart attack", &["myocardial", "infarction", "i21"]),
        ("stroke", &["cerebral", "infarction", "i63"]),
        ("uti", &["urinary", "n39"]),
    ]
}

#[derive(Debug, Deserialize)]
struct SynonymFile {
    #[serde(default)]
    synonyms: BTreeMap<String, Vec<String>>,
}

/// Mapping from a lower-case key to the set of terms it expands to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SynonymTable {
    entries: HashMap<String, BTreeSet<String>>,
}

impl SynonymTable {
    /// A table with no entries: every token stands for itself.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The built-in medical table.
    pub fn builtin() -> Self {
        let mut table = Self::empty();
        for (key, terms) in builtin_entries() {
            table.insert(key, terms.iter().copied());
        }
        table
    }

    /// Insert or replace an entry. Keys and terms are lower-cased and trimmed;
    /// empty terms are dropped.
    pub fn insert<I, S>(&mut self, key: &str, terms: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mapped = terms
            .into_iter()
            .map(|t| t.as_ref().trim().to_lowercase())
            .filter(|t| !t.is_empty())
            .collect();
        self.entries.insert(canonical_key(key), mapped);
    }

    pub fn get(&self, key: &str) -> Option<&BTreeSet<String>> {
        self.entries.get(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Overlay `other` on this table. Entries in `other` replace same-key entries here.
    pub fn merge(&mut self, other: SynonymTable) {
        self.entries.extend(other.entries);
    }

    /// Parse a `[synonyms]` table from TOML. `source` names the input in errors.
    pub fn from_toml(toml_str: &str, source: &str) -> IcdResult<Self> {
        let file: SynonymFile = toml::from_str(toml_str).map_err(|e| {
            RetrievalError::InvalidSynonymTable {
                path: source.to_string(),
                reason: e.to_string(),
            }
        })?;

        let mut table = Self::empty();
        for (key, terms) in file.synonyms {
            let key = canonical_key(&key);
            if key.is_empty() || key.split(' ').count() > 2 {
                return Err(RetrievalError::InvalidSynonymTable {
                    path: source.to_string(),
                    reason: format!("key {key:?} must be one or two words"),
                }
                .into());
            }
            table.insert(&key, terms);
        }
        Ok(table)
    }

    /// Load a TOML synonym file and overlay it on the built-in table.
    pub fn builtin_with_file(path: &Path) -> IcdResult<Self> {
        let source = path.display().to_string();
        let content =
            std::fs::read_to_string(path).map_err(|e| RetrievalError::InvalidSynonymTable {
                path: source.clone(),
                reason: e.to_string(),
            })?;
        let overlay = Self::from_toml(&content, &source)?;
        tracing::info!(path = %source, entries = overlay.len(), "loaded synonym overlay");

        let mut table = Self::builtin();
        table.merge(overlay);
        Ok(table)
    }
}

/// Lower-case, single-space-separated form used for lookups.
fn canonical_key(key: &str) -> String {
    key.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_has_pneumonia_mapping() {
        let table = SynonymTable::builtin();
        let mapped = table.get("pneumonia").unwrap();
        assert!(mapped.contains("j12"));
        assert!(mapped.contains("respiratory"));
    }

    #[test]
    fn keys_are_canonicalized() {
        let mut table = SynonymTable::empty();
        table.insert("  Heart   Attack ", ["I21", " "]);
        assert_eq!(
            table.get("heart attack"),
            Some(&BTreeSet::from(["i21".to_string()]))
        );
    }

    #[test]
    fn three_word_keys_are_rejected() {
        let err = SynonymTable::from_toml(
            "[synonyms]\n\"acute kidney injury\" = [\"n17\"]\n",
            "inline",
        )
        .unwrap_err();
        assert!(err.to_string().contains("one or two words"));
    }
}
