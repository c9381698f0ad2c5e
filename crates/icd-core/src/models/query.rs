use std::collections::BTreeSet;

/// What the store needs to gather search candidates: the canonical query for the
/// exact-code branch and the expanded, lower-cased term set for substring matching.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateQuery {
    pub normalized: String,
    pub terms: BTreeSet<String>,
}

impl CandidateQuery {
    pub fn new(normalized: impl Into<String>, terms: BTreeSet<String>) -> Self {
        Self {
            normalized: normalized.into(),
            terms,
        }
    }

    /// Nothing to match on: no canonical form and no expanded terms.
    pub fn is_empty(&self) -> bool {
        self.normalized.is_empty() && self.terms.is_empty()
    }
}
