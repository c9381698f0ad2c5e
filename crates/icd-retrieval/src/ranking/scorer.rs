//! Three-tier relevance scorer.
//!
//! Exact code match beats a literal description match, which beats a match made
//! only through an expanded term. Ties break on code ascending, so the order is
//! total and stable across runs.

use std::cmp::Ordering;

use icd_core::models::CodeRecord;

/// The candidate's code equals the normalized query.
pub const SCORE_EXACT_CODE: u32 = 100;
/// The short or long description contains the normalized query verbatim.
pub const SCORE_DESCRIPTION_MATCH: u32 = 75;
/// Matched only through an expanded term.
pub const SCORE_TERM_MATCH: u32 = 50;

/// A candidate with its relevance score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredCode {
    pub record: CodeRecord,
    pub score: u32,
}

/// Score one candidate against the normalized query `q`.
/// An empty `q` can only ever score [`SCORE_TERM_MATCH`].
pub fn score(record: &CodeRecord, q: &str) -> u32 {
    if q.is_empty() {
        return SCORE_TERM_MATCH;
    }
    let code = &record.code;
    if code.code == q {
        SCORE_EXACT_CODE
    } else if code.short_desc.contains(q) || code.long_desc.contains(q) {
        SCORE_DESCRIPTION_MATCH
    } else {
        SCORE_TERM_MATCH
    }
}

fn by_score_then_code(a: &ScoredCode, b: &ScoredCode) -> Ordering {
    b.score
        .cmp(&a.score)
        .then_with(|| a.record.code.code.cmp(&b.record.code.code))
}

/// Score, order (score descending, code ascending) and truncate to `limit`.
pub fn rank(candidates: Vec<CodeRecord>, q: &str, limit: usize) -> Vec<ScoredCode> {
    let mut scored: Vec<ScoredCode> = candidates
        .into_iter()
        .map(|record| {
            let score = score(&record, q);
            ScoredCode { record, score }
        })
        .collect();

    scored.sort_by(by_score_then_code);
    scored.truncate(limit);
    scored
}
