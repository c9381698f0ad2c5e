use crate::errors::IcdResult;
use crate::models::{CandidateQuery, CodeDetails, CodeEntry, CodeRecord, GraphCounts};

/// The persistent code graph: idempotent upsert plus the read patterns the engine needs.
///
/// Each method is one logical round trip. `Ok(None)` / `Ok(vec![])` mean "no match";
/// store-side failures are `Err`.
pub trait ICodeStore: Send + Sync {
    /// Merge the category and code, link `CONTAINS`, and link `HAS_SUBCATEGORY` from
    /// `entry.category_code` when that code already exists.
    fn upsert(&self, entry: &CodeEntry) -> IcdResult<()>;

    /// The code with its category name and one-hop parents and children.
    fn get_by_code(&self, code: &str) -> IcdResult<Option<CodeDetails>>;

    /// Unordered candidates for a search, at most `limit` of them.
    fn find_candidates(&self, query: &CandidateQuery, limit: usize)
        -> IcdResult<Vec<CodeRecord>>;

    /// Codes with `category_code == term` or `code` starting with `term`, ascending by code.
    fn codes_in_category(&self, category_term: &str) -> IcdResult<Vec<CodeRecord>>;

    fn counts(&self) -> IcdResult<GraphCounts>;
}
