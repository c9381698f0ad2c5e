//! One-hop hierarchy navigation over the store.

use icd_core::errors::IcdResult;
use icd_core::traits::ICodeStore;

/// Immediate parents and children of a code. Never recurses: callers wanting
/// full ancestry walk it themselves.
pub struct HierarchyResolver<'a> {
    store: &'a dyn ICodeStore,
}

impl<'a> HierarchyResolver<'a> {
    pub fn new(store: &'a dyn ICodeStore) -> Self {
        Self { store }
    }

    /// Codes one `HAS_SUBCATEGORY` hop above `code`, or `None` if `code` is not stored.
    pub fn parents(&self, code: &str) -> IcdResult<Option<Vec<String>>> {
        Ok(self.store.get_by_code(code)?.map(|d| d.parents))
    }

    /// Codes one `HAS_SUBCATEGORY` hop below `code`, or `None` if `code` is not stored.
    pub fn children(&self, code: &str) -> IcdResult<Option<Vec<String>>> {
        Ok(self.store.get_by_code(code)?.map(|d| d.children))
    }

    /// Both directions from a single store round trip.
    pub fn neighbours(&self, code: &str) -> IcdResult<Option<(Vec<String>, Vec<String>)>> {
        Ok(self.store.get_by_code(code)?.map(|d| (d.parents, d.children)))
    }
}
