//! SearchEngine: the read side of the code graph.
//!
//! Free text: normalize → expand → gather candidates → rank → format.
//! Lookup: normalize → get_by_code → format with one-hop neighbours.

use std::path::Path;

use tracing::debug;

use icd_core::config::RetrievalConfig;
use icd_core::errors::IcdResult;
use icd_core::models::{CandidateQuery, CodeView};
use icd_core::traits::ICodeStore;

use crate::expansion::{self, SynonymTable};
use crate::format::{to_view, LookupView};
use crate::hierarchy::HierarchyResolver;
use crate::ranking::{self, ScoredCode};

/// Holds the store handle it was constructed with; there is no global connection.
pub struct SearchEngine<'a> {
    store: &'a dyn ICodeStore,
    synonyms: SynonymTable,
    config: RetrievalConfig,
}

impl<'a> SearchEngine<'a> {
    /// Engine with the built-in synonym table. `config.synonyms_path` is ignored;
    /// use [`SearchEngine::from_config`] to honour it.
    pub fn new(store: &'a dyn ICodeStore, config: RetrievalConfig) -> Self {
        Self {
            store,
            synonyms: SynonymTable::builtin(),
            config,
        }
    }

    /// Engine whose synonym table is the built-in one overlaid with
    /// `config.synonyms_path` when set.
    pub fn from_config(store: &'a dyn ICodeStore, config: RetrievalConfig) -> IcdResult<Self> {
        let synonyms = match &config.synonyms_path {
            Some(path) => SynonymTable::builtin_with_file(Path::new(path))?,
            None => SynonymTable::builtin(),
        };
        Ok(Self {
            store,
            synonyms,
            config,
        })
    }

    pub fn with_synonyms(mut self, synonyms: SynonymTable) -> Self {
        self.synonyms = synonyms;
        self
    }

    pub fn store(&self) -> &'a dyn ICodeStore {
        self.store
    }

    pub fn config(&self) -> &RetrievalConfig {
        &self.config
    }

    pub fn hierarchy(&self) -> HierarchyResolver<'a> {
        HierarchyResolver::new(self.store)
    }

    /// Normalized query plus expanded terms.
    pub fn prepare(&self, raw: &str) -> CandidateQuery {
        CandidateQuery::new(
            expansion::normalize(raw),
            expansion::expand(raw, &self.synonyms),
        )
    }

    /// Ranked matches for free text, at most `limit` (default from config).
    pub fn search(&self, raw: &str, limit: Option<usize>) -> IcdResult<Vec<ScoredCode>> {
        let limit = limit.unwrap_or(self.config.default_limit);
        let query = self.prepare(raw);
        if query.is_empty() || limit == 0 {
            debug!(raw, "query has no searchable terms");
            return Ok(Vec::new());
        }

        let pool = self.config.candidate_pool.max(limit);
        let candidates = self.store.find_candidates(&query, pool)?;
        let candidate_count = candidates.len();
        let ranked = ranking::rank(candidates, &query.normalized, limit);

        debug!(
            normalized = %query.normalized,
            terms = query.terms.len(),
            candidates = candidate_count,
            returned = ranked.len(),
            "search ranked"
        );
        Ok(ranked)
    }

    /// [`SearchEngine::search`] in presentation form.
    pub fn search_views(&self, raw: &str, limit: Option<usize>) -> IcdResult<Vec<CodeView>> {
        Ok(self
            .search(raw, limit)?
            .iter()
            .map(|s| to_view(&s.record))
            .collect())
    }

    /// Exact lookup. Accepts display form (`a00.1`) as well as canonical (`A001`).
    pub fn lookup(&self, code: &str) -> IcdResult<Option<LookupView>> {
        let canonical = expansion::normalize(code);
        if canonical.is_empty() {
            return Ok(None);
        }
        Ok(self
            .store
            .get_by_code(&canonical)?
            .map(|details| LookupView::from(&details)))
    }

    /// Every code in a category (or under a code prefix), ascending.
    /// An empty term matches nothing.
    pub fn codes_in_category(&self, term: &str) -> IcdResult<Vec<CodeView>> {
        let canonical = expansion::normalize(term);
        if canonical.is_empty() {
            return Ok(Vec::new());
        }
        Ok(self
            .store
            .codes_in_category(&canonical)?
            .iter()
            .map(to_view)
            .collect())
    }
}
