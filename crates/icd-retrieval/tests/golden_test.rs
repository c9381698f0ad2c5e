//! Golden search and lookup scenarios over the sample ICD-10 file.

use std::collections::BTreeSet;

use icd_core::config::RetrievalConfig;
use icd_ingest::Ingestor;
use icd_retrieval::expansion::expand;
use icd_retrieval::{SearchEngine, SynonymTable};
use icd_storage::StorageEngine;
use test_fixtures::{fixture_path, lookup_scenarios, search_scenarios, SAMPLE_CODES_CSV};

fn seeded_store() -> StorageEngine {
    let store = StorageEngine::open_in_memory().expect("in-memory storage");
    let summary = Ingestor::new(&store)
        .ingest_path(&fixture_path(SAMPLE_CODES_CSV))
        .expect("sample file");
    assert!(summary.is_clean());
    store
}

#[test]
fn golden_search_scenarios() {
    let store = seeded_store();
    let engine = SearchEngine::new(&store, RetrievalConfig::default());
    let table = SynonymTable::builtin();

    for scenario in search_scenarios() {
        let results = engine.search_views(&scenario.query, None).unwrap();
        let codes: Vec<&str> = results.iter().map(|v| v.code.as_str()).collect();

        if let Some(first) = &scenario.first {
            assert_eq!(codes.first().copied(), Some(first.as_str()), "{}", scenario.name);
        }
        for code in &scenario.includes {
            assert!(codes.contains(&code.as_str()), "{}: missing {code} in {codes:?}", scenario.name);
        }
        for code in &scenario.excludes {
            assert!(!codes.contains(&code.as_str()), "{}: unexpected {code}", scenario.name);
        }
        if let Some(count) = scenario.count {
            assert_eq!(codes.len(), count, "{}: got {codes:?}", scenario.name);
        }

        let terms = expand(&scenario.query, &table);
        let expected: BTreeSet<String> = scenario.expanded_terms.iter().cloned().collect();
        assert!(expected.is_subset(&terms), "{}: terms {terms:?}", scenario.name);
    }
}

#[test]
fn golden_lookup_scenarios() {
    let store = seeded_store();
    let engine = SearchEngine::new(&store, RetrievalConfig::default());

    for scenario in lookup_scenarios() {
        let found = engine.lookup(&scenario.code).unwrap();
        assert_eq!(found.is_some(), scenario.found, "{}", scenario.code);
        let Some(view) = found else { continue };

        assert_eq!(Some(view.code.display_code.clone()), scenario.display_code, "{}", scenario.code);
        assert_eq!(view.code.category_name, scenario.category_name, "{}", scenario.code);
        assert_eq!(view.parents, scenario.parents, "{}", scenario.code);
        assert_eq!(view.children, scenario.children, "{}", scenario.code);
    }
}
