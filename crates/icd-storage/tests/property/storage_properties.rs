//! Property tests: upsert idempotence and hierarchy order dependence.

use proptest::prelude::*;

use icd_core::models::CodeEntry;
use icd_core::traits::ICodeStore;
use icd_storage::StorageEngine;

fn entry(category: &str, code: &str, short: &str) -> CodeEntry {
    CodeEntry::new("Generated", category, code.get(3..), code, short, short)
}

proptest! {
    #[test]
    fn prop_upsert_is_idempotent(
        category in "[A-Z][0-9]{2}",
        suffix in "[0-9]{1,2}",
        desc in "[a-zA-Z ]{1,40}",
        repeats in 1usize..8,
    ) {
        let store = StorageEngine::open_in_memory().unwrap();
        let child = format!("{category}{suffix}");
        store.upsert(&entry(&category, &category, &desc)).unwrap();
        for _ in 0..repeats {
            store.upsert(&entry(&category, &child, &desc)).unwrap();
        }

        let counts = store.counts().unwrap();
        prop_assert_eq!(counts.categories, 1);
        prop_assert_eq!(counts.codes, 2);
        prop_assert_eq!(counts.contains_edges, 2);
        prop_assert_eq!(counts.hierarchy_edges, 1);
    }

    #[test]
    fn prop_parent_link_depends_on_order(
        category in "[A-Z][0-9]{2}",
        suffix in "[0-9]{1,2}",
        parent_first in any::<bool>(),
    ) {
        let store = StorageEngine::open_in_memory().unwrap();
        let child = format!("{category}{suffix}");
        if parent_first {
            store.upsert(&entry(&category, &category, "parent")).unwrap();
            store.upsert(&entry(&category, &child, "child")).unwrap();
        } else {
            store.upsert(&entry(&category, &child, "child")).unwrap();
            store.upsert(&entry(&category, &category, "parent")).unwrap();
        }

        let parents = store.get_by_code(&child).unwrap().unwrap().parents;
        if parent_first {
            prop_assert_eq!(parents, vec![category.clone()]);
        } else {
            prop_assert!(parents.is_empty());
        }
    }
}
