//! Graph construction: idempotent upserts, category membership, hierarchy linking.

use icd_core::models::CodeEntry;
use icd_core::traits::ICodeStore;
use icd_storage::StorageEngine;

fn store() -> StorageEngine {
    StorageEngine::open_in_memory().expect("in-memory storage")
}

fn cholera(full_code: &str, subcategory: Option<&str>, desc: &str) -> CodeEntry {
    CodeEntry::new("Cholera", "A00", subcategory, full_code, desc, desc)
}

#[test]
fn repeated_upsert_creates_one_of_everything() {
    let store = store();
    let parent = cholera("A00", None, "Cholera");
    let child = cholera("A001", Some("1"), "Cholera due to Vibrio cholerae 01, biovar eltor");

    for _ in 0..5 {
        store.upsert(&parent).unwrap();
        store.upsert(&child).unwrap();
    }

    let counts = store.counts().unwrap();
    assert_eq!(counts.categories, 1);
    assert_eq!(counts.codes, 2);
    assert_eq!(counts.contains_edges, 2);
    assert_eq!(counts.hierarchy_edges, 1);
}

#[test]
fn reupsert_overwrites_descriptions_in_place() {
    let store = store();
    store
        .upsert(&cholera("A009", Some("9"), "Cholera, unspecified"))
        .unwrap();
    store
        .upsert(&CodeEntry::new(
            "Cholera",
            "A00",
            Some("9"),
            "A009",
            "Cholera, unsp",
            "Cholera, unspecified (revised)",
        ))
        .unwrap();

    let details = store.get_by_code("A009").unwrap().unwrap();
    assert_eq!(details.record.code.short_desc, "Cholera, unsp");
    assert_eq!(details.record.code.long_desc, "Cholera, unspecified (revised)");
    assert_eq!(store.counts().unwrap().codes, 1);
}

#[test]
fn category_membership_is_fixed_by_first_upsert() {
    let store = store();
    store.upsert(&cholera("A000", Some("0"), "Classical cholera")).unwrap();
    store
        .upsert(&CodeEntry::new(
            "Intestinal infectious diseases",
            "A00",
            Some("0"),
            "A000",
            "Classical cholera",
            "Classical cholera",
        ))
        .unwrap();

    let details = store.get_by_code("A000").unwrap().unwrap();
    assert_eq!(details.record.category_name.as_deref(), Some("Cholera"));

    let counts = store.counts().unwrap();
    assert_eq!(counts.categories, 2);
    assert_eq!(counts.contains_edges, 1);
}

#[test]
fn parent_upserted_first_is_linked() {
    let store = store();
    store.upsert(&cholera("A00", None, "Cholera")).unwrap();
    store.upsert(&cholera("A001", Some("1"), "Cholera eltor")).unwrap();

    let child = store.get_by_code("A001").unwrap().unwrap();
    assert_eq!(child.parents, vec!["A00".to_string()]);
    assert!(child.children.is_empty());

    let parent = store.get_by_code("A00").unwrap().unwrap();
    assert!(parent.parents.is_empty());
    assert_eq!(parent.children, vec!["A001".to_string()]);
}

#[test]
fn parent_upserted_after_child_is_not_linked() {
    let store = store();
    store.upsert(&cholera("A001", Some("1"), "Cholera eltor")).unwrap();
    store.upsert(&cholera("A00", None, "Cholera")).unwrap();

    let child = store.get_by_code("A001").unwrap().unwrap();
    assert!(child.parents.is_empty());
    let parent = store.get_by_code("A00").unwrap().unwrap();
    assert!(parent.children.is_empty());
    assert_eq!(store.counts().unwrap().hierarchy_edges, 0);
}

#[test]
fn reupserting_child_after_parent_repairs_the_link() {
    let store = store();
    store.upsert(&cholera("A001", Some("1"), "Cholera eltor")).unwrap();
    store.upsert(&cholera("A00", None, "Cholera")).unwrap();
    store.upsert(&cholera("A001", Some("1"), "Cholera eltor")).unwrap();

    let child = store.get_by_code("A001").unwrap().unwrap();
    assert_eq!(child.parents, vec!["A00".to_string()]);
}

#[test]
fn category_level_code_never_links_to_itself() {
    let store = store();
    store.upsert(&cholera("A00", None, "Cholera")).unwrap();
    store.upsert(&cholera("A00", None, "Cholera")).unwrap();

    let details = store.get_by_code("A00").unwrap().unwrap();
    assert!(details.parents.is_empty());
    assert!(details.children.is_empty());
}

#[test]
fn parent_must_prefix_the_child() {
    let store = store();
    store.upsert(&cholera("A00", None, "Cholera")).unwrap();
    // Malformed row: category code A00 but the code lives under B.
    store.upsert(&cholera("B001", Some("1"), "Mismatched")).unwrap();

    assert!(store.get_by_code("B001").unwrap().unwrap().parents.is_empty());
}

#[test]
fn children_are_sorted() {
    let store = store();
    store.upsert(&cholera("A00", None, "Cholera")).unwrap();
    for code in ["A009", "A000", "A001"] {
        store.upsert(&cholera(code, Some(&code[3..]), "Cholera variant")).unwrap();
    }
    let parent = store.get_by_code("A00").unwrap().unwrap();
    assert_eq!(parent.children, vec!["A000", "A001", "A009"]);
}

#[test]
fn unknown_code_is_none_not_error() {
    let store = store();
    assert!(store.get_by_code("Z999").unwrap().is_none());
}

#[test]
fn subcategory_is_optional() {
    let store = store();
    store.upsert(&cholera("A00", None, "Cholera")).unwrap();
    store.upsert(&cholera("A001", Some("1"), "Cholera eltor")).unwrap();

    assert!(store.get_by_code("A00").unwrap().unwrap().record.code.subcategory.is_none());
    assert_eq!(
        store
            .get_by_code("A001")
            .unwrap()
            .unwrap()
            .record
            .code
            .subcategory
            .as_deref(),
        Some("1")
    );
}
