use std::collections::BTreeSet;

use icd_core::models::*;

#[test]
fn answer_source_serializes_to_wire_strings() {
    let cases = [
        (AnswerSource::NoResults, "no results"),
        (AnswerSource::DatabaseOnly, "database only"),
        (AnswerSource::DatabaseAndGeneration, "database + llm"),
        (AnswerSource::Error, "error"),
    ];
    for (source, expected) in cases {
        assert_eq!(source.as_str(), expected);
        assert_eq!(
            serde_json::to_value(source).unwrap(),
            serde_json::Value::String(expected.to_string())
        );
    }
}

#[test]
fn code_view_uses_camel_case_and_omits_missing_category() {
    let view = CodeView {
        code: "A001".into(),
        display_code: "A00.1".into(),
        short_desc: "Cholera due to Vibrio cholerae 01, biovar eltor".into(),
        long_desc: "Cholera due to Vibrio cholerae 01, biovar eltor".into(),
        category_code: "A00".into(),
        category_name: None,
    };
    let json = serde_json::to_value(&view).unwrap();
    assert_eq!(json["displayCode"], "A00.1");
    assert_eq!(json["categoryCode"], "A00");
    assert!(json.get("categoryName").is_none());
}

#[test]
fn grounded_answer_omits_empty_mentions() {
    let answer = GroundedAnswer {
        codes: vec![],
        explanation: "nothing".into(),
        source: AnswerSource::NoResults,
        verified: true,
        ungrounded_mentions: vec![],
    };
    let json = serde_json::to_value(&answer).unwrap();
    assert_eq!(json["source"], "no results");
    assert!(json.get("ungroundedMentions").is_none());
}

#[test]
fn edge_kind_names_match_graph_labels() {
    assert_eq!(EdgeKind::Contains.as_str(), "CONTAINS");
    assert_eq!(EdgeKind::BelongsTo.as_str(), "BELONGS_TO");
    assert_eq!(EdgeKind::HasSubcategory.as_str(), "HAS_SUBCATEGORY");
}

#[test]
fn candidate_query_emptiness() {
    assert!(CandidateQuery::default().is_empty());
    assert!(!CandidateQuery::new("A00", BTreeSet::new()).is_empty());
    let terms: BTreeSet<String> = ["fever".to_string()].into_iter().collect();
    assert!(!CandidateQuery::new("", terms).is_empty());
}

#[test]
fn code_entry_new_maps_optional_subcategory() {
    let entry = CodeEntry::new("Cholera", "A00", None, "A00", "Cholera", "Cholera");
    assert!(entry.subcategory.is_none());
    let entry = CodeEntry::new("Cholera", "A00", Some("1"), "A001", "s", "l");
    assert_eq!(entry.subcategory.as_deref(), Some("1"));
}
