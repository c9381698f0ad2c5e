//! Property tests: formatter, expansion and ranking invariants.

use proptest::prelude::*;

use icd_core::models::{CodeRecord, IcdCode};
use icd_retrieval::expansion::{expand, normalize};
use icd_retrieval::format_code;
use icd_retrieval::ranking::{rank, SCORE_EXACT_CODE};
use icd_retrieval::SynonymTable;

fn record(code: String, desc: String) -> CodeRecord {
    CodeRecord {
        code: IcdCode {
            category_code: code.chars().take(3).collect(),
            code,
            subcategory: None,
            short_desc: desc.clone(),
            long_desc: desc,
        },
        category_name: None,
    }
}

proptest! {
    #[test]
    fn prop_format_only_adds_a_separator(code in "[A-Z][0-9A-Z]{0,6}") {
        let formatted = format_code(&code);
        prop_assert_eq!(formatted.replacen('.', "", 1), code.clone());
        if code.chars().count() > 3 {
            prop_assert_eq!(formatted.chars().nth(3), Some('.'));
        } else {
            prop_assert_eq!(formatted, code);
        }
    }

    #[test]
    fn prop_format_is_total(code in "\\PC{0,12}") {
        let formatted = format_code(&code);
        prop_assert!(formatted.chars().count() >= code.chars().count());
    }

    #[test]
    fn prop_normalize_is_idempotent(raw in "[ -~]{0,30}") {
        let once = normalize(&raw);
        prop_assert_eq!(normalize(&once), once.clone());
        prop_assert!(once.chars().all(char::is_alphanumeric));
    }

    #[test]
    fn prop_expansion_drops_short_unmapped_tokens(raw in "[a-z ]{0,40}") {
        let terms = expand(&raw, &SynonymTable::empty());
        prop_assert!(terms.iter().all(|t| t.chars().count() > 2));
    }

    #[test]
    fn prop_rank_is_sorted_and_bounded(
        codes in proptest::collection::btree_set("[A-Z][0-9]{2,4}", 0..20),
        limit in 0usize..25,
        pick in any::<prop::sample::Index>(),
    ) {
        let codes: Vec<String> = codes.into_iter().collect();
        let q = if codes.is_empty() { String::new() } else { codes[pick.index(codes.len())].clone() };
        let candidates: Vec<CodeRecord> = codes
            .iter()
            .map(|c| record(c.clone(), format!("desc {c}")))
            .collect();

        let ranked = rank(candidates, &q, limit);
        prop_assert!(ranked.len() <= limit);
        for pair in ranked.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            prop_assert!(a.score > b.score || (a.score == b.score && a.record.code.code < b.record.code.code));
        }
        if limit > 0 && !q.is_empty() {
            prop_assert_eq!(&ranked[0].record.code.code, &q);
            prop_assert_eq!(ranked[0].score, SCORE_EXACT_CODE);
        }
    }
}
