//! Row validation.

use icd_core::constants::{DISPLAY_SEPARATOR, INGEST_ROW_ARITY};
use icd_core::errors::IngestError;
use icd_core::models::CodeEntry;

/// Validate one source row and turn it into an upsert entry.
///
/// Codes are trimmed, upper-cased and stripped of the display separator so
/// `a00.1` and `A001` land on the same node. An empty subcategory is `None`.
pub fn parse_fields(fields: &[&str], line: u64) -> Result<CodeEntry, IngestError> {
    if fields.len() != INGEST_ROW_ARITY {
        return Err(invalid(
            line,
            format!("expected {INGEST_ROW_ARITY} fields, found {}", fields.len()),
        ));
    }

    let category_code = canonical_code(fields[0]);
    let subcategory = fields[1].trim();
    let full_code = canonical_code(fields[2]);
    let category_name = fields[5].trim();

    if category_code.is_empty() {
        return Err(invalid(line, "missing category code".to_string()));
    }
    if full_code.is_empty() {
        return Err(invalid(line, "missing full code".to_string()));
    }
    if category_name.is_empty() {
        return Err(invalid(line, "missing category name".to_string()));
    }

    Ok(CodeEntry::new(
        category_name,
        category_code,
        (!subcategory.is_empty()).then_some(subcategory),
        full_code,
        fields[3].trim(),
        fields[4].trim(),
    ))
}

fn canonical_code(raw: &str) -> String {
    raw.trim()
        .chars()
        .filter(|c| *c != DISPLAY_SEPARATOR)
        .flat_map(char::to_uppercase)
        .collect()
}

fn invalid(line: u64, reason: String) -> IngestError {
    IngestError::InvalidRow { line, reason }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn well_formed_row() {
        let entry = parse_fields(
            &["A00", "1", "A001", "Cholera eltor", "Cholera due to Vibrio cholerae 01, biovar eltor", "Cholera"],
            1,
        )
        .unwrap();
        assert_eq!(entry.full_code, "A001");
        assert_eq!(entry.subcategory.as_deref(), Some("1"));
        assert_eq!(entry.category_name, "Cholera");
    }

    #[test]
    fn codes_are_canonicalized() {
        let entry =
            parse_fields(&[" a00 ", "", "a00.1", "x", "y", "Cholera"], 1).unwrap();
        assert_eq!(entry.category_code, "A00");
        assert_eq!(entry.full_code, "A001");
        assert!(entry.subcategory.is_none());
    }

    #[test]
    fn wrong_arity_is_invalid() {
        let err = parse_fields(&["A00", "1", "A001"], 7).unwrap_err();
        assert!(matches!(err, IngestError::InvalidRow { line: 7, .. }));
        assert!(err.to_string().contains("expected 6 fields, found 3"));
    }

    #[test]
    fn missing_keys_are_invalid() {
        assert!(parse_fields(&["", "1", "A001", "x", "y", "Cholera"], 1).is_err());
        assert!(parse_fields(&["A00", "1", " ", "x", "y", "Cholera"], 1).is_err());
        assert!(parse_fields(&["A00", "1", "A001", "x", "y", ""], 1).is_err());
    }

    #[test]
    fn empty_descriptions_are_allowed() {
        let entry = parse_fields(&["A00", "9", "A009", "", "", "Cholera"], 1).unwrap();
        assert!(entry.short_desc.is_empty());
    }
}
