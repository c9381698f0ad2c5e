//! Lookup by code with one-hop hierarchy neighbours.

use rusqlite::{params, Connection, OptionalExtension};

use icd_core::errors::IcdResult;
use icd_core::models::CodeDetails;

use super::code_row::{parse_code_row, CODE_COLUMNS, CODE_FROM};
use crate::to_query_err;

/// Fetch a code, its category name, and the codes exactly one HAS_SUBCATEGORY
/// edge away in each direction. `None` when the code is not stored.
pub fn get_by_code(conn: &Connection, code: &str) -> IcdResult<Option<CodeDetails>> {
    let sql = format!(
        "SELECT {CODE_COLUMNS},
            (SELECT json_group_array(parent_code) FROM
                (SELECT parent_code FROM code_hierarchy WHERE child_code = c.code)),
            (SELECT json_group_array(child_code) FROM
                (SELECT child_code FROM code_hierarchy WHERE parent_code = c.code))
         {CODE_FROM}
         WHERE c.code = ?1"
    );

    let row = conn
        .query_row(&sql, params![code], |row| {
            let record = parse_code_row(row)?;
            let parents_json: String = row.get(6)?;
            let children_json: String = row.get(7)?;
            Ok((record, parents_json, children_json))
        })
        .optional()
        .map_err(|e| to_query_err(e.to_string()))?;

    let Some((record, parents_json, children_json)) = row else {
        return Ok(None);
    };

    Ok(Some(CodeDetails {
        record,
        parents: parse_code_list(&parents_json)?,
        children: parse_code_list(&children_json)?,
    }))
}

fn parse_code_list(json: &str) -> IcdResult<Vec<String>> {
    let mut codes: Vec<String> = serde_json::from_str(json)
        .map_err(|e| to_query_err(format!("parse neighbour list: {e}")))?;
    codes.sort();
    codes.dedup();
    Ok(codes)
}
