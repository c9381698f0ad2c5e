//! Category browsing.

use rusqlite::{params, Connection};

use icd_core::errors::IcdResult;
use icd_core::models::CodeRecord;

use super::code_row::{parse_code_row, CODE_COLUMNS, CODE_FROM};
use crate::to_query_err;

/// Codes whose category code equals `term` or whose code starts with `term`,
/// ascending by code, unbounded. An empty term matches nothing.
pub fn codes_in_category(conn: &Connection, term: &str) -> IcdResult<Vec<CodeRecord>> {
    if term.is_empty() {
        return Ok(Vec::new());
    }

    let sql = format!(
        "SELECT {CODE_COLUMNS}
         {CODE_FROM}
         WHERE c.category_code = ?1
            OR substr(c.code, 1, length(?1)) = ?1
         ORDER BY c.code"
    );

    let mut stmt = conn.prepare(&sql).map_err(|e| to_query_err(e.to_string()))?;
    let rows = stmt
        .query_map(params![term], parse_code_row)
        .map_err(|e| to_query_err(e.to_string()))?;

    let mut results = Vec::new();
    for row in rows {
        results.push(row.map_err(|e| to_query_err(e.to_string()))?);
    }
    Ok(results)
}
