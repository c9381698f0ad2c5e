//! Candidate gathering for free-text search.

use rusqlite::types::ToSql;
use rusqlite::Connection;

use icd_core::errors::IcdResult;
use icd_core::models::{CandidateQuery, CodeRecord};

use super::code_row::{parse_code_row, CODE_COLUMNS, CODE_FROM};
use crate::to_query_err;

/// Codes whose code equals `query.normalized`, or where any term is a
/// case-insensitive substring of code, short/long description or category code.
///
/// Rows are fetched exact-code first, then literal description hits on the
/// normalized query, then the rest, so cutting at `limit` never drops a row
/// that would outrank one that was kept. Callers must not rely on this order.
pub fn find_candidates(
    conn: &Connection,
    query: &CandidateQuery,
    limit: usize,
) -> IcdResult<Vec<CodeRecord>> {
    if query.is_empty() || limit == 0 {
        return Ok(Vec::new());
    }

    let mut params: Vec<Box<dyn ToSql>> = vec![Box::new(query.normalized.clone())];
    let mut clauses = vec!["(?1 <> '' AND c.code = ?1)".to_string()];

    for term in &query.terms {
        params.push(Box::new(term.clone()));
        let p = params.len();
        clauses.push(format!(
            "instr(lower(c.code), ?{p}) > 0
             OR instr(lower(c.short_desc), ?{p}) > 0
             OR instr(lower(c.long_desc), ?{p}) > 0
             OR instr(lower(c.category_code), ?{p}) > 0"
        ));
    }

    params.push(Box::new(i64::try_from(limit).unwrap_or(i64::MAX)));
    let limit_param = params.len();

    let sql = format!(
        "SELECT {CODE_COLUMNS}
         {CODE_FROM}
         WHERE {where_clause}
         ORDER BY
            CASE
                WHEN ?1 <> '' AND c.code = ?1 THEN 0
                WHEN ?1 <> '' AND (instr(c.short_desc, ?1) > 0 OR instr(c.long_desc, ?1) > 0) THEN 1
                ELSE 2
            END,
            c.code
         LIMIT ?{limit_param}",
        where_clause = clauses.join("\n            OR "),
    );

    let mut stmt = conn.prepare(&sql).map_err(|e| to_query_err(e.to_string()))?;
    let param_refs: Vec<&dyn ToSql> = params.iter().map(|p| p.as_ref()).collect();

    let rows = stmt
        .query_map(param_refs.as_slice(), parse_code_row)
        .map_err(|e| to_query_err(e.to_string()))?;

    let mut results = Vec::new();
    for row in rows {
        results.push(row.map_err(|e| to_query_err(e.to_string()))?);
    }
    Ok(results)
}
