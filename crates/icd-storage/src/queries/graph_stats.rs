//! Node and edge totals.

use rusqlite::Connection;

use icd_core::errors::IcdResult;
use icd_core::models::GraphCounts;

use crate::to_query_err;

pub fn counts(conn: &Connection) -> IcdResult<GraphCounts> {
    conn.query_row(
        "SELECT
            (SELECT COUNT(*) FROM categories),
            (SELECT COUNT(*) FROM codes),
            (SELECT COUNT(*) FROM category_members),
            (SELECT COUNT(*) FROM code_hierarchy)",
        [],
        |row| {
            Ok(GraphCounts {
                categories: row.get::<_, i64>(0)? as usize,
                codes: row.get::<_, i64>(1)? as usize,
                contains_edges: row.get::<_, i64>(2)? as usize,
                hierarchy_edges: row.get::<_, i64>(3)? as usize,
            })
        },
    )
    .map_err(|e| to_query_err(e.to_string()))
}
