//! Shared column list and row mapping for code records.

use rusqlite::Row;

use icd_core::models::{CodeRecord, IcdCode};

/// Columns selected by every code read. `c` is `codes`, `b` is the `code_categories` view.
pub(crate) const CODE_COLUMNS: &str =
    "c.code, c.category_code, c.subcategory, c.short_desc, c.long_desc, b.category_name";

/// FROM clause matching [`CODE_COLUMNS`].
pub(crate) const CODE_FROM: &str =
    "FROM codes c LEFT JOIN code_categories b ON b.code = c.code";

pub(crate) fn parse_code_row(row: &Row<'_>) -> rusqlite::Result<CodeRecord> {
    Ok(CodeRecord {
        code: IcdCode {
            code: row.get(0)?,
            category_code: row.get(1)?,
            subcategory: row.get(2)?,
            short_desc: row.get(3)?,
            long_desc: row.get(4)?,
        },
        category_name: row.get(5)?,
    })
}
