//! Idempotent upsert of one ingestion entry.

use rusqlite::{params, Connection};

use icd_core::errors::IcdResult;
use icd_core::models::CodeEntry;

use crate::to_storage_err;

/// Merge category and code, link CONTAINS, and link HAS_SUBCATEGORY from the
/// category code when that code is already stored.
/// Wrapped in a transaction: nodes and edges are all-or-nothing.
pub fn upsert_entry(conn: &Connection, entry: &CodeEntry) -> IcdResult<()> {
    let tx = conn
        .unchecked_transaction()
        .map_err(|e| to_storage_err(format!("upsert begin: {e}")))?;

    match upsert_entry_inner(&tx, entry) {
        Ok(linked) => {
            tx.commit()
                .map_err(|e| to_storage_err(format!("upsert commit: {e}")))?;
            tracing::debug!(
                code = %entry.full_code,
                category = %entry.category_name,
                hierarchy_linked = linked,
                "upserted code"
            );
            Ok(())
        }
        Err(e) => {
            let _ = tx.rollback();
            Err(e)
        }
    }
}

/// Returns true when a HAS_SUBCATEGORY edge now points at this code from its category code.
fn upsert_entry_inner(conn: &Connection, entry: &CodeEntry) -> IcdResult<bool> {
    conn.execute(
        "INSERT INTO categories (name) VALUES (?1)
         ON CONFLICT(name) DO UPDATE SET
            updated_at = strftime('%Y-%m-%dT%H:%M:%fZ', 'now')",
        params![entry.category_name],
    )
    .map_err(|e| to_storage_err(format!("merge category: {e}")))?;

    // category_code is fixed by the first upsert, like category membership.
    conn.execute(
        "INSERT INTO codes (code, category_code, subcategory, short_desc, long_desc)
         VALUES (?1, ?2, ?3, ?4, ?5)
         ON CONFLICT(code) DO UPDATE SET
            subcategory = excluded.subcategory,
            short_desc  = excluded.short_desc,
            long_desc   = excluded.long_desc,
            updated_at  = strftime('%Y-%m-%dT%H:%M:%fZ', 'now')",
        params![
            entry.full_code,
            entry.category_code,
            entry.subcategory,
            entry.short_desc,
            entry.long_desc,
        ],
    )
    .map_err(|e| to_storage_err(format!("merge code: {e}")))?;

    conn.execute(
        "INSERT OR IGNORE INTO category_members (code, category_name) VALUES (?1, ?2)",
        params![entry.full_code, entry.category_name],
    )
    .map_err(|e| to_storage_err(format!("link contains: {e}")))?;

    // Only an existing, strictly shorter code that prefixes this one can be a parent.
    conn.execute(
        "INSERT OR IGNORE INTO code_hierarchy (parent_code, child_code)
         SELECT p.code, ?2 FROM codes p
         WHERE p.code = ?1
           AND p.code <> ?2
           AND length(?2) > length(p.code)
           AND substr(?2, 1, length(p.code)) = p.code",
        params![entry.category_code, entry.full_code],
    )
    .map_err(|e| to_storage_err(format!("link hierarchy: {e}")))?;

    let linked: bool = conn
        .query_row(
            "SELECT EXISTS(
                SELECT 1 FROM code_hierarchy WHERE parent_code = ?1 AND child_code = ?2
             )",
            params![entry.category_code, entry.full_code],
            |row| row.get(0),
        )
        .map_err(|e| to_storage_err(format!("check hierarchy: {e}")))?;

    Ok(linked)
}
