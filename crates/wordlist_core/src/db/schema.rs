//! Schema definition and version policy for the word store.
//!
//! # Responsibility
//! - Create `word_table` on fresh databases.
//! - Destructively rebuild the table when the persisted version differs from
//!   `SCHEMA_VERSION`.
//!
//! # Invariants
//! - `PRAGMA user_version` equals `SCHEMA_VERSION` after `prepare_schema`.
//! - There is no field-level migration: a version mismatch discards all
//!   stored words by policy, it is not an error path.

use crate::db::DbResult;
use log::warn;
use rusqlite::Connection;

/// Version stamp for the current schema. Bumping this wipes existing stores
/// on next open.
pub const SCHEMA_VERSION: u32 = 1;

pub(crate) const WORD_TABLE: &str = "word_table";
pub(crate) const WORD_COLUMN: &str = "word";

const SCHEMA_SQL: &str = "CREATE TABLE word_table (
    word TEXT PRIMARY KEY NOT NULL
) WITHOUT ROWID;";

/// Brings the connection to the current schema.
///
/// - `user_version == 0`: fresh database, create the table.
/// - `user_version == SCHEMA_VERSION`: nothing to do.
/// - anything else (older or newer): drop and recreate empty.
///
/// The rebuild runs in one transaction, so a crash mid-way leaves either the
/// old schema or the new one, never a half-built table.
pub fn prepare_schema(conn: &mut Connection) -> DbResult<()> {
    let persisted = current_user_version(conn)?;
    if persisted == SCHEMA_VERSION {
        return Ok(());
    }

    let tx = conn.transaction()?;
    if persisted != 0 {
        warn!(
            "event=schema_rebuild module=db status=ok persisted_version={persisted} \
             expected_version={SCHEMA_VERSION} policy=destructive_recreate"
        );
        tx.execute_batch("DROP TABLE IF EXISTS word_table;")?;
    }
    tx.execute_batch(SCHEMA_SQL)?;
    tx.execute_batch(&format!("PRAGMA user_version = {SCHEMA_VERSION};"))?;
    tx.commit()?;

    Ok(())
}

pub(crate) fn current_user_version(conn: &Connection) -> DbResult<u32> {
    let version = conn.query_row("PRAGMA user_version;", [], |row| row.get::<_, u32>(0))?;
    Ok(version)
}
