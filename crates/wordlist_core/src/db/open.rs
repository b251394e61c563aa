//! Connection bootstrap utilities for SQLite.
//!
//! # Responsibility
//! - Open file or in-memory SQLite connections.
//! - Configure connection pragmas required by core behavior.
//! - Run the schema policy before returning a usable connection.
//!
//! # Invariants
//! - Returned connections have the schema fully prepared.

use super::schema::prepare_schema;
use super::DbResult;
use log::{error, info};
use rusqlite::Connection;
use std::path::Path;
use std::time::{Duration, Instant};

/// Opens a SQLite database file and prepares the word schema.
///
/// # Side effects
/// - May destructively rebuild the schema (see `db::schema`).
/// - Emits `db_open` logging events with duration and status.
pub fn open_db(path: impl AsRef<Path>) -> DbResult<Connection> {
    let started_at = Instant::now();
    info!("event=db_open module=db status=start mode=file");

    let conn = Connection::open(path).map_err(|err| {
        error!(
            "event=db_open module=db status=error mode=file duration_ms={} \
             error_code=db_open_failed error={err}",
            started_at.elapsed().as_millis()
        );
        err
    })?;

    finish_open(conn, started_at, "file")
}

/// Opens an in-memory SQLite database and prepares the word schema.
///
/// # Side effects
/// - Emits `db_open` logging events with duration and status.
pub fn open_db_in_memory() -> DbResult<Connection> {
    let started_at = Instant::now();
    info!("event=db_open module=db status=start mode=memory");

    let conn = Connection::open_in_memory().map_err(|err| {
        error!(
            "event=db_open module=db status=error mode=memory duration_ms={} \
             error_code=db_open_failed error={err}",
            started_at.elapsed().as_millis()
        );
        err
    })?;

    finish_open(conn, started_at, "memory")
}

fn finish_open(mut conn: Connection, started_at: Instant, mode: &str) -> DbResult<Connection> {
    match bootstrap_connection(&mut conn) {
        Ok(()) => {
            info!(
                "event=db_open module=db status=ok mode={mode} duration_ms={}",
                started_at.elapsed().as_millis()
            );
            Ok(conn)
        }
        Err(err) => {
            error!(
                "event=db_open module=db status=error mode={mode} duration_ms={} \
                 error_code=db_bootstrap_failed error={err}",
                started_at.elapsed().as_millis()
            );
            Err(err)
        }
    }
}

fn bootstrap_connection(conn: &mut Connection) -> DbResult<()> {
    conn.busy_timeout(Duration::from_secs(5))?;
    prepare_schema(conn)?;
    Ok(())
}
