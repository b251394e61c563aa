//! Word repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide ordered read, insert-if-absent and clear over `word_table`.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - Write paths call `Word::validate()` before SQL mutations.
//! - `list_words_ordered` returns words sorted ascending by byte order
//!   (SQLite BINARY collation), matching the table's primary key order.

use crate::db::schema::{current_user_version, SCHEMA_VERSION, WORD_COLUMN, WORD_TABLE};
use crate::db::DbError;
use crate::model::word::{Word, WordValidationError};
use rusqlite::Connection;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for word persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Validation(WordValidationError),
    Db(DbError),
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    MissingRequiredTable(&'static str),
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection schema version {actual_version} does not match expected \
                 {expected_version}; run db::open_db to prepare it"
            ),
            Self::MissingRequiredTable(table) => {
                write!(f, "required table `{table}` does not exist")
            }
            Self::MissingRequiredColumn { table, column } => {
                write!(f, "required column `{table}.{column}` does not exist")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<WordValidationError> for RepoError {
    fn from(value: WordValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for word persistence.
///
/// Storage faults fail the single call that hit them; the connection stays
/// usable for subsequent operations.
pub trait WordRepository {
    /// Inserts a word, ignoring it silently when the text already exists.
    ///
    /// Returns `Ok(true)` when a new row was written, `Ok(false)` for the
    /// duplicate no-op. Callers that republish snapshots use the flag to
    /// skip emissions that would be identical to the previous one.
    fn insert_word(&self, word: &Word) -> RepoResult<bool>;

    /// Returns all words sorted ascending by text.
    fn list_words_ordered(&self) -> RepoResult<Vec<Word>>;

    /// Removes every word.
    fn clear_words(&self) -> RepoResult<()>;
}

/// SQLite-backed word repository.
pub struct SqliteWordRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteWordRepository<'conn> {
    /// Wraps a connection after verifying its schema was prepared.
    ///
    /// Rejects connections that skipped `db::open_db` / `prepare_schema`, so
    /// that query errors later on cannot be mistaken for data corruption.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        let actual_version = current_user_version(conn)?;
        if actual_version != SCHEMA_VERSION {
            return Err(RepoError::UninitializedConnection {
                expected_version: SCHEMA_VERSION,
                actual_version,
            });
        }

        if !table_exists(conn, WORD_TABLE)? {
            return Err(RepoError::MissingRequiredTable(WORD_TABLE));
        }
        if !column_exists(conn, WORD_TABLE, WORD_COLUMN)? {
            return Err(RepoError::MissingRequiredColumn {
                table: WORD_TABLE,
                column: WORD_COLUMN,
            });
        }

        Ok(Self { conn })
    }
}

impl WordRepository for SqliteWordRepository<'_> {
    fn insert_word(&self, word: &Word) -> RepoResult<bool> {
        word.validate()?;

        let changed = self.conn.execute(
            "INSERT OR IGNORE INTO word_table (word) VALUES (?1);",
            [word.text.as_str()],
        )?;

        Ok(changed > 0)
    }

    fn list_words_ordered(&self) -> RepoResult<Vec<Word>> {
        let mut stmt = self
            .conn
            .prepare("SELECT word FROM word_table ORDER BY word ASC;")?;
        let mut rows = stmt.query([])?;
        let mut words = Vec::new();

        while let Some(row) = rows.next()? {
            words.push(Word {
                text: row.get("word")?,
            });
        }

        Ok(words)
    }

    fn clear_words(&self) -> RepoResult<()> {
        self.conn.execute("DELETE FROM word_table;", [])?;
        Ok(())
    }
}

fn table_exists(conn: &Connection, table_name: &str) -> RepoResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [table_name],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}

fn column_exists(conn: &Connection, table_name: &str, column_name: &str) -> RepoResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM pragma_table_info(?1)
            WHERE name = ?2
        );",
        [table_name, column_name],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}
