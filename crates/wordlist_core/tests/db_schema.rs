use rusqlite::Connection;
use wordlist_core::db::schema::SCHEMA_VERSION;
use wordlist_core::db::{open_db, open_db_in_memory};
use wordlist_core::{SqliteWordRepository, Word, WordRepository};

#[test]
fn open_db_in_memory_prepares_current_schema() {
    let conn = open_db_in_memory().unwrap();

    assert_eq!(schema_version(&conn), SCHEMA_VERSION);
    assert_table_exists(&conn, "word_table");
}

#[test]
fn opening_same_database_twice_preserves_rows() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("words.db");

    let conn_first = open_db(&path).unwrap();
    let repo = SqliteWordRepository::try_new(&conn_first).unwrap();
    repo.insert_word(&Word::new("keep").unwrap()).unwrap();
    drop(repo);
    drop(conn_first);

    let conn_second = open_db(&path).unwrap();
    assert_eq!(schema_version(&conn_second), SCHEMA_VERSION);

    let repo = SqliteWordRepository::try_new(&conn_second).unwrap();
    let words = repo.list_words_ordered().unwrap();
    assert_eq!(words, vec![Word::new("keep").unwrap()]);
}

#[test]
fn version_mismatch_discards_prior_contents() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("stale.db");

    let conn = open_db(&path).unwrap();
    let repo = SqliteWordRepository::try_new(&conn).unwrap();
    repo.insert_word(&Word::new("doomed").unwrap()).unwrap();
    drop(repo);
    drop(conn);

    // Simulate a database written under a different schema version.
    let raw = Connection::open(&path).unwrap();
    raw.execute_batch("PRAGMA user_version = 999;").unwrap();
    drop(raw);

    let conn = open_db(&path).unwrap();
    assert_eq!(schema_version(&conn), SCHEMA_VERSION);
    assert_table_exists(&conn, "word_table");

    let repo = SqliteWordRepository::try_new(&conn).unwrap();
    assert!(repo.list_words_ordered().unwrap().is_empty());
}

fn schema_version(conn: &Connection) -> u32 {
    conn.query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap()
}

fn assert_table_exists(conn: &Connection, table_name: &str) {
    let exists: i64 = conn
        .query_row(
            "SELECT EXISTS(
                SELECT 1
                FROM sqlite_master
                WHERE type = 'table' AND name = ?1
            );",
            [table_name],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(exists, 1, "table {table_name} does not exist");
}
