use rusqlite::Connection;
use taskboard_core::db::migrations::latest_version;
use taskboard_core::db::{open_db, open_db_in_memory, DbError};
use taskboard_core::{MemorySlotStorage, SlotStorage, SqliteSlotStorage, StorageError};

#[test]
fn open_db_in_memory_applies_all_migrations() {
    let conn = open_db_in_memory().unwrap();

    assert_eq!(schema_version(&conn), latest_version());
    assert_table_exists(&conn, "storage_slots");
}

#[test]
fn opening_same_database_twice_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("taskboard.db");

    let conn_first = open_db(&path).unwrap();
    assert_eq!(schema_version(&conn_first), latest_version());
    drop(conn_first);

    let conn_second = open_db(&path).unwrap();
    assert_eq!(schema_version(&conn_second), latest_version());
    assert_table_exists(&conn_second, "storage_slots");
}

#[test]
fn opening_database_with_newer_schema_version_returns_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.db");

    let conn = Connection::open(&path).unwrap();
    conn.execute_batch("PRAGMA user_version = 999;").unwrap();
    drop(conn);

    match open_db(&path).unwrap_err() {
        DbError::UnsupportedSchemaVersion {
            db_version,
            latest_supported,
        } => {
            assert_eq!(db_version, 999);
            assert_eq!(latest_supported, latest_version());
        }
        other => panic!("unexpected error: {other}"),
    }

    let err = SqliteSlotStorage::open(&path).err().unwrap();
    assert!(matches!(err, StorageError::Db(DbError::UnsupportedSchemaVersion { .. })));
}

#[test]
fn sqlite_slot_read_write_and_remove() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("slots.db");
    let mut storage = SqliteSlotStorage::open(&path).unwrap();

    assert_eq!(storage.read_slot("tasks").unwrap(), None);

    storage.write_slot("tasks", "[]").unwrap();
    storage.write_slot("tasks", "[1]").unwrap();
    storage.write_slot("other", "x").unwrap();
    assert_eq!(storage.read_slot("tasks").unwrap().as_deref(), Some("[1]"));

    let rows: i64 = Connection::open(&path)
        .unwrap()
        .query_row("SELECT COUNT(*) FROM storage_slots;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(rows, 2);

    storage.remove_slot("tasks").unwrap();
    storage.remove_slot("tasks").unwrap();
    assert_eq!(storage.read_slot("tasks").unwrap(), None);
    assert_eq!(storage.read_slot("other").unwrap().as_deref(), Some("x"));
}

#[test]
fn sqlite_slot_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("slots.db");

    {
        let mut storage = SqliteSlotStorage::open(&path).unwrap();
        storage.write_slot("tasks", "persisted").unwrap();
    }

    let storage = SqliteSlotStorage::open(&path).unwrap();
    assert_eq!(
        storage.read_slot("tasks").unwrap().as_deref(),
        Some("persisted")
    );
}

#[test]
fn memory_slot_read_write_and_remove() {
    let mut storage = MemorySlotStorage::with_slot("tasks", "seed");
    assert_eq!(storage.read_slot("tasks").unwrap().as_deref(), Some("seed"));

    storage.write_slot("tasks", "next").unwrap();
    assert_eq!(storage.read_slot("tasks").unwrap().as_deref(), Some("next"));

    storage.remove_slot("tasks").unwrap();
    assert_eq!(storage.read_slot("tasks").unwrap(), None);
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
