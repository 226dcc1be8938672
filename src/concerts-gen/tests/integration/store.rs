use std::env::temp_dir;
use std::fs;

use concerts_gen::db::Store;
use concerts_gen::db::TABLE_ARTISTS;
use concerts_gen::db::TABLE_SHOWS;
use concerts_gen::db::TABLE_VENUES;
use uuid::Uuid;

#[test]
fn test_reset_is_idempotent() {
    let path = temp_dir().join(format!("{}.sqlite3", Uuid::new_v4()));
    {
        let store = Store::open(&path).unwrap();
        store.create_tables().unwrap();
        store.reset().unwrap();
        store.reset().unwrap();
    }

    let store = Store::open(&path).unwrap();
    for table in [TABLE_ARTISTS, TABLE_VENUES, TABLE_SHOWS] {
        assert!(!store.table_exists(table).unwrap());
    }
    drop(store);
    fs::remove_file(&path).unwrap();
}

#[test]
fn test_reset_on_new_file() {
    let path = temp_dir().join(format!("{}.sqlite3", Uuid::new_v4()));
    let store = Store::open(&path).unwrap();
    store.reset().unwrap();

    assert!(!store.table_exists(TABLE_SHOWS).unwrap());
    drop(store);
    fs::remove_file(&path).unwrap();
}
