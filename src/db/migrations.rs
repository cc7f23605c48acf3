use rusqlite::Connection;

use crate::db::repository::MetaRepo;
use crate::db::StoreError;

pub const SCHEMA_VERSION: &str = "1";

pub fn run_migrations(conn: &Connection) -> Result<(), StoreError> {
    conn.execute_batch("
        CREATE TABLE IF NOT EXISTS progress (
            date        TEXT PRIMARY KEY,
            subuh       INTEGER NOT NULL DEFAULT 0,
            zohor       INTEGER NOT NULL DEFAULT 0,
            asar        INTEGER NOT NULL DEFAULT 0,
            maghrib     INTEGER NOT NULL DEFAULT 0,
            isya        INTEGER NOT NULL DEFAULT 0,
            quran       INTEGER NOT NULL DEFAULT 0,
            quran_page  INTEGER NOT NULL DEFAULT 0,
            zikr        INTEGER NOT NULL DEFAULT 0,
            updated_at  TEXT DEFAULT (datetime('now'))
        );

        CREATE TABLE IF NOT EXISTS app_meta (
            key    TEXT PRIMARY KEY,
            value  TEXT NOT NULL
        );
    ")?;
    MetaRepo::set(conn, "schema_version", SCHEMA_VERSION)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn migrations_are_idempotent_and_record_version() {
        let conn = Connection::open_in_memory().unwrap();
        run_migrations(&conn).unwrap();
        run_migrations(&conn).unwrap();
        assert_eq!(
            MetaRepo::get(&conn, "schema_version").unwrap().as_deref(),
            Some(SCHEMA_VERSION)
        );
    }
}
