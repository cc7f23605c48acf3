use chrono::NaiveDate;
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::path::Path;

use crate::db::migrations::run_migrations;
use crate::db::{HistoryStore, StoreError};
use crate::models::{date_key, DailyProgress, History};

// ─── Progress repo ───────────────────────────────────────────────────────────

pub struct ProgressRepo;

/// Reads the eight progress columns starting at column `at`.
fn progress_from_row(row: &Row<'_>, at: usize) -> rusqlite::Result<DailyProgress> {
    Ok(DailyProgress {
        subuh: row.get(at)?,
        zohor: row.get(at + 1)?,
        asar: row.get(at + 2)?,
        maghrib: row.get(at + 3)?,
        isya: row.get(at + 4)?,
        quran: row.get(at + 5)?,
        quran_page: row.get(at + 6)?,
        zikr: row.get(at + 7)?,
    })
}

impl ProgressRepo {
    pub fn get(conn: &Connection, key: &str) -> Result<Option<DailyProgress>, StoreError> {
        conn.query_row(
            "SELECT subuh, zohor, asar, maghrib, isya, quran, quran_page, zikr
             FROM progress WHERE date = ?1",
            params![key],
            |row| progress_from_row(row, 0),
        )
        .optional()
        .map_err(StoreError::from)
    }

    pub fn get_all(conn: &Connection) -> Result<History, StoreError> {
        let mut stmt = conn.prepare(
            "SELECT date, subuh, zohor, asar, maghrib, isya, quran, quran_page, zikr
             FROM progress",
        )?;

        let rows = stmt.query_map([], |row| {
            let date: String = row.get(0)?;
            Ok((date, progress_from_row(row, 1)?))
        })?;

        rows.collect::<rusqlite::Result<History>>()
            .map_err(StoreError::from)
    }

    pub fn upsert(conn: &Connection, key: &str, p: &DailyProgress) -> Result<(), StoreError> {
        conn.execute(
            "INSERT INTO progress (date, subuh, zohor, asar, maghrib, isya, quran, quran_page, zikr)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
             ON CONFLICT(date) DO UPDATE SET
               subuh = ?2, zohor = ?3, asar = ?4, maghrib = ?5, isya = ?6,
               quran = ?7, quran_page = ?8, zikr = ?9, updated_at = datetime('now')",
            params![key, p.subuh, p.zohor, p.asar, p.maghrib, p.isya, p.quran, p.quran_page, p.zikr],
        )?;
        Ok(())
    }

    pub fn count(conn: &Connection) -> Result<i64, StoreError> {
        conn.query_row("SELECT COUNT(*) FROM progress", [], |row| row.get(0))
            .map_err(StoreError::from)
    }
}

// ─── Meta repo ───────────────────────────────────────────────────────────────

pub struct MetaRepo;

impl MetaRepo {
    pub fn get(conn: &Connection, key: &str) -> Result<Option<String>, StoreError> {
        conn.query_row(
            "SELECT value FROM app_meta WHERE key = ?1",
            params![key],
            |row| row.get(0),
        )
        .optional()
        .map_err(StoreError::from)
    }

    pub fn set(conn: &Connection, key: &str, value: &str) -> Result<(), StoreError> {
        conn.execute(
            "INSERT INTO app_meta (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = ?2",
            params![key, value],
        )?;
        Ok(())
    }
}

// ─── SQLite store ────────────────────────────────────────────────────────────

/// [`HistoryStore`] backed by a local SQLite file.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        let conn = Connection::open(path)?;
        // WAL for better concurrent access
        conn.execute_batch("PRAGMA journal_mode=WAL;")?;
        Self::with_connection(conn)
    }

    pub fn open_in_memory() -> Result<Self, StoreError> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> Result<Self, StoreError> {
        run_migrations(&conn)?;
        Ok(Self { conn })
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}

impl HistoryStore for SqliteStore {
    fn fetch_all(&self) -> Result<History, StoreError> {
        let history = ProgressRepo::get_all(&self.conn)?;
        log::debug!("fetched {} records", history.len());
        Ok(history)
    }

    fn fetch_one(&self, date: NaiveDate) -> Result<Option<DailyProgress>, StoreError> {
        ProgressRepo::get(&self.conn, &date_key(date))
    }

    fn put(&self, date: NaiveDate, progress: &DailyProgress) -> Result<(), StoreError> {
        ProgressRepo::upsert(&self.conn, &date_key(date), progress)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn put_then_fetch_one() {
        let store = SqliteStore::open_in_memory().unwrap();
        let progress = DailyProgress {
            subuh: true,
            isya: true,
            quran: true,
            quran_page: 40,
            zikr: 12,
            ..Default::default()
        };
        store.put(d(2024, 2, 29), &progress).unwrap();

        assert_eq!(store.fetch_one(d(2024, 2, 29)).unwrap(), Some(progress));
        assert_eq!(store.fetch_one(d(2024, 3, 1)).unwrap(), None);
    }

    #[test]
    fn put_replaces_existing_day() {
        let store = SqliteStore::open_in_memory().unwrap();
        let day = d(2024, 1, 1);
        store.put(day, &DailyProgress { zikr: 5, ..Default::default() }).unwrap();
        store.put(day, &DailyProgress { zikr: 9, ..Default::default() }).unwrap();

        assert_eq!(ProgressRepo::count(store.connection()).unwrap(), 1);
        assert_eq!(store.fetch_one(day).unwrap().unwrap().zikr, 9);
    }

    #[test]
    fn fetch_all_keeps_raw_keys() {
        let store = SqliteStore::open_in_memory().unwrap();
        store.put(d(2024, 1, 1), &DailyProgress::default()).unwrap();
        ProgressRepo::upsert(store.connection(), "legacy-key", &DailyProgress::default()).unwrap();

        let history = store.fetch_all().unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history.dated().count(), 1);
    }

    #[test]
    fn meta_set_overwrites_value() {
        let store = SqliteStore::open_in_memory().unwrap();
        let conn = store.connection();
        assert_eq!(MetaRepo::get(conn, "last_import").unwrap(), None);
        MetaRepo::set(conn, "last_import", "2024-01-01").unwrap();
        MetaRepo::set(conn, "last_import", "2024-02-01").unwrap();
        assert_eq!(MetaRepo::get(conn, "last_import").unwrap().as_deref(), Some("2024-02-01"));
    }

    #[test]
    fn empty_store_is_no_data() {
        let store = SqliteStore::open_in_memory().unwrap();
        assert!(store.fetch_all().unwrap().is_empty());
    }

    #[test]
    fn reopening_file_keeps_records() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("imangrow.db");
        {
            let store = SqliteStore::open(&path).unwrap();
            store.put(d(2024, 5, 5), &DailyProgress { asar: true, ..Default::default() }).unwrap();
        }
        let store = SqliteStore::open(&path).unwrap();
        assert!(store.fetch_one(d(2024, 5, 5)).unwrap().unwrap().asar);
    }
}
