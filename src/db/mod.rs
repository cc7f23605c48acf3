//! Record store adapter.
//!
//! Analytics never talk to storage; callers fetch a [`History`] through a
//! [`HistoryStore`] and hand the snapshot over.

pub mod migrations;
pub mod repository;

pub use repository::{MetaRepo, ProgressRepo, SqliteStore};

use chrono::NaiveDate;
use thiserror::Error;

use crate::models::{parse_date_key, DailyProgress, History};

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid date key {0:?}, expected YYYY-MM-DD")]
    InvalidDateKey(String),
}

/// Date-keyed record store: get one, get all, put.
pub trait HistoryStore {
    /// Every stored record. An empty history means there is no data.
    fn fetch_all(&self) -> Result<History, StoreError>;

    fn fetch_one(&self, date: NaiveDate) -> Result<Option<DailyProgress>, StoreError>;

    /// Insert or replace the record for `date`.
    fn put(&self, date: NaiveDate, progress: &DailyProgress) -> Result<(), StoreError>;
}

/// Fetch the full history, treating any store failure as "no data".
pub fn load_history(store: &dyn HistoryStore) -> History {
    match store.fetch_all() {
        Ok(history) => {
            if history.is_empty() {
                log::debug!("store returned no data");
            }
            history
        }
        Err(e) => {
            log::warn!("failed to fetch history, continuing with no data: {}", e);
            History::new()
        }
    }
}

/// Record for `date`, or the all-false placeholder when nothing is stored.
pub fn load_day(store: &dyn HistoryStore, date: NaiveDate) -> Result<DailyProgress, StoreError> {
    Ok(store.fetch_one(date)?.unwrap_or_default())
}

/// Store a record under a raw string key, rejecting keys that are not a
/// zero-padded `YYYY-MM-DD` date.
pub fn put_keyed(
    store: &dyn HistoryStore,
    key: &str,
    progress: &DailyProgress,
) -> Result<NaiveDate, StoreError> {
    let date = parse_date_key(key).ok_or_else(|| StoreError::InvalidDateKey(key.to_string()))?;
    store.put(date, progress)?;
    Ok(date)
}

/// Copy every well-formed entry of `history` into `store`. Returns how many
/// were written; malformed keys are skipped.
pub fn import_history(store: &dyn HistoryStore, history: &History) -> Result<usize, StoreError> {
    let mut written = 0;
    for (key, progress) in history.iter() {
        match put_keyed(store, key, progress) {
            Ok(_) => written += 1,
            Err(StoreError::InvalidDateKey(key)) => {
                log::warn!("skipping entry with unparsable date key {:?}", key)
            }
            Err(e) => return Err(e),
        }
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingStore;

    impl HistoryStore for FailingStore {
        fn fetch_all(&self) -> Result<History, StoreError> {
            Err(StoreError::Io(std::io::Error::other("offline")))
        }

        fn fetch_one(&self, _date: NaiveDate) -> Result<Option<DailyProgress>, StoreError> {
            Err(StoreError::Io(std::io::Error::other("offline")))
        }

        fn put(&self, _date: NaiveDate, _progress: &DailyProgress) -> Result<(), StoreError> {
            Err(StoreError::Io(std::io::Error::other("offline")))
        }
    }

    #[test]
    fn failed_fetch_is_no_data() {
        let history = load_history(&FailingStore);
        assert!(history.is_empty());
    }

    #[test]
    fn import_skips_malformed_keys() {
        let store = SqliteStore::open_in_memory().unwrap();
        let mut history = History::new();
        history.insert("2024-04-01", DailyProgress { subuh: true, ..Default::default() });
        history.insert("2024-04-02", DailyProgress::default());
        history.insert("April 3rd", DailyProgress::default());

        assert_eq!(import_history(&store, &history).unwrap(), 2);
        let stored = store.fetch_all().unwrap();
        assert_eq!(stored.len(), 2);
        assert!(stored.iter().all(|(key, _)| key != "April 3rd"));
    }

    #[test]
    fn put_keyed_rejects_unpadded_keys() {
        let store = SqliteStore::open_in_memory().unwrap();
        let err = put_keyed(&store, "2024-4-1", &DailyProgress::default()).unwrap_err();
        assert!(matches!(err, StoreError::InvalidDateKey(ref key) if key == "2024-4-1"));
        assert!(store.fetch_all().unwrap().is_empty());

        let date = put_keyed(&store, "2024-04-01", &DailyProgress::default()).unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 4, 1).unwrap());
    }

    #[test]
    fn import_stops_on_store_failure() {
        let mut history = History::new();
        history.insert("2024-04-01", DailyProgress::default());
        assert!(matches!(
            import_history(&FailingStore, &history),
            Err(StoreError::Io(_))
        ));
    }

    #[test]
    fn load_day_defaults_to_placeholder() {
        let store = SqliteStore::open_in_memory().unwrap();
        let date = NaiveDate::from_ymd_opt(2024, 4, 1).unwrap();
        assert_eq!(load_day(&store, date).unwrap(), DailyProgress::default());
    }
}
