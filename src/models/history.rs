use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::models::DailyProgress;

pub const DATE_KEY_FORMAT: &str = "%Y-%m-%d";

/// Format a date as a history key (`YYYY-MM-DD`).
pub fn date_key(date: NaiveDate) -> String {
    date.format(DATE_KEY_FORMAT).to_string()
}

/// Parse a history key. Only zero-padded `YYYY-MM-DD` keys are accepted, so
/// every parsed date maps back to exactly the key it came from.
pub fn parse_date_key(key: &str) -> Option<NaiveDate> {
    let date = NaiveDate::parse_from_str(key, DATE_KEY_FORMAT).ok()?;
    (date_key(date) == key).then_some(date)
}

/// Sparse date key → record mapping, as fetched from the store.
///
/// Keys are kept verbatim; malformed ones survive a fetch but are skipped by
/// everything that reads dates. An absent key means "no data that day".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct History {
    entries: HashMap<String, DailyProgress>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, progress: DailyProgress) {
        self.entries.insert(key.into(), progress);
    }

    pub fn insert_date(&mut self, date: NaiveDate, progress: DailyProgress) {
        self.entries.insert(date_key(date), progress);
    }

    /// Keyed lookup; no scan over the map.
    pub fn get(&self, date: NaiveDate) -> Option<&DailyProgress> {
        self.entries.get(&date_key(date))
    }

    /// Number of raw keys, malformed ones included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Raw entries in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &DailyProgress)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Entries whose key parses as a date, in no particular order.
    pub fn dated(&self) -> impl Iterator<Item = (NaiveDate, &DailyProgress)> {
        self.entries.iter().filter_map(|(key, progress)| match parse_date_key(key) {
            Some(date) => Some((date, progress)),
            None => {
                log::debug!("skipping unparsable date key {:?}", key);
                None
            }
        })
    }

    /// Dated entries sorted oldest first.
    pub fn chronological(&self) -> Vec<(NaiveDate, &DailyProgress)> {
        let mut entries: Vec<_> = self.dated().collect();
        entries.sort_by_key(|(date, _)| *date);
        entries
    }

    /// Parse the store's JSON shape. `null` or a blank body is an empty history.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        if json.trim().is_empty() {
            return Ok(Self::new());
        }
        let parsed: Option<History> = serde_json::from_str(json)?;
        Ok(parsed.unwrap_or_default())
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        // Sorted output keeps exports diffable.
        let sorted: std::collections::BTreeMap<&String, &DailyProgress> =
            self.entries.iter().collect();
        serde_json::to_string_pretty(&sorted)
    }
}

impl FromIterator<(String, DailyProgress)> for History {
    fn from_iter<I: IntoIterator<Item = (String, DailyProgress)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
