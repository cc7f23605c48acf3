use anyhow::{anyhow, Result};
use chrono::{Datelike, Days, NaiveDate};
use hijri_date::HijriDate;

/// Islamic month names in English (index 0 = Muharram = month 1)
const HIJRI_MONTH_NAMES: &[&str] = &[
    "Muharram",
    "Safar",
    "Rabi' al-Awwal",
    "Rabi' al-Thani",
    "Jumada al-Awwal",
    "Jumada al-Thani",
    "Rajab",
    "Sha'ban",
    "Ramadan",
    "Shawwal",
    "Dhu al-Qi'dah",
    "Dhu al-Hijjah",
];

fn hijri_month_name(month: usize) -> &'static str {
    if (1..=12).contains(&month) {
        HIJRI_MONTH_NAMES[month - 1]
    } else {
        "Unknown"
    }
}

/// Hijri rendering of a Gregorian date, e.g. "12 Ramadan 1445".
/// `offset_days` shifts the date for local moon sighting.
pub fn hijri_string(date: NaiveDate, offset_days: i32) -> Result<String> {
    let shifted = if offset_days >= 0 {
        date.checked_add_days(Days::new(offset_days as u64))
    } else {
        date.checked_sub_days(Days::new(offset_days.unsigned_abs() as u64))
    }
    .ok_or_else(|| anyhow!("Hijri offset {} out of range", offset_days))?;

    let hd = HijriDate::from_gr(
        shifted.year() as usize,
        shifted.month() as usize,
        shifted.day() as usize,
    )
    .map_err(|e| anyhow!("Hijri conversion error: {}", e))?;

    Ok(format!("{} {} {}", hd.day(), hijri_month_name(hd.month()), hd.year()))
}
