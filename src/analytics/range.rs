use chrono::{Datelike, Days, NaiveDate, Weekday};
use serde::Serialize;

use crate::models::{Activity, DailyProgress, History, PrayerType};

/// Inclusive calendar range `[start, end]`. Empty when `start > end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Monday through Sunday of the ISO week containing `reference`.
    pub fn iso_week(reference: NaiveDate) -> Self {
        let back = reference.weekday().num_days_from_monday() as u64;
        let start = reference
            .checked_sub_days(Days::new(back))
            .unwrap_or(NaiveDate::MIN);
        Self::seven_days_from(start)
    }

    /// A given ISO week of a given ISO year. `None` if the week does not exist.
    pub fn from_iso_week(year: i32, week: u32) -> Option<Self> {
        NaiveDate::from_isoywd_opt(year, week, Weekday::Mon).map(Self::seven_days_from)
    }

    /// First through last day of the calendar month containing `reference`.
    pub fn month(reference: NaiveDate) -> Self {
        let start = reference.with_day(1).unwrap_or(reference);
        let (year, month) = if reference.month() == 12 {
            (reference.year() + 1, 1)
        } else {
            (reference.year(), reference.month() + 1)
        };
        let end = NaiveDate::from_ymd_opt(year, month, 1)
            .and_then(|next| next.pred_opt())
            .unwrap_or(NaiveDate::MAX);
        Self { start, end }
    }

    /// The `days` most recent days ending at `today`, inclusive.
    pub fn trailing(today: NaiveDate, days: u32) -> Self {
        if days == 0 {
            // start after end: contains nothing
            let start = today.succ_opt().unwrap_or(NaiveDate::MAX);
            return Self { start, end: today };
        }
        let start = today
            .checked_sub_days(Days::new(u64::from(days - 1)))
            .unwrap_or(NaiveDate::MIN);
        Self { start, end: today }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }

    fn seven_days_from(start: NaiveDate) -> Self {
        let end = start.checked_add_days(Days::new(6)).unwrap_or(NaiveDate::MAX);
        Self { start, end }
    }
}

/// Records whose key parses to a date inside `range`.
pub fn records_in<'a>(
    history: &'a History,
    range: DateRange,
) -> impl Iterator<Item = &'a DailyProgress> + 'a {
    history
        .dated()
        .filter(move |(date, _)| range.contains(*date))
        .map(|(_, progress)| progress)
}

/// Number of days with a record under a well-formed date key.
pub fn total_days_tracked(history: &History) -> usize {
    history.dated().count()
}

/// Per-activity completion over a range, each value in 0–100.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActivityBreakdown {
    /// Records the averages were taken over.
    pub days: u32,
    pub subuh: f64,
    pub zohor: f64,
    pub asar: f64,
    pub maghrib: f64,
    pub isya: f64,
    pub quran: f64,
    pub zikr: f64,
}

impl ActivityBreakdown {
    pub fn percent(&self, activity: Activity) -> f64 {
        match activity {
            Activity::Prayer(PrayerType::Subuh) => self.subuh,
            Activity::Prayer(PrayerType::Zohor) => self.zohor,
            Activity::Prayer(PrayerType::Asar) => self.asar,
            Activity::Prayer(PrayerType::Maghrib) => self.maghrib,
            Activity::Prayer(PrayerType::Isya) => self.isya,
            Activity::Quran => self.quran,
            Activity::Zikr => self.zikr,
        }
    }

    /// All seven activities in display order.
    pub fn entries(&self) -> Vec<(Activity, f64)> {
        Activity::all()
            .into_iter()
            .map(|a| (a, self.percent(a)))
            .collect()
    }
}

/// Average completion of every activity over the records in `range`.
///
/// Returns `None` when the range holds no records; callers should show
/// "no data" rather than 0%.
pub fn compute_range_breakdown(history: &History, range: DateRange) -> Option<ActivityBreakdown> {
    let records: Vec<&DailyProgress> = records_in(history, range).collect();
    if records.is_empty() {
        log::debug!("no records between {} and {}", range.start, range.end);
        return None;
    }

    let n = records.len() as f64;
    let avg = |f: &dyn Fn(&DailyProgress) -> f64| records.iter().map(|p| f(*p)).sum::<f64>() / n;
    let prayer = |pt: PrayerType| avg(&|p: &DailyProgress| if p.prayer(pt) { 100.0 } else { 0.0 });

    Some(ActivityBreakdown {
        days: records.len() as u32,
        subuh: prayer(PrayerType::Subuh),
        zohor: prayer(PrayerType::Zohor),
        asar: prayer(PrayerType::Asar),
        maghrib: prayer(PrayerType::Maghrib),
        isya: prayer(PrayerType::Isya),
        quran: avg(&DailyProgress::quran_percent),
        zikr: avg(&DailyProgress::zikr_percent),
    })
}

/// Average prayer completion percent over the records in `range`.
pub fn overall_percent(history: &History, range: DateRange) -> Option<f64> {
    let percents: Vec<f64> = records_in(history, range)
        .map(DailyProgress::completion_percent)
        .collect();
    if percents.is_empty() {
        return None;
    }
    Some(percents.iter().sum::<f64>() / percents.len() as f64)
}
