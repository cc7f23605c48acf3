use chrono::NaiveDate;

use crate::analytics::range::{records_in, DateRange};
use crate::models::{Completion, History, PrayerStats, PrayerType};

/// Prayer statistics over the `window_days` days ending at `today`.
///
/// `completion` decides what a "fully completed" day means; there is no
/// default because different reports ask for different things.
pub fn build_statistics(
    history: &History,
    today: NaiveDate,
    window_days: u32,
    completion: Completion,
) -> PrayerStats {
    let window = DateRange::trailing(today, window_days);
    let mut stats = PrayerStats::default();

    for progress in records_in(history, window) {
        stats.total_days += 1;
        if progress.is_complete(completion) {
            stats.fully_completed_days += 1;
        }
        if progress.quran {
            stats.quran_days += 1;
        }
        for prayer in PrayerType::all() {
            if !progress.prayer(prayer) {
                stats.record_miss(prayer);
            }
        }
    }

    log::debug!(
        "{} day window ending {}: {} tracked, {} complete ({:?})",
        window_days,
        today,
        stats.total_days,
        stats.fully_completed_days,
        completion
    );
    stats
}

/// [`build_statistics`] for the window ending today (local date).
pub fn build_statistics_now(
    history: &History,
    window_days: u32,
    completion: Completion,
) -> PrayerStats {
    build_statistics(history, chrono::Local::now().date_naive(), window_days, completion)
}
