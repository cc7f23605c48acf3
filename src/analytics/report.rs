use chrono::NaiveDate;

use crate::analytics::statistics::build_statistics;
use crate::config::ReportConfig;
use crate::models::{History, PrayerStats, PrayerType};

/// Render statistics as a short text block. Rates are rounded half away
/// from zero, so 62.5 shows as 63%.
pub fn format_report(label: &str, stats: &PrayerStats) -> String {
    if stats.total_days == 0 {
        return format!("{} Report: No data for this period.", label);
    }

    let mut out = format!(
        "{} Report:\n\
         • Fully completed days: {}/{}\n\
         • Quran consistency: {} days\n\
         \n\
         Prayer Completion:\n",
        label, stats.fully_completed_days, stats.total_days, stats.quran_days
    );
    for prayer in PrayerType::all() {
        out.push_str(&format!(
            "• {}: {}%  ({} missed)\n",
            prayer.display_name(),
            stats.rate(prayer).round(),
            stats.missed(prayer)
        ));
    }
    out
}

/// Weekly and monthly summaries side by side.
#[derive(Debug, Clone, PartialEq)]
pub struct InsightReport {
    pub weekly: PrayerStats,
    pub monthly: PrayerStats,
    pub weekly_summary: String,
    pub monthly_summary: String,
}

impl InsightReport {
    pub fn build(history: &History, today: NaiveDate, config: &ReportConfig) -> Self {
        let weekly = build_statistics(history, today, config.weekly_days, config.completion);
        let monthly = build_statistics(history, today, config.monthly_days, config.completion);
        Self {
            weekly_summary: format_report("Weekly", &weekly),
            monthly_summary: format_report("Monthly", &monthly),
            weekly,
            monthly,
        }
    }
}
