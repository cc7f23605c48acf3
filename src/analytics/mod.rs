//! Pure computations over a fetched [`History`](crate::models::History).
//!
//! Nothing here performs I/O or mutates its input, so any of these may run
//! side by side over the same snapshot.

pub mod insight;
pub mod range;
pub mod report;
pub mod statistics;
pub mod streak;

pub use insight::{detect_insight, Improvement, Insight};
pub use range::{
    compute_range_breakdown, overall_percent, records_in, total_days_tracked, ActivityBreakdown,
    DateRange,
};
pub use report::{format_report, InsightReport};
pub use statistics::{build_statistics, build_statistics_now};
pub use streak::{best_streak, compute_streak, current_streak, streak_summary};
