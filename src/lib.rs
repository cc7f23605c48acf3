//! Daily prayer, Quran and zikr checklist with streaks, breakdowns and
//! insights computed from a date-keyed history.

pub mod analytics;
pub mod config;
pub mod db;
pub mod models;
pub mod utils;
