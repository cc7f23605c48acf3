use anyhow::{anyhow, Context, Result};
use chrono::{Datelike, Local, NaiveDate};
use std::path::Path;
use std::str::FromStr;

use imangrow::analytics::{
    build_statistics_now, compute_range_breakdown, current_streak, detect_insight, format_report,
    overall_percent, streak_summary, total_days_tracked, DateRange, Insight, InsightReport,
};
use imangrow::config::AppConfig;
use imangrow::db::{import_history, load_day, load_history, HistoryStore};
use imangrow::models::{Completion, DailyProgress, History, PrayerType, ZIKR_TARGET};
use imangrow::utils::format::{format_percent, percent_bar, progress_bar, tick};
use imangrow::utils::hijri::hijri_string;

// ─── ANSI helpers ────────────────────────────────────────────────────────────

macro_rules! println_colored {
    ($color:expr, $($arg:tt)*) => {{
        print!("{}", $color);
        print!($($arg)*);
        println!("\x1b[0m");
    }};
}

const GREEN: &str = "\x1b[32m";
const AMBER: &str = "\x1b[33m";
const DIM: &str = "\x1b[2m";
const BOLD: &str = "\x1b[1m";
const GOLD: &str = "\x1b[38;2;196;160;68m";

fn today() -> NaiveDate {
    Local::now().date_naive()
}

// ─── Today ───────────────────────────────────────────────────────────────────

pub fn handle_today(store: &dyn HistoryStore, config: &AppConfig) -> Result<()> {
    let today = today();
    let progress = load_day(store, today)?;
    let history = load_history(store);
    let streak = current_streak(&history);

    println!();
    println_colored!(GOLD, "  {}", today.format("%A, %d %b %Y"));
    match hijri_string(today, config.display.hijri_offset) {
        Ok(hijri) => println_colored!(DIM, "  {}", hijri),
        Err(e) => log::warn!("{}", e),
    }
    println!();

    for prayer in PrayerType::all() {
        let done = progress.prayer(prayer);
        let color = if done { GREEN } else { DIM };
        println_colored!(color, "  {}  {}", tick(done), prayer.display_name());
    }
    let quran_page = if progress.quran_page > 0 {
        format!(" (page {})", progress.quran_page)
    } else {
        String::new()
    };
    println_colored!(
        if progress.quran { GREEN } else { DIM },
        "  {}  Quran{}",
        tick(progress.quran),
        quran_page
    );
    println!(
        "     Zikr  {}  {}/{}",
        progress_bar(progress.zikr.max(0) as u32, ZIKR_TARGET as u32, 12),
        progress.zikr,
        ZIKR_TARGET
    );

    println!();
    println_colored!(
        BOLD,
        "  Prayers: {}  |  Streak: {} days",
        format_percent(progress.completion_percent()),
        streak
    );
    println!();
    Ok(())
}

// ─── Edits ───────────────────────────────────────────────────────────────────

fn edit_day(
    store: &dyn HistoryStore,
    date: Option<NaiveDate>,
    edit: impl FnOnce(&mut DailyProgress),
) -> Result<(NaiveDate, DailyProgress)> {
    let date = date.unwrap_or_else(today);
    let mut progress = load_day(store, date)?;
    edit(&mut progress);
    store
        .put(date, &progress)
        .with_context(|| format!("Saving progress for {}", date))?;
    Ok((date, progress))
}

pub fn handle_mark(
    store: &dyn HistoryStore,
    prayer_str: &str,
    undo: bool,
    date: Option<NaiveDate>,
) -> Result<()> {
    let prayer = PrayerType::from_str(prayer_str).map_err(|_| {
        anyhow!("Unknown prayer '{}'. Use: subuh, zohor, asar, maghrib, isya", prayer_str)
    })?;
    let (date, progress) = edit_day(store, date, |p| p.set_prayer(prayer, !undo))?;

    if undo {
        println_colored!(DIM, "  ○ {} unmarked for {}", prayer.display_name(), date);
    } else {
        println_colored!(GREEN, "  ✓ {} marked as prayed for {}", prayer.display_name(), date);
    }
    if progress.all_prayers_done() {
        println_colored!(GOLD, "  All five prayers done");
    }
    Ok(())
}

pub fn handle_quran(
    store: &dyn HistoryStore,
    page: Option<i32>,
    undo: bool,
    date: Option<NaiveDate>,
) -> Result<()> {
    if page.is_some_and(|p| p < 0) {
        return Err(anyhow!("Page must not be negative"));
    }
    let (date, progress) = edit_day(store, date, |p| {
        p.quran = !undo;
        if let Some(page) = page {
            p.quran_page = page;
        }
    })?;

    if undo {
        println_colored!(DIM, "  ○ Quran unmarked for {}", date);
    } else if progress.quran_page > 0 {
        println_colored!(GREEN, "  ✓ Quran read, page {} ({})", progress.quran_page, date);
    } else {
        println_colored!(GREEN, "  ✓ Quran read ({})", date);
    }
    Ok(())
}

pub fn handle_zikr(
    store: &dyn HistoryStore,
    add: Option<i32>,
    set: Option<i32>,
    date: Option<NaiveDate>,
) -> Result<()> {
    let (date, progress) = edit_day(store, date, |p| match set {
        Some(count) => p.zikr = count.max(0),
        None => p.add_zikr(add.unwrap_or(1)),
    })?;

    let color = if progress.zikr >= ZIKR_TARGET { GREEN } else { AMBER };
    println_colored!(color, "  Zikr {}/{} ({})", progress.zikr, ZIKR_TARGET, date);
    Ok(())
}

// ─── Streak ──────────────────────────────────────────────────────────────────

pub fn handle_streak(store: &dyn HistoryStore) -> Result<()> {
    let history = load_history(store);
    let streak = streak_summary(&history, today());

    println!();
    println_colored!(GOLD, "  Streak");
    println!();
    println_colored!(
        BOLD,
        "  {}  {} days",
        progress_bar(streak.current, 30, 12),
        streak.current
    );
    println_colored!(
        DIM,
        "  Best: {}  ·  Days tracked: {}",
        streak.best,
        total_days_tracked(&history)
    );
    println!();
    Ok(())
}

// ─── Breakdown ───────────────────────────────────────────────────────────────

pub fn handle_breakdown(store: &dyn HistoryStore, month: bool, week: Option<u32>) -> Result<()> {
    let today = today();
    let (title, range) = if month {
        (today.format("%B %Y").to_string(), DateRange::month(today))
    } else if let Some(week) = week {
        let range = DateRange::from_iso_week(today.year(), week)
            .ok_or_else(|| anyhow!("{} has no ISO week {}", today.year(), week))?;
        (format!("Week {}", week), range)
    } else {
        (format!("Week {}", today.iso_week().week()), DateRange::iso_week(today))
    };

    let history = load_history(store);
    print_breakdown(&history, &title, range);
    Ok(())
}

fn print_breakdown(history: &History, title: &str, range: DateRange) {
    println!();
    println_colored!(GOLD, "  {}  ({} to {})", title, range.start, range.end);
    println!();

    let Some(breakdown) = compute_range_breakdown(history, range) else {
        println_colored!(DIM, "  No data for this period.");
        println!();
        return;
    };

    for (activity, percent) in breakdown.entries() {
        println!(
            "  {:<10}  {}  {:>4}",
            activity.display_name(),
            percent_bar(percent, 20),
            format_percent(percent)
        );
    }
    if let Some(overall) = overall_percent(history, range) {
        println!();
        println_colored!(
            BOLD,
            "  Overall prayers: {}  over {} days",
            format_percent(overall.round()),
            breakdown.days
        );
    }
    println!();
}

// ─── Stats & reports ─────────────────────────────────────────────────────────

pub fn handle_stats(store: &dyn HistoryStore, days: u32, strict: bool) -> Result<()> {
    let history = load_history(store);
    let stats = build_statistics_now(&history, days, Completion::from_strict(strict));
    println!();
    println!("{}", format_report(&format!("{}-day", days), &stats));
    Ok(())
}

pub fn handle_report(store: &dyn HistoryStore, config: &AppConfig) -> Result<()> {
    let history = load_history(store);
    let report = InsightReport::build(&history, today(), &config.report);
    println!();
    println!("{}", report.weekly_summary);
    println!("{}", report.monthly_summary);
    Ok(())
}

pub fn handle_insight(store: &dyn HistoryStore) -> Result<()> {
    let history = load_history(store);
    let insight = detect_insight(&history);
    let color = match insight {
        Insight::Improved(_) => GREEN,
        _ => DIM,
    };
    println!();
    println_colored!(color, "  {}", insight);
    println!();
    Ok(())
}

// ─── Import / export ─────────────────────────────────────────────────────────

pub fn handle_export(store: &dyn HistoryStore) -> Result<()> {
    let history = store.fetch_all().context("Fetching history")?;
    println!("{}", history.to_json_pretty()?);
    Ok(())
}

pub fn handle_import(store: &dyn HistoryStore, file: &Path) -> Result<()> {
    let content =
        std::fs::read_to_string(file).with_context(|| format!("Reading {:?}", file))?;
    let history = History::from_json(&content).context("Parsing history JSON")?;
    let written = import_history(store, &history)?;
    let skipped = history.len() - written;

    println_colored!(GREEN, "  ✓ Imported {} days", written);
    if skipped > 0 {
        println_colored!(AMBER, "  Skipped {} entries with unparsable dates", skipped);
    }
    Ok(())
}
