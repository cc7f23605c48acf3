use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "imangrow", version, author, about = "Daily prayer, Quran and zikr checklist with streaks and insights")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show today's checklist and streak
    Today,
    /// Mark a prayer as prayed
    Mark {
        /// Prayer name (subuh, zohor, asar, maghrib, isya)
        prayer: String,
        /// Clear the mark instead
        #[arg(long)]
        undo: bool,
        /// Day to edit (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Mark Quran reading and record the page reached
    Quran {
        /// Page reached
        #[arg(long)]
        page: Option<i32>,
        /// Clear the reading mark instead
        #[arg(long)]
        undo: bool,
        /// Day to edit (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Add to or set the zikr counter
    Zikr {
        /// Add this many repetitions
        #[arg(long, conflicts_with = "set")]
        add: Option<i32>,
        /// Set the counter to this value
        #[arg(long)]
        set: Option<i32>,
        /// Day to edit (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Show current and best streak
    Streak,
    /// Per-activity completion for this week or month
    Breakdown {
        /// Use the current calendar month instead of the week
        #[arg(long, conflicts_with = "week")]
        month: bool,
        /// ISO week number of the current year
        #[arg(long)]
        week: Option<u32>,
    },
    /// Prayer statistics for a trailing window
    Stats {
        /// Window size in days, ending today
        #[arg(long, default_value = "7")]
        days: u32,
        /// Count a day as complete only if Quran was also read
        #[arg(long)]
        strict: bool,
    },
    /// Weekly and monthly reports
    Report,
    /// Day-over-day improvement
    Insight,
    /// Print the full history as JSON
    Export,
    /// Load a JSON history (date → record) into the store
    Import {
        /// JSON file to read
        file: PathBuf,
    },
}
