pub mod history;
pub mod prayer;
pub mod progress;
pub mod stats;

pub use history::{date_key, parse_date_key, History};
pub use prayer::{Activity, PrayerType};
pub use progress::{Completion, DailyProgress, ZIKR_TARGET};
pub use stats::{PrayerStats, Streak};
