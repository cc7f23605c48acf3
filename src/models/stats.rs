use serde::{Deserialize, Serialize};

use crate::models::PrayerType;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Streak {
    pub current: u32,
    pub best: u32,
}

/// Per-window prayer statistics. Rates are derived from the counts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrayerStats {
    pub total_days: u32,
    pub fully_completed_days: u32,
    pub quran_days: u32,
    pub missed_subuh: u32,
    pub missed_zohor: u32,
    pub missed_asar: u32,
    pub missed_maghrib: u32,
    pub missed_isya: u32,
}

impl PrayerStats {
    pub fn missed(&self, prayer: PrayerType) -> u32 {
        match prayer {
            PrayerType::Subuh => self.missed_subuh,
            PrayerType::Zohor => self.missed_zohor,
            PrayerType::Asar => self.missed_asar,
            PrayerType::Maghrib => self.missed_maghrib,
            PrayerType::Isya => self.missed_isya,
        }
    }

    pub(crate) fn record_miss(&mut self, prayer: PrayerType) {
        let slot = match prayer {
            PrayerType::Subuh => &mut self.missed_subuh,
            PrayerType::Zohor => &mut self.missed_zohor,
            PrayerType::Asar => &mut self.missed_asar,
            PrayerType::Maghrib => &mut self.missed_maghrib,
            PrayerType::Isya => &mut self.missed_isya,
        };
        *slot += 1;
    }

    /// Percent of tracked days the prayer was prayed. 0 with no tracked days.
    pub fn rate(&self, prayer: PrayerType) -> f64 {
        calc_rate(self.total_days, self.missed(prayer))
    }

    pub fn subuh_rate(&self) -> f64 {
        self.rate(PrayerType::Subuh)
    }

    pub fn zohor_rate(&self) -> f64 {
        self.rate(PrayerType::Zohor)
    }

    pub fn asar_rate(&self) -> f64 {
        self.rate(PrayerType::Asar)
    }

    pub fn maghrib_rate(&self) -> f64 {
        self.rate(PrayerType::Maghrib)
    }

    pub fn isya_rate(&self) -> f64 {
        self.rate(PrayerType::Isya)
    }
}

fn calc_rate(days: u32, missed: u32) -> f64 {
    if days == 0 {
        return 0.0;
    }
    (days - missed.min(days)) as f64 / days as f64 * 100.0
}
