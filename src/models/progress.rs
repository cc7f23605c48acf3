use serde::{Deserialize, Serialize};

use crate::models::PrayerType;

/// Zikr count treated as a full day's repetition.
pub const ZIKR_TARGET: i32 = 33;

/// Whether Quran reading counts towards a "complete" day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Completion {
    /// All five prayers and Quran reading.
    Strict,
    /// All five prayers; Quran is ignored.
    Lenient,
}

impl Completion {
    pub fn from_strict(strict: bool) -> Self {
        if strict {
            Completion::Strict
        } else {
            Completion::Lenient
        }
    }
}

/// One day's checklist as stored under its date key.
///
/// Field names on the wire are camelCase (`quranPage`); anything missing
/// deserializes to `false` / `0`. Counters are not range-checked.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DailyProgress {
    pub subuh: bool,
    pub zohor: bool,
    pub asar: bool,
    pub maghrib: bool,
    pub isya: bool,
    pub quran: bool,
    pub quran_page: i32,
    pub zikr: i32,
}

impl DailyProgress {
    pub fn prayer(&self, prayer: PrayerType) -> bool {
        match prayer {
            PrayerType::Subuh => self.subuh,
            PrayerType::Zohor => self.zohor,
            PrayerType::Asar => self.asar,
            PrayerType::Maghrib => self.maghrib,
            PrayerType::Isya => self.isya,
        }
    }

    pub fn set_prayer(&mut self, prayer: PrayerType, done: bool) {
        let slot = match prayer {
            PrayerType::Subuh => &mut self.subuh,
            PrayerType::Zohor => &mut self.zohor,
            PrayerType::Asar => &mut self.asar,
            PrayerType::Maghrib => &mut self.maghrib,
            PrayerType::Isya => &mut self.isya,
        };
        *slot = done;
    }

    /// Add `count` (possibly negative) to the zikr counter, saturating and
    /// never going below zero.
    pub fn add_zikr(&mut self, count: i32) {
        self.zikr = self.zikr.saturating_add(count).max(0);
    }

    pub fn prayers_done(&self) -> u8 {
        PrayerType::all()
            .iter()
            .filter(|p| self.prayer(**p))
            .count() as u8
    }

    pub fn all_prayers_done(&self) -> bool {
        self.prayers_done() == 5
    }

    pub fn is_complete(&self, completion: Completion) -> bool {
        match completion {
            Completion::Lenient => self.all_prayers_done(),
            Completion::Strict => self.all_prayers_done() && self.quran,
        }
    }

    /// Share of the five prayers prayed, 0–100.
    pub fn completion_percent(&self) -> f64 {
        self.prayers_done() as f64 / 5.0 * 100.0
    }

    pub fn quran_percent(&self) -> f64 {
        if self.quran { 100.0 } else { 0.0 }
    }

    /// Zikr count against [`ZIKR_TARGET`], clamped to 0–100.
    pub fn zikr_percent(&self) -> f64 {
        (self.zikr as f64 / ZIKR_TARGET as f64).clamp(0.0, 1.0) * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_day() -> DailyProgress {
        DailyProgress {
            subuh: true,
            zohor: true,
            asar: true,
            maghrib: true,
            isya: true,
            quran: true,
            quran_page: 12,
            zikr: 33,
        }
    }

    #[test]
    fn strict_requires_quran() {
        let mut day = full_day();
        assert!(day.is_complete(Completion::Strict));
        day.quran = false;
        assert!(!day.is_complete(Completion::Strict));
        assert!(day.is_complete(Completion::Lenient));
    }

    #[test]
    fn missing_prayer_is_incomplete_in_both_modes() {
        let mut day = full_day();
        day.set_prayer(PrayerType::Asar, false);
        assert!(!day.is_complete(Completion::Strict));
        assert!(!day.is_complete(Completion::Lenient));
        assert_eq!(day.prayers_done(), 4);
        assert_eq!(day.completion_percent(), 80.0);
    }

    #[test]
    fn default_is_zero_placeholder() {
        let day = DailyProgress::default();
        assert_eq!(day.completion_percent(), 0.0);
        assert_eq!(day.quran_percent(), 0.0);
        assert_eq!(day.zikr_percent(), 0.0);
        assert!(!day.is_complete(Completion::Lenient));
    }

    #[test]
    fn zikr_percent_is_capped() {
        let mut day = DailyProgress {
            zikr: 11,
            ..Default::default()
        };
        assert!((day.zikr_percent() - 100.0 / 3.0).abs() < 1e-9);
        day.zikr = 99;
        assert_eq!(day.zikr_percent(), 100.0);
        day.zikr = -5;
        assert_eq!(day.zikr_percent(), 0.0);
    }

    #[test]
    fn deserializes_camel_case_with_missing_fields() {
        let day: DailyProgress =
            serde_json::from_str(r#"{"subuh":true,"quranPage":4,"zikr":7}"#).unwrap();
        assert!(day.subuh);
        assert!(!day.isya);
        assert_eq!(day.quran_page, 4);
        assert_eq!(day.zikr, 7);
    }

    #[test]
    fn add_zikr_saturates_and_floors_at_zero() {
        let mut p = DailyProgress { zikr: 10, ..Default::default() };
        p.add_zikr(5);
        assert_eq!(p.zikr, 15);
        p.add_zikr(i32::MAX);
        assert_eq!(p.zikr, i32::MAX);
        p.add_zikr(-20);
        assert_eq!(p.zikr, i32::MAX - 20);

        let mut p = DailyProgress { zikr: 3, ..Default::default() };
        p.add_zikr(-10);
        assert_eq!(p.zikr, 0);
    }

}
