use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrayerType {
    Subuh,
    Zohor,
    Asar,
    Maghrib,
    Isya,
}

impl PrayerType {
    /// All five prayers in the order of the day.
    pub fn all() -> [PrayerType; 5] {
        [
            PrayerType::Subuh,
            PrayerType::Zohor,
            PrayerType::Asar,
            PrayerType::Maghrib,
            PrayerType::Isya,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PrayerType::Subuh => "subuh",
            PrayerType::Zohor => "zohor",
            PrayerType::Asar => "asar",
            PrayerType::Maghrib => "maghrib",
            PrayerType::Isya => "isya",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PrayerType::Subuh => "Subuh",
            PrayerType::Zohor => "Zohor",
            PrayerType::Asar => "Asar",
            PrayerType::Maghrib => "Maghrib",
            PrayerType::Isya => "Isya",
        }
    }

    /// Label for progress breakdowns and insights; Isya carries its apostrophe.
    pub fn label(&self) -> &'static str {
        match self {
            PrayerType::Isya => "Isya\u{2019}",
            other => other.display_name(),
        }
    }
}

impl std::fmt::Display for PrayerType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for PrayerType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "subuh" | "fajr" | "subh" => Ok(PrayerType::Subuh),
            "zohor" | "zuhr" | "dhuhr" | "zuhur" => Ok(PrayerType::Zohor),
            "asar" | "asr" => Ok(PrayerType::Asar),
            "maghrib" => Ok(PrayerType::Maghrib),
            "isya" | "isha" | "isyak" => Ok(PrayerType::Isya),
            _ => Err(anyhow::anyhow!("Unknown prayer type: {}", s)),
        }
    }
}

/// One of the seven tracked daily activities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Activity {
    Prayer(PrayerType),
    Quran,
    Zikr,
}

impl Activity {
    /// Five prayers first, then Quran and zikr.
    pub fn all() -> [Activity; 7] {
        [
            Activity::Prayer(PrayerType::Subuh),
            Activity::Prayer(PrayerType::Zohor),
            Activity::Prayer(PrayerType::Asar),
            Activity::Prayer(PrayerType::Maghrib),
            Activity::Prayer(PrayerType::Isya),
            Activity::Quran,
            Activity::Zikr,
        ]
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Activity::Prayer(p) => p.label(),
            Activity::Quran => "Quran",
            Activity::Zikr => "Zikr",
        }
    }
}

impl std::fmt::Display for Activity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_common_spellings() {
        assert_eq!(PrayerType::from_str("Fajr").unwrap(), PrayerType::Subuh);
        assert_eq!(PrayerType::from_str("dhuhr").unwrap(), PrayerType::Zohor);
        assert_eq!(PrayerType::from_str("ASR").unwrap(), PrayerType::Asar);
        assert_eq!(PrayerType::from_str("isha").unwrap(), PrayerType::Isya);
        assert!(PrayerType::from_str("tahajjud").is_err());
    }

    #[test]
    fn activities_keep_display_order() {
        let names: Vec<&str> = Activity::all().iter().map(|a| a.display_name()).collect();
        assert_eq!(
            names,
            vec!["Subuh", "Zohor", "Asar", "Maghrib", "Isya\u{2019}", "Quran", "Zikr"]
        );
    }

    #[test]
    fn isya_label_differs_from_report_name() {
        assert_eq!(PrayerType::Isya.display_name(), "Isya");
        assert_eq!(PrayerType::Isya.label(), "Isya\u{2019}");
        assert_eq!(PrayerType::Maghrib.label(), PrayerType::Maghrib.display_name());
    }
}
