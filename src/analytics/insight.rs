use serde::Serialize;

use crate::models::{History, PrayerType};

/// What improved between the two most recent tracked days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Improvement {
    Prayer(PrayerType),
    QuranRecitation,
    ZikrConsistency,
}

impl Improvement {
    pub fn label(&self) -> &'static str {
        match self {
            Improvement::Prayer(p) => p.label(),
            Improvement::QuranRecitation => "your Quran recitation",
            Improvement::ZikrConsistency => "your Zikr consistency",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Insight {
    /// Fewer than two days with a well-formed date key.
    InsufficientData,
    NoImprovement,
    Improved(Improvement),
}

impl Insight {
    /// Name of the improved activity; empty unless something improved.
    pub fn label(&self) -> &'static str {
        match self {
            Insight::Improved(improvement) => improvement.label(),
            _ => "",
        }
    }

    pub fn message(&self) -> String {
        match self {
            Insight::InsufficientData => {
                "Track more days to unlock personalized insights.".to_string()
            }
            Insight::NoImprovement => {
                "Stay consistent, even small steps bring you closer.".to_string()
            }
            Insight::Improved(improvement) => {
                format!("You're improving in {}! Keep it up.", improvement.label())
            }
        }
    }
}

impl std::fmt::Display for Insight {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

/// Compare the latest tracked day against the one before it.
///
/// Checks run in a fixed order: the five prayers (newly prayed), then a
/// higher Quran page, then a higher zikr count. The LAST check that matches
/// is reported, so a Quran or zikr increase overrides any prayer match.
pub fn detect_insight(history: &History) -> Insight {
    let sorted = history.chronological();
    let [.., (_, previous), (latest_date, latest)] = sorted.as_slice() else {
        return Insight::InsufficientData;
    };

    let mut improvement = None;
    for prayer in PrayerType::all() {
        if !previous.prayer(prayer) && latest.prayer(prayer) {
            improvement = Some(Improvement::Prayer(prayer));
        }
    }
    if latest.quran_page > previous.quran_page {
        improvement = Some(Improvement::QuranRecitation);
    }
    if latest.zikr > previous.zikr {
        improvement = Some(Improvement::ZikrConsistency);
    }

    log::debug!("insight for {}: {:?}", latest_date, improvement);
    improvement.map_or(Insight::NoImprovement, Insight::Improved)
}
