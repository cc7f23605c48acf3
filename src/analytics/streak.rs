use chrono::NaiveDate;

use crate::models::{Completion, History, Streak};

/// Consecutive fully complete days (prayers and Quran) ending at `reference`.
///
/// Walks backward one day at a time and stops at the first missing or
/// incomplete day, so the cost is the length of the streak.
pub fn compute_streak(history: &History, reference: NaiveDate) -> u32 {
    let mut current = 0u32;
    let mut check_date = reference;

    while history
        .get(check_date)
        .is_some_and(|p| p.is_complete(Completion::Strict))
    {
        current += 1;
        match check_date.pred_opt() {
            Some(prev) => check_date = prev,
            None => break,
        }
    }
    current
}

/// Streak ending today (local date).
pub fn current_streak(history: &History) -> u32 {
    compute_streak(history, chrono::Local::now().date_naive())
}

/// Longest run of consecutive complete days anywhere in the history.
pub fn best_streak(history: &History, completion: Completion) -> u32 {
    let mut dates: Vec<NaiveDate> = history
        .dated()
        .filter(|(_, p)| p.is_complete(completion))
        .map(|(date, _)| date)
        .collect();
    if dates.is_empty() {
        return 0;
    }
    dates.sort();

    let mut best = 1u32;
    let mut run = 1u32;
    for pair in dates.windows(2) {
        if pair[0].succ_opt() == Some(pair[1]) {
            run += 1;
            best = best.max(run);
        } else {
            run = 1;
        }
    }
    best
}

pub fn streak_summary(history: &History, today: NaiveDate) -> Streak {
    let current = compute_streak(history, today);
    let best = best_streak(history, Completion::Strict).max(current);
    Streak { current, best }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DailyProgress;

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn full() -> DailyProgress {
        DailyProgress {
            subuh: true,
            zohor: true,
            asar: true,
            maghrib: true,
            isya: true,
            quran: true,
            quran_page: 1,
            zikr: 33,
        }
    }

    fn history(days: &[(&str, DailyProgress)]) -> History {
        days.iter()
            .map(|(k, p)| (k.to_string(), p.clone()))
            .collect()
    }

    #[test]
    fn absent_reference_day_gives_zero() {
        let h = history(&[("2024-01-01", full()), ("2024-01-02", full())]);
        assert_eq!(compute_streak(&h, d("2024-01-03")), 0);
        assert_eq!(compute_streak(&h, d("2024-01-02")), 2);
    }

    #[test]
    fn incomplete_reference_day_gives_zero() {
        let mut no_quran = full();
        no_quran.quran = false;
        let h = history(&[("2024-01-01", full()), ("2024-01-02", no_quran)]);
        assert_eq!(compute_streak(&h, d("2024-01-02")), 0);
        assert_eq!(compute_streak(&h, d("2024-01-01")), 1);
    }

    #[test]
    fn gap_ends_the_streak() {
        let h = history(&[
            ("2024-01-01", full()),
            ("2024-01-02", full()),
            ("2024-01-04", full()),
            ("2024-01-05", full()),
        ]);
        assert_eq!(compute_streak(&h, d("2024-01-05")), 2);
    }

    #[test]
    fn incomplete_day_in_chain_ends_the_streak() {
        let mut missed_isya = full();
        missed_isya.isya = false;
        let h = history(&[
            ("2024-01-01", full()),
            ("2024-01-02", missed_isya),
            ("2024-01-03", full()),
        ]);
        assert_eq!(compute_streak(&h, d("2024-01-03")), 1);
    }

    #[test]
    fn streak_crosses_month_and_year_boundaries() {
        let h = history(&[
            ("2023-12-30", full()),
            ("2023-12-31", full()),
            ("2024-01-01", full()),
        ]);
        assert_eq!(compute_streak(&h, d("2024-01-01")), 3);
    }

    #[test]
    fn malformed_keys_never_count() {
        let h = history(&[("2024-1-2", full()), ("2024-01-01", full())]);
        assert_eq!(compute_streak(&h, d("2024-01-02")), 0);
        assert_eq!(compute_streak(&h, d("2024-01-01")), 1);
    }

    #[test]
    fn best_streak_finds_longest_run() {
        let mut partial = full();
        partial.quran = false;
        let h = history(&[
            ("2024-01-01", full()),
            ("2024-01-02", full()),
            ("2024-01-03", full()),
            ("2024-01-05", full()),
            ("2024-01-06", partial),
            ("2024-01-07", full()),
            ("2024-01-08", full()),
        ]);
        assert_eq!(best_streak(&h, Completion::Strict), 3);
        // Lenient mode lets the Quran-less day join 5..8.
        assert_eq!(best_streak(&h, Completion::Lenient), 4);

        let summary = streak_summary(&h, d("2024-01-08"));
        assert_eq!(summary, Streak { current: 2, best: 3 });
    }

    #[test]
    fn current_streak_ends_today() {
        let today = chrono::Local::now().date_naive();
        let mut h = History::new();
        h.insert_date(today, full());
        h.insert_date(today.pred_opt().unwrap(), full());
        assert_eq!(current_streak(&h), 2);
        assert_eq!(current_streak(&History::new()), 0);
    }

    #[test]
    fn best_streak_of_empty_history_is_zero() {
        assert_eq!(best_streak(&History::new(), Completion::Strict), 0);
    }
}
