/// Percent with no decimals, e.g. "67%". Halves round away from zero.
pub fn format_percent(percent: f64) -> String {
    format!("{}%", percent.round())
}

/// Check mark for a done item, hollow circle otherwise
pub fn tick(done: bool) -> &'static str {
    if done { "✓" } else { "○" }
}

/// Create a simple ASCII progress bar
pub fn progress_bar(filled: u32, total: u32, width: usize) -> String {
    if total == 0 {
        return "░".repeat(width);
    }
    let ratio = (filled as f64 / total as f64).min(1.0);
    let filled_count = (ratio * width as f64).round() as usize;
    let empty_count = width.saturating_sub(filled_count);
    format!("{}{}", "█".repeat(filled_count), "░".repeat(empty_count))
}

/// Progress bar for a 0–100 percentage
pub fn percent_bar(percent: f64, width: usize) -> String {
    progress_bar(percent.clamp(0.0, 100.0).round() as u32, 100, width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bars_fill_proportionally() {
        assert_eq!(progress_bar(0, 0, 4), "░░░░");
        assert_eq!(progress_bar(1, 2, 4), "██░░");
        assert_eq!(progress_bar(9, 5, 5), "█████");
        assert_eq!(percent_bar(60.0, 5), "███░░");
        assert_eq!(percent_bar(-10.0, 3), "░░░");
    }

    #[test]
    fn percent_has_no_decimals() {
        assert_eq!(format_percent(66.666), "67%");
        assert_eq!(format_percent(100.0), "100%");
        assert_eq!(format_percent(62.5), "63%");
        assert_eq!(format_percent(0.0), "0%");
    }
}
