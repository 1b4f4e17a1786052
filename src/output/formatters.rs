//! Formatting utilities for terminal output

use crate::core::{Color, Score};

/// Format a score as key pegs: `●` per red, `○` per white, `·` for the rest
#[must_use]
pub fn score_to_pegs(score: Score, code_length: usize) -> String {
    let red = usize::from(score.red);
    let white = usize::from(score.white);
    let empty = code_length.saturating_sub(red + white);

    format!("{}{}{}", "●".repeat(red), "○".repeat(white), "·".repeat(empty))
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Bar for one bucket of a round-count histogram, scaled to the largest bucket
#[must_use]
pub fn distribution_bar(count: usize, max_count: usize, width: usize) -> String {
    create_progress_bar(count as f64, max_count as f64, width)
}

/// Space-separated colour labels, or `-` for none
#[must_use]
pub fn color_list(colors: &[Color]) -> String {
    if colors.is_empty() {
        return "-".to_string();
    }

    colors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
