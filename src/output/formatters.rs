//! Formatting utilities for terminal output

use crate::core::{Classification, Feedback};
use colored::{ColoredString, Colorize};

/// Render one letter as a colored tile, e.g. " F " on green
#[must_use]
pub fn letter_tile(letter: char, class: Classification) -> ColoredString {
    let tile = format!(" {letter} ");
    match class {
        Classification::Correct => tile.white().on_green().bold(),
        Classification::Present => tile.black().on_yellow().bold(),
        Classification::Absent => tile.white().on_bright_black().bold(),
    }
}

/// Render a submitted guess as a row of colored tiles
#[must_use]
pub fn feedback_row(guess: &str, feedback: &Feedback) -> String {
    guess
        .chars()
        .zip(feedback.classifications())
        .map(|(letter, &class)| letter_tile(letter, class).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render a round counter like "3/10 words played"
#[must_use]
pub fn round_counter(round_index: usize, word_count: usize) -> String {
    let current = (round_index + 1).min(word_count);
    format!("{current}/{word_count} words played")
}

/// Placeholder row for the in-progress guess, e.g. "F A _ _"
#[must_use]
pub fn guess_slots(current: &str, length: usize) -> String {
    current
        .chars()
        .map(String::from)
        .chain(std::iter::repeat_n("_".to_string(), length.saturating_sub(current.len())))
        .collect::<Vec<_>>()
        .join(" ")
}
