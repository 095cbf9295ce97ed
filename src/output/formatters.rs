//! Presentation tokens for feedback
//!
//! Rendering is a mapping from [`LetterStatus`] to a display token, kept out
//! of the core so `Feedback` itself stays presentation-agnostic. Swap these
//! functions to change the look without touching scoring.

use crate::core::{Feedback, LetterStatus, Word};
use colored::{ColoredString, Colorize};

/// Paint one letter tile for terminal output
///
/// Correct letters sit on green, present letters on yellow, absent letters
/// on a dim background.
#[must_use]
pub fn paint_letter(letter: char, status: LetterStatus) -> ColoredString {
    let tile = format!(" {} ", letter.to_ascii_uppercase());

    match status {
        LetterStatus::Correct => tile.black().on_green(),
        LetterStatus::Present => tile.black().on_yellow(),
        LetterStatus::Absent => tile.white().on_bright_black(),
    }
}

/// Render a scored guess as a row of colored tiles
#[must_use]
pub fn feedback_row(guess: &Word, feedback: &Feedback) -> String {
    guess
        .letters()
        .iter()
        .zip(feedback.statuses())
        .map(|(&letter, &status)| paint_letter(letter as char, status).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render feedback as an emoji row
///
/// # Examples
/// ```
/// use wordle_game::core::{Feedback, Word};
/// use wordle_game::output::formatters::feedback_to_emoji;
///
/// let guess = Word::new("robot").unwrap();
/// let feedback = Feedback::score(&guess, &guess);
/// assert_eq!(feedback_to_emoji(&feedback), "🟩🟩🟩🟩🟩");
/// ```
#[must_use]
pub fn feedback_to_emoji(feedback: &Feedback) -> String {
    feedback
        .statuses()
        .iter()
        .map(|status| match status {
            LetterStatus::Correct => '🟩',
            LetterStatus::Present => '🟨',
            LetterStatus::Absent => '⬜',
        })
        .collect()
}
