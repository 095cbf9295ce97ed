//! Knowledge accumulated from scored guesses
//!
//! Each scored guess narrows the secret: exact matches pin a position,
//! misplaced letters rule out a position while requiring the letter
//! somewhere, and absent letters cap how often the letter can occur at all.

use crate::core::{Feedback, LetterStatus, WORD_LEN, Word};
use rustc_hash::FxHashMap;

/// Constraint set describing every word still compatible with the feedback
/// seen so far
#[derive(Debug, Clone, Default)]
pub struct Constraints {
    /// Letters pinned to a position by a `Correct` result
    pinned: [Option<u8>; WORD_LEN],
    /// Positions each letter is known not to occupy (`Present` results)
    misplaced: FxHashMap<u8, Vec<usize>>,
    /// Lower bound on a letter's occurrences in the secret
    min_counts: FxHashMap<u8, u8>,
    /// Upper bound on a letter's occurrences in the secret
    max_counts: FxHashMap<u8, u8>,
}

impl Constraints {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one scored guess into the constraint set
    pub fn observe(&mut self, guess: &Word, feedback: &Feedback) {
        // How many occurrences of each letter this guess got credit for
        let mut claimed: FxHashMap<u8, u8> = FxHashMap::default();

        for (i, (&letter, &status)) in guess
            .letters()
            .iter()
            .zip(feedback.statuses())
            .enumerate()
        {
            match status {
                LetterStatus::Correct => {
                    self.pinned[i] = Some(letter);
                    *claimed.entry(letter).or_insert(0) += 1;
                }
                LetterStatus::Present => {
                    let positions = self.misplaced.entry(letter).or_default();
                    if !positions.contains(&i) {
                        positions.push(i);
                    }
                    *claimed.entry(letter).or_insert(0) += 1;
                }
                LetterStatus::Absent => {}
            }
        }

        // An Absent result means the scorer's pool for that letter ran dry:
        // the secret holds exactly as many occurrences as this guess claimed
        // (zero when the letter is absent outright).
        for (&letter, &status) in guess.letters().iter().zip(feedback.statuses()) {
            if status == LetterStatus::Absent {
                let cap = claimed.get(&letter).copied().unwrap_or(0);
                self.max_counts.insert(letter, cap);
            }
        }

        for (&letter, &count) in &claimed {
            let min = self.min_counts.entry(letter).or_insert(0);
            *min = (*min).max(count);
        }
    }

    /// Whether `word` is still a viable secret
    #[must_use]
    pub fn allows(&self, word: &Word) -> bool {
        for (i, pin) in self.pinned.iter().enumerate() {
            if let Some(letter) = pin
                && word.letters()[i] != *letter
            {
                return false;
            }
        }

        for (&letter, positions) in &self.misplaced {
            if !word.has_letter(letter) {
                return false;
            }
            if positions.iter().any(|&i| word.letters()[i] == letter) {
                return false;
            }
        }

        let counts = word.letter_counts();

        for (&letter, &min) in &self.min_counts {
            if counts.get(&letter).copied().unwrap_or(0) < min {
                return false;
            }
        }

        for (&letter, &max) in &self.max_counts {
            if counts.get(&letter).copied().unwrap_or(0) > max {
                return false;
            }
        }

        true
    }
}
