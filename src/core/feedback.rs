//! Guess scoring against a secret word
//!
//! Scoring is two-pass: exact matches are claimed first, then misplaced
//! letters draw from whatever the exact matches left behind. Each letter
//! occurrence in the secret satisfies at most one position of the guess, so
//! repeated letters in a guess never earn more credit than the secret holds.

use super::Word;
use super::word::WORD_LEN;

/// Per-letter scoring result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterStatus {
    /// Right letter, right position
    Correct,
    /// Letter occurs in the secret, but not at this position
    Present,
    /// Letter not in the secret, or all its occurrences already claimed
    Absent,
}

/// Scoring result for one guess
///
/// An ordered run of [`LetterStatus`] values, index-aligned with the guess.
/// Produced fresh per guess and immutable afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feedback {
    statuses: [LetterStatus; WORD_LEN],
}

impl Feedback {
    /// Score `guess` against `secret`
    ///
    /// # Algorithm
    /// 1. Tally how often each letter occurs in `secret`.
    /// 2. First pass: mark exact position matches `Correct` and decrement
    ///    the tally; that occurrence is consumed.
    /// 3. Second pass, left to right over the remaining positions: mark
    ///    `Present` while the tally still holds the letter, `Absent`
    ///    otherwise.
    ///
    /// The pass split is what keeps duplicate letters honest: an exact match
    /// must claim its occurrence before any misplaced match may, and a guess
    /// with more copies of a letter than the secret has only scores the
    /// copies the secret can back.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{Feedback, LetterStatus, Word};
    ///
    /// let guess = Word::new("otter").unwrap();
    /// let secret = Word::new("robot").unwrap();
    /// let feedback = Feedback::score(&guess, &secret);
    ///
    /// // O(present) T(present) T(absent: only one T in ROBOT) E(absent) R(present)
    /// assert_eq!(feedback.statuses()[0], LetterStatus::Present);
    /// assert_eq!(feedback.statuses()[2], LetterStatus::Absent);
    /// ```
    #[must_use]
    pub fn score(guess: &Word, secret: &Word) -> Self {
        let mut statuses = [LetterStatus::Absent; WORD_LEN];
        let mut remaining = secret.letter_counts();

        // First pass: exact matches consume their occurrence
        for (i, (&guessed, &actual)) in guess.letters().iter().zip(secret.letters()).enumerate() {
            if guessed == actual {
                statuses[i] = LetterStatus::Correct;
                if let Some(count) = remaining.get_mut(&guessed) {
                    *count -= 1;
                }
            }
        }

        // Second pass: misplaced letters draw from the leftover pool
        for (i, &guessed) in guess.letters().iter().enumerate() {
            if statuses[i] == LetterStatus::Correct {
                continue;
            }
            if let Some(count) = remaining.get_mut(&guessed)
                && *count > 0
            {
                statuses[i] = LetterStatus::Present;
                *count -= 1;
            }
        }

        Self { statuses }
    }

    /// The per-position statuses, index-aligned with the guess
    #[inline]
    #[must_use]
    pub const fn statuses(&self) -> &[LetterStatus; WORD_LEN] {
        &self.statuses
    }

    /// Whether every position is `Correct` (the guess equals the secret)
    #[must_use]
    pub fn is_win(&self) -> bool {
        self.statuses.iter().all(|&s| s == LetterStatus::Correct)
    }

    /// Count of positions with the given status
    #[must_use]
    pub fn count(&self, status: LetterStatus) -> usize {
        self.statuses.iter().filter(|&&s| s == status).count()
    }
}
