//! Game session state
//!
//! A [`Session`] owns everything one game needs: the secret word, the scored
//! rounds, and the distinct letters used so far. There are no process-wide
//! globals, so any number of sessions can run side by side and tests can
//! inject a known secret directly.

use crate::core::{Feedback, Word};

/// Maximum rounds per game
pub const MAX_ROUNDS: usize = 6;

/// Where a session stands after its most recent guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Rounds remain and the secret is unguessed
    InProgress,
    /// A guess matched the secret exactly
    Won,
    /// The round budget ran out
    Lost,
}

/// One scored round: the guess and its feedback
#[derive(Debug, Clone)]
pub struct Round {
    pub guess: Word,
    pub feedback: Feedback,
}

/// A single game against one fixed secret word
///
/// The secret is set at construction and never re-selected. Guesses reaching
/// [`Session::submit`] are already validated `Word`s; input validation and
/// re-prompting live with the caller.
pub struct Session {
    secret: Word,
    max_rounds: usize,
    rounds: Vec<Round>,
    used_letters: Vec<char>,
    state: GameState,
}

impl Session {
    /// Start a session with the standard round budget
    #[must_use]
    pub fn new(secret: Word) -> Self {
        Self::with_max_rounds(secret, MAX_ROUNDS)
    }

    /// Start a session with a custom round budget
    #[must_use]
    pub fn with_max_rounds(secret: Word, max_rounds: usize) -> Self {
        Self {
            secret,
            max_rounds,
            rounds: Vec::with_capacity(max_rounds),
            used_letters: Vec::new(),
            state: GameState::InProgress,
        }
    }

    /// Score one guess, record the round, and advance the game state
    ///
    /// Only meaningful while the session is in progress; callers drive the
    /// loop off [`Session::is_over`].
    pub fn submit(&mut self, guess: Word) -> Feedback {
        debug_assert!(
            self.state == GameState::InProgress,
            "guess submitted to a finished session"
        );

        let feedback = Feedback::score(&guess, &self.secret);

        for &letter in guess.letters() {
            let letter = letter as char;
            if !self.used_letters.contains(&letter) {
                self.used_letters.push(letter);
            }
        }

        self.rounds.push(Round { guess, feedback });

        self.state = if feedback.is_win() {
            GameState::Won
        } else if self.rounds.len() >= self.max_rounds {
            GameState::Lost
        } else {
            GameState::InProgress
        };

        feedback
    }

    /// Current game state
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Whether the game has ended in a win or a loss
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.state != GameState::InProgress
    }

    /// The secret word for this session
    #[must_use]
    pub const fn secret(&self) -> &Word {
        &self.secret
    }

    /// All scored rounds so far, oldest first
    #[must_use]
    pub fn rounds(&self) -> &[Round] {
        &self.rounds
    }

    /// Number of rounds played
    #[must_use]
    pub fn rounds_played(&self) -> usize {
        self.rounds.len()
    }

    /// Rounds remaining in the budget
    #[must_use]
    pub fn rounds_left(&self) -> usize {
        self.max_rounds.saturating_sub(self.rounds.len())
    }

    /// Distinct letters used across all guesses, in first-use order
    #[must_use]
    pub fn used_letters(&self) -> &[char] {
        &self.used_letters
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn new_session_is_in_progress() {
        let session = Session::new(word("robot"));

        assert_eq!(session.state(), GameState::InProgress);
        assert!(!session.is_over());
        assert_eq!(session.rounds_played(), 0);
        assert_eq!(session.rounds_left(), MAX_ROUNDS);
        assert!(session.used_letters().is_empty());
    }

    #[test]
    fn exact_guess_wins() {
        let mut session = Session::new(word("robot"));

        let feedback = session.submit(word("robot"));

        assert!(feedback.is_win());
        assert_eq!(session.state(), GameState::Won);
        assert!(session.is_over());
        assert_eq!(session.rounds_played(), 1);
    }

    #[test]
    fn exhausted_budget_loses_and_keeps_secret() {
        let mut session = Session::new(word("robot"));

        for _ in 0..MAX_ROUNDS {
            session.submit(word("crane"));
        }

        assert_eq!(session.state(), GameState::Lost);
        assert!(session.is_over());
        assert_eq!(session.rounds_left(), 0);
        // The reveal after a loss reads from here
        assert_eq!(session.secret().text(), "robot");
    }

    #[test]
    fn win_on_final_round() {
        let mut session = Session::new(word("robot"));

        for _ in 0..(MAX_ROUNDS - 1) {
            session.submit(word("crane"));
        }
        assert_eq!(session.state(), GameState::InProgress);

        session.submit(word("robot"));
        assert_eq!(session.state(), GameState::Won);
    }

    #[test]
    fn secret_is_fixed_across_rounds() {
        let mut session = Session::new(word("robot"));

        session.submit(word("crane"));
        session.submit(word("slate"));

        assert_eq!(session.secret().text(), "robot");
    }

    #[test]
    fn used_letters_accumulate_in_first_use_order() {
        let mut session = Session::new(word("robot"));

        session.submit(word("crane"));
        session.submit(word("cargo"));

        // CRANE contributes c,r,a,n,e; CARGO adds only g,o
        assert_eq!(
            session.used_letters(),
            &['c', 'r', 'a', 'n', 'e', 'g', 'o']
        );
    }

    #[test]
    fn rounds_record_guess_and_feedback() {
        let mut session = Session::new(word("robot"));

        session.submit(word("otter"));

        let rounds = session.rounds();
        assert_eq!(rounds.len(), 1);
        assert_eq!(rounds[0].guess.text(), "otter");
        assert!(!rounds[0].feedback.is_win());
    }

    #[test]
    fn rejected_input_never_reaches_the_session() {
        // Length validation happens at Word construction, before submit can
        // be called, so a bad guess costs no round.
        let session = Session::new(word("robot"));

        assert!(Word::new("four").is_err());
        assert_eq!(session.rounds_played(), 0);
    }

    #[test]
    fn custom_round_budget() {
        let mut session = Session::with_max_rounds(word("robot"), 2);

        session.submit(word("crane"));
        assert_eq!(session.state(), GameState::InProgress);

        session.submit(word("slate"));
        assert_eq!(session.state(), GameState::Lost);
    }
}
