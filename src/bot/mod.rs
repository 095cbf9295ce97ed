//! Solver bot
//!
//! Plays the game by folding scored feedback into a constraint set and
//! guessing the remaining candidate whose distinct letters are most common
//! across the pool. Stateless between calls: the whole game history is
//! passed in, so the bot is trivially replayable and testable.

mod constraints;
mod frequency;

pub use constraints::Constraints;

use crate::core::{Feedback, Word};

/// Solver bot over a fixed word pool
pub struct Bot<'a> {
    words: &'a [Word],
}

impl<'a> Bot<'a> {
    /// Create a bot drawing guesses from `words`
    #[must_use]
    pub const fn new(words: &'a [Word]) -> Self {
        Self { words }
    }

    /// Words still consistent with every scored guess in `history`
    #[must_use]
    pub fn candidates(&self, history: &[(Word, Feedback)]) -> Vec<&'a Word> {
        let mut constraints = Constraints::new();
        for (guess, feedback) in history {
            constraints.observe(guess, feedback);
        }

        self.words
            .iter()
            .filter(|word| constraints.allows(word))
            .collect()
    }

    /// Number of candidates remaining given the history
    #[must_use]
    pub fn count_candidates(&self, history: &[(Word, Feedback)]) -> usize {
        self.candidates(history).len()
    }

    /// Pick the next guess, or `None` when no candidate remains
    ///
    /// Already-played words are excluded. Deterministic for a given pool and
    /// history.
    #[must_use]
    pub fn next_guess(&self, history: &[(Word, Feedback)]) -> Option<&'a Word> {
        let candidates: Vec<&Word> = self
            .candidates(history)
            .into_iter()
            .filter(|candidate| !history.iter().any(|(guess, _)| guess == *candidate))
            .collect();

        frequency::pick_best(&candidates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Session;

    fn pool() -> Vec<Word> {
        ["robot", "crane", "slate", "irate", "otter", "grate"]
            .iter()
            .map(|&t| Word::new(t).unwrap())
            .collect()
    }

    #[test]
    fn first_guess_comes_from_the_pool() {
        let words = pool();
        let bot = Bot::new(&words);

        let guess = bot.next_guess(&[]).unwrap();
        assert!(words.contains(guess));
    }

    #[test]
    fn candidates_shrink_as_feedback_arrives() {
        let words = pool();
        let bot = Bot::new(&words);

        let guess = Word::new("crane").unwrap();
        let feedback = Feedback::score(&guess, &Word::new("robot").unwrap());
        let history = vec![(guess, feedback)];

        assert!(bot.count_candidates(&history) < bot.count_candidates(&[]));
    }

    #[test]
    fn next_guess_skips_already_played_words() {
        let words = pool();
        let bot = Bot::new(&words);

        let first = bot.next_guess(&[]).unwrap().clone();
        let feedback = Feedback::score(&first, &Word::new("robot").unwrap());
        let history = vec![(first.clone(), feedback)];

        if let Some(second) = bot.next_guess(&history) {
            assert_ne!(second, &first);
        }
    }

    #[test]
    fn no_candidates_means_no_guess() {
        let words = pool();
        let bot = Bot::new(&words);

        // All-correct feedback for a word outside the pool rules out everything
        let phantom = Word::new("vivid").unwrap();
        let feedback = Feedback::score(&phantom, &phantom);
        let history = vec![(phantom, feedback)];

        assert_eq!(bot.next_guess(&history), None);
    }

    #[test]
    fn bot_wins_a_small_game() {
        let words = pool();
        let bot = Bot::new(&words);
        let mut session = Session::new(Word::new("robot").unwrap());
        let mut history: Vec<(Word, Feedback)> = Vec::new();

        while !session.is_over() {
            let guess = bot.next_guess(&history).expect("candidates exhausted").clone();
            let feedback = session.submit(guess.clone());
            history.push((guess, feedback));
        }

        assert_eq!(session.state(), crate::game::GameState::Won);
        assert!(session.rounds_played() <= crate::game::MAX_ROUNDS);
    }

    #[test]
    fn bot_is_deterministic() {
        let words = pool();
        let bot = Bot::new(&words);

        let guess = Word::new("slate").unwrap();
        let feedback = Feedback::score(&guess, &Word::new("irate").unwrap());
        let history = vec![(guess, feedback)];

        assert_eq!(bot.next_guess(&history), bot.next_guess(&history));
    }
}
