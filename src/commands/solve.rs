//! Bot-versus-target command
//!
//! Lets the solver bot play a chosen target word and reports the path it
//! took, including how the candidate pool narrowed after each guess.

use crate::bot::Bot;
use crate::core::{Feedback, Word};
use crate::game::{GameState, MAX_ROUNDS, Session};
use anyhow::{Context, Result, bail};

/// Configuration for a bot run against one target
pub struct SolveConfig {
    pub target: String,
    pub max_rounds: usize,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(target: String) -> Self {
        Self {
            target,
            max_rounds: MAX_ROUNDS,
        }
    }
}

/// Result of a bot run against one target
pub struct SolveResult {
    pub success: bool,
    pub target: String,
    pub steps: Vec<SolveStep>,
}

/// A single guess on the way to the target
pub struct SolveStep {
    pub word: String,
    pub feedback: Feedback,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Play the bot against `config.target` through a real session
///
/// # Errors
///
/// Returns an error if the target is not a valid word, is missing from the
/// word pool, or if the bot runs out of candidates (inconsistent pool).
pub fn solve_word(config: &SolveConfig, words: &[Word]) -> Result<SolveResult> {
    let target = Word::new(&config.target).context("invalid target word")?;

    if !words.contains(&target) {
        bail!("target word '{target}' is not in the word list");
    }

    let bot = Bot::new(words);
    let mut session = Session::with_max_rounds(target, config.max_rounds);
    let mut history: Vec<(Word, Feedback)> = Vec::new();
    let mut steps = Vec::new();

    while !session.is_over() {
        let candidates_before = bot.count_candidates(&history);

        let Some(guess) = bot.next_guess(&history) else {
            bail!("no candidates remaining");
        };
        let guess = guess.clone();

        let feedback = session.submit(guess.clone());
        history.push((guess.clone(), feedback));

        steps.push(SolveStep {
            word: guess.text().to_string(),
            feedback,
            candidates_before,
            candidates_after: bot.count_candidates(&history),
        });
    }

    Ok(SolveResult {
        success: session.state() == GameState::Won,
        target: config.target.clone(),
        steps,
    })
}
