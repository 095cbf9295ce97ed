//! Game session and secret selection

mod session;

pub use session::{GameState, MAX_ROUNDS, Round, Session};

use crate::core::Word;
use rand::Rng;
use rand::seq::IndexedRandom;

/// Choose a secret word uniformly from the pool
///
/// Returns `None` for an empty pool; callers treat that as fatal at startup.
/// The RNG is injected so seeded runs and tests pick deterministically.
pub fn choose_secret<R: Rng + ?Sized>(words: &[Word], rng: &mut R) -> Option<Word> {
    words.choose(rng).cloned()
}
