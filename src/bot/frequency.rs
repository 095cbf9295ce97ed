//! Letter-frequency candidate scoring
//!
//! Scores a candidate by how common its distinct letters are across the
//! remaining candidate pool. Crude next to an entropy solver, but cheap,
//! deterministic, and good enough to win most games within the budget.

use crate::core::Word;
use rustc_hash::FxHashMap;

/// Relative frequency of each letter across `words`
///
/// Each letter counts once per word it appears in, with add-one smoothing so
/// unseen letters keep a small nonzero weight.
pub fn letter_frequencies(words: &[&Word]) -> FxHashMap<u8, f64> {
    let mut counts: FxHashMap<u8, f64> = (b'a'..=b'z').map(|letter| (letter, 1.0)).collect();

    for word in words {
        let mut seen = [false; 26];
        for &letter in word.letters() {
            let slot = usize::from(letter - b'a');
            if !seen[slot] {
                seen[slot] = true;
                *counts.entry(letter).or_insert(0.0) += 1.0;
            }
        }
    }

    let total: f64 = counts.values().sum();
    for value in counts.values_mut() {
        *value /= total;
    }

    counts
}

/// Score a word by the summed frequency of its distinct letters
///
/// Distinct letters only, so repeated letters add no extra credit.
pub fn word_score(word: &Word, frequencies: &FxHashMap<u8, f64>) -> f64 {
    let mut seen = [false; 26];
    let mut score = 0.0;

    for &letter in word.letters() {
        let slot = usize::from(letter - b'a');
        if !seen[slot] {
            seen[slot] = true;
            score += frequencies.get(&letter).copied().unwrap_or(0.0);
        }
    }

    score
}

/// Pick the highest-scoring candidate
///
/// Ties resolve to the earliest candidate, so the pick is deterministic for
/// a given pool order.
pub fn pick_best<'a>(candidates: &[&'a Word]) -> Option<&'a Word> {
    let frequencies = letter_frequencies(candidates);

    let mut best: Option<(&'a Word, f64)> = None;
    for &candidate in candidates {
        let score = word_score(candidate, &frequencies);
        match best {
            Some((_, best_score)) if best_score >= score => {}
            _ => best = Some((candidate, score)),
        }
    }

    best.map(|(word, _)| word)
}
