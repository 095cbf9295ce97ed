//! Benchmark command
//!
//! Plays one bot game per secret and aggregates win-rate statistics. Games
//! are independent, so they run in parallel.

use crate::bot::Bot;
use crate::core::{Feedback, Word};
use crate::game::{GameState, Session};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Aggregated result of a benchmark run
pub struct BenchmarkResult {
    pub total_games: usize,
    pub wins: usize,
    pub losses: usize,
    pub win_rate: f64,
    pub average_rounds: f64,
    pub min_rounds: usize,
    pub max_rounds: usize,
    /// Rounds-to-win histogram, winning games only
    pub distribution: HashMap<usize, usize>,
    pub duration: Duration,
    pub games_per_second: f64,
}

struct GameRecord {
    rounds: usize,
    won: bool,
}

/// Play one full bot game against `secret`
fn play_game(words: &[Word], secret: &Word) -> GameRecord {
    let bot = Bot::new(words);
    let mut session = Session::new(secret.clone());
    let mut history: Vec<(Word, Feedback)> = Vec::new();

    while !session.is_over() {
        let Some(guess) = bot.next_guess(&history) else {
            break;
        };
        let guess = guess.clone();

        let feedback = session.submit(guess.clone());
        history.push((guess, feedback));
    }

    GameRecord {
        rounds: session.rounds_played(),
        won: session.state() == GameState::Won,
    }
}

/// Run the bot against every word in `secrets`
///
/// The caller chooses the secrets (typically sampled from the pool with a
/// seeded RNG), so a run is reproducible end to end.
///
/// # Panics
///
/// Panics only if the progress-bar template is invalid, which is a constant.
#[must_use]
pub fn run_benchmark(words: &[Word], secrets: &[Word]) -> BenchmarkResult {
    let progress = ProgressBar::new(secrets.len() as u64);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();

    let records: Vec<GameRecord> = secrets
        .par_iter()
        .map(|secret| {
            let record = play_game(words, secret);
            progress.inc(1);
            record
        })
        .collect();

    progress.finish_and_clear();
    let duration = start.elapsed();

    let total_games = records.len();
    let wins = records.iter().filter(|r| r.won).count();
    let losses = total_games - wins;

    let mut distribution: HashMap<usize, usize> = HashMap::new();
    let mut winning_rounds = 0;
    let mut min_rounds = usize::MAX;
    let mut max_rounds = 0;

    for record in records.iter().filter(|r| r.won) {
        *distribution.entry(record.rounds).or_insert(0) += 1;
        winning_rounds += record.rounds;
        min_rounds = min_rounds.min(record.rounds);
        max_rounds = max_rounds.max(record.rounds);
    }

    if wins == 0 {
        min_rounds = 0;
    }

    BenchmarkResult {
        total_games,
        wins,
        losses,
        win_rate: if total_games == 0 {
            0.0
        } else {
            wins as f64 / total_games as f64
        },
        average_rounds: if wins == 0 {
            0.0
        } else {
            winning_rounds as f64 / wins as f64
        },
        min_rounds,
        max_rounds,
        distribution,
        duration,
        games_per_second: total_games as f64 / duration.as_secs_f64(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::WORDS;
    use crate::wordlists::loader::words_from_slice;

    #[test]
    fn benchmark_runs() {
        let words = words_from_slice(&WORDS[..80]);
        let secrets = words[..10].to_vec();

        let result = run_benchmark(&words, &secrets);

        assert_eq!(result.total_games, 10);
        assert_eq!(result.wins + result.losses, 10);
        assert!((0.0..=1.0).contains(&result.win_rate));
    }

    #[test]
    fn benchmark_distribution_counts_wins() {
        let words = words_from_slice(&WORDS[..80]);
        let secrets = words[..10].to_vec();

        let result = run_benchmark(&words, &secrets);

        let distribution_sum: usize = result.distribution.values().sum();
        assert_eq!(distribution_sum, result.wins);
    }

    #[test]
    fn benchmark_rounds_stay_in_budget() {
        let words = words_from_slice(&WORDS[..80]);
        let secrets = words[..10].to_vec();

        let result = run_benchmark(&words, &secrets);

        for &rounds in result.distribution.keys() {
            assert!((1..=crate::game::MAX_ROUNDS).contains(&rounds));
        }
        if result.wins > 0 {
            assert!(result.min_rounds >= 1);
            assert!(result.max_rounds <= crate::game::MAX_ROUNDS);
            assert!(result.average_rounds >= result.min_rounds as f64);
            assert!(result.average_rounds <= result.max_rounds as f64);
        }
    }

    #[test]
    fn benchmark_empty_secrets() {
        let words = words_from_slice(&WORDS[..20]);

        let result = run_benchmark(&words, &[]);

        assert_eq!(result.total_games, 0);
        assert_eq!(result.wins, 0);
        assert_eq!(result.losses, 0);
        assert!(result.distribution.is_empty());
    }

    #[test]
    fn tiny_pool_always_wins() {
        let words = words_from_slice(&["robot", "crane", "slate"]);
        let secrets = words.clone();

        let result = run_benchmark(&words, &secrets);

        // Three candidates, six rounds: the bot cannot lose
        assert_eq!(result.wins, 3);
        assert_eq!(result.losses, 0);
    }
}
