//! Display functions for game and command output

use super::formatters::{feedback_row, feedback_to_emoji};
use crate::commands::{BenchmarkResult, SolveResult};
use crate::core::{Feedback, WORD_LEN, Word};
use crate::game::MAX_ROUNDS;
use colored::Colorize;

/// Print the game banner
pub fn print_title() {
    println!("\n{}", "═".repeat(44).cyan());
    println!(" {} ", "W O R D L E".bright_yellow().bold());
    println!("{}", "═".repeat(44).cyan());
    println!("\nGuess the {WORD_LEN}-letter word in {MAX_ROUNDS} rounds.");
    println!("Type 'quit' to give up.\n");
}

/// Print one scored round: the tile row, then the letters used so far
pub fn print_round(guess: &Word, feedback: &Feedback, used_letters: &[char]) {
    println!("\n{}", feedback_row(guess, feedback));

    let used = used_letters
        .iter()
        .map(|c| c.to_ascii_uppercase().to_string())
        .collect::<Vec<_>>()
        .join(" ");
    println!("Used letters: {used}\n");
}

/// Print the win banner with the round count
pub fn print_win(rounds: usize) {
    let headline = match rounds {
        1 => "Unbelievable - first try!",
        2 => "Outstanding!",
        3 => "Great game!",
        4 => "Nice work!",
        5 => "Got there!",
        _ => "Phew, that was close!",
    };

    println!("\n{}", "═".repeat(44).bright_cyan());
    println!("{}", headline.bright_green().bold());
    println!(
        "You found the word in {} {}.",
        rounds.to_string().bright_cyan().bold(),
        if rounds == 1 { "round" } else { "rounds" }
    );
    println!("{}\n", "═".repeat(44).bright_cyan());
}

/// Reveal the secret after a loss
pub fn print_loss(secret: &Word) {
    println!("\n{}", "Out of rounds!".red().bold());
    println!(
        "The word was: {}\n",
        secret.text().to_uppercase().bright_yellow().bold()
    );
}

/// Print the result of a bot run against a target
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Target: {}",
        result.target.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.steps.iter().enumerate() {
        println!(
            "\nRound {}: {} {}",
            i + 1,
            step.word.to_uppercase(),
            feedback_to_emoji(&step.feedback)
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
        }
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!("Solved in {} rounds!", result.steps.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("Not solved within {} rounds", result.steps.len())
                .red()
                .bold()
        );
    }
}

/// Print the result of a benchmark run
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n{}", "Performance:".bright_cyan().bold());
    println!("   Games played:     {}", result.total_games);
    println!(
        "   Wins:             {}",
        result.wins.to_string().green()
    );
    println!("   Losses:           {}", result.losses.to_string().red());
    println!(
        "   Win rate:         {}",
        format!("{:.1}%", result.win_rate * 100.0)
            .bright_yellow()
            .bold()
    );
    if result.wins > 0 {
        println!("   Average rounds:   {:.2}", result.average_rounds);
        println!("   Best game:        {}", result.min_rounds);
        println!("   Worst win:        {}", result.max_rounds);
    }
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Games/second:     {:.1}", result.games_per_second);

    println!("\n{}", "Rounds to win:".bright_cyan().bold());
    for rounds in 1..=MAX_ROUNDS {
        if let Some(&count) = result.distribution.get(&rounds) {
            let pct = (count as f64 / result.total_games as f64) * 100.0;
            let bar_width = (pct / 2.5) as usize;
            let bar = format!(
                "{}{}",
                "█".repeat(bar_width).green(),
                "░".repeat(40_usize.saturating_sub(bar_width)).bright_black()
            );
            println!("   {rounds}: {bar} {count:4} ({pct:5.1}%)");
        }
    }
}
