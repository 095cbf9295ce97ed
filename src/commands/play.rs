//! Interactive game mode
//!
//! The classic loop: read a guess, score it, paint the row, list the letters
//! used so far. Six rounds to find the word.

use crate::core::{WORD_LEN, Word, WordError};
use crate::game::{GameState, MAX_ROUNDS, Session, choose_secret};
use crate::output::display;
use anyhow::{Context, Result};
use rand::Rng;
use std::io::{self, Write};

/// Run interactive games until the player stops
///
/// # Errors
///
/// Returns an error on a terminal I/O failure or if the word pool is empty.
pub fn run_play<R: Rng + ?Sized>(words: &[Word], rng: &mut R) -> Result<()> {
    display::print_title();

    loop {
        let secret = choose_secret(words, rng).context("word list is empty")?;
        let mut session = Session::new(secret);

        while !session.is_over() {
            let Some(guess) = read_guess(session.rounds_played() + 1)? else {
                // Quit command or EOF mid-game
                println!("\nThanks for playing!\n");
                return Ok(());
            };

            let feedback = session.submit(guess.clone());
            display::print_round(&guess, &feedback, session.used_letters());
        }

        match session.state() {
            GameState::Won => display::print_win(session.rounds_played()),
            _ => display::print_loss(session.secret()),
        }

        if !play_again()? {
            println!("\nThanks for playing!\n");
            return Ok(());
        }
        println!();
    }
}

/// Prompt until the player enters a valid word, quits, or closes stdin
///
/// A rejected line costs no round: validation happens here, before the
/// session ever sees the guess.
fn read_guess(round: usize) -> Result<Option<Word>> {
    loop {
        print!("Round {round}/{MAX_ROUNDS} - your guess: ");
        io::stdout().flush()?;

        let mut input = String::new();
        let bytes = io::stdin().read_line(&mut input)?;
        if bytes == 0 {
            return Ok(None); // EOF
        }

        let input = input.trim();
        if input.eq_ignore_ascii_case("quit") || input.eq_ignore_ascii_case("q") {
            return Ok(None);
        }

        match Word::new(input) {
            Ok(word) => return Ok(Some(word)),
            Err(WordError::InvalidLength(_)) => {
                println!("Please enter a {WORD_LEN}-letter word.");
            }
            Err(_) => println!("Letters only, please."),
        }
    }
}

fn play_again() -> Result<bool> {
    print!("Play again? (y/n): ");
    io::stdout().flush()?;

    let mut input = String::new();
    let bytes = io::stdin().read_line(&mut input)?;

    Ok(bytes != 0 && matches!(input.trim().to_lowercase().as_str(), "y" | "yes"))
}
