//! Wordle Game
//!
//! A terminal word-guessing game: six rounds to find a secret five-letter
//! word, with per-letter feedback that handles repeated letters correctly.
//! Ships with a constraint-tracking solver bot and a benchmark harness.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::core::{Feedback, Word};
//!
//! let guess = Word::new("otter").unwrap();
//! let secret = Word::new("robot").unwrap();
//!
//! let feedback = Feedback::score(&guess, &secret);
//! assert!(!feedback.is_win());
//! ```

// Core domain types
pub mod core;

// Game sessions
pub mod game;

// Solver bot
pub mod bot;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
