//! Wordle - CLI
//!
//! Terminal word-guessing game with a built-in solver bot.

use anyhow::{Result, ensure};
use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use wordle_game::{
    commands::{SolveConfig, run_benchmark, run_play, solve_word},
    core::Word,
    game::choose_secret,
    output::{print_benchmark_result, print_solve_result},
    wordlists::{
        WORDS,
        loader::{load_from_file, words_from_slice},
    },
};

#[derive(Parser)]
#[command(
    name = "wordle",
    about = "Terminal word-guessing game with a built-in solver bot",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list: 'embedded' (default) or a path to a newline-delimited file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Seed for secret selection (random when omitted)
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play the game interactively (default)
    Play,

    /// Let the solver bot play a specific target word
    Solve {
        /// The target word for the bot to find
        word: String,

        /// Show candidate counts per round
        #[arg(short, long)]
        verbose: bool,
    },

    /// Measure bot performance over many random games
    Benchmark {
        /// Number of games to play
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,
    },
}

/// Load the word pool based on the -w flag
///
/// An empty pool is fatal here, before any round loop starts.
fn load_wordlist(wordlist_mode: &str) -> Result<Vec<Word>> {
    let words = match wordlist_mode {
        "embedded" => words_from_slice(WORDS),
        path => load_from_file(path)?,
    };

    ensure!(
        !words.is_empty(),
        "word list is empty; cannot choose a secret word"
    );

    Ok(words)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let words = load_wordlist(&cli.wordlist)?;

    let mut rng: StdRng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => run_play(&words, &mut rng),
        Commands::Solve { word, verbose } => {
            let result = solve_word(&SolveConfig::new(word), &words)?;
            print_solve_result(&result, verbose);
            Ok(())
        }
        Commands::Benchmark { count } => {
            run_benchmark_command(&words, count, &mut rng);
            Ok(())
        }
    }
}

fn run_benchmark_command<R: Rng + ?Sized>(words: &[Word], count: usize, rng: &mut R) {
    println!("Playing {count} games...");

    let secrets: Vec<Word> = (0..count)
        .filter_map(|_| choose_secret(words, rng))
        .collect();

    let result = run_benchmark(words, &secrets);
    print_benchmark_result(&result);
}
