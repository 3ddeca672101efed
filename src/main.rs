//! Word Trainer - CLI
//!
//! Information-theoretic solver and trainer for five-letter word games, with
//! TUI play mode, assist mode, and batch evaluation commands.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use wordle_trainer::{
    commands::{analyze_word, run_assist, run_benchmark, run_precompute, solve_secret},
    engine::{Engine, DEFAULT_MAX_ATTEMPTS},
    interactive::{run_tui, App},
    output::{
        print_analysis_report, print_benchmark_report, print_precompute_report,
        print_solve_report,
    },
    wordlists::{
        loader::{
            default_letter_scores, load_info_table, load_letter_table, load_words_from_file,
            words_from_slice,
        },
        WORDS,
    },
};

#[derive(Parser)]
#[command(
    name = "wordle_trainer",
    about = "Information-theoretic word game solver and trainer",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to a custom word list (one five-letter word per line)
    #[arg(short = 'w', long, global = true)]
    words: Option<PathBuf>,

    /// Path to a letter-frequency table (JSON, letter -> score)
    #[arg(short = 'f', long, global = true)]
    frequency: Option<PathBuf>,

    /// Path to a precomputed information table (JSON, word -> bits)
    #[arg(short = 'i', long, global = true)]
    info: Option<PathBuf>,

    /// Attempt budget per game
    #[arg(short = 'a', long, global = true, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    attempts: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI trainer (default): guess against a random secret
    Play,

    /// Assist a game played elsewhere: suggests guesses, you type feedback
    Assist,

    /// Self-play a specific secret word
    Solve {
        /// The secret word to solve
        word: String,

        /// Show verbose output with candidate counts
        #[arg(short, long)]
        verbose: bool,
    },

    /// Analyze the entropy of a specific word
    Analyze {
        /// Word to analyze
        word: String,
    },

    /// Self-play every vocabulary word and report statistics
    Benchmark {
        /// Limit number of secrets to test
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Compute an information table for the whole vocabulary
    Precompute {
        /// Output path for the JSON table
        #[arg(short, long, default_value = "info_table.json")]
        output: PathBuf,

        /// Number of top openers to print
        #[arg(short, long, default_value = "10")]
        top: usize,
    },
}

/// Build the engine from the embedded or user-supplied data files
fn load_engine(cli: &Cli) -> Result<Engine> {
    let vocabulary = match &cli.words {
        Some(path) => load_words_from_file(path)
            .with_context(|| format!("loading word list from {}", path.display()))?,
        None => words_from_slice(WORDS),
    };

    let letter_scores = match &cli.frequency {
        Some(path) => load_letter_table(path)
            .with_context(|| format!("loading letter table from {}", path.display()))?,
        None => default_letter_scores(),
    };

    let info_scores = match &cli.info {
        Some(path) => load_info_table(path)
            .with_context(|| format!("loading information table from {}", path.display()))?,
        None => Default::default(),
    };

    Engine::with_tables(vocabulary, letter_scores, info_scores).map_err(Into::into)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let engine = load_engine(&cli)?;
    let attempts = cli.attempts;

    // Default to Play mode if no command given
    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => {
            let app = App::new(&engine, attempts)?;
            run_tui(app)
        }
        Commands::Assist => run_assist(&engine, attempts).map_err(|e| anyhow::anyhow!(e)),
        Commands::Solve { word, verbose } => {
            let report = solve_secret(&engine, &word, attempts)?;
            print_solve_report(&report, verbose);
            Ok(())
        }
        Commands::Analyze { word } => {
            let report = analyze_word(&engine, &word)?;
            print_analysis_report(&report);
            Ok(())
        }
        Commands::Benchmark { limit } => {
            let report = run_benchmark(&engine, limit, attempts);
            print_benchmark_report(&report);
            Ok(())
        }
        Commands::Precompute { output, top } => {
            let report = run_precompute(&engine, &output, top)
                .with_context(|| format!("writing table to {}", output.display()))?;
            print_precompute_report(&report);
            Ok(())
        }
    }
}
