//! Interactive assist mode
//!
//! Text-based helper for a game played elsewhere: suggests guesses, reads
//! feedback patterns from stdin, and tracks the shrinking candidate set.

use std::io::{self, Write as _};

use colored::Colorize;

use crate::core::{Pattern, Word};
use crate::engine::entropy::guess_metrics;
use crate::engine::{Engine, GameSession, SessionState};
use crate::output::formatters::pattern_to_emoji;

/// Run the interactive assist loop
///
/// # Errors
/// Returns an error on stdin/stdout failure or when a session cannot be
/// started.
#[allow(clippy::too_many_lines)] // Interactive game loop requires detailed handling
pub fn run_assist(engine: &Engine, max_attempts: usize) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║              Word Trainer - Assist Mode                      ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("I'll suggest guesses ranked by information gain.");
    println!("After each guess, enter the feedback pattern:\n");
    println!("  - Use G/g/🟩 for green (correct position)");
    println!("  - Use Y/y/🟨 for yellow (wrong position)");
    println!("  - Use B/b/-/_/⬜ for gray (not in word)");
    println!("  - Or type 'win' if you got it right!\n");
    println!("Commands: 'quit' to exit, 'new' for new game, 'undo' to undo last guess\n");

    let mut history: Vec<(Word, Pattern)> = Vec::new();
    let mut session = new_session(engine, &history, max_attempts)?;

    loop {
        match session.state() {
            SessionState::Infeasible => {
                println!("\n❌ No candidates remain! Your feedback may be incorrect.");
                println!("Type 'undo' to go back, or 'new' to start over.\n");

                match read_input("Command")?.as_str() {
                    "undo" | "u" => {
                        if history.pop().is_some() {
                            session = new_session(engine, &history, max_attempts)?;
                            println!("✓ Undone! Back to turn {}\n", history.len() + 1);
                        } else {
                            println!("Nothing to undo!\n");
                        }
                    }
                    "new" | "n" => {
                        history.clear();
                        session = new_session(engine, &history, max_attempts)?;
                        println!("\n🔄 New game started!\n");
                    }
                    "quit" | "q" | "exit" => return Ok(()),
                    _ => {}
                }
                continue;
            }
            SessionState::Exhausted => {
                println!(
                    "\n😔 Out of attempts after {} guesses.",
                    session.attempts()
                );
                if !prompt_new_game(&mut history)? {
                    return Ok(());
                }
                session = new_session(engine, &history, max_attempts)?;
                continue;
            }
            SessionState::Solved | SessionState::InProgress => {}
        }

        let turn = history.len() + 1;
        let candidates_count = session.candidates_remaining();

        let Some(guess) = session.next_guess() else {
            return Err("no guess available".to_string());
        };
        let guess = guess.clone();

        println!("────────────────────────────────────────────────────────────");
        println!("Turn {turn}: {candidates_count} candidates remaining");
        println!("────────────────────────────────────────────────────────────");

        let metrics = guess_metrics(&guess, session.candidates());

        println!("\n📊 Suggested guess: {}", guess.text().to_uppercase());
        println!("   Entropy:          {:.3} bits", metrics.entropy);
        println!(
            "   Expected remain:  {:.1} candidates",
            metrics.expected_remaining
        );
        println!(
            "   Worst case:       {} candidates\n",
            metrics.max_partition
        );

        if candidates_count <= 10 {
            println!("Remaining candidates:");
            for candidate in session.candidates().iter().take(10) {
                println!("  • {}", candidate.text().to_uppercase());
            }
            println!();
        }

        let feedback = loop {
            let input = read_input("Enter feedback (G/Y/B, 'win', or command)")?.to_lowercase();

            match input.as_str() {
                "quit" | "q" | "exit" => {
                    println!("\n👋 Good luck out there!\n");
                    return Ok(());
                }
                "new" | "n" => {
                    history.clear();
                    println!("\n🔄 New game started!\n");
                    break None;
                }
                "undo" | "u" => {
                    if history.pop().is_some() {
                        println!("✓ Undone! Back to turn {}\n", history.len() + 1);
                        break None;
                    }
                    println!("Nothing to undo!\n");
                }
                "win" | "correct" | "solved" => break Some(Pattern::PERFECT),
                _ => {
                    if let Some(pattern) = Pattern::parse(&input) {
                        break Some(pattern);
                    }
                    println!("❌ Invalid pattern! Use G/Y/B, 'win', or '🟩🟨⬜🟩🟨'\n");
                }
            }
        };

        let Some(pattern) = feedback else {
            session = new_session(engine, &history, max_attempts)?;
            continue;
        };

        if pattern.is_perfect() {
            history.push((guess, pattern));
            print_victory(&history);
            if !prompt_new_game(&mut history)? {
                return Ok(());
            }
            session = new_session(engine, &history, max_attempts)?;
            continue;
        }

        let before = session.candidates_remaining();
        session
            .apply_feedback(&guess, pattern)
            .map_err(|e| e.to_string())?;
        history.push((guess, pattern));

        if session.candidates_remaining() == before && session.state() == SessionState::InProgress {
            println!(
                "{}",
                "⚠ That feedback ruled nothing out; the candidate set is unchanged."
                    .yellow()
            );
        }
    }
}

/// Build a fresh session and replay the recorded feedback into it
///
/// Sessions only ever shrink, so undo works by replaying a truncated
/// history from scratch.
fn new_session<'a>(
    engine: &'a Engine,
    history: &[(Word, Pattern)],
    max_attempts: usize,
) -> Result<GameSession<'a>, String> {
    let mut session = engine
        .new_game(None)
        .map_err(|e| e.to_string())?
        .with_max_attempts(max_attempts);

    for (guess, pattern) in history {
        session
            .apply_feedback(guess, *pattern)
            .map_err(|e| e.to_string())?;
    }

    Ok(session)
}

fn print_victory(history: &[(Word, Pattern)]) {
    let turns = history.len();

    println!("\n{}", "═".repeat(70).bright_cyan());
    println!(
        "{}",
        "    🎉 ✨  S O L V E D !  ✨ 🎉    ".bright_green().bold()
    );
    println!("{}", "═".repeat(70).bright_cyan());

    println!(
        "\n  Solution found in {} {}",
        turns.to_string().bright_cyan().bold(),
        if turns == 1 { "guess" } else { "guesses" }
    );

    println!("\n  Guess history:");
    for (i, (word, pattern)) in history.iter().enumerate() {
        println!(
            "    {}. {} {}",
            (i + 1).to_string().bright_black(),
            word.text().to_uppercase().bright_white().bold(),
            pattern_to_emoji(*pattern)
        );
    }

    println!("\n{}", "═".repeat(70).bright_cyan());
    println!();
}

fn prompt_new_game(history: &mut Vec<(Word, Pattern)>) -> Result<bool, String> {
    match read_input("Play again? (yes/no)")?.to_lowercase().as_str() {
        "yes" | "y" => {
            history.clear();
            println!("\n🔄 New game started!\n");
            Ok(true)
        }
        _ => {
            println!("\n👋 Thanks for playing!\n");
            Ok(false)
        }
    }
}

fn read_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}
