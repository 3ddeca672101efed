//! Display functions for command results

use colored::Colorize;

use super::formatters::{entropy_bar, tile_row};
use crate::commands::{AnalysisReport, BenchmarkReport, PrecomputeReport, SolveReport};
use crate::engine::SessionState;

/// Print a self-play run, one tile row per turn
pub fn print_solve_report(report: &SolveReport, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        report.secret.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in report.steps.iter().enumerate() {
        let turn = i + 1;
        println!("\nTurn {}: {}", turn, tile_row(&step.word, step.pattern));

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );

            if let Some(entropy) = step.entropy {
                println!("  Entropy:    {entropy:.3} bits");
            }

            if step.candidates_after > 0 {
                let ratio = step.candidates_before as f64 / step.candidates_after as f64;
                println!("  Info gained: {:.3} bits ({ratio:.1}x reduction)", ratio.log2());
            }
        }
    }

    println!();
    match report.state {
        SessionState::Solved => println!(
            "{}",
            format!("✅ Solved in {} guesses!", report.steps.len())
                .green()
                .bold()
        ),
        state => println!(
            "{}",
            format!("❌ {} after {} guesses", state, report.steps.len())
                .red()
                .bold()
        ),
    }
}

/// Print a single-word entropy analysis
pub fn print_analysis_report(report: &AnalysisReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "ENTROPY ANALYSIS:".bright_cyan().bold(),
        report.word.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    let bar = entropy_bar(report.metrics.entropy, 30);

    println!("\n📊 Against {} possible answers:", report.total_candidates);
    println!(
        "   Entropy:     [{}] {}",
        bar.green(),
        format!("{:.3} bits", report.metrics.entropy).bright_yellow()
    );
    println!(
        "   Info gain:   {:.1}x reduction",
        report.metrics.entropy.exp2()
    );
    println!(
        "   Expected:    {:.1} candidates remain",
        report.metrics.expected_remaining
    );
    println!(
        "   Worst case:  {} candidates remain",
        report.metrics.max_partition
    );
}

/// Print benchmark statistics with a distribution chart
pub fn print_benchmark_report(report: &BenchmarkReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words tested:     {}", report.total_words);
    println!(
        "   Solved:           {} {}",
        report.solved,
        format!("({:.1}%)", report.solve_rate * 100.0).green()
    );
    if report.failed > 0 {
        println!(
            "   Failed:           {}",
            report.failed.to_string().red()
        );
    }
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", report.average_attempts)
            .bright_yellow()
            .bold()
    );
    println!("   Time taken:       {:.2}s", report.duration.as_secs_f64());
    println!("   Words/second:     {:.1}", report.words_per_second);

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for attempts in 1..=6 {
        if let Some(&count) = report.distribution.get(&attempts) {
            let pct = (count as f64 / report.total_words as f64) * 100.0;
            let bar_width = (pct / 2.5) as usize;
            let bar = format!(
                "{}{}",
                "█".repeat(bar_width).green(),
                "░".repeat(40_usize.saturating_sub(bar_width)).bright_black()
            );
            println!("   {attempts}: {bar} {count:4} ({pct:5.1}%)");
        }
    }

    if !report.failures.is_empty() {
        println!("\n😰 {}", "Unsolved:".yellow().bold());
        for (word, state) in report.failures.iter().take(10) {
            println!("   {} ({state})", word.to_uppercase().yellow());
        }
    }
}

/// Print a precompute summary with the highest-entropy openers
pub fn print_precompute_report(report: &PrecomputeReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "ENTROPY TABLE".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n   Entries:   {}", report.entries);
    println!("   Time:      {:.2}s", report.duration.as_secs_f64());
    println!("   Written:   {}", report.output.display());

    println!("\n✨ {}", "Best openers:".bright_cyan().bold());
    for (word, entropy) in &report.top {
        println!(
            "   {} {}",
            word.to_uppercase().bright_white().bold(),
            format!("{entropy:.3} bits").bright_yellow()
        );
    }
}
