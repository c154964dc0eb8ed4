//! Display functions for command results

use super::formatters::{entropy_bar, format_probability, format_tiles};
use crate::commands::{AnalysisReport, OpeningReport, StepOutcome, Suggestion};
use crate::solver::Observation;
use colored::Colorize;

/// Print ranked guesses, best first, with a bar against `ceiling`
///
/// Each line also shows the answer probability and the expected score.
pub fn print_suggestions(suggestions: &[Suggestion], ceiling: f64) {
    for (i, s) in suggestions.iter().enumerate() {
        println!(
            "  {:>3}. {} [{}] {}  p {}  score {}",
            (i + 1).to_string().bright_black(),
            s.word.to_uppercase().bright_white().bold(),
            entropy_bar(s.entropy, ceiling, 20).green(),
            format!("{:.2} bits", s.entropy).bright_yellow(),
            format_probability(s.probability).bright_cyan(),
            format!("{:.2}", s.expected_score).bright_magenta()
        );
    }
}

/// Print the pool change caused by one guess
pub fn print_observation(observation: &Observation) {
    println!(
        "  Possible answers: {} → {}",
        observation.candidates_before,
        observation.candidates_after.to_string().bright_cyan().bold()
    );
    println!("  Entropy:          {:.2} bits", observation.entropy_after);
    if observation.reduction.abs() > f64::EPSILON {
        println!(
            "  Actual reduction: {}",
            format!("{:.2} bits", observation.reduction).green()
        );
    }
}

/// Print a replayed game, one block per guess
pub fn print_analysis_report(report: &AnalysisReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {}  anchor {}",
        "ANALYSIS:".bright_cyan().bold(),
        report.answer.text().to_uppercase().bright_yellow().bold(),
        report.anchor.as_str().to_uppercase().bold()
    );
    println!("{}", "═".repeat(60).cyan());
    println!(
        "\n📊 {} possible answers ({:.2} bits)",
        report.initial_candidates, report.initial_entropy
    );

    for (i, step) in report.steps.iter().enumerate() {
        println!("\nGuess {}: {}", i + 1, format_tiles(&step.result));

        match step.outcome {
            StepOutcome::Narrowed(observation) => {
                print_observation(&observation);
                if !step.suggestions.is_empty() {
                    println!("\n  Best next guesses:");
                    print_suggestions(&step.suggestions, observation.entropy_after);
                }
            }
            StepOutcome::Exhausted { candidates_before } => {
                println!(
                    "{}",
                    format!(
                        "  ❌ No candidates remain (had {candidates_before}); \
                         the answer is not in the word list"
                    )
                    .red()
                    .bold()
                );
            }
        }
    }

    println!();
    if report.solved() {
        println!(
            "{}",
            format!("✅ Solved in {} guesses", report.steps.len())
                .green()
                .bold()
        );
    }
}

/// Print the opening ranking
pub fn print_opening_report(report: &OpeningReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} letters, anchor {}",
        "OPENING RANKING:".bright_cyan().bold(),
        report.answer_len,
        report.anchor.as_str().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    if report.candidates == 0 {
        println!(
            "\n{}",
            "❌ No word of this length contains the anchor".red().bold()
        );
        return;
    }

    println!(
        "\n📊 {} possible answers ({:.2} bits)\n",
        report.candidates, report.entropy
    );
    print_suggestions(&report.suggestions, report.entropy);
}
