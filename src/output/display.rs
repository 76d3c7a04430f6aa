//! Display functions for command results

use super::formatters::{colored_guess, hints_to_emoji, lie_marker};
use crate::commands::{ScoreResult, SimulationOutcome, SimulationResult};
use crate::game::RoundRecord;
use colored::Colorize;

/// Print the true hints for a single guess
pub fn print_score_result(result: &ScoreResult) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(
        "{} vs {}",
        result.guess.text().bright_yellow().bold(),
        result.answer.text().bright_cyan().bold()
    );
    println!("{}", "─".repeat(40).cyan());

    println!("\n  {}", colored_guess(&result.guess, &result.hints));
    println!("  {}", hints_to_emoji(&result.hints));

    if !result.in_dictionary {
        println!(
            "\n  {}",
            format!("Note: {} is not in the dictionary", result.guess).yellow()
        );
    }
}

/// Print one resolved round, optionally exposing where it lied
pub fn print_round(round: usize, record: &RoundRecord, reveal: bool) {
    println!(
        "  {:>2}. {}  {}",
        round + 1,
        colored_guess(&record.guess, &record.shown),
        hints_to_emoji(&record.shown)
    );

    if reveal && let Some(position) = record.lie {
        println!(
            "      {}  {}",
            lie_marker(position).bright_red().bold(),
            format!(
                "lie at {}: really {}",
                position + 1,
                record.truth[position]
            )
            .bright_red()
        );
    }
}

/// Print a scripted game with every lie revealed
pub fn print_simulation_result(result: &SimulationResult) {
    println!("\n{}", "═".repeat(50).cyan());
    println!(
        " {} {} ",
        "SIMULATION:".bright_cyan().bold(),
        result.answer.text().bright_yellow().bold()
    );
    println!("{}", "═".repeat(50).cyan());
    println!();

    for (round, record) in result.rounds.iter().enumerate() {
        print_round(round, record, true);
    }

    if !result.rejected.is_empty() {
        println!(
            "\n  {} {}",
            "Rejected:".yellow(),
            result.rejected.join(", ")
        );
    }

    println!();
    match result.outcome {
        SimulationOutcome::Won { round } => println!(
            "{}",
            format!("✅ Solved in {} guesses with {} lies told", round + 1, result.lies)
                .green()
                .bold()
        ),
        SimulationOutcome::Lost => println!(
            "{}",
            format!("❌ Out of rounds; the answer was {}", result.answer)
                .red()
                .bold()
        ),
        SimulationOutcome::Unfinished => println!(
            "{}",
            format!(
                "… Ran out of guesses after {} rounds",
                result.rounds.len()
            )
            .bright_black()
        ),
    }
}
