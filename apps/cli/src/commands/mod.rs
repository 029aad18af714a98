//! Command implementations for the PromptX CLI.

pub mod agents;
pub mod chain;
pub mod plan;
pub mod run;

use colored::Colorize;
use promptx_router::{AttemptRecord, RunOutcome};

/// Prints one agent result in human-readable form.
pub(crate) fn print_outcome(outcome: &RunOutcome) {
    let result = &outcome.result;

    let status = if result.is_dummy {
        "fallback response".yellow()
    } else if result.used_fallback {
        "fallback model".yellow()
    } else {
        "ok".green()
    };

    println!(
        "{} {} via {} ({}, {}, default {})",
        "•".cyan(),
        result.agent.id().bold(),
        result.model_used.cyan(),
        status,
        outcome.mode,
        outcome.default_model.dimmed()
    );

    if result.used_fallback {
        for record in &result.trace {
            print_attempt(record);
        }
    }

    println!();
    println!("{}", result.output);
}

fn print_attempt(record: &AttemptRecord) {
    let line = format!("    {} (weight {:.2}): {}", record.model, record.weight, record.verdict);
    if record.verdict.is_accepted() {
        println!("{}", line.green());
    } else {
        println!("{}", line.dimmed());
    }
}
