//! Plan command: suggest an agent chain for a goal.

use anyhow::Result;
use colored::Colorize;
use promptx_router::{ChainPlanner, RouterSettings};
use std::sync::Arc;

/// Execute the plan command.
pub fn execute(settings: RouterSettings, goal: &str, json: bool) -> Result<()> {
    let planner = ChainPlanner::new(Arc::new(settings.catalog));
    let plan = planner.suggest_chain(goal);

    if json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
        return Ok(());
    }

    if plan.is_empty() {
        println!("{}", plan.rationale.yellow());
        return Ok(());
    }

    println!("{}", format!("Suggested chain for \"{}\"", plan.goal).bold().cyan());
    println!();
    for (index, step) in plan.steps.iter().enumerate() {
        println!(
            "  {}. {} {}",
            index + 1,
            step.agent.id().green(),
            format!("(score {}, {})", step.score, step.rationale).dimmed()
        );
    }
    println!();
    println!("{}", plan.rationale);

    Ok(())
}
