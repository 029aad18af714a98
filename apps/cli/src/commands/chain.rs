//! Chain command: run several agents in sequence.

use super::print_outcome;
use anyhow::{Context, Result, bail};
use colored::Colorize;
use promptx_router::{AgentKind, AgentRouter, ChainPlanner, ChainRunner, Handoff, RouterSettings};
use std::sync::Arc;

/// Execute the chain command.
pub async fn execute(
    settings: RouterSettings,
    agents: Vec<String>,
    goal: Option<String>,
    append: bool,
    json: bool,
    input: &str,
) -> Result<()> {
    let chain = match goal {
        Some(goal) => {
            let plan = ChainPlanner::new(Arc::new(settings.catalog.clone())).suggest_chain(&goal);
            if plan.is_empty() {
                bail!("{} \"{}\"", plan.rationale, goal);
            }
            plan.agents()
        }
        None => parse_agents(&agents)?,
    };

    let handoff = if append { Handoff::Append } else { Handoff::Replace };
    let router = AgentRouter::from_settings(settings);
    let outcome = ChainRunner::new(&router, handoff).run(&chain, input).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
        return Ok(());
    }

    let names: Vec<&str> = chain.iter().map(|agent| agent.id()).collect();
    println!("{}", format!("Chain: {}", names.join(" -> ")).bold().cyan());
    for step in &outcome.steps {
        println!();
        print_outcome(step);
    }

    Ok(())
}

fn parse_agents(agents: &[String]) -> Result<Vec<AgentKind>> {
    let chain = agents
        .iter()
        .map(|id| id.trim())
        .filter(|id| !id.is_empty())
        .map(|id| id.parse::<AgentKind>().with_context(|| format!("Invalid chain step '{}'", id)))
        .collect::<Result<Vec<_>>>()?;

    if chain.is_empty() {
        bail!("No agents given; pass --agents or --goal");
    }
    Ok(chain)
}
