//! Agents command: list the agent catalog.

use anyhow::Result;
use colored::Colorize;
use promptx_router::{AgentRouter, RouterSettings};
use serde_json::json;

/// Execute the agents command.
pub fn execute(settings: &RouterSettings, json_output: bool) -> Result<()> {
    let router = AgentRouter::from_settings(settings.clone());
    let agents = router.describe_agents();

    if json_output {
        let agent_list: Vec<_> = agents
            .iter()
            .map(|spec| {
                json!({
                    "id": spec.kind.id(),
                    "task": spec.task,
                    "default_model": spec.default_model(),
                    "candidates": spec.candidates,
                    "tags": spec.tags,
                    "min_similarity": spec.min_similarity,
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&agent_list)?);
        return Ok(());
    }

    println!();
    println!("{}", format!("Found {} agents", agents.len()).bold().green());
    println!();

    for spec in agents {
        println!("  {} {}", spec.kind.id().bold().cyan(), format!("- {}", spec.task).dimmed());
        let models: Vec<&str> = spec.candidates.iter().map(|c| c.model.as_str()).collect();
        println!("    Models: {}", models.join(" -> "));
        println!("    Tags:   {}", spec.tags.join(", "));
        if let Some(threshold) = spec.min_similarity {
            println!("    Min similarity: {:.2}", threshold);
        }
        println!();
    }

    Ok(())
}
