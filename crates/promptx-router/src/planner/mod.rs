//! Chain planner: maps a free-text goal to an ordered list of agents.
//!
//! Matching is purely lexical. Each agent's tags are compared against the
//! goal, matched agents are kept, and the survivors are ordered by their
//! fixed pipeline rank. Scores are reported but never reorder the plan.

mod stem;

pub use stem::{stem, stems_match};

use crate::agents::{AgentCatalog, AgentKind, AgentSpec};
use crate::text::tokenize;
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

/// One agent in a suggested chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlanStep {
    /// Agent to run.
    pub agent: AgentKind,
    /// Why the agent was picked.
    pub rationale: String,
    /// Number of matched tags.
    pub score: usize,
}

/// A suggested chain of agents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChainPlan {
    /// The goal as given.
    pub goal: String,
    /// Steps in execution order.
    pub steps: Vec<PlanStep>,
    /// Summary of how the plan was built.
    pub rationale: String,
}

impl ChainPlan {
    /// Agents in execution order.
    #[must_use]
    pub fn agents(&self) -> Vec<AgentKind> {
        self.steps.iter().map(|step| step.agent).collect()
    }

    /// Whether no agent matched.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

/// Suggests agent chains from the catalog's tags.
pub struct ChainPlanner {
    catalog: Arc<AgentCatalog>,
}

impl ChainPlanner {
    /// Creates a planner over `catalog`.
    #[must_use]
    pub fn new(catalog: Arc<AgentCatalog>) -> Self {
        Self { catalog }
    }

    /// Suggests a chain for `goal`.
    ///
    /// Never fails: an empty or unmatched goal yields an empty plan.
    #[must_use]
    pub fn suggest_chain(&self, goal: &str) -> ChainPlan {
        let goal_tokens = tokenize(goal);
        let padded_goal = format!(" {} ", goal_tokens.join(" "));

        let mut steps: Vec<PlanStep> = self
            .catalog
            .iter()
            .filter_map(|spec| {
                let matched = matched_tags(spec, &goal_tokens, &padded_goal);
                if matched.is_empty() {
                    return None;
                }
                Some(PlanStep {
                    agent: spec.kind,
                    rationale: format!("matched {}", matched.join(", ")),
                    score: matched.len(),
                })
            })
            .collect();

        steps.sort_by_key(|step| step.agent.pipeline_rank());

        let rationale = if steps.is_empty() {
            "No agent matched the goal".to_string()
        } else {
            let order: Vec<&str> = steps.iter().map(|step| step.agent.id()).collect();
            format!("{} agent(s) matched, ordered by pipeline stage: {}", steps.len(), order.join(" -> "))
        };

        debug!(goal = goal, steps = steps.len(), "Suggested chain");

        ChainPlan { goal: goal.to_string(), steps, rationale }
    }
}

/// Tags of `spec` that match the goal, in tag order.
fn matched_tags<'a>(spec: &'a AgentSpec, goal_tokens: &[String], padded_goal: &str) -> Vec<&'a str> {
    spec.tags
        .iter()
        .filter(|tag| {
            let tag_tokens = tokenize(tag);
            match tag_tokens.as_slice() {
                [] => false,
                [word] => goal_tokens.iter().any(|token| stems_match(token, word)),
                phrase => padded_goal.contains(&format!(" {} ", phrase.join(" "))),
            }
        })
        .map(String::as_str)
        .collect()
}
