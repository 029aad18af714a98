//! Runs agents one after another, feeding each output into the next step.

use crate::agents::AgentKind;
use crate::error::Result;
use crate::planner::ChainPlan;
use crate::routing::{AgentRouter, RunOutcome};
use serde::{Deserialize, Serialize};
use tracing::info;

/// How a step's output becomes the next step's input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Handoff {
    /// The next input is the previous output.
    #[default]
    Replace,
    /// The next input is the previous input, a blank line, then the previous output.
    Append,
}

impl Handoff {
    fn next_input(self, input: &str, output: &str) -> String {
        match self {
            Self::Replace => output.to_string(),
            Self::Append => format!("{}\n\n{}", input, output),
        }
    }
}

/// Result of a chain run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChainOutcome {
    /// Per-step outcomes in execution order.
    pub steps: Vec<RunOutcome>,
    /// Output of the last step, or the input when there were no steps.
    pub final_output: String,
}

/// Executes agent chains through an [`AgentRouter`] in auto mode.
pub struct ChainRunner<'a> {
    router: &'a AgentRouter,
    handoff: Handoff,
}

impl<'a> ChainRunner<'a> {
    /// Creates a runner with the given handoff.
    #[must_use]
    pub fn new(router: &'a AgentRouter, handoff: Handoff) -> Self {
        Self { router, handoff }
    }

    /// Runs `agents` in order starting from `input`.
    ///
    /// # Errors
    /// The first caller error aborts the chain.
    pub async fn run(&self, agents: &[AgentKind], input: &str) -> Result<ChainOutcome> {
        let mut steps = Vec::with_capacity(agents.len());
        let mut current = input.to_string();

        for (index, &agent) in agents.iter().enumerate() {
            let outcome = self.router.run_kind(agent, None, &current, None).await?;
            info!(
                step = index,
                agent = %agent,
                model_used = %outcome.result.model_used,
                is_dummy = outcome.result.is_dummy,
                "Chain step finished"
            );
            current = self.handoff.next_input(&current, &outcome.result.output);
            steps.push(outcome);
        }

        let final_output = steps.last().map_or(current, |step| step.result.output.clone());
        Ok(ChainOutcome { steps, final_output })
    }

    /// Runs the agents of `plan`.
    ///
    /// # Errors
    /// The first caller error aborts the chain.
    pub async fn run_plan(&self, plan: &ChainPlan, input: &str) -> Result<ChainOutcome> {
        self.run(&plan.agents(), input).await
    }
}
