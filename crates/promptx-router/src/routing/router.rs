//! Agent router: validates caller input and drives the fallback walk.

use super::config::RouterSettings;
use super::invoker::{ModelInvoker, RegistryInvoker};
use super::resolver::FallbackResolver;
use super::types::{RunOutcome, SelectionMode};
use super::validator::OutputValidator;
use crate::agents::{AgentCatalog, AgentKind, AgentSpec};
use crate::error::{Result, RouterError};
use std::sync::Arc;
use std::time::Instant;
use tracing::debug;

/// Routes prompts to agents.
///
/// Cheap to share: the catalog and invoker sit behind `Arc` and no call
/// mutates the router.
pub struct AgentRouter {
    catalog: Arc<AgentCatalog>,
    resolver: FallbackResolver,
}

impl AgentRouter {
    /// Creates a router over the given catalog and invoker.
    #[must_use]
    pub fn new(catalog: Arc<AgentCatalog>, invoker: Arc<dyn ModelInvoker>, validator: OutputValidator) -> Self {
        Self { catalog, resolver: FallbackResolver::new(invoker, validator) }
    }

    /// Creates a router that invokes models through the model factory.
    #[must_use]
    pub fn from_settings(settings: RouterSettings) -> Self {
        let invoker = RegistryInvoker::new(settings.default_engine, settings.parameters);
        Self::new(Arc::new(settings.catalog), Arc::new(invoker), OutputValidator::new(settings.validator))
    }

    /// Agent profiles in declaration order, for display.
    #[must_use]
    pub fn describe_agents(&self) -> Vec<&AgentSpec> {
        self.catalog.iter().collect()
    }

    /// Runs `prompt` through `agent_id`.
    ///
    /// `model_override` of `None`, blank, or `"auto"` uses the agent's
    /// candidate list; any other value is tried first.
    ///
    /// # Errors
    /// Only caller mistakes: an unknown agent or an empty prompt. Model
    /// failures are absorbed and reported in the trace.
    pub async fn run(&self, agent_id: &str, model_override: Option<&str>, prompt: &str) -> Result<RunOutcome> {
        self.run_with_deadline(agent_id, model_override, prompt, None).await
    }

    /// Like [`run`](Self::run), giving up on remaining candidates once
    /// `deadline` passes.
    pub async fn run_with_deadline(
        &self,
        agent_id: &str,
        model_override: Option<&str>,
        prompt: &str,
        deadline: Option<Instant>,
    ) -> Result<RunOutcome> {
        let kind: AgentKind = agent_id.parse()?;
        self.run_kind(kind, model_override, prompt, deadline).await
    }

    /// Runs an already-parsed agent.
    pub async fn run_kind(
        &self,
        kind: AgentKind,
        model_override: Option<&str>,
        prompt: &str,
        deadline: Option<Instant>,
    ) -> Result<RunOutcome> {
        let spec = self.catalog.get(kind).ok_or_else(|| RouterError::UnknownAgent(kind.id().to_string()))?;

        if prompt.trim().is_empty() {
            return Err(RouterError::EmptyInput);
        }

        let (mode, explicit_model) = SelectionMode::from_override(model_override);
        debug!(agent = %kind, mode = %mode, explicit_model = ?explicit_model, "Routing request");

        let result = self.resolver.resolve(spec, explicit_model, prompt, deadline).await;

        Ok(RunOutcome { result, default_model: spec.default_model().to_string(), mode })
    }
}
