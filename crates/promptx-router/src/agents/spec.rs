//! Agent profiles and their candidate models.

use super::AgentKind;
use serde::Serialize;
use std::time::Duration;

/// One entry in an agent's ordered fallback list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CandidateModel {
    /// Model identifier, bare (`t5-small`) or qualified (`echo:t5-small`).
    pub model: String,
    /// Cost/quality weight. Reported in diagnostics only; order is fixed.
    pub weight: f64,
    /// Optional per-invocation timeout in milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_ms: Option<u64>,
}

impl CandidateModel {
    /// Creates a candidate with weight 1.0 and no timeout.
    #[must_use]
    pub fn new(model: impl Into<String>) -> Self {
        Self { model: model.into(), weight: 1.0, timeout_ms: None }
    }

    /// Sets the diagnostic weight.
    #[must_use]
    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }

    /// Sets the per-invocation timeout.
    #[must_use]
    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = Some(timeout_ms);
        self
    }

    /// The timeout as a `Duration`, if any.
    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_ms.map(Duration::from_millis)
    }
}

/// A named task profile: what the agent does, which models it prefers, and
/// which goals it answers to.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AgentSpec {
    /// Agent identifier.
    #[serde(rename = "agent")]
    pub kind: AgentKind,
    /// Human-readable task description.
    pub task: String,
    /// Candidate models, preferred first. Never empty.
    pub candidates: Vec<CandidateModel>,
    /// Keywords the chain planner matches goals against.
    pub tags: Vec<String>,
    /// Minimum token overlap between output and input, if enforced.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_similarity: Option<f64>,
}

impl AgentSpec {
    /// The preferred model, shown to callers who chose "auto".
    #[must_use]
    pub fn default_model(&self) -> &str {
        self.candidates.first().map_or(crate::routing::DUMMY_MODEL_ID, |c| c.model.as_str())
    }

    /// Looks up a candidate by model identifier.
    #[must_use]
    pub fn candidate(&self, model: &str) -> Option<&CandidateModel> {
        self.candidates.iter().find(|c| c.model == model)
    }
}
