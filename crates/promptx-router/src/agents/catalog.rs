//! The process-wide agent table.

use super::{AgentKind, AgentSpec, CandidateModel};
use crate::routing::config::ConfigError;
use std::collections::BTreeMap;
use std::collections::HashSet;

/// Immutable mapping from agent to its profile.
///
/// Built once at startup and shared by `Arc`; nothing mutates it afterwards,
/// so concurrent readers need no locking.
#[derive(Debug, Clone, PartialEq)]
pub struct AgentCatalog {
    agents: BTreeMap<AgentKind, AgentSpec>,
}

impl AgentCatalog {
    /// Builds a catalog from the given specs.
    ///
    /// # Errors
    /// Returns `ConfigError::Validation` if an agent appears twice, has no
    /// candidates, or lists the same model twice.
    pub fn new(specs: Vec<AgentSpec>) -> Result<Self, ConfigError> {
        let mut agents = BTreeMap::new();
        for spec in specs {
            Self::check(&spec)?;
            let kind = spec.kind;
            if agents.insert(kind, spec).is_some() {
                return Err(ConfigError::Validation(format!("Agent '{}' is defined twice", kind)));
            }
        }
        Ok(Self { agents })
    }

    /// The built-in table every deployment starts from.
    #[must_use]
    pub fn builtin() -> Self {
        let agents = AgentKind::ALL.into_iter().map(|kind| (kind, builtin_spec(kind))).collect();
        Self { agents }
    }

    /// Returns a copy with `spec` replacing the entry for its agent.
    ///
    /// # Errors
    /// Returns `ConfigError::Validation` if the spec breaks a catalog invariant.
    pub fn with_spec(mut self, spec: AgentSpec) -> Result<Self, ConfigError> {
        Self::check(&spec)?;
        self.agents.insert(spec.kind, spec);
        Ok(self)
    }

    /// Looks up an agent's profile.
    #[must_use]
    pub fn get(&self, kind: AgentKind) -> Option<&AgentSpec> {
        self.agents.get(&kind)
    }

    /// Iterates over all profiles in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &AgentSpec> {
        self.agents.values()
    }

    /// Number of agents.
    #[must_use]
    pub fn len(&self) -> usize {
        self.agents.len()
    }

    /// Whether the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    fn check(spec: &AgentSpec) -> Result<(), ConfigError> {
        if spec.candidates.is_empty() {
            return Err(ConfigError::Validation(format!(
                "Agent '{}' must have at least one candidate model",
                spec.kind
            )));
        }

        let mut seen = HashSet::new();
        for candidate in &spec.candidates {
            if candidate.model.trim().is_empty() {
                return Err(ConfigError::Validation(format!(
                    "Agent '{}' has a candidate with an empty model name",
                    spec.kind
                )));
            }
            if !seen.insert(candidate.model.as_str()) {
                return Err(ConfigError::Validation(format!(
                    "Agent '{}' lists model '{}' more than once",
                    spec.kind, candidate.model
                )));
            }
        }

        Ok(())
    }
}

impl Default for AgentCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

fn builtin_spec(kind: AgentKind) -> AgentSpec {
    let (task, models, tags, min_similarity): (&str, &[&str], &[&str], Option<f64>) = match kind {
        AgentKind::Summarizer => (
            "Summarize the input text",
            &["t5-small", "flan-t5-base", "google/pegasus-xsum"],
            &["summarize", "summary", "condense", "shorten", "tldr", "digest", "recap", "key points"],
            Some(0.1),
        ),
        AgentKind::CodeReviewer => (
            "Review this code and suggest improvements",
            &["Salesforce/codet5-small", "t5-base"],
            &["code", "codebase", "review", "bug", "refactor", "lint", "function", "snippet", "pull request"],
            None,
        ),
        AgentKind::Persona => (
            "Rewrite this text in a friendly and engaging tone",
            &["flan-t5-base", "t5-v1_1-base"],
            &["persona", "tone", "friendly", "rewrite", "voice", "style", "engaging", "casual", "formal", "audience"],
            None,
        ),
        AgentKind::FollowUp => (
            "Suggest next steps or follow-up actions",
            &["flan-t5-base", "t5-small"],
            &["follow up", "followup", "next step", "next steps", "action", "todo", "plan"],
            None,
        ),
        AgentKind::Clarity => (
            "Assess and improve the clarity of the text",
            &["flan-t5-base", "t5-small"],
            &["clarity", "clarify", "clear", "readable", "readability", "simplify", "improve", "concise", "plain language"],
            None,
        ),
    };

    AgentSpec {
        kind,
        task: task.to_string(),
        candidates: models
            .iter()
            .enumerate()
            .map(|(rank, model)| CandidateModel::new(*model).with_weight(1.0 / (rank as f64 + 1.0)))
            .collect(),
        tags: tags.iter().map(|tag| (*tag).to_string()).collect(),
        min_similarity,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_covers_every_agent() {
        let catalog = AgentCatalog::builtin();
        assert_eq!(catalog.len(), AgentKind::ALL.len());
        for kind in AgentKind::ALL {
            let spec = catalog.get(kind).unwrap();
            assert!(!spec.candidates.is_empty());
            assert!(!spec.tags.is_empty());
        }
    }

    #[test]
    fn test_builtin_fallback_order() {
        let catalog = AgentCatalog::builtin();
        let models: Vec<&str> = catalog
            .get(AgentKind::Summarizer)
            .unwrap()
            .candidates
            .iter()
            .map(|c| c.model.as_str())
            .collect();
        assert_eq!(models, vec!["t5-small", "flan-t5-base", "google/pegasus-xsum"]);
        assert_eq!(catalog.get(AgentKind::CodeReviewer).unwrap().default_model(), "Salesforce/codet5-small");
    }

    #[test]
    fn test_new_rejects_empty_candidates() {
        let mut spec = builtin_spec(AgentKind::Persona);
        spec.candidates.clear();
        assert!(AgentCatalog::new(vec![spec]).is_err());
    }

    #[test]
    fn test_new_rejects_duplicates() {
        let spec = builtin_spec(AgentKind::Clarity);
        assert!(AgentCatalog::new(vec![spec.clone(), spec]).is_err());

        let mut spec = builtin_spec(AgentKind::Clarity);
        spec.candidates.push(CandidateModel::new("t5-small"));
        assert!(AgentCatalog::new(vec![spec]).is_err());
    }

    #[test]
    fn test_with_spec_replaces_entry() {
        let mut spec = builtin_spec(AgentKind::FollowUp);
        spec.candidates = vec![CandidateModel::new("echo:follow")];
        let catalog = AgentCatalog::builtin().with_spec(spec).unwrap();
        assert_eq!(catalog.get(AgentKind::FollowUp).unwrap().default_model(), "echo:follow");
        assert_eq!(catalog.len(), 5);
    }
}
