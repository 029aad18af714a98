//! The closed set of agents.

use crate::error::RouterError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Agent identifier.
///
/// Agents differ only by their [`AgentSpec`](super::AgentSpec) data, so a
/// single router handles all of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AgentKind {
    /// Condenses text.
    #[serde(rename = "SummarizerAgent")]
    Summarizer,
    /// Reviews code and suggests improvements.
    #[serde(rename = "CodeReviewerAgent")]
    CodeReviewer,
    /// Rewrites text in a different tone.
    #[serde(rename = "PersonaAgent")]
    Persona,
    /// Proposes next steps.
    #[serde(rename = "FollowUpAgent")]
    FollowUp,
    /// Assesses and improves readability.
    #[serde(rename = "ClarityAgent")]
    Clarity,
}

impl AgentKind {
    /// All agents in declaration order.
    pub const ALL: [Self; 5] =
        [Self::Summarizer, Self::CodeReviewer, Self::Persona, Self::FollowUp, Self::Clarity];

    /// The external identifier, e.g. `SummarizerAgent`.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Summarizer => "SummarizerAgent",
            Self::CodeReviewer => "CodeReviewerAgent",
            Self::Persona => "PersonaAgent",
            Self::FollowUp => "FollowUpAgent",
            Self::Clarity => "ClarityAgent",
        }
    }

    /// Position in a natural pipeline; lower runs earlier.
    ///
    /// Code review works on raw input, summarization and clarity shape the
    /// content, persona adjusts tone, and follow-up suggestions come last.
    #[must_use]
    pub const fn pipeline_rank(self) -> u8 {
        match self {
            Self::CodeReviewer => 0,
            Self::Summarizer => 1,
            Self::Clarity => 2,
            Self::Persona => 3,
            Self::FollowUp => 4,
        }
    }

    /// Fixed message used by the dummy response.
    #[must_use]
    pub const fn fallback_message(self) -> &'static str {
        match self {
            Self::Summarizer => "Summary unavailable. Please review the original text.",
            Self::CodeReviewer => "No critical issues detected. Consider edge cases.",
            Self::Persona => "Could not adjust tone. Original text retained.",
            Self::FollowUp => "Unable to generate next steps. Please try again.",
            Self::Clarity => "Clarity score unavailable. Text may need manual review.",
        }
    }
}

impl fmt::Display for AgentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for AgentKind {
    type Err = RouterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.id() == s)
            .ok_or_else(|| RouterError::UnknownAgent(s.to_string()))
    }
}
