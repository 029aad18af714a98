//! Types for the fallback walk.

use crate::agents::AgentKind;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;
use thiserror::Error;

/// A single (model, prompt) pair handed to the invoker.
#[derive(Debug, Clone, Copy)]
pub struct InvocationRequest<'a> {
    /// Agent the call is made on behalf of.
    pub agent: AgentKind,
    /// Resolved model identifier.
    pub model_id: &'a str,
    /// Final prompt text.
    pub prompt: &'a str,
    /// Time budget for this call.
    pub timeout: Option<Duration>,
}

/// Why a single candidate produced no output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(rename_all = "snake_case")]
pub enum InvocationFailure {
    /// The call did not finish within its time budget.
    #[error("timed out after {0} ms")]
    Timeout(u64),
    /// The model or its engine could not be reached.
    #[error("unavailable: {0}")]
    Unavailable(String),
    /// The model answered with something unusable.
    #[error("malformed response: {0}")]
    Malformed(String),
}

/// Why the validator turned an output down.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RejectReason {
    /// Empty or whitespace-only.
    Empty,
    /// Shorter than the configured floor.
    TooShort {
        /// Characters in the trimmed output.
        chars: usize,
        /// Configured floor.
        min: usize,
    },
    /// Contains a configured error marker.
    ErrorMarker {
        /// The marker that matched.
        marker: String,
    },
    /// Too little lexical overlap with the input.
    LowSimilarity {
        /// Computed token overlap.
        score: f64,
        /// Agent threshold.
        threshold: f64,
    },
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "empty output"),
            Self::TooShort { chars, min } => write!(f, "output too short ({} < {} chars)", chars, min),
            Self::ErrorMarker { marker } => write!(f, "output contains error marker '{}'", marker),
            Self::LowSimilarity { score, threshold } => {
                write!(f, "similarity {:.3} below threshold {:.3}", score, threshold)
            }
        }
    }
}

/// Validator decision.
#[derive(Debug, Clone, PartialEq)]
pub enum Verdict {
    /// Output is usable.
    Accept,
    /// Output must not be returned.
    Reject(RejectReason),
}

impl Verdict {
    /// Whether the output was accepted.
    #[must_use]
    pub fn is_accept(&self) -> bool {
        matches!(self, Self::Accept)
    }
}

/// Outcome of one candidate in the walk.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AttemptVerdict {
    /// Output accepted; the walk stopped here.
    Accepted,
    /// Output produced but rejected by the validator.
    Rejected {
        /// Validator reason.
        reason: RejectReason,
    },
    /// The invoker reported a failure.
    Failed {
        /// Invoker reason.
        failure: InvocationFailure,
    },
    /// Not attempted because the caller's deadline had passed.
    Skipped,
}

impl AttemptVerdict {
    /// Whether this attempt produced the returned output.
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted)
    }
}

impl fmt::Display for AttemptVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Accepted => write!(f, "accepted"),
            Self::Rejected { reason } => write!(f, "rejected: {}", reason),
            Self::Failed { failure } => write!(f, "failed: {}", failure),
            Self::Skipped => write!(f, "skipped: deadline elapsed"),
        }
    }
}

/// One entry of the diagnostic trace.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AttemptRecord {
    /// Model that was (or would have been) tried.
    pub model: String,
    /// Candidate weight, for diagnostics.
    pub weight: f64,
    /// What happened.
    #[serde(flatten)]
    pub verdict: AttemptVerdict,
}

/// Result of a fallback walk. Output is never empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InvocationResult {
    /// Agent that ran.
    pub agent: AgentKind,
    /// Model whose output was returned, or `"dummy"`.
    pub model_used: String,
    /// Returned text.
    pub output: String,
    /// True when the output did not come from the first attempt.
    pub used_fallback: bool,
    /// True when every candidate failed and the dummy response was returned.
    pub is_dummy: bool,
    /// Ordered attempts and their verdicts.
    pub trace: Vec<AttemptRecord>,
}

/// How the model was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionMode {
    /// The agent's candidate list decides.
    Auto,
    /// The caller named a model, tried before the candidate list.
    Manual,
}

impl SelectionMode {
    /// Splits a raw override into a mode and the explicit model, if any.
    ///
    /// `None`, blank, and `"auto"` (any case) all mean auto selection.
    #[must_use]
    pub fn from_override(model_override: Option<&str>) -> (Self, Option<&str>) {
        match model_override.map(str::trim) {
            Some(model) if !model.is_empty() && !model.eq_ignore_ascii_case("auto") => {
                (Self::Manual, Some(model))
            }
            _ => (Self::Auto, None),
        }
    }
}

impl fmt::Display for SelectionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Auto => write!(f, "auto"),
            Self::Manual => write!(f, "manual"),
        }
    }
}

/// What the router hands back to callers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunOutcome {
    /// The walk result.
    #[serde(flatten)]
    pub result: InvocationResult,
    /// The agent's preferred model, for display in auto mode.
    pub default_model: String,
    /// How the model was chosen.
    pub mode: SelectionMode,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_mode_from_override() {
        assert_eq!(SelectionMode::from_override(None), (SelectionMode::Auto, None));
        assert_eq!(SelectionMode::from_override(Some("")), (SelectionMode::Auto, None));
        assert_eq!(SelectionMode::from_override(Some("  ")), (SelectionMode::Auto, None));
        assert_eq!(SelectionMode::from_override(Some("AUTO")), (SelectionMode::Auto, None));
        assert_eq!(
            SelectionMode::from_override(Some(" t5-base ")),
            (SelectionMode::Manual, Some("t5-base"))
        );
    }

    #[test]
    fn test_attempt_record_json_shape() {
        let record = AttemptRecord {
            model: "t5-small".to_string(),
            weight: 1.0,
            verdict: AttemptVerdict::Failed { failure: InvocationFailure::Timeout(250) },
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["model"], "t5-small");
        assert_eq!(json["status"], "failed");
        assert_eq!(json["failure"]["timeout"], 250);
    }

    #[test]
    fn test_reject_reason_display() {
        let reason = RejectReason::TooShort { chars: 3, min: 20 };
        assert_eq!(reason.to_string(), "output too short (3 < 20 chars)");
        let verdict = AttemptVerdict::Rejected { reason: RejectReason::Empty };
        assert_eq!(verdict.to_string(), "rejected: empty output");
    }
}
