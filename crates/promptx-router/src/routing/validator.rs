//! Output validation.

use super::types::{RejectReason, Verdict};
use crate::agents::AgentSpec;
use crate::text::token_overlap;
use serde::{Deserialize, Serialize};

/// Shortest output accepted by default, in characters.
pub const DEFAULT_MIN_OUTPUT_CHARS: usize = 20;

/// Validator settings shared by all agents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatorConfig {
    /// Trimmed outputs shorter than this are treated as truncated.
    pub min_output_chars: usize,
    /// Lower-case substrings that mark an output as an error message.
    pub error_markers: Vec<String>,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            min_output_chars: DEFAULT_MIN_OUTPUT_CHARS,
            error_markers: vec!["error generating response".to_string()],
        }
    }
}

/// Decides whether a raw model output may be returned.
///
/// Holds only read-only settings; `validate` is pure.
#[derive(Debug, Clone, Default)]
pub struct OutputValidator {
    config: ValidatorConfig,
}

impl OutputValidator {
    /// Creates a validator with the given settings.
    #[must_use]
    pub fn new(config: ValidatorConfig) -> Self {
        Self { config }
    }

    /// Checks `output` against the floor, the error markers, and the agent's
    /// similarity threshold, in that order.
    pub fn validate(&self, output: &str, input: &str, spec: &AgentSpec) -> Verdict {
        let trimmed = output.trim();
        if trimmed.is_empty() {
            return Verdict::Reject(RejectReason::Empty);
        }

        let chars = trimmed.chars().count();
        if chars < self.config.min_output_chars {
            return Verdict::Reject(RejectReason::TooShort { chars, min: self.config.min_output_chars });
        }

        let lower = trimmed.to_lowercase();
        if let Some(marker) = self
            .config
            .error_markers
            .iter()
            .find(|marker| !marker.is_empty() && lower.contains(&marker.to_lowercase()))
        {
            return Verdict::Reject(RejectReason::ErrorMarker { marker: marker.clone() });
        }

        if let Some(threshold) = spec.min_similarity {
            let score = token_overlap(trimmed, input);
            if score < threshold {
                return Verdict::Reject(RejectReason::LowSimilarity { score, threshold });
            }
        }

        Verdict::Accept
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agents::{AgentCatalog, AgentKind};

    fn spec(kind: AgentKind) -> AgentSpec {
        AgentCatalog::builtin().get(kind).unwrap().clone()
    }

    #[test]
    fn test_rejects_empty_and_whitespace() {
        let validator = OutputValidator::default();
        let spec = spec(AgentKind::Persona);
        assert_eq!(validator.validate("", "input", &spec), Verdict::Reject(RejectReason::Empty));
        assert_eq!(validator.validate(" \n\t ", "input", &spec), Verdict::Reject(RejectReason::Empty));
    }

    #[test]
    fn test_rejects_below_floor() {
        let validator = OutputValidator::default();
        let verdict = validator.validate("  too short  ", "input", &spec(AgentKind::Persona));
        assert_eq!(verdict, Verdict::Reject(RejectReason::TooShort { chars: 9, min: 20 }));
    }

    #[test]
    fn test_floor_is_configurable() {
        let validator = OutputValidator::new(ValidatorConfig { min_output_chars: 3, error_markers: Vec::new() });
        assert!(validator.validate("ok!", "input", &spec(AgentKind::Persona)).is_accept());
    }

    #[test]
    fn test_rejects_error_marker_case_insensitively() {
        let validator = OutputValidator::default();
        let verdict = validator.validate(
            "Error generating response: rate limited by upstream",
            "input",
            &spec(AgentKind::FollowUp),
        );
        assert!(matches!(verdict, Verdict::Reject(RejectReason::ErrorMarker { .. })));
    }

    #[test]
    fn test_summarizer_requires_overlap() {
        let validator = OutputValidator::default();
        let spec = spec(AgentKind::Summarizer);
        let input = "The quarterly report shows revenue growth across all regions";

        let unrelated = validator.validate("Bananas are an excellent source of potassium.", input, &spec);
        assert!(matches!(unrelated, Verdict::Reject(RejectReason::LowSimilarity { .. })));

        let related = validator.validate("Revenue grew in all regions this quarter.", input, &spec);
        assert!(related.is_accept());
    }

    #[test]
    fn test_other_agents_skip_similarity() {
        let validator = OutputValidator::default();
        let verdict = validator.validate(
            "Bananas are an excellent source of potassium.",
            "completely unrelated input",
            &spec(AgentKind::Persona),
        );
        assert!(verdict.is_accept());
    }
}
