// Error types for agent routing

use thiserror::Error;

/// Result type for routing operations
pub type Result<T> = std::result::Result<T, RouterError>;

/// Caller errors.
///
/// Model failures never show up here: they are absorbed by the fallback walk
/// and reported through the attempt trace instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouterError {
    /// The agent identifier is not one of the known agents
    #[error("Unknown agent '{0}'. Valid agents: SummarizerAgent, CodeReviewerAgent, PersonaAgent, FollowUpAgent, ClarityAgent")]
    UnknownAgent(String),

    /// The input text is empty or whitespace-only
    #[error("Input text must not be empty")]
    EmptyInput,
}
