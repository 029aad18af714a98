//! Terminal response used when every candidate fails.

use crate::agents::AgentKind;
use crate::text::preview;

/// `model_used` reported for dummy responses.
pub const DUMMY_MODEL_ID: &str = "dummy";

/// Characters of input echoed back in a dummy response.
pub const DUMMY_PREVIEW_CHARS: usize = 60;

/// Builds the dummy response for `agent`.
///
/// Pure function of its arguments; never empty.
pub fn dummy_output(agent: AgentKind, input: &str) -> String {
    let (echo, truncated) = preview(input, DUMMY_PREVIEW_CHARS);
    let ellipsis = if truncated { "..." } else { "" };
    format!("[{}] {} (input: \"{}{}\")", agent.id(), agent.fallback_message(), echo, ellipsis)
}
