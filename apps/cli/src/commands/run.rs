//! Run command: send text through one agent.

use super::print_outcome;
use anyhow::{Result, bail};
use clap::ValueEnum;
use promptx_router::{AgentRouter, RouterSettings};
use std::time::{Duration, Instant};
use tracing::warn;

/// Model selection mode as given on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Use the agent's candidate list.
    Auto,
    /// Try `--model` first, then the candidate list.
    Manual,
}

/// Execute the run command.
pub async fn execute(
    settings: RouterSettings,
    agent: &str,
    model: Option<String>,
    mode: Option<Mode>,
    timeout_ms: Option<u64>,
    json: bool,
    input: &str,
) -> Result<()> {
    let model_override = resolve_override(mode, model)?;
    let deadline = timeout_ms.map(|ms| Instant::now() + Duration::from_millis(ms));

    let router = AgentRouter::from_settings(settings);
    let outcome = router.run_with_deadline(agent, model_override.as_deref(), input, deadline).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        print_outcome(&outcome);
    }

    Ok(())
}

/// Combines `--mode` and `--model` into the router's override.
///
/// A model implies manual mode; auto mode ignores any model. `--model auto`
/// without a mode selects auto mode.
fn resolve_override(mode: Option<Mode>, model: Option<String>) -> Result<Option<String>> {
    let model = model.map(|m| m.trim().to_string());
    match (mode, model) {
        (Some(Mode::Auto), Some(model)) => {
            warn!(model = %model, "Ignoring --model in auto mode");
            Ok(None)
        }
        (Some(Mode::Manual), None) => bail!("--mode manual requires --model"),
        (Some(Mode::Manual), Some(model)) if is_auto_placeholder(&model) => {
            bail!("--mode manual requires a concrete --model, got '{}'", model)
        }
        (None, Some(model)) if model.is_empty() => bail!("--model must not be empty"),
        (None, Some(model)) if is_auto_placeholder(&model) => Ok(None),
        (_, model) => Ok(model),
    }
}

fn is_auto_placeholder(model: &str) -> bool {
    model.is_empty() || model.eq_ignore_ascii_case("auto")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_override() {
        assert_eq!(resolve_override(None, None).unwrap(), None);
        assert_eq!(resolve_override(None, Some("t5-base".to_string())).unwrap(), Some("t5-base".to_string()));
        assert_eq!(resolve_override(Some(Mode::Auto), Some("t5-base".to_string())).unwrap(), None);
        assert_eq!(
            resolve_override(Some(Mode::Manual), Some("t5-base".to_string())).unwrap(),
            Some("t5-base".to_string())
        );
        assert!(resolve_override(Some(Mode::Manual), None).is_err());
    }

    #[test]
    fn test_resolve_override_rejects_auto_in_manual_mode() {
        for model in ["auto", "AUTO", " auto ", "", "   "] {
            assert!(resolve_override(Some(Mode::Manual), Some(model.to_string())).is_err(), "model {model:?}");
        }
        assert_eq!(resolve_override(None, Some("auto".to_string())).unwrap(), None);
        assert!(resolve_override(None, Some("  ".to_string())).is_err());
        assert_eq!(resolve_override(None, Some(" t5-base ".to_string())).unwrap(), Some("t5-base".to_string()));
    }
}
