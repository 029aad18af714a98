//! Tests for request handling in front of the fallback walk.

use super::{GOOD_SUMMARY, PROMPT, ScriptedInvoker};
use crate::agents::{AgentCatalog, AgentKind};
use crate::error::RouterError;
use crate::routing::config::RouterSettings;
use crate::routing::router::AgentRouter;
use crate::routing::types::SelectionMode;
use crate::routing::validator::OutputValidator;
use std::sync::Arc;

fn router(invoker: ScriptedInvoker) -> (AgentRouter, Arc<ScriptedInvoker>) {
    let invoker = Arc::new(invoker);
    let router = AgentRouter::new(Arc::new(AgentCatalog::builtin()), invoker.clone(), OutputValidator::default());
    (router, invoker)
}

#[tokio::test]
async fn test_unknown_agent() {
    let (router, invoker) = router(ScriptedInvoker::new());

    let err = router.run("NoSuchAgent", None, PROMPT).await.unwrap_err();

    assert_eq!(err, RouterError::UnknownAgent("NoSuchAgent".to_string()));
    assert!(err.to_string().contains("SummarizerAgent"));
    assert!(invoker.calls().is_empty());
}

#[tokio::test]
async fn test_empty_input() {
    let (router, invoker) = router(ScriptedInvoker::new());

    assert_eq!(router.run("SummarizerAgent", None, "").await.unwrap_err(), RouterError::EmptyInput);
    assert_eq!(router.run("SummarizerAgent", None, "  \n ").await.unwrap_err(), RouterError::EmptyInput);
    assert!(invoker.calls().is_empty());
}

#[tokio::test]
async fn test_auto_mode_uses_catalog_order() {
    let (router, invoker) = router(ScriptedInvoker::new().reply("flan-t5-base", GOOD_SUMMARY));

    let outcome = router.run("SummarizerAgent", Some("auto"), PROMPT).await.unwrap();

    assert_eq!(outcome.mode, SelectionMode::Auto);
    assert_eq!(outcome.default_model, "t5-small");
    assert_eq!(outcome.result.model_used, "flan-t5-base");
    assert!(outcome.result.used_fallback);
    assert_eq!(invoker.calls(), vec!["t5-small", "flan-t5-base"]);
}

#[tokio::test]
async fn test_manual_mode_tries_override_first() {
    let (router, invoker) = router(ScriptedInvoker::new().reply("t5-base", GOOD_SUMMARY));

    let outcome = router.run("CodeReviewerAgent", Some("t5-base"), PROMPT).await.unwrap();

    assert_eq!(outcome.mode, SelectionMode::Manual);
    assert_eq!(outcome.result.model_used, "t5-base");
    assert!(!outcome.result.used_fallback);
    assert_eq!(invoker.calls(), vec!["t5-base"]);
}

#[tokio::test]
async fn test_dummy_for_every_agent() {
    let (router, _) = router(ScriptedInvoker::new());

    for kind in AgentKind::ALL {
        let outcome = router.run(kind.id(), None, PROMPT).await.unwrap();
        assert!(outcome.result.is_dummy);
        assert!(outcome.result.output.starts_with(&format!("[{}]", kind.id())));
        assert!(outcome.result.output.contains(kind.fallback_message()));
    }
}

#[tokio::test]
async fn test_concurrent_runs_share_router() {
    let (router, _) = router(ScriptedInvoker::new().reply("flan-t5-base", GOOD_SUMMARY));
    let router = Arc::new(router);

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let router = Arc::clone(&router);
            tokio::spawn(async move { router.run("PersonaAgent", None, PROMPT).await })
        })
        .collect();

    for handle in handles {
        let outcome = handle.await.unwrap().unwrap();
        assert_eq!(outcome.result.model_used, "flan-t5-base");
    }
}

#[tokio::test]
async fn test_from_settings_uses_model_factory() {
    let router = AgentRouter::from_settings(RouterSettings::default());

    let outcome = router.run("PersonaAgent", None, PROMPT).await.unwrap();

    assert_eq!(outcome.result.model_used, "flan-t5-base");
    assert!(outcome.result.output.starts_with("Mock response for:"));
    assert!(!outcome.result.is_dummy);
}

#[test]
fn test_describe_agents_lists_catalog() {
    let (router, _) = router(ScriptedInvoker::new());
    let ids: Vec<&str> = router.describe_agents().iter().map(|spec| spec.kind.id()).collect();
    assert_eq!(ids.len(), 5);
    assert!(ids.contains(&"ClarityAgent"));
}
