//! Fallback walk and router tests against scripted invokers.

mod router_test;

use super::invoker::ModelInvoker;
use super::types::{InvocationFailure, InvocationRequest};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

/// What a scripted model does when called.
#[derive(Debug, Clone)]
pub(super) enum Script {
    Reply(String),
    Fail(InvocationFailure),
    /// Sleeps for the given time, honouring the request timeout.
    Slow(Duration, String),
}

/// Invoker that answers from a per-model script and records every call.
///
/// Models without a script fail as unavailable.
#[derive(Default)]
pub(super) struct ScriptedInvoker {
    scripts: HashMap<String, Script>,
    calls: Mutex<Vec<String>>,
}

impl ScriptedInvoker {
    pub(super) fn new() -> Self {
        Self::default()
    }

    pub(super) fn reply(mut self, model: &str, output: &str) -> Self {
        self.scripts.insert(model.to_string(), Script::Reply(output.to_string()));
        self
    }

    pub(super) fn fail(mut self, model: &str, failure: InvocationFailure) -> Self {
        self.scripts.insert(model.to_string(), Script::Fail(failure));
        self
    }

    pub(super) fn slow(mut self, model: &str, delay: Duration, output: &str) -> Self {
        self.scripts.insert(model.to_string(), Script::Slow(delay, output.to_string()));
        self
    }

    pub(super) fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ModelInvoker for ScriptedInvoker {
    async fn invoke(&self, request: &InvocationRequest<'_>) -> Result<String, InvocationFailure> {
        self.calls.lock().unwrap().push(request.model_id.to_string());

        match self.scripts.get(request.model_id) {
            Some(Script::Reply(output)) => Ok(output.clone()),
            Some(Script::Fail(failure)) => Err(failure.clone()),
            Some(Script::Slow(delay, output)) => match request.timeout {
                Some(limit) if limit < *delay => {
                    tokio::time::sleep(limit).await;
                    Err(InvocationFailure::Timeout(limit.as_millis() as u64))
                }
                _ => {
                    tokio::time::sleep(*delay).await;
                    Ok(output.clone())
                }
            },
            None => Err(InvocationFailure::Unavailable(format!("no script for {}", request.model_id))),
        }
    }
}

/// An answer long enough to pass the length floor and sharing words with
/// the standard test prompt.
pub(super) const GOOD_SUMMARY: &str = "The quarterly report shows revenue growth across all regions.";

/// The standard test prompt.
pub(super) const PROMPT: &str =
    "The quarterly report shows strong revenue growth across all regions, driven by new customers.";
