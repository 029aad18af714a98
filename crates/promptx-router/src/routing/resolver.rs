//! Fallback resolution: walk an agent's candidates until one output validates.

use super::dummy::{DUMMY_MODEL_ID, dummy_output};
use super::invoker::ModelInvoker;
use super::types::{AttemptRecord, AttemptVerdict, InvocationRequest, InvocationResult, Verdict};
use super::validator::OutputValidator;
use crate::agents::{AgentSpec, CandidateModel};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Walks candidate models against the invoker/validator pair.
///
/// Holds no per-call state, so one resolver serves concurrent calls.
pub struct FallbackResolver {
    invoker: Arc<dyn ModelInvoker>,
    validator: OutputValidator,
}

impl FallbackResolver {
    /// Creates a resolver.
    #[must_use]
    pub fn new(invoker: Arc<dyn ModelInvoker>, validator: OutputValidator) -> Self {
        Self { invoker, validator }
    }

    /// The order in which models will be tried.
    ///
    /// An explicit model goes first, exactly once; the stored candidates
    /// follow in order, minus the explicit model if it is one of them.
    #[must_use]
    pub fn attempt_order(spec: &AgentSpec, explicit_model: Option<&str>) -> Vec<CandidateModel> {
        let explicit = explicit_model.map(str::trim).filter(|model| !model.is_empty());

        let mut order = Vec::with_capacity(spec.candidates.len() + 1);
        if let Some(model) = explicit {
            order.push(spec.candidate(model).cloned().unwrap_or_else(|| CandidateModel::new(model)));
        }
        order.extend(
            spec.candidates.iter().filter(|candidate| Some(candidate.model.as_str()) != explicit).cloned(),
        );
        order
    }

    /// Runs the fallback walk. Never fails: if nothing validates, the dummy
    /// response is returned.
    ///
    /// Once `deadline` has passed, the remaining candidates are recorded as
    /// skipped. Before that, each candidate's timeout is capped at the time
    /// left.
    pub async fn resolve(
        &self,
        spec: &AgentSpec,
        explicit_model: Option<&str>,
        prompt: &str,
        deadline: Option<Instant>,
    ) -> InvocationResult {
        let attempts = Self::attempt_order(spec, explicit_model);
        let mut trace = Vec::with_capacity(attempts.len());

        for (index, candidate) in attempts.iter().enumerate() {
            let remaining = deadline.map(|d| d.saturating_duration_since(Instant::now()));
            if remaining.is_some_and(|left| left.is_zero()) {
                warn!(
                    agent = %spec.kind,
                    skipped = attempts.len() - index,
                    "Deadline elapsed, skipping remaining candidates"
                );
                trace.extend(attempts[index..].iter().map(|c| record(c, AttemptVerdict::Skipped)));
                break;
            }

            let timeout = match (candidate.timeout(), remaining) {
                (Some(own), Some(left)) => Some(own.min(left)),
                (own, left) => own.or(left),
            };
            let request = InvocationRequest { agent: spec.kind, model_id: &candidate.model, prompt, timeout };

            debug!(
                agent = %spec.kind,
                model_id = %candidate.model,
                attempt = index,
                weight = candidate.weight,
                "Attempting candidate"
            );

            let started = Instant::now();
            let verdict = match self.invoker.invoke(&request).await {
                Ok(output) => match self.validator.validate(&output, prompt, spec) {
                    Verdict::Accept => {
                        trace.push(record(candidate, AttemptVerdict::Accepted));
                        if index > 0 {
                            info!(
                                agent = %spec.kind,
                                model_id = %candidate.model,
                                attempt = index,
                                "Fallback candidate accepted"
                            );
                        }
                        return InvocationResult {
                            agent: spec.kind,
                            model_used: candidate.model.clone(),
                            output,
                            used_fallback: index > 0,
                            is_dummy: false,
                            trace,
                        };
                    }
                    Verdict::Reject(reason) => AttemptVerdict::Rejected { reason },
                },
                Err(failure) => AttemptVerdict::Failed { failure },
            };

            warn!(
                agent = %spec.kind,
                model_id = %candidate.model,
                attempt = index,
                elapsed_ms = started.elapsed().as_millis() as u64,
                reason = %verdict,
                "Candidate produced no usable output"
            );
            trace.push(record(candidate, verdict));
        }

        info!(agent = %spec.kind, attempts = trace.len(), "All candidates exhausted, returning dummy output");

        InvocationResult {
            agent: spec.kind,
            model_used: DUMMY_MODEL_ID.to_string(),
            output: dummy_output(spec.kind, prompt),
            used_fallback: true,
            is_dummy: true,
            trace,
        }
    }
}

fn record(candidate: &CandidateModel, verdict: AttemptVerdict) -> AttemptRecord {
    AttemptRecord { model: candidate.model.clone(), weight: candidate.weight, verdict }
}
