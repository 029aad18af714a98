//! The model invocation seam.

use super::types::{InvocationFailure, InvocationRequest};
use async_trait::async_trait;
use promptx_abstraction::{ModelError, ModelParameters};
use promptx_models::{ModelFactory, ModelType};
use tracing::debug;

/// Executes a single (model, prompt) pair.
///
/// The resolver depends only on this trait, so tests can substitute
/// deterministic stubs. Implementations enforce `request.timeout`.
#[async_trait]
pub trait ModelInvoker: Send + Sync {
    /// Runs the request and returns the raw output.
    async fn invoke(&self, request: &InvocationRequest<'_>) -> Result<String, InvocationFailure>;
}

/// Invoker backed by [`ModelFactory`].
#[derive(Debug, Clone, Default)]
pub struct RegistryInvoker {
    default_engine: ModelType,
    parameters: ModelParameters,
}

impl RegistryInvoker {
    /// Creates an invoker that resolves bare model IDs on `default_engine`.
    #[must_use]
    pub fn new(default_engine: ModelType, parameters: ModelParameters) -> Self {
        Self { default_engine, parameters }
    }
}

#[async_trait]
impl ModelInvoker for RegistryInvoker {
    async fn invoke(&self, request: &InvocationRequest<'_>) -> Result<String, InvocationFailure> {
        let model = ModelFactory::create_from_spec(request.model_id, self.default_engine)
            .map_err(failure_from_model_error)?;

        debug!(
            agent = %request.agent,
            model_id = request.model_id,
            timeout_ms = request.timeout.map(|t| t.as_millis() as u64),
            "Invoking model"
        );

        let call = model.generate_text(request.prompt, Some(self.parameters.clone()));
        let response = match request.timeout {
            Some(limit) => tokio::time::timeout(limit, call)
                .await
                .map_err(|_| InvocationFailure::Timeout(limit.as_millis() as u64))?,
            None => call.await,
        }
        .map_err(failure_from_model_error)?;

        Ok(response.content)
    }
}

fn failure_from_model_error(error: ModelError) -> InvocationFailure {
    match error {
        ModelError::ModelResponseError(_) | ModelError::SerializationError(_) => {
            InvocationFailure::Malformed(error.to_string())
        }
        ModelError::RequestError(_) | ModelError::UnsupportedModelProvider(_) | ModelError::Other(_) => {
            InvocationFailure::Unavailable(error.to_string())
        }
    }
}
