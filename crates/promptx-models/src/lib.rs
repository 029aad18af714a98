//! Model implementations for PromptX.
//!
//! This crate provides concrete implementations of the `Model` trait.
//!
//! # Supported Engines
//!
//! - **Mock**: deterministic templated response, for development and demos
//! - **Echo**: returns the prompt verbatim
//! - **Offline**: always fails, useful for exercising fallback locally

pub mod factory;

use async_trait::async_trait;
use promptx_abstraction::{Model, ModelError, ModelParameters, ModelResponse};
use tracing::debug;

pub use factory::{KNOWN_ENGINES, ModelConfig, ModelFactory, ModelType};

/// A mock implementation of the `Model` trait for testing and demonstration.
#[derive(Debug, Default)]
pub struct MockModel {
    id: String,
}

impl MockModel {
    /// Creates a new `MockModel` with the given ID.
    #[must_use]
    pub const fn new(id: String) -> Self {
        Self { id }
    }
}

#[async_trait]
impl Model for MockModel {
    async fn generate_text(
        &self,
        prompt: &str,
        parameters: Option<ModelParameters>,
    ) -> Result<ModelResponse, ModelError> {
        debug!(
            model_id = %self.id,
            prompt_chars = prompt.chars().count(),
            parameters = ?parameters,
            "MockModel generating text"
        );

        let content = format!("Mock response for: {prompt}\nModel ID: {}", self.id);

        Ok(ModelResponse { content, model_id: Some(self.id.clone()) })
    }

    fn model_id(&self) -> &str {
        &self.id
    }
}

/// Returns the prompt unchanged.
#[derive(Debug, Default)]
pub struct EchoModel {
    id: String,
}

impl EchoModel {
    /// Creates a new `EchoModel` with the given ID.
    #[must_use]
    pub const fn new(id: String) -> Self {
        Self { id }
    }
}

#[async_trait]
impl Model for EchoModel {
    async fn generate_text(
        &self,
        prompt: &str,
        _parameters: Option<ModelParameters>,
    ) -> Result<ModelResponse, ModelError> {
        Ok(ModelResponse { content: prompt.to_string(), model_id: Some(self.id.clone()) })
    }

    fn model_id(&self) -> &str {
        &self.id
    }
}

/// A model whose engine is never reachable.
#[derive(Debug, Default)]
pub struct OfflineModel {
    id: String,
}

impl OfflineModel {
    /// Creates a new `OfflineModel` with the given ID.
    #[must_use]
    pub const fn new(id: String) -> Self {
        Self { id }
    }
}

#[async_trait]
impl Model for OfflineModel {
    async fn generate_text(
        &self,
        _prompt: &str,
        _parameters: Option<ModelParameters>,
    ) -> Result<ModelResponse, ModelError> {
        debug!(model_id = %self.id, "OfflineModel refusing request");
        Err(ModelError::RequestError(format!("model '{}' is offline", self.id)))
    }

    fn model_id(&self) -> &str {
        &self.id
    }
}
