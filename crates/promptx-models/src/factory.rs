//! Model factory for creating model instances from configuration.
//!
//! Model identifiers are either bare (`t5-small`), in which case the caller's
//! default engine is used, or qualified as `engine:model` (`echo:t5-small`).

use crate::{EchoModel, MockModel, OfflineModel};
use promptx_abstraction::{Model, ModelError};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use tracing::debug;

/// Engines known to the factory.
pub const KNOWN_ENGINES: [&str; 3] = ["mock", "echo", "offline"];

/// Model type enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModelType {
    /// Mock model for testing and demos.
    #[default]
    Mock,
    /// Returns the prompt verbatim.
    Echo,
    /// Always unavailable.
    Offline,
}

impl FromStr for ModelType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mock" => Ok(Self::Mock),
            "echo" => Ok(Self::Echo),
            "offline" => Ok(Self::Offline),
            _ => Err(()),
        }
    }
}

impl fmt::Display for ModelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mock => write!(f, "mock"),
            Self::Echo => write!(f, "echo"),
            Self::Offline => write!(f, "offline"),
        }
    }
}

/// Model configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelConfig {
    /// The type of model to create.
    pub model_type: ModelType,
    /// The model ID (e.g., "t5-small", "google/pegasus-xsum").
    pub model_id: String,
}

impl ModelConfig {
    /// Creates a new `ModelConfig` with the given type and model ID.
    #[must_use]
    pub fn new(model_type: ModelType, model_id: String) -> Self {
        Self { model_type, model_id }
    }

    /// Parses an `engine:model` spec, falling back to `default_engine` for
    /// bare identifiers.
    ///
    /// # Errors
    /// Returns `ModelError::UnsupportedModelProvider` if the engine prefix is
    /// not recognized or the model part is empty.
    pub fn from_spec(spec: &str, default_engine: ModelType) -> Result<Self, ModelError> {
        let Some((engine, model_id)) = spec.split_once(':') else {
            return Ok(Self::new(default_engine, spec.to_string()));
        };

        let model_type = ModelType::from_str(engine).map_err(|()| {
            ModelError::UnsupportedModelProvider(format!(
                "Unrecognized engine '{}' in model spec '{}'. Valid engines: {}",
                engine,
                spec,
                KNOWN_ENGINES.join(", ")
            ))
        })?;

        if model_id.is_empty() {
            return Err(ModelError::UnsupportedModelProvider(format!(
                "Model spec '{}' has an empty model name",
                spec
            )));
        }

        Ok(Self::new(model_type, model_id.to_string()))
    }
}

/// Factory for creating model instances.
pub struct ModelFactory;

impl ModelFactory {
    /// Creates a model instance from the given configuration.
    pub fn create(config: ModelConfig) -> Arc<dyn Model> {
        debug!(
            model_type = %config.model_type,
            model_id = %config.model_id,
            "Creating model instance"
        );

        match config.model_type {
            ModelType::Mock => Arc::new(MockModel::new(config.model_id)),
            ModelType::Echo => Arc::new(EchoModel::new(config.model_id)),
            ModelType::Offline => Arc::new(OfflineModel::new(config.model_id)),
        }
    }

    /// Creates a model instance from an `engine:model` spec.
    ///
    /// # Errors
    /// Returns a `ModelError` if the spec names an unknown engine.
    pub fn create_from_spec(
        spec: &str,
        default_engine: ModelType,
    ) -> Result<Arc<dyn Model>, ModelError> {
        ModelConfig::from_spec(spec, default_engine).map(Self::create)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_type_from_str() {
        assert_eq!(ModelType::from_str("mock"), Ok(ModelType::Mock));
        assert_eq!(ModelType::from_str("Mock"), Ok(ModelType::Mock));
        assert_eq!(ModelType::from_str("ECHO"), Ok(ModelType::Echo));
        assert_eq!(ModelType::from_str("offline"), Ok(ModelType::Offline));
        assert_eq!(ModelType::from_str("unknown"), Err(()));
    }

    #[test]
    fn test_from_spec_bare_uses_default_engine() {
        let config = ModelConfig::from_spec("google/pegasus-xsum", ModelType::Echo).unwrap();
        assert_eq!(config.model_type, ModelType::Echo);
        assert_eq!(config.model_id, "google/pegasus-xsum");
    }

    #[test]
    fn test_from_spec_qualified() {
        let config = ModelConfig::from_spec("offline:t5-small", ModelType::Mock).unwrap();
        assert_eq!(config.model_type, ModelType::Offline);
        assert_eq!(config.model_id, "t5-small");
    }

    #[test]
    fn test_from_spec_rejects_unknown_engine() {
        let err = ModelConfig::from_spec("ollama:llama3", ModelType::Mock).unwrap_err();
        assert!(matches!(err, ModelError::UnsupportedModelProvider(_)));
        assert!(ModelConfig::from_spec("mock:", ModelType::Mock).is_err());
    }

    #[test]
    fn test_factory_create_mock() {
        let model = ModelFactory::create(ModelConfig::new(ModelType::Mock, "test-mock".to_string()));
        assert_eq!(model.model_id(), "test-mock");
    }

    #[test]
    fn test_factory_create_from_spec() {
        let model = ModelFactory::create_from_spec("offline:flan-t5-base", ModelType::Mock).unwrap();
        assert_eq!(model.model_id(), "flan-t5-base");
    }
}
