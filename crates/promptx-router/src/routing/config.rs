//! TOML configuration file support for the agent catalog.
//!
//! ```toml
//! default_engine = "mock"
//!
//! [validator]
//! min_output_chars = 20
//! error_markers = ["error generating response"]
//!
//! [parameters]
//! temperature = 0.7
//! max_tokens = 1000
//!
//! [[agents]]
//! id = "SummarizerAgent"
//! min_similarity = 0.2
//! candidates = [
//!   { model = "t5-small", weight = 1.0, timeout_ms = 5000 },
//!   { model = "echo:flan-t5-base" },
//! ]
//! ```
//!
//! Agents not listed keep their built-in profile; listed agents override
//! only the fields they set.

use super::validator::ValidatorConfig;
use crate::agents::{AgentCatalog, AgentKind, CandidateModel};
use promptx_abstraction::ModelParameters;
use promptx_models::{KNOWN_ENGINES, ModelConfig, ModelType};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

/// Errors that can occur during configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O error reading the file.
    #[error("Failed to read configuration file: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing error.
    #[error("Failed to parse TOML configuration: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration validation error.
    #[error("Invalid configuration: {0}")]
    Validation(String),
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Catalog configuration as written in TOML.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogConfig {
    /// Engine for bare model identifiers.
    #[serde(default = "default_engine")]
    pub default_engine: String,

    /// Validator overrides.
    #[serde(default)]
    pub validator: ValidatorSection,

    /// Generation parameters passed to every model.
    #[serde(default)]
    pub parameters: ParametersSection,

    /// Per-agent overrides.
    #[serde(default)]
    pub agents: Vec<AgentEntry>,
}

fn default_engine() -> String {
    "mock".to_string()
}

/// `[validator]` table.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ValidatorSection {
    /// Shortest accepted output.
    pub min_output_chars: Option<usize>,
    /// Error markers; an empty list disables marker checks.
    pub error_markers: Option<Vec<String>>,
}

/// `[parameters]` table; omitted fields keep their defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ParametersSection {
    /// Sampling temperature.
    pub temperature: Option<f32>,
    /// Nucleus sampling cutoff.
    pub top_p: Option<f32>,
    /// Completion length cap.
    pub max_tokens: Option<u32>,
}

/// One `[[agents]]` entry.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AgentEntry {
    /// Agent identifier, e.g. `SummarizerAgent`.
    pub id: String,
    /// Task description.
    pub task: Option<String>,
    /// Planner tags.
    pub tags: Option<Vec<String>>,
    /// Similarity threshold in [0, 1].
    pub min_similarity: Option<f64>,
    /// Ordered candidate models.
    pub candidates: Option<Vec<CandidateEntry>>,
}

/// One candidate model entry.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CandidateEntry {
    /// Model spec (`model` or `engine:model`).
    pub model: String,
    /// Diagnostic weight.
    #[serde(default = "default_weight")]
    pub weight: f64,
    /// Per-invocation timeout.
    pub timeout_ms: Option<u64>,
}

fn default_weight() -> f64 {
    1.0
}

/// Everything the router needs at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct RouterSettings {
    /// Agent table.
    pub catalog: AgentCatalog,
    /// Validator settings.
    pub validator: ValidatorConfig,
    /// Engine for bare model identifiers.
    pub default_engine: ModelType,
    /// Generation parameters.
    pub parameters: ModelParameters,
}

impl Default for RouterSettings {
    fn default() -> Self {
        Self {
            catalog: AgentCatalog::builtin(),
            validator: ValidatorConfig::default(),
            default_engine: ModelType::Mock,
            parameters: ModelParameters::default(),
        }
    }
}

/// Configuration loader for catalog settings.
pub struct CatalogLoader;

impl CatalogLoader {
    /// Loads settings from a TOML file.
    ///
    /// # Errors
    /// Returns error if the file cannot be read, parsed, or validated.
    pub fn load(path: &Path) -> Result<RouterSettings> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parses and validates settings from TOML text.
    ///
    /// # Errors
    /// Returns error if the text cannot be parsed or validated.
    pub fn from_toml_str(content: &str) -> Result<RouterSettings> {
        let config: CatalogConfig = toml::from_str(content)?;
        Self::validate(&config)?;
        Self::build(&config)
    }

    /// Validates a parsed configuration.
    ///
    /// # Errors
    /// Returns error if the configuration is invalid.
    pub fn validate(config: &CatalogConfig) -> Result<()> {
        let default_engine = Self::parse_engine(&config.default_engine)?;

        let mut seen_agents = HashSet::new();
        for entry in &config.agents {
            let kind = AgentKind::from_str(&entry.id)
                .map_err(|e| ConfigError::Validation(e.to_string()))?;

            if !seen_agents.insert(kind) {
                return Err(ConfigError::Validation(format!("Agent '{}' is configured more than once", kind)));
            }

            if let Some(threshold) = entry.min_similarity {
                if !(0.0..=1.0).contains(&threshold) {
                    return Err(ConfigError::Validation(format!(
                        "Agent '{}': min_similarity {} must be between 0.0 and 1.0",
                        kind, threshold
                    )));
                }
            }

            if let Some(candidates) = &entry.candidates {
                if candidates.is_empty() {
                    return Err(ConfigError::Validation(format!(
                        "Agent '{}' must have at least one candidate model",
                        kind
                    )));
                }

                for candidate in candidates {
                    if !candidate.weight.is_finite() || candidate.weight < 0.0 {
                        return Err(ConfigError::Validation(format!(
                            "Agent '{}': weight {} for model '{}' must be a non-negative number",
                            kind, candidate.weight, candidate.model
                        )));
                    }
                    if candidate.timeout_ms == Some(0) {
                        return Err(ConfigError::Validation(format!(
                            "Agent '{}': timeout_ms for model '{}' must be greater than zero",
                            kind, candidate.model
                        )));
                    }
                    Self::validate_model_spec(&candidate.model, default_engine)?;
                }
            }
        }

        Ok(())
    }

    /// Validates a model spec against the known engines.
    fn validate_model_spec(spec: &str, default_engine: ModelType) -> Result<()> {
        if spec.trim().is_empty() {
            return Err(ConfigError::Validation("Model spec must not be empty".to_string()));
        }
        ModelConfig::from_spec(spec, default_engine)
            .map(|_| ())
            .map_err(|e| ConfigError::Validation(e.to_string()))
    }

    fn parse_engine(engine: &str) -> Result<ModelType> {
        ModelType::from_str(engine).map_err(|()| {
            ConfigError::Validation(format!(
                "Invalid default_engine '{}'. Valid engines: {}",
                engine,
                KNOWN_ENGINES.join(", ")
            ))
        })
    }

    /// Merges a validated configuration over the built-in defaults.
    ///
    /// # Errors
    /// Returns error if an agent override breaks a catalog invariant.
    pub fn build(config: &CatalogConfig) -> Result<RouterSettings> {
        let defaults = RouterSettings::default();

        let mut catalog = defaults.catalog;
        for entry in &config.agents {
            let kind = AgentKind::from_str(&entry.id)
                .map_err(|e| ConfigError::Validation(e.to_string()))?;
            let Some(mut spec) = catalog.get(kind).cloned() else {
                return Err(ConfigError::Validation(format!("Agent '{}' has no built-in profile", kind)));
            };

            if let Some(task) = &entry.task {
                spec.task.clone_from(task);
            }
            if let Some(tags) = &entry.tags {
                spec.tags.clone_from(tags);
            }
            if entry.min_similarity.is_some() {
                spec.min_similarity = entry.min_similarity;
            }
            if let Some(candidates) = &entry.candidates {
                spec.candidates = candidates
                    .iter()
                    .map(|c| CandidateModel { model: c.model.clone(), weight: c.weight, timeout_ms: c.timeout_ms })
                    .collect();
            }

            catalog = catalog.with_spec(spec)?;
        }

        let validator = ValidatorConfig {
            min_output_chars: config.validator.min_output_chars.unwrap_or(defaults.validator.min_output_chars),
            error_markers: config.validator.error_markers.clone().unwrap_or(defaults.validator.error_markers),
        };

        Ok(RouterSettings {
            catalog,
            validator,
            default_engine: Self::parse_engine(&config.default_engine)?,
            parameters: ModelParameters {
                temperature: config.parameters.temperature.or(defaults.parameters.temperature),
                top_p: config.parameters.top_p.or(defaults.parameters.top_p),
                max_tokens: config.parameters.max_tokens.or(defaults.parameters.max_tokens),
            },
        })
    }
}
