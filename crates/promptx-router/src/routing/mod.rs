//! Agent routing with fallback resolution.
//!
//! A request names an agent and, optionally, a model. The router tries the
//! explicit model and then the agent's candidates in order, validating each
//! output, and falls back to a deterministic dummy response when nothing
//! validates.

pub mod config;
pub mod dummy;
pub mod invoker;
pub mod resolver;
pub mod router;
pub mod types;
pub mod validator;

#[cfg(test)]
mod tests;

pub use config::{CatalogLoader, ConfigError, RouterSettings};
pub use dummy::{DUMMY_MODEL_ID, dummy_output};
pub use invoker::{ModelInvoker, RegistryInvoker};
pub use resolver::FallbackResolver;
pub use router::AgentRouter;
pub use types::{
    AttemptRecord, AttemptVerdict, InvocationFailure, InvocationRequest, InvocationResult, RejectReason, RunOutcome,
    SelectionMode, Verdict,
};
pub use validator::{OutputValidator, ValidatorConfig};
