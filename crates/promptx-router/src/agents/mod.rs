//! Agents: identifiers, profiles, and the catalog that holds them.

pub mod catalog;
pub mod kind;
pub mod spec;

pub use catalog::AgentCatalog;
pub use kind::AgentKind;
pub use spec::{AgentSpec, CandidateModel};
