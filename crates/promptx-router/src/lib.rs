//! Agent routing for prompt-refinement agents.
//!
//! Each agent (summarizer, code reviewer, persona, follow-up, clarity) owns an
//! ordered list of candidate models. [`AgentRouter`] tries them in order,
//! validates every output, and returns a deterministic dummy response when no
//! candidate produces usable text, so callers always get an answer.
//!
//! [`ChainPlanner`] turns a free-text goal into an ordered chain of agents and
//! [`ChainRunner`] executes such a chain.
//!
//! # Example
//!
//! ```rust,no_run
//! use promptx_router::{AgentRouter, ChainPlanner, RouterSettings};
//! use std::sync::Arc;
//!
//! # async fn example() -> promptx_router::Result<()> {
//! let settings = RouterSettings::default();
//! let planner = ChainPlanner::new(Arc::new(settings.catalog.clone()));
//! let router = AgentRouter::from_settings(settings);
//!
//! let outcome = router.run("SummarizerAgent", None, "Some long text to condense").await?;
//! println!("{} via {}", outcome.result.output, outcome.result.model_used);
//!
//! let plan = planner.suggest_chain("Summarize and improve clarity");
//! println!("{:?}", plan.agents());
//! # Ok(())
//! # }
//! ```

pub mod agents;
pub mod chain;
pub mod error;
pub mod planner;
pub mod routing;
pub mod text;

pub use agents::{AgentCatalog, AgentKind, AgentSpec, CandidateModel};
pub use chain::{ChainOutcome, ChainRunner, Handoff};
pub use error::{Result, RouterError};
pub use planner::{ChainPlan, ChainPlanner, PlanStep};
pub use routing::{
    AgentRouter, AttemptRecord, AttemptVerdict, CatalogLoader, ConfigError, DUMMY_MODEL_ID, FallbackResolver,
    InvocationFailure, InvocationRequest, InvocationResult, ModelInvoker, OutputValidator, RegistryInvoker,
    RejectReason, RouterSettings, RunOutcome, SelectionMode, ValidatorConfig, Verdict, dummy_output,
};
