//! PromptX CLI - route prompts through refinement agents with model fallback.
//!
//! Provides the `promptx` command for running a single agent, suggesting an
//! agent chain for a goal, running a chain, and listing the agent catalog.

mod commands;
mod config;

use clap::{Parser, Subcommand};
use commands::{agents, chain, plan, run};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// PromptX - agent router with model fallback
#[derive(Parser, Debug)]
#[command(
    name = "promptx",
    author,
    version,
    about = "PromptX - route prompts through refinement agents with model fallback",
    long_about = "PromptX runs text through summarizer, code reviewer, persona, follow-up and clarity agents.\nEach agent tries its candidate models in order and always returns an answer."
)]
struct Args {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "warn", global = true)]
    log_level: String,

    /// Catalog configuration file (overrides discovery)
    #[arg(short, long, global = true, env = "PROMPTX_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run text through a single agent
    ///
    /// Tries the agent's candidate models in order and falls back to a fixed
    /// response when none produces usable output.
    Run {
        /// Agent identifier (e.g. SummarizerAgent)
        #[arg(short, long)]
        agent: String,

        /// Model to try first (implies manual mode)
        #[arg(short, long)]
        model: Option<String>,

        /// Model selection mode
        #[arg(long, value_enum)]
        mode: Option<run::Mode>,

        /// Give up on remaining candidates after this many milliseconds
        #[arg(long)]
        timeout_ms: Option<u64>,

        /// Output the full result as JSON
        #[arg(long)]
        json: bool,

        /// Input text
        input: String,
    },

    /// Suggest an agent chain for a goal
    Plan {
        /// Output the plan as JSON
        #[arg(long)]
        json: bool,

        /// Goal in plain language (e.g. "Summarize and improve clarity")
        goal: String,
    },

    /// Run a chain of agents
    ///
    /// Agents come from --agents, or from the plan suggested for --goal.
    Chain {
        /// Comma-separated agent identifiers
        #[arg(long, value_delimiter = ',', conflicts_with = "goal", required_unless_present = "goal")]
        agents: Vec<String>,

        /// Goal to plan the chain from
        #[arg(long)]
        goal: Option<String>,

        /// Feed each step the previous input plus its output instead of the output alone
        #[arg(long)]
        append: bool,

        /// Output the full result as JSON
        #[arg(long)]
        json: bool,

        /// Input text
        input: String,
    },

    /// List available agents
    Agents {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "error" => Level::ERROR,
        _ => Level::WARN,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let settings = config::load_settings(args.config.as_deref())?;

    match args.command {
        Command::Run { agent, model, mode, timeout_ms, json, input } => {
            run::execute(settings, &agent, model, mode, timeout_ms, json, &input).await?;
        }
        Command::Plan { json, goal } => {
            plan::execute(settings, &goal, json)?;
        }
        Command::Chain { agents, goal, append, json, input } => {
            chain::execute(settings, agents, goal, append, json, &input).await?;
        }
        Command::Agents { json } => {
            agents::execute(&settings, json)?;
        }
    }

    Ok(())
}
