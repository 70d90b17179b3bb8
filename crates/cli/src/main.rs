// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `ag`: a thin demo binary driving the Agent Execution Runtime end to
//! end — construct an agent, feed it a command signal, print what
//! comes out. Supervision, IPC, and persistence are a host's job, not
//! this crate's; see the design doc's Non-goals.

mod demo_action;
mod logging;
mod stdout_sink;

use ag_core::{ActionId, Instruction, ParamMap, Signal};
use ag_runtime::{ActionAgent, ActionRegistry, Server};
use ag_workflow::{Executor, WorkflowOptions};
use clap::Parser;
use std::sync::Arc;

/// Run a single instruction through a fresh agent and print its result.
#[derive(Parser, Debug)]
#[command(name = "ag", version, about = "Agent Execution Runtime demo CLI")]
struct Cli {
    /// Action id to invoke (built in: "echo").
    #[arg(long, default_value = "echo")]
    action: String,

    /// JSON object passed to the action as params.
    #[arg(long, default_value = "{}")]
    params: String,
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("params must be a JSON object: {0}")]
    InvalidParams(#[from] serde_json::Error),
    #[error(transparent)]
    Runtime(#[from] ag_core::RuntimeError),
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();
    let cli = Cli::parse();
    run(cli).await.map_err(|e| Box::new(e) as Box<dyn std::error::Error>)
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let params: ParamMap = serde_json::from_str(&cli.params)?;

    let mut registry = ActionRegistry::new();
    registry.insert(ActionId::new("echo"), Arc::new(demo_action::EchoAction) as _);

    let agent = ActionAgent::new(Arc::new(registry), Arc::new(Executor::new()), WorkflowOptions::default());
    let mut server = Server::new("demo", Box::new(agent));
    server.mark_idle()?;
    server.emitter_mut().register(Arc::new(stdout_sink::StdoutSink), 32);

    let instruction = Instruction::new(ActionId::new(cli.action)).with_params(params);
    let signal = Signal::command("demo", vec![instruction]);
    let directives = server.process_signal(signal).await?;

    tracing::info!(agent_status = %server.status(), directive_count = directives.len(), "dispatch complete");
    Ok(())
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
