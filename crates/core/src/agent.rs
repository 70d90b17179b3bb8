// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The agent plug-in surface and its lifecycle status.

use crate::directive::Directive;
use crate::instruction::{Instruction, ParamMap};
use crate::RuntimeError;
use std::collections::VecDeque;

/// Lifecycle status of a server's embedded agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgentStatus {
    Initializing,
    Idle,
    Running,
    Paused,
    Stopped,
}

impl AgentStatus {
    /// Whether `self -> to` is one of the legal transitions in §3:
    /// `initializing->idle`, `idle->running`, `running->idle`,
    /// `idle<->paused`, `*->stopped`.
    pub fn can_transition_to(self, to: AgentStatus) -> bool {
        use AgentStatus::*;
        match (self, to) {
            (_, Stopped) => true,
            (Initializing, Idle) => true,
            (Idle, Running) => true,
            (Running, Idle) => true,
            (Idle, Paused) => true,
            (Paused, Idle) => true,
            _ => false,
        }
    }
}

crate::simple_display! {
    AgentStatus {
        Initializing => "initializing",
        Idle => "idle",
        Running => "running",
        Paused => "paused",
        Stopped => "stopped",
    }
}

/// The result of invoking [`Agent::cmd`]: the agent's own state update
/// plus any directives it produced. An error aborts the command/
/// directive path without mutating the caller's view of the agent.
pub struct CmdResult {
    pub state: ParamMap,
    pub result: ParamMap,
    pub directives: Vec<Directive>,
}

/// User-defined agent value: a state map, a result, a FIFO of pending
/// instructions, and the `cmd` entry point the runtime invokes.
///
/// Implementors own their own state representation; the runtime treats
/// `pending_instructions` strictly as an *output* of `cmd`, draining it
/// into the server queue before returning to `idle` (see the Chain
/// Runner and Command Path). `cmd` is async because the common
/// implementation (`ActionAgent`, in `ag-runtime`) delegates into the
/// Workflow Executor, which itself awaits action execution.
#[async_trait::async_trait]
pub trait Agent: Send {
    /// Current state snapshot, merged against instruction params by the
    /// Chain Runner.
    fn state(&self) -> &ParamMap;

    /// Replace the state snapshot (used by the Chain Runner's
    /// `apply_state` step).
    fn set_state(&mut self, state: ParamMap);

    /// Last result produced by a command or directive invocation.
    fn result(&self) -> &ParamMap;

    fn set_result(&mut self, result: ParamMap);

    /// Instructions queued by the agent itself (e.g. from a directive)
    /// for the server to turn into fresh command signals.
    fn pending_instructions(&mut self) -> &mut VecDeque<Instruction>;

    /// Invoke the agent with either a list of instructions (Command
    /// Path) or a single directive payload (Directive Path).
    async fn cmd(
        &mut self,
        instructions: Vec<Instruction>,
        data: ParamMap,
        opts: ParamMap,
    ) -> Result<CmdResult, RuntimeError>;
}

#[cfg(test)]
#[path = "agent_tests.rs"]
mod tests;
