// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Dispatches a command signal (`jido.agent.cmd.*`, not a directive) to
//! the agent, turning any instructions it leaves pending into fresh
//! command signals for the server's own queue.

use crate::output::Emitter;
use crate::panic_guard::guarded_cmd;
use ag_core::{Agent, Directive, Event, RuntimeError, Signal};

/// What a successful Command Path dispatch produced.
pub struct CommandSuccess {
    pub requeue: Vec<Signal>,
    pub directives: Vec<Directive>,
}

/// Extracts `(instructions, data, opts)` from `signal` and runs them
/// through `agent.cmd`. On failure, emits `cmd.failed` and propagates
/// the error so the caller's drain loop can fail the whole dispatch. On
/// success, pending instructions left on the agent are drained into
/// fresh command signals for `requeue`.
pub async fn dispatch(
    agent: &mut dyn Agent,
    signal: &Signal,
    emitter: &Emitter,
) -> Result<CommandSuccess, RuntimeError> {
    let instructions = signal.instructions.clone();
    let data = signal.data.clone();
    let opts = signal.opts.clone();

    let cmd_result = guarded_cmd(agent, instructions, data, opts).await.map_err(|error| {
        emitter.emit(&Event::CmdFailed { signal_id: signal.id.to_string(), reason: error.to_string() });
        error
    })?;

    let pending = std::mem::take(agent.pending_instructions());
    if pending.is_empty() {
        emitter.emit(&Event::CmdSuccess { signal_id: signal.id.to_string() });
        return Ok(CommandSuccess { requeue: Vec::new(), directives: cmd_result.directives });
    }

    let pending_count = pending.len();
    emitter.emit(&Event::CmdSuccessPending { signal_id: signal.id.to_string(), pending_count });
    let requeue = pending
        .into_iter()
        .map(|instr| Signal::command(&agent_address(&signal.source), vec![instr]))
        .collect();

    Ok(CommandSuccess { requeue, directives: cmd_result.directives })
}

/// Extract the bare agent id from a `jido://agent/<id>` source string.
fn agent_address(source: &str) -> String {
    source.rsplit('/').next().unwrap_or(source).to_string()
}

#[cfg(test)]
#[path = "command_path_tests.rs"]
mod tests;
