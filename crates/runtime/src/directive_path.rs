// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Dispatches a directive signal (`jido.agent.cmd.directive.*`) to the
//! agent. Unlike the Command Path, directives the agent produces here
//! are not turned into fresh command signals — they are returned to
//! the caller as server directives (adopted per the source's own
//! behavior, which does the same).

use crate::output::Emitter;
use crate::panic_guard::guarded_cmd;
use ag_core::{Agent, Directive, Event, RuntimeError, Signal};

pub async fn dispatch(
    agent: &mut dyn Agent,
    signal: &Signal,
    emitter: &Emitter,
) -> Result<Vec<Directive>, RuntimeError> {
    if !signal.data.contains_key("directive") {
        let error = RuntimeError::InvalidDirectiveFormat(format!("signal {} has no directive payload", signal.id));
        emitter.emit(&Event::CmdFailed { signal_id: signal.id.to_string(), reason: error.to_string() });
        return Err(error);
    }

    let cmd_result = guarded_cmd(agent, Vec::new(), signal.data.clone(), signal.opts.clone())
        .await
        .map_err(|error| {
            emitter.emit(&Event::CmdFailed { signal_id: signal.id.to_string(), reason: error.to_string() });
            error
        })?;

    emitter.emit(&Event::CmdSuccess { signal_id: signal.id.to_string() });
    Ok(cmd_result.directives)
}

#[cfg(test)]
#[path = "directive_path_tests.rs"]
mod tests;
