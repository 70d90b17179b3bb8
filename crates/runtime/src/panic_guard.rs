// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Isolates a panic inside user-supplied [`Agent::cmd`] from the
//! Executor's own stack. The teacher isolates adapter calls by running
//! them on a separate `tokio::spawn`ed task and inspecting the
//! `JoinError`; `Agent::cmd` borrows `&mut self` and can't be spawned
//! that way, so this wraps the call with `catch_unwind` instead and
//! converts any caught panic into the same `InternalServerError` shape.

use ag_core::{Agent, CmdResult, Instruction, ParamMap, RuntimeError};
use futures_util::FutureExt;
use std::any::Any;
use std::panic::AssertUnwindSafe;

pub async fn guarded_cmd(
    agent: &mut dyn Agent,
    instructions: Vec<Instruction>,
    data: ParamMap,
    opts: ParamMap,
) -> Result<CmdResult, RuntimeError> {
    match AssertUnwindSafe(agent.cmd(instructions, data, opts)).catch_unwind().await {
        Ok(result) => result,
        Err(panic) => Err(RuntimeError::InternalServerError(format!(
            "Caught panic: {}",
            panic_message(&panic)
        ))),
    }
}

fn panic_message(payload: &Box<dyn Any + Send>) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

#[cfg(test)]
#[path = "panic_guard_tests.rs"]
mod tests;
