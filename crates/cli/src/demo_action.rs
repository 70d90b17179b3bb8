// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! A single built-in action (`echo`) so the demo CLI has something to
//! dispatch without requiring a host to register real actions first.

use ag_core::{Action, ActionMetadata, ParamMap, WorkflowOutcome};

#[derive(Debug, Default)]
pub struct EchoAction;

#[async_trait::async_trait]
impl Action for EchoAction {
    fn metadata(&self) -> ActionMetadata {
        ActionMetadata { name: "echo", compensation: Default::default() }
    }

    async fn run(&self, params: ParamMap, _context: ParamMap) -> WorkflowOutcome {
        WorkflowOutcome::ok(params)
    }
}

#[cfg(test)]
#[path = "demo_action_tests.rs"]
mod tests;
