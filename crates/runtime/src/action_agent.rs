// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The batteries-included [`Agent`] implementation: `cmd` runs its
//! instructions through the [`ChainRunner`], applies agent-directed
//! directives in-place, and returns the rest to the caller.

use crate::chain_runner::ChainRunner;
use crate::registry::ActionRegistry;
use ag_core::{Agent, CmdResult, Instruction, ParamMap, RuntimeError};
use ag_workflow::{Executor, WorkflowOptions};
use std::collections::VecDeque;
use std::sync::Arc;

pub struct ActionAgent {
    state: ParamMap,
    result: ParamMap,
    pending: VecDeque<Instruction>,
    registry: Arc<ActionRegistry>,
    executor: Arc<Executor>,
    default_opts: WorkflowOptions,
}

impl ActionAgent {
    pub fn new(registry: Arc<ActionRegistry>, executor: Arc<Executor>, default_opts: WorkflowOptions) -> Self {
        Self {
            state: ParamMap::new(),
            result: ParamMap::new(),
            pending: VecDeque::new(),
            registry,
            executor,
            default_opts,
        }
    }

    fn apply_state_opt(opts: &ParamMap) -> bool {
        opts.get("apply_state").and_then(serde_json::Value::as_bool).unwrap_or(true)
    }
}

#[async_trait::async_trait]
impl Agent for ActionAgent {
    fn state(&self) -> &ParamMap {
        &self.state
    }

    fn set_state(&mut self, state: ParamMap) {
        self.state = state;
    }

    fn result(&self) -> &ParamMap {
        &self.result
    }

    fn set_result(&mut self, result: ParamMap) {
        self.result = result;
    }

    fn pending_instructions(&mut self) -> &mut VecDeque<Instruction> {
        &mut self.pending
    }

    async fn cmd(
        &mut self,
        instructions: Vec<Instruction>,
        _data: ParamMap,
        opts: ParamMap,
    ) -> Result<CmdResult, RuntimeError> {
        let apply_state = Self::apply_state_opt(&opts);
        let output = ChainRunner::run(
            instructions,
            self.state.clone(),
            apply_state,
            &self.registry,
            &self.executor,
            &self.default_opts,
        )
        .await?;

        for directive in output.directives.agent {
            if let ag_core::Directive::EnqueueInstructions(more) = directive {
                self.pending.extend(more);
            }
        }

        self.state = output.state;
        self.result = output.result.clone();

        Ok(CmdResult { state: self.state.clone(), result: output.result, directives: output.directives.server })
    }
}

#[cfg(test)]
#[path = "action_agent_tests.rs"]
mod tests;
