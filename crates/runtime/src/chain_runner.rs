// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Sequences an agent's pending instructions, threading state through
//! them and accumulating the directives they produce.

use crate::registry::ActionRegistry;
use ag_core::{Instruction, ParamMap, RuntimeError, SplitDirectives, WorkflowOutcome};
use ag_workflow::{Executor, WorkflowOptions};
use serde_json::Value;

/// The result of running a full chain: the agent's updated state and
/// result, plus directives split by destination.
pub struct ChainOutput {
    pub state: ParamMap,
    pub result: ParamMap,
    pub directives: SplitDirectives,
}

pub struct ChainRunner;

impl ChainRunner {
    /// Run `instructions` against `state`. Each step's result is
    /// `result = state ∪ stepResult`; that merged map becomes the new
    /// running `state` only when `apply_state` is set (the default) —
    /// otherwise `state` passes through unchanged but `result` still
    /// reflects the merge. Stops and returns the error on the first
    /// failing step; the caller decides whether to re-queue whatever
    /// instructions remain.
    pub async fn run(
        instructions: Vec<Instruction>,
        mut state: ParamMap,
        apply_state: bool,
        registry: &ActionRegistry,
        executor: &Executor,
        opts: &WorkflowOptions,
    ) -> Result<ChainOutput, RuntimeError> {
        let mut result = ParamMap::new();
        let mut directives = SplitDirectives::default();

        for instr in instructions {
            let span = tracing::info_span!("chain.step", action = %instr.action);
            let _enter = span.enter();

            let action = registry
                .get(&instr.action)
                .cloned()
                .ok_or_else(|| RuntimeError::InvalidAction(instr.action.to_string()))?;

            let mut merged = state.clone();
            merged.extend(instr.params.clone());

            let mut context = instr.context.clone();
            let state_value = serde_json::to_value(&state).unwrap_or(Value::Object(Default::default()));
            context.insert("state".to_string(), state_value);

            let outcome = executor.run(action, merged, context, opts).await;
            match outcome {
                WorkflowOutcome::Ok { result: step_result } => {
                    let mut new_state = state.clone();
                    new_state.extend(step_result);
                    if apply_state {
                        state = new_state.clone();
                    }
                    result = new_state;
                }
                WorkflowOutcome::OkWithDirective { result: step_result, directive } => {
                    let mut new_state = state.clone();
                    new_state.extend(step_result);
                    if apply_state {
                        state = new_state.clone();
                    }
                    result = new_state;
                    directives.push(directive);
                }
                WorkflowOutcome::Err { error } => return Err(error),
                WorkflowOutcome::ErrWithDirective { error, .. } => return Err(error),
            }
        }

        Ok(ChainOutput { state, result, directives })
    }
}

#[cfg(test)]
#[path = "chain_runner_tests.rs"]
mod tests;
