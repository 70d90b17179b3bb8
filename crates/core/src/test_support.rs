// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Test fakes shared across crates, gated behind `test-support`.
//!
//! Mirrors the teacher's `test-support` feature, which exports
//! `FakeAdapter`/`FakeClock`-style fakes so downstream crates don't each
//! reinvent a fake action/agent.

use crate::action::{Action, ActionMetadata, CompensationPolicy, WorkflowOutcome};
use crate::agent::{Agent, CmdResult};
use crate::directive::Directive;
use crate::instruction::{Instruction, ParamMap};
use crate::RuntimeError;
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;

/// An action whose behavior is scripted per call: a queue of outcomes
/// (with optional artificial delay) to return in order, looping on the
/// last entry once exhausted.
pub struct ScriptedAction {
    pub name: &'static str,
    pub compensation: CompensationPolicy,
    steps: Mutex<VecDeque<(Option<Duration>, ScriptedStep)>>,
    comp_steps: Mutex<VecDeque<(Option<Duration>, Result<ParamMap, RuntimeError>)>>,
    pub calls: Arc<Mutex<u32>>,
}

#[derive(Clone)]
pub enum ScriptedStep {
    Outcome(WorkflowOutcome),
    /// Sleep for the configured delay (tests real timeout behavior),
    /// then return this outcome.
    SleepThen(WorkflowOutcome),
}

impl ScriptedAction {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            compensation: CompensationPolicy::default(),
            steps: Mutex::new(VecDeque::new()),
            comp_steps: Mutex::new(VecDeque::new()),
            calls: Arc::new(Mutex::new(0)),
        }
    }

    /// Script the next `on_error` call to succeed with `result`.
    pub fn push_comp_ok(&self, result: ParamMap) {
        self.comp_steps.lock().push_back((None, Ok(result)));
    }

    /// Script the next `on_error` call to fail with `error`.
    pub fn push_comp_err(&self, error: RuntimeError) {
        self.comp_steps.lock().push_back((None, Err(error)));
    }

    /// Script the next `on_error` call to sleep for `delay` before
    /// resolving with `outcome`.
    pub fn push_comp_sleep(&self, delay: Duration, outcome: Result<ParamMap, RuntimeError>) {
        self.comp_steps.lock().push_back((Some(delay), outcome));
    }

    pub fn with_compensation(mut self, timeout: Option<Duration>) -> Self {
        self.compensation = CompensationPolicy { enabled: true, timeout };
        self
    }

    pub fn push_ok(&self, result: ParamMap) {
        self.steps.lock().push_back((None, ScriptedStep::Outcome(WorkflowOutcome::ok(result))));
    }

    pub fn push_err(&self, error: RuntimeError) {
        self.steps.lock().push_back((None, ScriptedStep::Outcome(WorkflowOutcome::err(error))));
    }

    pub fn push_ok_with_directive(&self, result: ParamMap, directive: Directive) {
        self.steps
            .lock()
            .push_back((None, ScriptedStep::Outcome(WorkflowOutcome::OkWithDirective { result, directive })));
    }

    pub fn push_sleep_ok(&self, delay: Duration, result: ParamMap) {
        self.steps
            .lock()
            .push_back((Some(delay), ScriptedStep::SleepThen(WorkflowOutcome::ok(result))));
    }

    pub fn call_count(&self) -> u32 {
        *self.calls.lock()
    }
}

#[async_trait::async_trait]
impl Action for ScriptedAction {
    fn metadata(&self) -> ActionMetadata {
        ActionMetadata { name: self.name, compensation: self.compensation }
    }

    async fn run(&self, _params: ParamMap, _context: ParamMap) -> WorkflowOutcome {
        *self.calls.lock() += 1;
        let step = {
            let mut steps = self.steps.lock();
            if steps.len() > 1 {
                steps.pop_front()
            } else {
                // Keep the last entry so repeated calls past the script's
                // end replay it instead of erroring.
                steps.front().map(|(delay, step)| (*delay, step.clone()))
            }
        };
        match step {
            Some((None, ScriptedStep::Outcome(outcome))) => outcome,
            Some((Some(delay), ScriptedStep::SleepThen(outcome))) => {
                tokio::time::sleep(delay).await;
                outcome
            }
            Some((None, ScriptedStep::SleepThen(outcome))) => outcome,
            Some((Some(_), ScriptedStep::Outcome(outcome))) => outcome,
            None => WorkflowOutcome::err(RuntimeError::ExecutionError("no more scripted steps".into())),
        }
    }

    async fn on_error(
        &self,
        _params: ParamMap,
        error: &RuntimeError,
        _context: ParamMap,
    ) -> Result<ParamMap, RuntimeError> {
        let scripted = self.comp_steps.lock().pop_front();
        match scripted {
            Some((Some(delay), outcome)) => {
                tokio::time::sleep(delay).await;
                outcome
            }
            Some((None, outcome)) => outcome,
            None => Err(error.clone()),
        }
    }
}

/// A minimal in-memory `Agent` for tests: `cmd` echoes `data` into
/// `result` and applies no instructions of its own. Runtime-level tests
/// that exercise the Chain Runner use `ag_runtime::test_support::ChainTestAgent`
/// instead; this one is for core/workflow-level unit tests that only
/// need *some* `Agent`.
pub struct EchoAgent {
    pub state: ParamMap,
    pub result: ParamMap,
    pub pending: VecDeque<Instruction>,
}

impl Default for EchoAgent {
    fn default() -> Self {
        Self { state: ParamMap::new(), result: ParamMap::new(), pending: VecDeque::new() }
    }
}

#[async_trait::async_trait]
impl Agent for EchoAgent {
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
        _instructions: Vec<Instruction>,
        data: ParamMap,
        _opts: ParamMap,
    ) -> Result<CmdResult, RuntimeError> {
        Ok(CmdResult { state: self.state.clone(), result: data, directives: Vec::<Directive>::new() })
    }
}
