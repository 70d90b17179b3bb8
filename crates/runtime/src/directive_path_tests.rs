use super::*;
use crate::output::OutputSink;
use ag_core::{Agent, CmdResult, Instruction, ParamMap, Signal};
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::Arc;

struct FakeAgent {
    state: ParamMap,
    result: ParamMap,
    pending: VecDeque<Instruction>,
    next: Mutex<VecDeque<Result<CmdResult, RuntimeError>>>,
}

impl FakeAgent {
    fn new() -> Self {
        Self { state: ParamMap::new(), result: ParamMap::new(), pending: VecDeque::new(), next: Mutex::new(VecDeque::new()) }
    }

    fn push(&self, outcome: Result<CmdResult, RuntimeError>) {
        self.next.lock().push_back(outcome);
    }
}

#[async_trait::async_trait]
impl Agent for FakeAgent {
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
        _data: ParamMap,
        _opts: ParamMap,
    ) -> Result<CmdResult, RuntimeError> {
        self.next.lock().pop_front().unwrap_or_else(|| Ok(CmdResult { state: self.state.clone(), result: ParamMap::new(), directives: Vec::new() }))
    }
}

struct RecordingSink {
    events: Arc<Mutex<Vec<Signal>>>,
}

#[async_trait::async_trait]
impl OutputSink for RecordingSink {
    fn name(&self) -> &str {
        "recorder"
    }

    async fn send(&self, signal: Signal) {
        self.events.lock().push(signal);
    }
}

async fn emitter_with_recorder() -> (Emitter, Arc<Mutex<Vec<Signal>>>) {
    let mut emitter = Emitter::new("jido://agent/a1");
    let events = Arc::new(Mutex::new(Vec::new()));
    emitter.register(Arc::new(RecordingSink { events: events.clone() }), 16);
    (emitter, events)
}

#[tokio::test]
async fn a_signal_with_no_directive_payload_is_rejected_without_calling_cmd() {
    let mut agent = FakeAgent::new();
    let (emitter, events) = emitter_with_recorder().await;

    let signal = Signal::new("jido.agent.cmd.directive.transition", "jido://agent/a1");
    let error = dispatch(&mut agent, &signal, &emitter).await.unwrap_err();

    assert!(matches!(error, RuntimeError::InvalidDirectiveFormat(_)));
    tokio::time::sleep(std::time::Duration::from_millis(10)).await;
    assert!(events.lock().iter().any(|s| s.kind.as_str() == "jido.agent.event.cmd.failed"));
}

#[tokio::test]
async fn a_well_formed_directive_returns_directives_produced_by_cmd() {
    let mut agent = FakeAgent::new();
    agent.push(Ok(CmdResult {
        state: ParamMap::new(),
        result: ParamMap::new(),
        directives: vec![Directive::Transition(ag_core::AgentStatus::Paused)],
    }));
    let (emitter, events) = emitter_with_recorder().await;

    let signal = Signal::directive("a1", "transition", serde_json::json!({"to": "paused"}));
    let directives = dispatch(&mut agent, &signal, &emitter).await.unwrap();

    assert_eq!(directives.len(), 1);
    tokio::time::sleep(std::time::Duration::from_millis(10)).await;
    assert!(events.lock().iter().any(|s| s.kind.as_str() == "jido.agent.event.cmd.success"));
}

#[tokio::test]
async fn a_failing_cmd_emits_cmd_failed_and_propagates() {
    let mut agent = FakeAgent::new();
    agent.push(Err(RuntimeError::ExecutionError("boom".into())));
    let (emitter, events) = emitter_with_recorder().await;

    let signal = Signal::directive("a1", "transition", serde_json::json!({"to": "paused"}));
    let error = dispatch(&mut agent, &signal, &emitter).await.unwrap_err();

    assert!(matches!(error, RuntimeError::ExecutionError(_)));
    tokio::time::sleep(std::time::Duration::from_millis(10)).await;
    assert!(events.lock().iter().any(|s| s.kind.as_str() == "jido.agent.event.cmd.failed"));
}
