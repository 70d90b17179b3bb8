// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::test_support::EchoAgent;

#[yare::parameterized(
    initializing_to_idle = { AgentStatus::Initializing, AgentStatus::Idle, true },
    idle_to_running = { AgentStatus::Idle, AgentStatus::Running, true },
    running_to_idle = { AgentStatus::Running, AgentStatus::Idle, true },
    idle_to_paused = { AgentStatus::Idle, AgentStatus::Paused, true },
    paused_to_idle = { AgentStatus::Paused, AgentStatus::Idle, true },
    any_to_stopped = { AgentStatus::Running, AgentStatus::Stopped, true },
    initializing_to_running_is_illegal = { AgentStatus::Initializing, AgentStatus::Running, false },
    running_to_paused_is_illegal = { AgentStatus::Running, AgentStatus::Paused, false },
    stopped_to_idle_is_illegal = { AgentStatus::Stopped, AgentStatus::Idle, false },
    paused_to_running_is_illegal = { AgentStatus::Paused, AgentStatus::Running, false },
)]
fn can_transition_to_matches_the_legal_transition_table(from: AgentStatus, to: AgentStatus, expected: bool) {
    assert_eq!(from.can_transition_to(to), expected);
}

#[test]
fn display_matches_status_names() {
    assert_eq!(AgentStatus::Idle.to_string(), "idle");
    assert_eq!(AgentStatus::Stopped.to_string(), "stopped");
}

#[tokio::test]
async fn echo_agent_cmd_echoes_data_into_result_and_keeps_state() {
    let mut agent = EchoAgent::default();
    let mut state = ParamMap::new();
    state.insert("count".into(), serde_json::json!(1));
    agent.set_state(state.clone());

    let mut data = ParamMap::new();
    data.insert("echoed".into(), serde_json::json!(true));

    let result = agent.cmd(vec![], data.clone(), ParamMap::new()).await.unwrap();
    assert_eq!(result.state, state);
    assert_eq!(result.result, data);
    assert!(result.directives.is_empty());
}

#[test]
fn echo_agent_pending_instructions_starts_empty() {
    let mut agent = EchoAgent::default();
    assert!(agent.pending_instructions().is_empty());
}
