use super::*;
use ag_core::test_support::ScriptedAction;
use ag_core::{Directive, Instruction};
use std::sync::Arc;

fn agent_with(id: &str, action: ScriptedAction) -> ActionAgent {
    let mut registry = ActionRegistry::new();
    registry.insert(ActionId::new(id), Arc::new(action) as Arc<dyn ag_core::Action>);
    ActionAgent::new(Arc::new(registry), Arc::new(Executor::new()), WorkflowOptions::default())
}

#[tokio::test]
async fn cmd_runs_instructions_and_updates_state() {
    let action = ScriptedAction::new("set");
    let mut result = ParamMap::new();
    result.insert("done".into(), serde_json::json!(true));
    action.push_ok(result);

    let mut agent = agent_with("set", action);
    let cmd_result = agent.cmd(vec![Instruction::new("set")], ParamMap::new(), ParamMap::new()).await.unwrap();

    assert_eq!(cmd_result.result.get("done"), Some(&serde_json::json!(true)));
    assert_eq!(agent.state().get("done"), Some(&serde_json::json!(true)));
}

#[tokio::test]
async fn enqueue_instructions_directive_lands_on_pending_queue() {
    let action = ScriptedAction::new("fanout");
    action.push_ok_with_directive(
        ParamMap::new(),
        Directive::EnqueueInstructions(vec![Instruction::new("follow_up")]),
    );

    let mut agent = agent_with("fanout", action);
    let cmd_result = agent.cmd(vec![Instruction::new("fanout")], ParamMap::new(), ParamMap::new()).await.unwrap();

    assert!(cmd_result.directives.is_empty());
    assert_eq!(agent.pending_instructions().len(), 1);
    assert_eq!(agent.pending_instructions()[0].action, ActionId::new("follow_up"));
}

#[tokio::test]
async fn server_directives_are_returned_to_the_caller() {
    let action = ScriptedAction::new("spawns");
    action.push_ok_with_directive(
        ParamMap::new(),
        Directive::SpawnChild { kind: "worker".into(), params: serde_json::json!({}) },
    );

    let mut agent = agent_with("spawns", action);
    let cmd_result = agent.cmd(vec![Instruction::new("spawns")], ParamMap::new(), ParamMap::new()).await.unwrap();

    assert_eq!(cmd_result.directives.len(), 1);
}

#[tokio::test]
async fn apply_state_false_opt_keeps_state_unchanged() {
    let action = ScriptedAction::new("noop");
    let mut result = ParamMap::new();
    result.insert("ignored".into(), serde_json::json!(1));
    action.push_ok(result);

    let mut agent = agent_with("noop", action);
    let mut opts = ParamMap::new();
    opts.insert("apply_state".into(), serde_json::json!(false));

    agent.cmd(vec![Instruction::new("noop")], ParamMap::new(), opts).await.unwrap();

    assert!(agent.state().is_empty());
}
