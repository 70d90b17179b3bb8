// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::test_support::ScriptedAction;

#[test]
fn workflow_outcome_ok_into_parts_has_no_directive() {
    let mut result = ParamMap::new();
    result.insert("sum".into(), serde_json::json!(4));
    let (outcome, directive) = WorkflowOutcome::ok(result.clone()).into_parts();
    assert_eq!(outcome.unwrap(), result);
    assert!(directive.is_none());
}

#[test]
fn workflow_outcome_err_with_directive_carries_both() {
    let error = RuntimeError::ExecutionError("boom".into());
    let directive = Directive::Transition(AgentStatus::Paused);
    let outcome = WorkflowOutcome::ErrWithDirective { error: error.clone(), directive: directive.clone() };
    assert!(outcome.is_err());
    let (result, got_directive) = outcome.into_parts();
    assert_eq!(result.unwrap_err(), error);
    assert_eq!(got_directive, Some(directive));
}

#[test]
fn is_err_is_false_for_ok_variants() {
    assert!(!WorkflowOutcome::ok(ParamMap::new()).is_err());
}

#[test]
fn error_borrows_without_consuming() {
    let outcome = WorkflowOutcome::err(RuntimeError::ExecutionError("boom".into()));
    assert!(outcome.error().is_some());
    assert!(outcome.is_err());
}

#[test]
fn into_error_drops_the_directive() {
    let outcome = WorkflowOutcome::ErrWithDirective {
        error: RuntimeError::ExecutionError("boom".into()),
        directive: Directive::Transition(AgentStatus::Paused),
    };
    assert_eq!(outcome.into_error(), Some(RuntimeError::ExecutionError("boom".into())));
}

#[test]
fn error_is_none_for_ok_variants() {
    assert!(WorkflowOutcome::ok(ParamMap::new()).error().is_none());
}

#[tokio::test]
async fn scripted_action_replays_last_step_past_script_end() {
    let action = ScriptedAction::new("noop");
    action.push_ok(ParamMap::new());
    let mut result = ParamMap::new();
    result.insert("final".into(), serde_json::json!(true));
    action.push_ok(result.clone());

    let (first, _) = action.run(ParamMap::new(), ParamMap::new()).await.into_parts();
    assert!(first.is_ok());

    for _ in 0..3 {
        let (outcome, _) = action.run(ParamMap::new(), ParamMap::new()).await.into_parts();
        assert_eq!(outcome.unwrap(), result);
    }
    assert_eq!(action.call_count(), 4);
}

#[tokio::test]
async fn default_on_error_returns_the_original_error() {
    let action = ScriptedAction::new("noop");
    let error = RuntimeError::ExecutionError("boom".into());
    let got = action.on_error(ParamMap::new(), &error, ParamMap::new()).await;
    assert_eq!(got.unwrap_err(), error);
}

#[test]
fn default_validate_params_accepts_anything() {
    let action = ScriptedAction::new("noop");
    assert!(action.validate_params(&ParamMap::new()).is_ok());
}
