// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[yare::parameterized(
    invalid_action = { RuntimeError::InvalidAction("add".into()), "invalid_action" },
    validation_error = { RuntimeError::validation("missing field"), "validation_error" },
    invalid_signal_format = { RuntimeError::InvalidSignalFormat("no type".into()), "invalid_signal_format" },
    invalid_directive_format = { RuntimeError::InvalidDirectiveFormat("no directive key".into()), "invalid_directive_format" },
    invalid_state = { RuntimeError::InvalidState { status: "stopped".into() }, "invalid_state" },
    execution_error = { RuntimeError::ExecutionError("boom".into()), "execution_error" },
    timeout = { RuntimeError::timeout("run", 5000), "timeout" },
    internal_server_error = { RuntimeError::InternalServerError("panic".into()), "internal_server_error" },
)]
fn kind_returns_the_expected_tag(error: RuntimeError, expected: &str) {
    assert_eq!(error.kind(), expected);
}

#[test]
fn compensation_error_kind_and_fields() {
    let original = RuntimeError::ExecutionError("boom".into());
    let error = RuntimeError::compensation(original.clone(), true, "rolled back");
    assert_eq!(error.kind(), "compensation_error");
    match &error {
        RuntimeError::CompensationError { original: boxed, compensated, detail } => {
            assert_eq!(**boxed, original);
            assert!(*compensated);
            assert_eq!(detail, "rolled back");
        }
        _ => panic!("expected CompensationError"),
    }
}

#[test]
fn timeout_message_includes_operation_and_duration() {
    let error = RuntimeError::timeout("workflow", 5000);
    assert_eq!(error.to_string(), "workflow timed out after 5000ms");
}

#[test]
fn validation_defaults_detail_to_empty() {
    let error = RuntimeError::validation("bad input");
    match error {
        RuntimeError::ValidationError { message, detail } => {
            assert_eq!(message, "bad input");
            assert!(detail.is_empty());
        }
        _ => panic!("expected ValidationError"),
    }
}
