// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The `Action` plug-in surface: the leaf unit the Workflow Executor runs.

use crate::directive::Directive;
use crate::instruction::ParamMap;
use crate::RuntimeError;
use std::time::Duration;

/// Compensation policy advertised by an action's metadata.
#[derive(Debug, Clone, Copy, Default)]
pub struct CompensationPolicy {
    pub enabled: bool,
    /// `None` means "use the outer workflow timeout, or 5000ms".
    pub timeout: Option<Duration>,
}

/// Static metadata describing an action, independent of any one call.
#[derive(Debug, Clone, Default)]
pub struct ActionMetadata {
    pub name: &'static str,
    pub compensation: CompensationPolicy,
}

/// The sum type an action's `run` returns.
///
/// Named to force exhaustive handling of the source's two historical
/// shapes (`{ok, result}` and `{ok, result, directive}`) plus their
/// error-carrying counterparts.
#[derive(Debug, Clone)]
pub enum WorkflowOutcome {
    Ok { result: ParamMap },
    OkWithDirective { result: ParamMap, directive: Directive },
    Err { error: RuntimeError },
    ErrWithDirective { error: RuntimeError, directive: Directive },
}

impl WorkflowOutcome {
    pub fn ok(result: ParamMap) -> Self {
        Self::Ok { result }
    }

    pub fn err(error: RuntimeError) -> Self {
        Self::Err { error }
    }

    pub fn is_err(&self) -> bool {
        matches!(self, Self::Err { .. } | Self::ErrWithDirective { .. })
    }

    /// Borrow the error without consuming the outcome, e.g. to decide
    /// whether a failure is retryable.
    pub fn error(&self) -> Option<&RuntimeError> {
        match self {
            Self::Err { error } | Self::ErrWithDirective { error, .. } => Some(error),
            _ => None,
        }
    }

    /// Take ownership of the error, discarding any directive. Used once
    /// a failure has been judged terminal (retries exhausted or a
    /// timeout) and the directive, if any, no longer matters.
    pub fn into_error(self) -> Option<RuntimeError> {
        match self {
            Self::Err { error } | Self::ErrWithDirective { error, .. } => Some(error),
            _ => None,
        }
    }

    /// Split into `(result_or_error, directive)`, the shape the Chain
    /// Runner and Workflow Executor both consume.
    pub fn into_parts(self) -> (Result<ParamMap, RuntimeError>, Option<Directive>) {
        match self {
            Self::Ok { result } => (Ok(result), None),
            Self::OkWithDirective { result, directive } => (Ok(result), Some(directive)),
            Self::Err { error } => (Err(error), None),
            Self::ErrWithDirective { error, directive } => (Err(error), Some(directive)),
        }
    }
}

/// A pluggable unit of work: the leaf the Workflow Executor invokes.
///
/// Implementors are resolved by [`crate::instruction::ActionId`] through a
/// host-supplied registry; the runtime itself only ever holds a
/// `Arc<dyn Action>` already looked up by the caller.
#[async_trait::async_trait]
pub trait Action: Send + Sync {
    fn metadata(&self) -> ActionMetadata;

    async fn run(&self, params: ParamMap, context: ParamMap) -> WorkflowOutcome;

    /// Optional parameter validation, run before `run`. Default accepts
    /// anything.
    fn validate_params(&self, _params: &ParamMap) -> Result<(), RuntimeError> {
        Ok(())
    }

    /// Optional compensation hook, invoked on terminal error when
    /// `metadata().compensation.enabled` is true.
    async fn on_error(
        &self,
        _params: ParamMap,
        error: &RuntimeError,
        _context: ParamMap,
    ) -> Result<ParamMap, RuntimeError> {
        Err(error.clone())
    }
}

#[cfg(test)]
#[path = "action_tests.rs"]
mod tests;
