// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Runs a single [`Action`] under a deadline, with retry and compensation.

use crate::handle::Handle;
use crate::options::{TelemetryLevel, WorkflowOptions};
use ag_core::{Action, ParamMap, RuntimeError, WorkflowOutcome};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;

/// Stateless runner for a single action. Holds no per-run state itself —
/// each call to [`Executor::run`] or [`Executor::run_async`] is fully
/// self-contained, so one `Executor` can be shared across every agent
/// in the process.
#[derive(Debug, Default, Clone, Copy)]
pub struct Executor;

impl Executor {
    pub fn new() -> Self {
        Self
    }

    /// Run `action` to completion, retrying on error (never on timeout)
    /// up to `opts.max_retries` times, then compensating on terminal
    /// failure if the action's metadata enables it.
    pub async fn run(
        &self,
        action: Arc<dyn Action>,
        params: ParamMap,
        context: ParamMap,
        opts: &WorkflowOptions,
    ) -> WorkflowOutcome {
        Self::run_cancellable(action, params, context, opts, None).await
    }

    /// Spawn `run` onto its own task, returning a [`Handle`] that can be
    /// awaited (with its own timeout) or cancelled.
    pub fn run_async(
        &self,
        action: Arc<dyn Action>,
        params: ParamMap,
        context: ParamMap,
        opts: WorkflowOptions,
    ) -> Handle {
        let cancel = CancellationToken::new();
        let task_cancel = cancel.clone();
        let join = tokio::spawn(async move {
            Self::run_cancellable(action, params, context, &opts, Some(task_cancel)).await
        });
        Handle::new(join, cancel)
    }

    async fn run_cancellable(
        action: Arc<dyn Action>,
        params: ParamMap,
        context: ParamMap,
        opts: &WorkflowOptions,
        cancel: Option<CancellationToken>,
    ) -> WorkflowOutcome {
        let name = action.metadata().name;
        let mut retry_count = 0u32;
        loop {
            if let Some(token) = &cancel {
                if token.is_cancelled() {
                    return WorkflowOutcome::err(RuntimeError::InternalServerError(
                        "workflow cancelled".into(),
                    ));
                }
            }

            let span = tracing::info_span!("workflow.attempt", action = name, retry_count);
            let _enter = span.enter();

            if let Err(error) = action.validate_params(&params) {
                Self::emit_error(opts.telemetry, name, &error);
                return Self::compensate(action, params, context, opts, error).await;
            }

            Self::emit_start(opts.telemetry, name, retry_count);
            let start = std::time::Instant::now();
            let outcome = Self::run_attempt(action.clone(), params.clone(), context.clone(), opts.timeout).await;
            let elapsed = start.elapsed();

            match outcome.error() {
                None => {
                    Self::emit_complete(opts.telemetry, name, elapsed);
                    return outcome;
                }
                Some(error) => {
                    let is_timeout = matches!(error, RuntimeError::Timeout(_));
                    Self::emit_attempt_error(opts.telemetry, name, elapsed, error);
                    if is_timeout || retry_count >= opts.max_retries {
                        let error = outcome
                            .into_error()
                            .unwrap_or_else(|| RuntimeError::InternalServerError("missing error".into()));
                        return Self::compensate(action, params, context, opts, error).await;
                    }

                    let delay = opts.backoff_for(retry_count);
                    retry_count += 1;
                    match &cancel {
                        Some(token) => tokio::select! {
                            _ = tokio::time::sleep(delay) => {}
                            _ = token.cancelled() => {
                                return WorkflowOutcome::err(RuntimeError::InternalServerError(
                                    "workflow cancelled".into(),
                                ));
                            }
                        },
                        None => tokio::time::sleep(delay).await,
                    }
                }
            }
        }
    }

    /// Run one attempt in its own task group so a deadline can abort it
    /// cleanly: the `JoinSet` is dropped (aborting every task it still
    /// holds) before `timeout(...)` is returned.
    async fn run_attempt(
        action: Arc<dyn Action>,
        params: ParamMap,
        context: ParamMap,
        timeout: Option<Duration>,
    ) -> WorkflowOutcome {
        let mut tasks = JoinSet::new();
        tasks.spawn(async move { action.run(params, context).await });

        let joined = match timeout {
            Some(deadline) => match tokio::time::timeout(deadline, tasks.join_next()).await {
                Ok(joined) => joined,
                Err(_elapsed) => {
                    drop(tasks);
                    return WorkflowOutcome::err(RuntimeError::timeout("Workflow", deadline.as_millis() as u64));
                }
            },
            None => tasks.join_next().await,
        };

        match joined {
            Some(Ok(outcome)) => outcome,
            Some(Err(join_err)) => {
                WorkflowOutcome::err(RuntimeError::ExecutionError(format!("Caught panic: {join_err}")))
            }
            None => WorkflowOutcome::err(RuntimeError::InternalServerError(
                "action task group produced no result".into(),
            )),
        }
    }

    async fn compensate(
        action: Arc<dyn Action>,
        params: ParamMap,
        context: ParamMap,
        opts: &WorkflowOptions,
        original: RuntimeError,
    ) -> WorkflowOutcome {
        let metadata = action.metadata();
        if !metadata.compensation.enabled {
            return WorkflowOutcome::err(original);
        }
        let timeout = metadata
            .compensation
            .timeout
            .or(opts.timeout)
            .unwrap_or(Duration::from_millis(5000));

        let outcome = match tokio::time::timeout(timeout, action.on_error(params, &original, context)).await {
            Ok(Ok(comp_result)) => {
                let detail = format!("compensation result: {comp_result:?}");
                RuntimeError::compensation(original, true, detail)
            }
            Ok(Err(comp_err)) => RuntimeError::compensation(original, false, comp_err.to_string()),
            Err(_elapsed) => RuntimeError::compensation(
                original,
                false,
                format!("Compensation timed out after {}ms", timeout.as_millis()),
            ),
        };
        WorkflowOutcome::err(outcome)
    }

    fn emit_start(level: TelemetryLevel, action: &str, retry_count: u32) {
        match level {
            TelemetryLevel::Full => tracing::info!(action, retry_count, "workflow.start"),
            TelemetryLevel::Minimal => tracing::debug!(action, "workflow.start"),
            TelemetryLevel::Silent => {}
        }
    }

    fn emit_complete(level: TelemetryLevel, action: &str, elapsed: Duration) {
        match level {
            TelemetryLevel::Full => {
                tracing::info!(action, elapsed_ms = elapsed.as_millis() as u64, "workflow.complete")
            }
            TelemetryLevel::Minimal => tracing::debug!(action, "workflow.complete"),
            TelemetryLevel::Silent => {}
        }
    }

    fn emit_attempt_error(level: TelemetryLevel, action: &str, elapsed: Duration, error: &RuntimeError) {
        match level {
            TelemetryLevel::Full => {
                tracing::warn!(action, elapsed_ms = elapsed.as_millis() as u64, error = %error, "workflow.error")
            }
            TelemetryLevel::Minimal => tracing::debug!(action, error = %error, "workflow.error"),
            TelemetryLevel::Silent => {}
        }
    }

    fn emit_error(level: TelemetryLevel, action: &str, error: &RuntimeError) {
        if level != TelemetryLevel::Silent {
            tracing::warn!(action, error = %error, "workflow.validation_error");
        }
    }
}

#[cfg(test)]
#[path = "executor_tests.rs"]
mod tests;
