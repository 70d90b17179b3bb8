// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The async handle returned by [`crate::Executor::run_async`].

use ag_core::WorkflowOutcome;
use std::time::Duration;
use thiserror::Error;
use tokio::task::{AbortHandle, JoinHandle};
use tokio_util::sync::CancellationToken;

#[derive(Debug, Error)]
pub enum HandleError {
    #[error("workflow timed out waiting for handle")]
    Timeout,
    #[error("workflow task panicked: {0}")]
    Join(String),
    #[error("handle already awaited")]
    AlreadyAwaited,
}

/// A running workflow attempt, awaitable once and cancellable at any
/// point before or during that wait.
pub struct Handle {
    join: Option<JoinHandle<WorkflowOutcome>>,
    abort: AbortHandle,
    cancel: CancellationToken,
}

impl Handle {
    pub(crate) fn new(join: JoinHandle<WorkflowOutcome>, cancel: CancellationToken) -> Self {
        let abort = join.abort_handle();
        Self { join: Some(join), abort, cancel }
    }

    /// Wait for the result, or force-terminate the worker if `timeout`
    /// elapses first.
    pub async fn await_result(&mut self, timeout: Duration) -> Result<WorkflowOutcome, HandleError> {
        let join = self.join.take().ok_or(HandleError::AlreadyAwaited)?;
        match tokio::time::timeout(timeout, join).await {
            Ok(Ok(outcome)) => Ok(outcome),
            Ok(Err(join_err)) => Err(HandleError::Join(join_err.to_string())),
            Err(_elapsed) => {
                self.abort.abort();
                Err(HandleError::Timeout)
            }
        }
    }

    /// Signal cooperative cancellation, then give the worker `grace` to
    /// observe it before aborting forcibly. Always succeeds, even if the
    /// worker had already finished.
    pub async fn cancel(mut self, grace: Duration) {
        self.cancel.cancel();
        if let Some(join) = self.join.take() {
            if tokio::time::timeout(grace, join).await.is_err() {
                self.abort.abort();
            }
        }
    }
}

#[cfg(test)]
#[path = "handle_tests.rs"]
mod tests;
