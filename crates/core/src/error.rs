// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Runtime error kinds.
//!
//! Mirrors the teacher's one-`thiserror`-enum-per-crate-boundary
//! convention (`ExecuteError`, `RuntimeError`). Every variant carries a
//! human message plus whatever structured detail the design calls for.
//! `Clone` is derived (rather than boxing an arbitrary `std::error::Error`
//! source) so a `RuntimeError` can be threaded through compensation and
//! retry bookkeeping without move/borrow gymnastics.

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum RuntimeError {
    #[error("not a runnable action: {0}")]
    InvalidAction(String),

    #[error("validation error: {message}")]
    ValidationError { message: String, detail: String },

    #[error("signal lacks required fields: {0}")]
    InvalidSignalFormat(String),

    #[error("directive payload missing or malformed: {0}")]
    InvalidDirectiveFormat(String),

    #[error("signal cannot run in status {status}")]
    InvalidState { status: String },

    #[error("action execution failed: {0}")]
    ExecutionError(String),

    #[error("{0}")]
    Timeout(String),

    #[error("compensation error: {original}")]
    CompensationError {
        original: Box<RuntimeError>,
        compensated: bool,
        detail: String,
    },

    #[error("internal server error: {0}")]
    InternalServerError(String),
}

impl RuntimeError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError { message: message.into(), detail: String::new() }
    }

    pub fn timeout(operation: &str, ms: u64) -> Self {
        Self::Timeout(format!("{operation} timed out after {ms}ms"))
    }

    pub fn compensation(
        original: RuntimeError,
        compensated: bool,
        detail: impl Into<String>,
    ) -> Self {
        Self::CompensationError { original: Box::new(original), compensated, detail: detail.into() }
    }

    /// The short machine-readable kind name, used for telemetry/event
    /// payloads and for the error-kind-to-event-name test table.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidAction(_) => "invalid_action",
            Self::ValidationError { .. } => "validation_error",
            Self::InvalidSignalFormat(_) => "invalid_signal_format",
            Self::InvalidDirectiveFormat(_) => "invalid_directive_format",
            Self::InvalidState { .. } => "invalid_state",
            Self::ExecutionError(_) => "execution_error",
            Self::Timeout(_) => "timeout",
            Self::CompensationError { .. } => "compensation_error",
            Self::InternalServerError(_) => "internal_server_error",
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
