// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Instructions: the smallest unit of work the Workflow Executor runs.

use serde_json::Value;
use std::collections::HashMap;

/// String-keyed value mapping used for `params` and `context`.
pub type ParamMap = HashMap<String, Value>;

/// Opaque handle naming a registered [`crate::Action`].
///
/// Signals and instructions carry identifiers, not code: the runtime
/// resolves an `ActionId` to a concrete `Arc<dyn Action>` through a
/// host-supplied registry before dispatch.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct ActionId(pub String);

impl ActionId {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ActionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ActionId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// A single `(action, params)` pair, optionally carrying extra context
/// and per-instruction workflow options.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Instruction {
    pub action: ActionId,
    #[serde(default)]
    pub params: ParamMap,
    #[serde(default)]
    pub context: ParamMap,
    #[serde(default)]
    pub opts: ParamMap,
}

impl Instruction {
    pub fn new(action: impl Into<ActionId>) -> Self {
        Self { action: action.into(), params: ParamMap::new(), context: ParamMap::new(), opts: ParamMap::new() }
    }

    pub fn with_params(mut self, params: ParamMap) -> Self {
        self.params = params;
        self
    }
}

#[cfg(test)]
#[path = "instruction_tests.rs"]
mod tests;
