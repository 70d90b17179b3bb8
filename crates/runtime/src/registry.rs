// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Registries mapping opaque identifiers to capability records, instead
//! of the source's by-name dynamic dispatch. Signals and instructions
//! carry identifiers, not code: the runtime resolves them through these
//! maps before dispatch.

use ag_core::{Action, ActionId, Agent};
use std::collections::HashMap;
use std::sync::Arc;

/// Resolves an [`ActionId`] to the concrete action the Workflow
/// Executor runs.
pub type ActionRegistry = HashMap<ActionId, Arc<dyn Action>>;

/// Opaque name for an agent implementation, used by hosts that spawn
/// agents by kind rather than holding a concrete value directly.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AgentKind(pub String);

impl AgentKind {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }
}

impl std::fmt::Display for AgentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Host-supplied constructor for an agent kind. The runtime itself
/// never calls this directly — it only ever holds an already-constructed
/// `Box<dyn Agent>` — but hosts that spawn child agents by name (e.g.
/// from a `SpawnChild` directive) need this to turn a name into a value.
pub trait AgentFactory: Send + Sync {
    fn create(&self) -> Box<dyn Agent>;
}

pub type AgentRegistry = HashMap<AgentKind, Arc<dyn AgentFactory>>;

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
