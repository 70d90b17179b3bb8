// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Host-controlled knobs the core itself reads. Anything richer
//! (files, env, remote config) is layered outside the core.

use ag_workflow::WorkflowOptions;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RuntimeConfig {
    /// Bounded capacity of a server's signal mailbox.
    pub queue_capacity: usize,
    pub default_workflow: WorkflowOptions,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self { queue_capacity: 256, default_workflow: WorkflowOptions::default() }
    }
}

impl RuntimeConfig {
    ag_core::setters! {
        set { queue_capacity: usize, default_workflow: WorkflowOptions }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
