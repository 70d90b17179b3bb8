// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Directives: structured control values returned by `Cmd` or `Run`.
//!
//! The runtime only interprets the kinds it knows — an unrecognized
//! directive fails validation rather than being silently dropped. Each
//! directive is either an *agent directive* (applied in-place to the
//! agent by the Chain Runner) or a *server directive* (returned to the
//! caller for the server's owner to interpret, e.g. `SpawnChild`).

use crate::instruction::Instruction;
use crate::AgentStatus;

/// A directive emitted by an action or by `Agent::cmd`.
#[derive(Debug, Clone, PartialEq)]
pub enum Directive {
    /// Enqueue more instructions onto the agent's pending-instruction queue.
    EnqueueInstructions(Vec<Instruction>),
    /// Request a status transition on the owning server.
    Transition(AgentStatus),
    /// Ask the server's owner to spawn a subordinate server.
    SpawnChild { kind: String, params: serde_json::Value },
    /// Ask the server's owner to stop a previously spawned child.
    StopChild { child_id: String },
    /// Register an additional output sink on the server.
    RegisterOutput { sink_id: String },
}

impl Directive {
    /// Whether this directive is applied in-place to the agent by the
    /// Chain Runner, as opposed to being returned to the server's owner.
    pub fn is_agent_directive(&self) -> bool {
        matches!(self, Directive::EnqueueInstructions(_))
    }
}

crate::simple_display! {
    Directive {
        EnqueueInstructions(..) => "enqueue_instructions",
        Transition(..) => "transition",
        SpawnChild { .. } => "spawn_child",
        StopChild { .. } => "stop_child",
        RegisterOutput { .. } => "register_output",
    }
}

/// Directives split by destination, as produced at the end of a chain run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SplitDirectives {
    /// Applied in-place to the agent (currently just `EnqueueInstructions`).
    pub agent: Vec<Directive>,
    /// Returned to the server's owner.
    pub server: Vec<Directive>,
}

impl SplitDirectives {
    pub fn push(&mut self, directive: Directive) {
        if directive.is_agent_directive() {
            self.agent.push(directive);
        } else {
            self.server.push(directive);
        }
    }
}

#[cfg(test)]
#[path = "directive_tests.rs"]
mod tests;
