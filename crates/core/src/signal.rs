// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Signal envelope and the hierarchical signal-type grammar.
//!
//! A signal is the unit of work that enters a [`crate::AgentState`]'s
//! queue: a command, a directive (a command subtype), or an outbound
//! event. Signals are immutable once created.

use crate::instruction::Instruction;
use serde_json::Value;
use std::collections::HashMap;

crate::define_id! {
    /// Unique identifier for a signal: `{agent_id}_{nanosecond timestamp}`.
    pub struct SignalId("sig-");
}

/// Bounded options mapping carried on a signal (see the `opts` table in
/// the design: `apply_state`, `strict_validation`, `runner`, `context`).
pub type SignalOpts = HashMap<String, Value>;

/// The three recognized signal-type prefixes.
///
/// `Directive` is a subtype of `Command` in the wire grammar
/// (`jido.agent.cmd.directive.*` vs `jido.agent.cmd.*`) but the two are
/// disjoint here since routing only ever needs one classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalKind {
    Command,
    Directive,
    Event,
    /// Did not match any recognized prefix; routed to `ignore`.
    Unknown,
}

/// Hierarchical type string, e.g. `jido.agent.cmd.run` or
/// `jido.agent.cmd.directive.transition`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct SignalType(pub String);

impl SignalType {
    pub const EVENT_PREFIX: &'static str = "jido.agent.event.";
    pub const CMD_PREFIX: &'static str = "jido.agent.cmd.";
    pub const DIRECTIVE_PREFIX: &'static str = "jido.agent.cmd.directive.";

    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Classify this type string per the grammar in the design doc.
    ///
    /// Directive is checked before command since `cmd.directive.*` is a
    /// more specific prefix of `cmd.*`.
    pub fn kind(&self) -> SignalKind {
        if self.0.starts_with(Self::DIRECTIVE_PREFIX) {
            SignalKind::Directive
        } else if self.0.starts_with(Self::CMD_PREFIX) {
            SignalKind::Command
        } else if self.0.starts_with(Self::EVENT_PREFIX) {
            SignalKind::Event
        } else {
            SignalKind::Unknown
        }
    }
}

impl std::fmt::Display for SignalType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SignalType {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// An immutable envelope carrying a command, directive, or event.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Signal {
    pub id: SignalId,
    #[serde(rename = "type")]
    pub kind: SignalType,
    /// SHOULD be `jido://agent/<agentId>`.
    pub source: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(default)]
    pub data: HashMap<String, Value>,
    #[serde(default)]
    pub instructions: Vec<Instruction>,
    #[serde(default)]
    pub opts: SignalOpts,
}

impl Signal {
    pub fn new(kind: impl Into<SignalType>, source: impl Into<String>) -> Self {
        Self {
            id: SignalId::new(),
            kind: kind.into(),
            source: source.into(),
            subject: None,
            data: HashMap::new(),
            instructions: Vec::new(),
            opts: SignalOpts::new(),
        }
    }

    pub fn with_instructions(mut self, instructions: Vec<Instruction>) -> Self {
        self.instructions = instructions;
        self
    }

    pub fn with_data(mut self, data: HashMap<String, Value>) -> Self {
        self.data = data;
        self
    }

    pub fn with_opts(mut self, opts: SignalOpts) -> Self {
        self.opts = opts;
        self
    }

    /// A command signal addressed to `agent_id` carrying `instructions`.
    pub fn command(agent_id: &str, instructions: Vec<Instruction>) -> Self {
        Self::new(format!("{}run", SignalType::CMD_PREFIX), format!("jido://agent/{agent_id}"))
            .with_instructions(instructions)
    }

    /// A directive signal whose `data["directive"]` carries the directive payload.
    pub fn directive(agent_id: &str, name: &str, directive: Value) -> Self {
        let mut data = HashMap::new();
        data.insert("directive".to_string(), directive);
        Self::new(
            format!("{}{name}", SignalType::DIRECTIVE_PREFIX),
            format!("jido://agent/{agent_id}"),
        )
        .with_data(data)
    }

    pub fn opt_bool(&self, key: &str, default: bool) -> bool {
        self.opts.get(key).and_then(Value::as_bool).unwrap_or(default)
    }
}

#[cfg(test)]
#[path = "signal_tests.rs"]
mod tests;
