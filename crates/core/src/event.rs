// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Events emitted by the runtime through the Output Emitter.
//!
//! Serializes with `{"type": "event:name", ...fields}`, the same shape
//! as the teacher's `Event` enum, so a host can forward these directly
//! onto an external bus without a translation layer.

use crate::signal::Signal;
use crate::AgentStatus;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    #[serde(rename = "queue:processing:started")]
    QueueProcessingStarted { queue_len: usize },

    #[serde(rename = "queue:processing:completed")]
    QueueProcessingCompleted,

    #[serde(rename = "queue:processing:failed")]
    QueueProcessingFailed { reason: String },

    #[serde(rename = "queue:step:completed")]
    QueueStepCompleted { signal_id: String },

    #[serde(rename = "queue:step:ignored")]
    QueueStepIgnored { signal_id: String, reason: String },

    #[serde(rename = "queue:step:failed")]
    QueueStepFailed { signal_id: String, reason: String },

    #[serde(rename = "cmd:success")]
    CmdSuccess { signal_id: String },

    #[serde(rename = "cmd:success:pending")]
    CmdSuccessPending { signal_id: String, pending_count: usize },

    #[serde(rename = "cmd:failed")]
    CmdFailed { signal_id: String, reason: String },

    #[serde(rename = "agent:transition")]
    AgentTransition { from: AgentStatus, to: AgentStatus },
}

impl Event {
    /// Short tag used in structured log fields (mirrors the teacher's
    /// `Event::log_summary`).
    pub fn log_summary(&self) -> String {
        match self {
            Event::QueueProcessingStarted { queue_len } => {
                format!("queue.processing.started queue_len={queue_len}")
            }
            Event::QueueProcessingCompleted => "queue.processing.completed".to_string(),
            Event::QueueProcessingFailed { reason } => {
                format!("queue.processing.failed reason={reason}")
            }
            Event::QueueStepCompleted { signal_id } => {
                format!("queue.step.completed signal_id={signal_id}")
            }
            Event::QueueStepIgnored { signal_id, reason } => {
                format!("queue.step.ignored signal_id={signal_id} reason={reason}")
            }
            Event::QueueStepFailed { signal_id, reason } => {
                format!("queue.step.failed signal_id={signal_id} reason={reason}")
            }
            Event::CmdSuccess { signal_id } => format!("cmd.success signal_id={signal_id}"),
            Event::CmdSuccessPending { signal_id, pending_count } => {
                format!("cmd.success.pending signal_id={signal_id} pending_count={pending_count}")
            }
            Event::CmdFailed { signal_id, reason } => {
                format!("cmd.failed signal_id={signal_id} reason={reason}")
            }
            Event::AgentTransition { from, to } => format!("agent.transition {from}->{to}"),
        }
    }
}

/// Convert an emitted `Event` into an outbound `event.*` signal for
/// delivery to subscribers, per the Output Emitter's contract.
pub fn to_outbound_signal(source: &str, event: &Event) -> Signal {
    let type_name = match event {
        Event::QueueProcessingStarted { .. } => "processing.started",
        Event::QueueProcessingCompleted => "processing.completed",
        Event::QueueProcessingFailed { .. } => "processing.failed",
        Event::QueueStepCompleted { .. } => "step.completed",
        Event::QueueStepIgnored { .. } => "step.ignored",
        Event::QueueStepFailed { .. } => "step.failed",
        Event::CmdSuccess { .. } => "cmd.success",
        Event::CmdSuccessPending { .. } => "cmd.success.pending",
        Event::CmdFailed { .. } => "cmd.failed",
        Event::AgentTransition { .. } => "transition",
    };
    let mut signal = Signal::new(
        format!("{}{}", crate::signal::SignalType::EVENT_PREFIX, type_name),
        source.to_string(),
    );
    if let Ok(serde_json::Value::Object(map)) = serde_json::to_value(event) {
        signal.data = map.into_iter().collect();
    }
    signal
}

#[cfg(test)]
#[path = "event_tests.rs"]
mod tests;
