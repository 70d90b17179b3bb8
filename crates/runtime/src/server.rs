// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The per-agent server: owns the agent value, its lifecycle status,
//! its signal mailbox, and the Output Emitter. `AgentState` from the
//! design doc is this struct; it is never shared behind a lock because
//! only the task that owns it ever calls `process_signal`.

use crate::command_path;
use crate::directive_path;
use crate::output::Emitter;
use ag_core::{Agent, AgentStatus, Directive, Event, RuntimeError, Signal, SignalKind};
use std::collections::VecDeque;

pub struct Server {
    agent_id: String,
    agent: Box<dyn Agent>,
    status: AgentStatus,
    pending_signals: VecDeque<Signal>,
    emitter: Emitter,
}

impl Server {
    pub fn new(agent_id: impl Into<String>, agent: Box<dyn Agent>) -> Self {
        let agent_id = agent_id.into();
        let emitter = Emitter::new(format!("jido://agent/{agent_id}"));
        Self { agent_id, agent, status: AgentStatus::Initializing, pending_signals: VecDeque::new(), emitter }
    }

    pub fn agent_id(&self) -> &str {
        &self.agent_id
    }

    pub fn status(&self) -> AgentStatus {
        self.status
    }

    pub fn agent(&self) -> &dyn Agent {
        self.agent.as_ref()
    }

    pub fn queue_len(&self) -> usize {
        self.pending_signals.len()
    }

    pub fn emitter_mut(&mut self) -> &mut Emitter {
        &mut self.emitter
    }

    /// Move the freshly constructed server out of `initializing`.
    pub fn mark_idle(&mut self) -> Result<(), RuntimeError> {
        self.transition(AgentStatus::Idle)
    }

    /// Apply a `Directive::Transition` returned from a dispatch. Server
    /// directives are handed back to the owner rather than applied
    /// in-place, so the owner calls this once it has decided to honor
    /// one.
    pub fn apply_transition(&mut self, to: AgentStatus) -> Result<(), RuntimeError> {
        self.transition(to)
    }

    fn transition(&mut self, to: AgentStatus) -> Result<(), RuntimeError> {
        if !self.status.can_transition_to(to) {
            return Err(RuntimeError::InvalidState { status: self.status.to_string() });
        }
        self.emitter.emit(&Event::AgentTransition { from: self.status, to });
        self.status = to;
        Ok(())
    }

    /// Enqueue `signal` and drain the queue per the state machine.
    /// Returns the server directives accumulated across every dispatch
    /// in this drain pass (both the Command and Directive paths), in
    /// emission order.
    pub async fn process_signal(&mut self, signal: Signal) -> Result<Vec<Directive>, RuntimeError> {
        let span = tracing::info_span!("server.process_signal", agent = %self.agent_id, signal = %signal.id);
        let _enter = span.enter();

        self.pending_signals.push_back(signal);
        self.emitter.emit(&Event::QueueProcessingStarted { queue_len: self.pending_signals.len() });

        let mut directives = Vec::new();
        loop {
            let head = match self.pending_signals.pop_front() {
                Some(head) => head,
                None => {
                    self.emitter.emit(&Event::QueueProcessingCompleted);
                    return Ok(directives);
                }
            };

            if self.status == AgentStatus::Paused {
                self.pending_signals.push_front(head);
                return Ok(directives);
            }

            match head.kind.kind() {
                SignalKind::Unknown | SignalKind::Event => {
                    self.emitter.emit(&Event::QueueStepIgnored {
                        signal_id: head.id.to_string(),
                        reason: format!("unknown signal type: {}", head.kind),
                    });
                    continue;
                }
                kind @ (SignalKind::Command | SignalKind::Directive) => {
                    match self.dispatch(&head, kind).await {
                        Ok(step_directives) => {
                            directives.extend(step_directives);
                            self.emitter.emit(&Event::QueueStepCompleted { signal_id: head.id.to_string() });
                        }
                        Err(error) => {
                            self.emitter.emit(&Event::QueueStepFailed {
                                signal_id: head.id.to_string(),
                                reason: error.to_string(),
                            });
                            self.emitter.emit(&Event::QueueProcessingFailed { reason: error.to_string() });
                            return Err(error);
                        }
                    }
                }
            }
        }
    }

    async fn dispatch(&mut self, head: &Signal, kind: SignalKind) -> Result<Vec<Directive>, RuntimeError> {
        match self.status {
            AgentStatus::Idle => self.transition(AgentStatus::Running)?,
            AgentStatus::Running => {}
            other => return Err(RuntimeError::InvalidState { status: other.to_string() }),
        }

        let result = match kind {
            SignalKind::Command => command_path::dispatch(self.agent.as_mut(), head, &self.emitter)
                .await
                .map(|success| (success.requeue, success.directives)),
            SignalKind::Directive => directive_path::dispatch(self.agent.as_mut(), head, &self.emitter)
                .await
                .map(|directives| (Vec::new(), directives)),
            SignalKind::Event | SignalKind::Unknown => {
                unreachable!("router filters Unknown/Event signals before dispatch")
            }
        };

        match result {
            Ok((requeue, directives)) => {
                self.transition(AgentStatus::Idle)?;
                for signal in requeue {
                    self.pending_signals.push_back(signal);
                }
                Ok(directives)
            }
            Err(error) => {
                // Best-effort return to idle so a single failed dispatch
                // doesn't wedge the agent; the dispatch error still wins.
                let _ = self.transition(AgentStatus::Idle);
                Err(error)
            }
        }
    }
}

#[cfg(test)]
#[path = "server_tests.rs"]
mod tests;
