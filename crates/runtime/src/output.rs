// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Output Emitter: converts an [`Event`] into an outbound signal and
//! delivers it to every registered sink, best-effort and without ever
//! blocking the server loop.

use ag_core::{to_outbound_signal, Event, Signal};
use std::sync::Arc;
use tokio::sync::mpsc;

/// A destination for outbound event signals, mirroring the teacher's
/// `AgentAdapter`/`NotifyAdapter` trait shape.
#[async_trait::async_trait]
pub trait OutputSink: Send + Sync {
    fn name(&self) -> &str;

    async fn send(&self, signal: Signal);
}

struct Subscriber {
    name: String,
    tx: mpsc::Sender<Signal>,
}

/// Fans an event out to every subscriber over a bounded per-subscriber
/// channel; a full channel drops the event and logs a warning rather
/// than blocking the caller.
pub struct Emitter {
    source: String,
    subscribers: Vec<Subscriber>,
}

impl Emitter {
    pub fn new(source: impl Into<String>) -> Self {
        Self { source: source.into(), subscribers: Vec::new() }
    }

    /// Register a sink with the given bounded buffer size. Spawns a
    /// forwarding task that owns the receiving end, so a slow sink only
    /// ever stalls its own queue, never the emitter's caller.
    pub fn register(&mut self, sink: Arc<dyn OutputSink>, buffer: usize) {
        let (tx, mut rx) = mpsc::channel::<Signal>(buffer.max(1));
        let name = sink.name().to_string();
        tokio::spawn(async move {
            while let Some(signal) = rx.recv().await {
                sink.send(signal).await;
            }
        });
        self.subscribers.push(Subscriber { name, tx });
    }

    /// Emit `event`, converted to an outbound signal, to every subscriber.
    pub fn emit(&self, event: &Event) {
        if self.subscribers.is_empty() {
            return;
        }
        let signal = to_outbound_signal(&self.source, event);
        for subscriber in &self.subscribers {
            match subscriber.tx.try_send(signal.clone()) {
                Ok(()) => {}
                Err(mpsc::error::TrySendError::Full(_)) => {
                    tracing::warn!(sink = %subscriber.name, event = event.log_summary(), "output sink buffer full, dropping event");
                }
                Err(mpsc::error::TrySendError::Closed(_)) => {
                    tracing::warn!(sink = %subscriber.name, "output sink forwarding task ended, dropping event");
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
