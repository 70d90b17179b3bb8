// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! A trivial [`OutputSink`] for the demo CLI: prints every outbound
//! signal as a line of JSON, mirroring the teacher's adapter shape
//! (a thin wrapper with a `name()` and a fire-and-forget `send`).

use ag_core::Signal;
use ag_runtime::OutputSink;

#[derive(Debug, Default)]
pub struct StdoutSink;

#[async_trait::async_trait]
impl OutputSink for StdoutSink {
    fn name(&self) -> &str {
        "stdout"
    }

    async fn send(&self, signal: Signal) {
        match serde_json::to_string(&signal) {
            Ok(line) => println!("{line}"),
            Err(error) => tracing::warn!(%error, "failed to serialize outbound signal"),
        }
    }
}

#[cfg(test)]
#[path = "stdout_sink_tests.rs"]
mod tests;
