use super::*;
use ag_core::Event;
use parking_lot::Mutex;
use std::sync::Arc;

struct RecordingSink {
    name: &'static str,
    received: Arc<Mutex<Vec<Signal>>>,
}

#[async_trait::async_trait]
impl OutputSink for RecordingSink {
    fn name(&self) -> &str {
        self.name
    }

    async fn send(&self, signal: Signal) {
        self.received.lock().push(signal);
    }
}

#[tokio::test]
async fn emit_delivers_to_every_subscriber() {
    let mut emitter = Emitter::new("jido://agent/a1");
    let received = Arc::new(Mutex::new(Vec::new()));
    emitter.register(Arc::new(RecordingSink { name: "rec", received: received.clone() }), 8);

    emitter.emit(&Event::QueueProcessingCompleted);
    tokio::task::yield_now().await;
    tokio::time::sleep(std::time::Duration::from_millis(10)).await;

    let signals = received.lock();
    assert_eq!(signals.len(), 1);
    assert_eq!(signals[0].kind.as_str(), "jido.agent.event.processing.completed");
}

#[tokio::test]
async fn emit_with_no_subscribers_is_a_noop() {
    let emitter = Emitter::new("jido://agent/a1");
    emitter.emit(&Event::QueueProcessingCompleted);
}

#[tokio::test]
async fn full_channel_drops_the_event_instead_of_blocking() {
    let mut emitter = Emitter::new("jido://agent/a1");
    let received = Arc::new(Mutex::new(Vec::new()));
    emitter.register(Arc::new(RecordingSink { name: "rec", received: received.clone() }), 1);

    for _ in 0..20 {
        emitter.emit(&Event::QueueProcessingCompleted);
    }
    tokio::time::sleep(std::time::Duration::from_millis(10)).await;

    assert!(received.lock().len() <= 20);
}
