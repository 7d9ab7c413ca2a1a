use std::sync::Mutex;

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use tokio::sync::mpsc;

// ============================================================================
// Event Sink - fire-and-forget notification channel
// ============================================================================
//
// emit() never reports failure to the caller. A sink that cannot deliver
// logs and drops the event.
//
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct PublishedEvent {
    pub name: String,
    pub payload: Value,
    pub emitted_at: DateTime<Utc>,
}

impl PublishedEvent {
    pub fn new(name: impl Into<String>, payload: Value) -> Self {
        Self {
            name: name.into(),
            payload,
            emitted_at: Utc::now(),
        }
    }
}

pub trait EventSink: Send + Sync {
    fn emit(&self, name: &str, payload: Value);
}

/// Hands events to an unbounded tokio channel for an async consumer.
#[derive(Clone)]
pub struct ChannelEventSink {
    sender: mpsc::UnboundedSender<PublishedEvent>,
}

impl ChannelEventSink {
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<PublishedEvent>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, receiver)
    }
}

impl EventSink for ChannelEventSink {
    fn emit(&self, name: &str, payload: Value) {
        match self.sender.send(PublishedEvent::new(name, payload)) {
            Ok(()) => {
                tracing::debug!(event_name = %name, "Event dispatched");
            }
            Err(_) => {
                tracing::warn!(
                    event_name = %name,
                    "Event consumer is gone, dropping event"
                );
            }
        }
    }
}

/// Keeps every emitted event in memory.
#[derive(Default)]
pub struct RecordingEventSink {
    events: Mutex<Vec<PublishedEvent>>,
}

impl RecordingEventSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<PublishedEvent> {
        match self.events.lock() {
            Ok(events) => events.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl EventSink for RecordingEventSink {
    fn emit(&self, name: &str, payload: Value) {
        match self.events.lock() {
            Ok(mut events) => events.push(PublishedEvent::new(name, payload)),
            Err(_) => tracing::warn!(event_name = %name, "Event recorder lock poisoned, dropping event"),
        }
    }
}
