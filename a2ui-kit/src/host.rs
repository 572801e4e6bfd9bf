//! Host Integration
//!
//! Connects a message source (the excluded network client) to the
//! interpreter. The source is a single opaque call that returns an ordered
//! batch or fails; the host applies each batch atomically, in receipt
//! order, and exposes rendering.

use std::sync::{Arc, Mutex};

use crate::error::{HostError, ProtocolResult};
use crate::message::MessageEnvelope;
use crate::processor::{MessageProcessor, ProcessorEvent};
use crate::render::VisualNode;

/// A producer of message batches, usually backed by a remote agent.
///
/// Failures are reported as strings; user-visible error presentation is the
/// host application's job, not the interpreter's.
pub trait MessageSource {
    /// Ask the agent to respond to `user_text` with a message batch.
    fn fetch_messages(&mut self, user_text: &str) -> Result<Vec<MessageEnvelope>, String>;
}

/// Drives one interpreter from one message source.
///
/// Each submitted prompt fetches a batch and applies it in full; a batch
/// that arrives is always applied, and a failed fetch leaves the surfaces
/// untouched.
pub struct UiHost<S> {
    source: S,
    processor: MessageProcessor,
}

impl<S: MessageSource> UiHost<S> {
    /// Create a host over a message source
    pub fn new(source: S) -> Self {
        UiHost {
            source,
            processor: MessageProcessor::new(),
        }
    }

    /// Fetch a batch for `user_text` and apply it.
    pub fn submit(&mut self, user_text: &str) -> Result<Vec<ProcessorEvent>, HostError> {
        let batch = self
            .source
            .fetch_messages(user_text)
            .map_err(HostError::Source)?;
        Ok(self.processor.apply(&batch)?)
    }

    /// Render the current state of a surface
    pub fn render(&self, surface_id: &str) -> VisualNode {
        self.processor.render_surface(surface_id)
    }

    /// The underlying processor
    pub fn processor(&self) -> &MessageProcessor {
        &self.processor
    }
}

/// A processor handle shareable across threads.
///
/// Concurrent batches for the same surface must apply in receipt order and
/// must not interleave message-by-message; each `apply` here holds the lock
/// for the whole batch, making it a critical section. Rendering takes the
/// same lock briefly and only reads.
#[derive(Clone, Default)]
pub struct SharedProcessor {
    inner: Arc<Mutex<MessageProcessor>>,
}

impl SharedProcessor {
    /// Create a shared handle over an empty processor
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a batch as one critical section
    pub fn apply(&self, batch: &[MessageEnvelope]) -> ProtocolResult<Vec<ProcessorEvent>> {
        self.lock().apply(batch)
    }

    /// Parse and apply a JSON batch as one critical section
    pub fn apply_json(&self, json: &str) -> ProtocolResult<Vec<ProcessorEvent>> {
        self.lock().apply_json(json)
    }

    /// Render the current state of a surface
    pub fn render(&self, surface_id: &str) -> VisualNode {
        self.lock().render_surface(surface_id)
    }

    /// Run a read-only closure against the processor under the lock
    pub fn with<R>(&self, f: impl FnOnce(&MessageProcessor) -> R) -> R {
        f(&self.lock())
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MessageProcessor> {
        // A poisoned lock still holds consistent state: batches apply
        // in-order or not at all.
        self.inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{TextRole, VisualNode};
    use serde_json::json;

    /// Scripted source: returns one pre-built batch per submit.
    struct ScriptedSource {
        batches: Vec<Result<Vec<MessageEnvelope>, String>>,
    }

    impl MessageSource for ScriptedSource {
        fn fetch_messages(&mut self, _user_text: &str) -> Result<Vec<MessageEnvelope>, String> {
            if self.batches.is_empty() {
                Ok(Vec::new())
            } else {
                self.batches.remove(0)
            }
        }
    }

    fn greeting_batch() -> Vec<MessageEnvelope> {
        vec![
            MessageEnvelope::create_surface("main", "standard"),
            MessageEnvelope::update_data_model("main", "/", json!({"name": "Ann"})),
            MessageEnvelope::update_components(
                "main",
                serde_json::from_value(json!([
                    {"id": "root", "type": "Text", "text": {"path": "/name"}, "usageHint": "h1"}
                ]))
                .unwrap(),
            ),
        ]
    }

    #[test]
    fn test_submit_applies_batch() {
        let mut host = UiHost::new(ScriptedSource {
            batches: vec![Ok(greeting_batch())],
        });

        let events = host.submit("say hi").unwrap();
        assert_eq!(events.len(), 3);
        assert_eq!(
            host.render("main"),
            VisualNode::Text {
                content: "Ann".to_string(),
                role: TextRole::H1,
            }
        );
    }

    #[test]
    fn test_failed_fetch_leaves_state_untouched() {
        let mut host = UiHost::new(ScriptedSource {
            batches: vec![Ok(greeting_batch()), Err("connection reset".to_string())],
        });

        host.submit("say hi").unwrap();
        let err = host.submit("again").unwrap_err();

        assert!(matches!(err, HostError::Source(_)));
        assert!(host.processor().store().contains("main"));
    }

    #[test]
    fn test_shared_processor_batches_serialize() {
        let shared = SharedProcessor::new();

        shared
            .apply(&[MessageEnvelope::create_surface("main", "standard")])
            .unwrap();

        let clone = shared.clone();
        clone
            .apply(&[MessageEnvelope::update_data_model(
                "main",
                "/name",
                json!("Ann"),
            )])
            .unwrap();

        shared.with(|processor| {
            let model = processor.store().get("main").unwrap().data_model();
            assert_eq!(model.get_string("/name"), Some("Ann"));
        });
    }
}
