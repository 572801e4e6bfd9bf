//! Message Processor
//!
//! Folds ordered message batches over the surface store. Processing is
//! sequential and synchronous: later messages in a batch observe the effects
//! of earlier ones. A batch is validated before anything is applied, so a
//! malformed batch never leaves earlier elements half-applied.

use serde_json::Value;

use crate::error::{ProtocolError, ProtocolResult};
use crate::message::{DataOp, MessageEnvelope};
use crate::render::{self, VisualNode};
use crate::surface::SurfaceStore;

/// Notification emitted while applying a batch, so a host can react to
/// state changes without diffing the store.
#[derive(Debug, Clone, PartialEq)]
pub enum ProcessorEvent {
    /// A surface was created or reset
    SurfaceCreated { surface_id: String },

    /// Components were inserted or overwritten
    ComponentsUpdated {
        surface_id: String,
        component_ids: Vec<String>,
    },

    /// The data model changed at a path
    DataModelUpdated { surface_id: String, path: String },

    /// A surface was removed
    SurfaceDeleted { surface_id: String },
}

/// The protocol interpreter's mutation half.
///
/// Owns the [`SurfaceStore`]; all mutation flows through [`apply`] and the
/// renderer only ever reads.
///
/// [`apply`]: MessageProcessor::apply
///
/// # Example
///
/// ```rust,ignore
/// let mut processor = MessageProcessor::new();
/// let events = processor.apply_json(json_batch)?;
/// let tree = processor.render_surface("main");
/// ```
#[derive(Debug, Clone, Default)]
pub struct MessageProcessor {
    store: SurfaceStore,
}

impl MessageProcessor {
    /// Create a processor with an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Read access to the surface store
    pub fn store(&self) -> &SurfaceStore {
        &self.store
    }

    /// Apply an ordered batch of messages.
    ///
    /// The whole batch is validated first: an element carrying no
    /// recognized operation rejects the batch with nothing applied.
    pub fn apply(&mut self, batch: &[MessageEnvelope]) -> ProtocolResult<Vec<ProcessorEvent>> {
        if let Some(index) = batch.iter().position(MessageEnvelope::is_empty) {
            return Err(ProtocolError::UnknownMessageKind { index });
        }

        let mut events = Vec::new();
        for envelope in batch {
            self.apply_envelope(envelope, &mut events);
        }
        Ok(events)
    }

    /// Parse and apply a JSON message batch.
    ///
    /// Tries a strict array parse first; on failure the text is run through
    /// the LLM-output repair pass and parsed again. Nothing is applied
    /// unless the whole batch parses.
    pub fn apply_json(&mut self, json: &str) -> ProtocolResult<Vec<ProcessorEvent>> {
        let batch = parse_batch(json)?;
        self.apply(&batch)
    }

    /// Render the current state of a surface to a visual tree
    pub fn render_surface(&self, surface_id: &str) -> VisualNode {
        render::render_surface(&self.store, surface_id)
    }

    /// Apply one envelope. An envelope normally carries one operation;
    /// several apply in the order create, components, data, delete.
    fn apply_envelope(&mut self, envelope: &MessageEnvelope, events: &mut Vec<ProcessorEvent>) {
        if let Some(msg) = &envelope.create_surface {
            self.store
                .create_surface(&msg.surface_id, msg.catalog_id.as_deref().unwrap_or_default());
            events.push(ProcessorEvent::SurfaceCreated {
                surface_id: msg.surface_id.clone(),
            });
        }

        if let Some(msg) = &envelope.update_components {
            let component_ids = self
                .store
                .upsert_components(&msg.surface_id, msg.components.clone());
            if !component_ids.is_empty() {
                events.push(ProcessorEvent::ComponentsUpdated {
                    surface_id: msg.surface_id.clone(),
                    component_ids,
                });
            }
        }

        if let Some(msg) = &envelope.update_data_model {
            let path = msg.path.as_deref().unwrap_or("/");
            let applied = match msg.op {
                Some(DataOp::Remove) => self.store.remove_data(&msg.surface_id, path),
                // `add`, `replace`, absent, and unrecognized ops all set;
                // a message without a value is a no-op.
                _ => match &msg.value {
                    Some(value) => self.store.set_data(&msg.surface_id, path, value.clone()),
                    None => false,
                },
            };
            if applied {
                events.push(ProcessorEvent::DataModelUpdated {
                    surface_id: msg.surface_id.clone(),
                    path: path.to_string(),
                });
            }
        }

        if let Some(msg) = &envelope.delete_surface {
            if self.store.delete_surface(&msg.surface_id) {
                events.push(ProcessorEvent::SurfaceDeleted {
                    surface_id: msg.surface_id.clone(),
                });
            }
        }
    }
}

/// Parse a JSON batch, falling back to the repair pass on failure.
pub fn parse_batch(json: &str) -> ProtocolResult<Vec<MessageEnvelope>> {
    match serde_json::from_str(json) {
        Ok(batch) => Ok(batch),
        Err(first_err) => {
            log::warn!("strict batch parse failed, attempting repair: {first_err}");
            let repaired = repair(json);
            serde_json::from_str(&repaired).map_err(|_| ProtocolError::Malformed(first_err))
        }
    }
}

// ============================================================================
// JSON repair
//
// LLMs emit message batches with JavaScript comments, trailing commas, and
// token-limit truncation. The repair pass fixes what it can; anything it
// cannot fix still surfaces as an unprocessable batch.
// ============================================================================

fn parses(json: &str) -> bool {
    serde_json::from_str::<Value>(json).is_ok()
}

fn repair(json: &str) -> String {
    let mut repaired = strip_trailing_commas(&strip_comments(json));
    if parses(&repaired) {
        return repaired;
    }

    repaired = close_truncated(&repaired);
    if parses(&repaired) {
        return repaired;
    }

    if let Some(cut) = cut_to_last_complete_element(&repaired) {
        if parses(&cut) {
            return cut;
        }
    }

    json.to_string()
}

/// Drop `// line` and `/* block */` comments outside strings.
fn strip_comments(json: &str) -> String {
    let mut out = String::with_capacity(json.len());
    let mut chars = json.chars().peekable();
    let mut in_string = false;
    let mut escaped = false;

    while let Some(ch) = chars.next() {
        if in_string {
            out.push(ch);
            if escaped {
                escaped = false;
            } else if ch == '\\' {
                escaped = true;
            } else if ch == '"' {
                in_string = false;
            }
            continue;
        }
        match ch {
            '"' => {
                in_string = true;
                out.push(ch);
            }
            '/' if chars.peek() == Some(&'/') => {
                for c in chars.by_ref() {
                    if c == '\n' {
                        out.push('\n');
                        break;
                    }
                }
            }
            '/' if chars.peek() == Some(&'*') => {
                chars.next();
                let mut prev = '\0';
                for c in chars.by_ref() {
                    if prev == '*' && c == '/' {
                        break;
                    }
                    prev = c;
                }
            }
            _ => out.push(ch),
        }
    }
    out
}

/// Drop commas that directly precede `]` or `}`.
fn strip_trailing_commas(json: &str) -> String {
    let mut out = String::with_capacity(json.len());
    let mut in_string = false;
    let mut escaped = false;

    for ch in json.chars() {
        if in_string {
            out.push(ch);
            if escaped {
                escaped = false;
            } else if ch == '\\' {
                escaped = true;
            } else if ch == '"' {
                in_string = false;
            }
            continue;
        }
        match ch {
            '"' => {
                in_string = true;
                out.push(ch);
            }
            ']' | '}' => {
                while out.ends_with(char::is_whitespace) {
                    out.pop();
                }
                if out.ends_with(',') {
                    out.pop();
                }
                out.push(ch);
            }
            _ => out.push(ch),
        }
    }
    out
}

/// Close strings, brackets, and braces left open by truncation.
fn close_truncated(json: &str) -> String {
    let mut out = json.trim_end().to_string();

    let mut closers = Vec::new();
    let mut in_string = false;
    let mut escaped = false;
    for ch in out.chars() {
        if in_string {
            if escaped {
                escaped = false;
            } else if ch == '\\' {
                escaped = true;
            } else if ch == '"' {
                in_string = false;
            }
            continue;
        }
        match ch {
            '"' => in_string = true,
            '{' => closers.push('}'),
            '[' => closers.push(']'),
            '}' | ']' => {
                closers.pop();
            }
            _ => {}
        }
    }

    if in_string {
        out.push('"');
    }
    while out.ends_with(|c: char| c.is_whitespace() || c == ',' || c == ':') {
        out.pop();
    }
    while let Some(closer) = closers.pop() {
        out.push(closer);
    }
    out
}

/// Cut a top-level array back to its last complete object element.
fn cut_to_last_complete_element(json: &str) -> Option<String> {
    let mut depth = 0i32;
    let mut in_string = false;
    let mut escaped = false;
    let mut last_end = None;

    for (i, ch) in json.char_indices() {
        if in_string {
            if escaped {
                escaped = false;
            } else if ch == '\\' {
                escaped = true;
            } else if ch == '"' {
                in_string = false;
            }
            continue;
        }
        match ch {
            '"' => in_string = true,
            '[' | '{' => depth += 1,
            ']' | '}' => {
                depth -= 1;
                // Depth 1 after a `}` means a top-level array element just
                // closed.
                if depth == 1 && ch == '}' {
                    last_end = Some(i);
                }
            }
            _ => {}
        }
    }

    let end = last_end?;
    let mut out = json[..=end].to_string();
    out.push_str("\n]");
    Some(out)
}
