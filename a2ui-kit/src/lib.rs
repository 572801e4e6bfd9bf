//! A2UI Protocol Interpreter
//!
//! A2UI (Agent-to-UI) is a declarative JSON protocol that lets an AI agent
//! describe a rich user interface as a stream of small messages instead of
//! raw markup. This crate is the headless interpreter for that stream: it
//! maintains per-surface state and deterministically projects it onto a
//! presentation-agnostic visual tree.
//!
//! # Architecture
//!
//! ```text
//! A2UI JSON Messages
//!        ↓
//! MessageProcessor
//!        ↓
//! ┌──────┴──────┐
//! │             │
//! DataModel  Components
//!    │             │
//!    └──────┬──────┘
//!           ↓  render_surface()
//!      VisualNode tree
//!           ↓
//!  DOM / native widgets / TUI
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use a2ui_kit::*;
//!
//! let mut processor = MessageProcessor::new();
//! processor.apply_json(r#"[
//!     {"createSurface": {"surfaceId": "main", "catalogId": "standard"}},
//!     {"updateDataModel": {"surfaceId": "main", "value": {"name": "Ann"}}},
//!     {"updateComponents": {"surfaceId": "main", "components": [
//!         {"id": "root", "type": "Text", "text": {"path": "/name"}, "usageHint": "h1"}
//!     ]}}
//! ]"#)?;
//!
//! let tree = processor.render_surface("main");
//! ```

pub mod catalog;
pub mod data_model;
pub mod error;
pub mod host;
pub mod message;
pub mod processor;
pub mod render;
pub mod surface;
pub mod value;

pub use catalog::*;
pub use data_model::*;
pub use error::*;
pub use host::*;
pub use message::*;
pub use processor::*;
pub use render::*;
pub use surface::*;
pub use value::*;
