//! Message types for inter-layer communication in the actor-based architecture.
//!
//! This module defines all messages that flow between the presentation,
//! editor, and runner layers.

pub mod editor_events;
pub mod runner;

pub use editor_events::{ApiField, EditorEvent, EndpointField, PairField};
pub use runner::{RunOutcome, RunPayload, RunnerCommand, RunnerEvent};
