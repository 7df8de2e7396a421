//! # apidock
//!
//! Client core for defining, persisting, browsing, and exercising HTTP
//! API descriptions against a remote registry service.
//!
//! ## Features
//! - Editable API definitions: endpoints with method, headers, params
//!   and raw or form bodies (including binary file fields)
//! - Structural edit operations that keep sibling state isolated
//! - Registry client: create, update, list, search, get
//! - Catalog aggregation grouping stored records by API name
//! - Request runner turning a stored endpoint into a live call with a
//!   normalized outcome and stale-result protection
//!
//! ## Architecture
//! Actor-based with channels:
//! - Editor Layer (state machine over edit events)
//! - Runner Layer (Tokio runtime executing endpoint calls)
//! - Registry Layer (reqwest client for the registry's REST surface)
//!
//! Presentation (UI, routing, login forms) is out of scope; consumers
//! drive the editor through [`messages::EditorEvent`] and read back
//! `EditorState`, catalog groups, and run records.

pub mod catalog;
pub mod constants;
pub mod editor;
pub mod error;
pub mod messages;
pub mod models;
pub mod registry;
pub mod runner;
pub mod session;

// Re-export commonly used types
pub use catalog::{aggregate, CatalogGroup};
pub use editor::{EditorActor, EditorState};
pub use error::{ClientError, ClientResult};
pub use messages::{EditorEvent, RunOutcome, RunPayload, RunnerCommand, RunnerEvent};
pub use models::{ApiDefinition, BodyType, Endpoint, FileEntry, FilePart, HttpMethod, PairEntry};
pub use registry::{RegistryClient, StoredApi, WirePoint};
pub use runner::{RunBoard, RunRecord, RunnerActor};
pub use session::Session;
