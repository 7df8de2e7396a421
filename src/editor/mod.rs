//! Editor layer - central state management and edit operation processing
//!
//! The editor actor receives edit events and runner outcomes, updates
//! the in-progress definition, and emits runner commands.

pub mod actor;
pub mod ops;
pub mod state;

pub use actor::EditorActor;
pub use state::EditorState;
