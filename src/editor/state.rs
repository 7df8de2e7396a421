//! Editor state - pure data structure with no I/O logic

use crate::error::ClientResult;
use crate::models::ApiDefinition;
use crate::registry::client::validate;
use crate::registry::wire::{self, StoredApi};
use crate::runner::board::RunBoard;

/// The one in-progress API definition plus the run results gathered
/// against it. The editor owns this exclusively until submission; all
/// changes go through the edit operations in `ops`.
#[derive(Debug)]
pub struct EditorState {
    pub definition: ApiDefinition,
    /// Registry identity once persisted; `None` while drafting a new API.
    pub api_id: Option<String>,
    /// Latest run outcome per endpoint index.
    pub board: RunBoard,
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new()
    }
}

impl EditorState {
    /// A fresh draft with one blank endpoint pre-seeded.
    pub fn new() -> Self {
        EditorState {
            definition: ApiDefinition::draft(),
            api_id: None,
            board: RunBoard::new(),
        }
    }

    /// Seed the editor from a stored record for the edit-then-resubmit
    /// flow; submission goes through `update` with the retained id.
    pub fn for_update(stored: &StoredApi) -> Self {
        EditorState {
            definition: wire::to_definition(stored),
            api_id: stored.id.clone(),
            board: RunBoard::new(),
        }
    }

    /// Pre-submit validation: non-empty name and base URL, at least one
    /// endpoint.
    pub fn validate(&self) -> ClientResult<()> {
        validate(&self.definition)
    }
}
