//! Runner messages - communication between the editor and runner layers

use crate::models::{Endpoint, HttpMethod};
use crate::session::Session;

/// Commands sent from the editor layer to the runner layer.
#[derive(Debug, Clone)]
pub enum RunnerCommand {
    /// Exercise one endpoint against its API's base URL. `token` is the
    /// snapshot tag issued by the result board when the run was
    /// requested; results arriving under a superseded token are dropped.
    Execute {
        index: usize,
        token: u64,
        session: Session,
        base_url: String,
        endpoint: Endpoint,
    },
    /// Shutdown the runner actor
    Shutdown,
}

/// Normalized payload of a completed call.
#[derive(Clone, Debug, PartialEq)]
pub enum RunPayload {
    /// Body parsed as structured data.
    Json(serde_json::Value),
    /// Unstructured body kept verbatim; still a success, not an error.
    Text(String),
}

/// Outcome of one execution attempt.
#[derive(Clone, Debug, PartialEq)]
pub enum RunOutcome {
    /// A response was obtained. Non-2xx statuses land here as
    /// failure-shaped completions, not errors.
    Completed {
        status: u16,
        payload: RunPayload,
        /// Degradations reported while encoding the body, e.g. file
        /// fields dropped under an urlencoded content type.
        warnings: Vec<String>,
    },
    /// No response was obtained: precondition or transport failure.
    Failed { message: String },
}

impl RunOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, RunOutcome::Completed { status, .. } if (200..300).contains(status))
    }
}

/// Events sent from the runner layer back to the editor layer.
#[derive(Debug, Clone)]
pub enum RunnerEvent {
    Finished {
        index: usize,
        token: u64,
        method: HttpMethod,
        url: String,
        outcome: RunOutcome,
        time_ms: u64,
    },
}
