//! Result board - per-endpoint outcome slots with stale-result protection

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::messages::RunOutcome;
use crate::models::HttpMethod;

/// One recorded run: what was called and what came back.
#[derive(Clone, Debug)]
pub struct RunRecord {
    pub method: HttpMethod,
    pub url: String,
    pub outcome: RunOutcome,
    pub time_ms: u64,
    pub finished_at: DateTime<Utc>,
}

impl RunRecord {
    pub fn new(method: HttpMethod, url: String, outcome: RunOutcome, time_ms: u64) -> Self {
        RunRecord {
            method,
            url,
            outcome,
            time_ms,
            finished_at: Utc::now(),
        }
    }
}

#[derive(Debug, Default)]
struct Slot {
    issued: u64,
    record: Option<RunRecord>,
}

/// Latest outcome per endpoint index.
///
/// Each dispatch gets a token from `issue`; `record` only accepts an
/// outcome whose token is still the newest issued for its slot. A stale
/// response arriving after a superseding run is discarded, so it can
/// never overwrite the newer result. Re-running the same index
/// overwrites only that slot.
#[derive(Debug, Default)]
pub struct RunBoard {
    next_token: u64,
    slots: HashMap<usize, Slot>,
}

impl RunBoard {
    pub fn new() -> Self {
        RunBoard::default()
    }

    /// Tag a new dispatch for `index`, superseding any run still in
    /// flight for that slot.
    pub fn issue(&mut self, index: usize) -> u64 {
        self.next_token += 1;
        self.slots.entry(index).or_default().issued = self.next_token;
        self.next_token
    }

    /// Record an outcome; returns false when the token was superseded
    /// and the outcome discarded.
    pub fn record(&mut self, index: usize, token: u64, record: RunRecord) -> bool {
        match self.slots.get_mut(&index) {
            Some(slot) if slot.issued == token => {
                slot.record = Some(record);
                true
            }
            _ => {
                tracing::debug!(index, token, "Discarding stale run result");
                false
            }
        }
    }

    /// Latest recorded outcome for an endpoint index, if any.
    pub fn latest(&self, index: usize) -> Option<&RunRecord> {
        self.slots.get(&index)?.record.as_ref()
    }

    /// Forget all slots, e.g. when the editor loads a different API.
    pub fn clear(&mut self) {
        self.slots.clear();
    }
}
