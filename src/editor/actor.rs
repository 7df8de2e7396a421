//! Editor actor - message loop applying edit events and run outcomes
//!
//! Events are applied strictly in arrival order against the current
//! state snapshot; runs are dispatched to the runner actor tagged with
//! the snapshot token the result board issued for them.

use tokio::sync::mpsc;

use crate::editor::state::EditorState;
use crate::messages::{EditorEvent, RunnerCommand, RunnerEvent};
use crate::runner::board::RunRecord;
use crate::session::Session;

/// Editor actor that processes edit events and runner outcomes.
pub struct EditorActor {
    state: EditorState,
    session: Session,
    runner_tx: mpsc::UnboundedSender<RunnerCommand>,
}

impl EditorActor {
    pub fn new(runner_tx: mpsc::UnboundedSender<RunnerCommand>) -> Self {
        EditorActor {
            state: EditorState::new(),
            session: Session::new(),
            runner_tx,
        }
    }

    /// Start from an existing state, e.g. one seeded via
    /// `EditorState::for_update`.
    pub fn with_state(state: EditorState, runner_tx: mpsc::UnboundedSender<RunnerCommand>) -> Self {
        EditorActor {
            state,
            session: Session::new(),
            runner_tx,
        }
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    /// Run the actor message loop
    pub async fn run(
        mut self,
        mut event_rx: mpsc::UnboundedReceiver<EditorEvent>,
        mut runner_rx: mpsc::UnboundedReceiver<RunnerEvent>,
    ) {
        loop {
            tokio::select! {
                Some(event) = event_rx.recv() => {
                    if self.handle_event(event) {
                        let _ = self.runner_tx.send(RunnerCommand::Shutdown);
                        break;
                    }
                }
                Some(outcome) = runner_rx.recv() => {
                    self.handle_runner_event(outcome);
                }
                else => break,
            }
        }
    }

    /// Handle one editor event, returns true if shutdown was requested.
    pub fn handle_event(&mut self, event: EditorEvent) -> bool {
        match event {
            EditorEvent::SetApiField { field, value } => {
                self.state.set_api_field(field, value);
            }

            EditorEvent::AddEndpoint => self.state.add_endpoint(),
            EditorEvent::RemoveEndpoint { index } => self.state.remove_endpoint(index),
            EditorEvent::SetEndpointField { index, field, value } => {
                self.state.set_endpoint_field(index, field, &value);
            }
            EditorEvent::ToggleExpanded { index } => self.state.toggle_expanded(index),

            EditorEvent::AddHeader { endpoint } => self.state.add_header(endpoint),
            EditorEvent::SetHeader { endpoint, entry, field, value } => {
                self.state.set_header(endpoint, entry, field, &value);
            }
            EditorEvent::AddParam { endpoint } => self.state.add_param(endpoint),
            EditorEvent::SetParam { endpoint, entry, field, value } => {
                self.state.set_param(endpoint, entry, field, &value);
            }

            EditorEvent::AddFormField { endpoint } => self.state.add_form_field(endpoint),
            EditorEvent::SetFormField { endpoint, entry, field, value } => {
                self.state.set_form_field(endpoint, entry, field, &value);
            }
            EditorEvent::RemoveFormField { endpoint, entry } => {
                self.state.remove_form_field(endpoint, entry);
            }

            EditorEvent::AddFileField { endpoint } => self.state.add_file_field(endpoint),
            EditorEvent::SetFileField { endpoint, entry, key } => {
                self.state.set_file_field(endpoint, entry, &key);
            }
            EditorEvent::AttachFile { endpoint, entry, part } => {
                self.state.attach_file(endpoint, entry, part);
            }
            EditorEvent::RemoveFileField { endpoint, entry } => {
                self.state.remove_file_field(endpoint, entry);
            }

            EditorEvent::SetCredential(token) => self.session.set_token(token),
            EditorEvent::ClearCredential => self.session.clear(),

            EditorEvent::RunEndpoint { index } => self.dispatch_run(index),

            EditorEvent::Shutdown => return true,
        }

        false
    }

    /// Record a finished run into its slot; the board drops results
    /// whose token has been superseded.
    pub fn handle_runner_event(&mut self, event: RunnerEvent) {
        let RunnerEvent::Finished { index, token, method, url, outcome, time_ms } = event;
        let record = RunRecord::new(method, url, outcome, time_ms);
        self.state.board.record(index, token, record);
    }

    fn dispatch_run(&mut self, index: usize) {
        let Some(endpoint) = self.state.definition.endpoints.get(index) else {
            tracing::warn!(index, "Run requested for missing endpoint");
            return;
        };

        let token = self.state.board.issue(index);
        let _ = self.runner_tx.send(RunnerCommand::Execute {
            index,
            token,
            session: self.session.clone(),
            base_url: self.state.definition.base_url.clone(),
            endpoint: endpoint.clone(),
        });
    }
}
