//! Runner actor - executes endpoint calls on the Tokio runtime

use tokio::sync::mpsc;
use tokio::task::JoinSet;

use crate::messages::{RunnerCommand, RunnerEvent};
use crate::runner::client::{create_client, execute_endpoint, full_url};

/// Runner actor that processes execute commands concurrently; there is
/// no cross-coordination between in-flight runs, staleness is resolved
/// by the result board on the editor side.
pub struct RunnerActor {
    client: reqwest::Client,
    event_tx: mpsc::UnboundedSender<RunnerEvent>,
    active_runs: JoinSet<()>,
}

impl RunnerActor {
    pub fn new(event_tx: mpsc::UnboundedSender<RunnerEvent>) -> Self {
        RunnerActor {
            client: create_client(),
            event_tx,
            active_runs: JoinSet::new(),
        }
    }

    /// Run the actor message loop
    pub async fn run(mut self, mut cmd_rx: mpsc::UnboundedReceiver<RunnerCommand>) {
        loop {
            tokio::select! {
                biased;

                cmd = cmd_rx.recv() => {
                    match cmd {
                        Some(RunnerCommand::Execute { index, token, session, base_url, endpoint }) => {
                            let event_tx = self.event_tx.clone();
                            let client = self.client.clone();

                            self.active_runs.spawn(async move {
                                tracing::info!(
                                    index,
                                    token,
                                    url = %full_url(&base_url, &endpoint.path),
                                    method = ?endpoint.method,
                                    "Executing endpoint"
                                );
                                let method = endpoint.method;
                                let report =
                                    execute_endpoint(&client, &session, &base_url, &endpoint).await;
                                tracing::info!(index, token, time_ms = report.time_ms, "Run finished");
                                let _ = event_tx.send(RunnerEvent::Finished {
                                    index,
                                    token,
                                    method,
                                    url: report.url,
                                    outcome: report.outcome,
                                    time_ms: report.time_ms,
                                });
                            });
                        }

                        Some(RunnerCommand::Shutdown) | None => break,
                    }
                }

                // Clean up completed tasks
                Some(_result) = self.active_runs.join_next() => {}
            }
        }
    }
}
