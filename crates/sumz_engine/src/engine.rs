use std::io;
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use sumz_core::RequestId;
use sumz_logging::{sumz_debug, sumz_info};

use crate::summarize::SummaryClient;
use crate::EngineEvent;

enum EngineCommand {
    Summarize { request_id: RequestId, url: String },
    ScheduleCopyReset { generation: u64, after: Duration },
}

/// Background worker that owns the async runtime. Commands go in on one
/// channel; completions come back as [`EngineEvent`]s on another.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(client: Arc<dyn SummaryClient>) -> io::Result<Self> {
        let runtime = tokio::runtime::Runtime::new()?;
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();

        thread::Builder::new()
            .name("sumz-engine".into())
            .spawn(move || {
                while let Ok(command) = cmd_rx.recv() {
                    let client = client.clone();
                    let event_tx = event_tx.clone();
                    runtime.spawn(async move {
                        handle_command(client.as_ref(), command, event_tx).await;
                    });
                }
                sumz_debug!("Engine command channel closed; shutting down");
            })?;

        Ok(Self { cmd_tx, event_rx })
    }

    pub fn summarize(&self, request_id: RequestId, url: impl Into<String>) {
        let _ = self.cmd_tx.send(EngineCommand::Summarize {
            request_id,
            url: url.into(),
        });
    }

    pub fn schedule_copy_reset(&self, generation: u64, after: Duration) {
        let _ = self
            .cmd_tx
            .send(EngineCommand::ScheduleCopyReset { generation, after });
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }
}

async fn handle_command(
    client: &dyn SummaryClient,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::Summarize { request_id, url } => {
            let result = client.summarize(&url).await;
            match &result {
                Ok(summary) => sumz_info!(
                    "Summary ready request_id={} chars={}",
                    request_id,
                    summary.chars().count()
                ),
                Err(err) => sumz_info!("Summary failed request_id={} {}", request_id, err),
            }
            let _ = event_tx.send(EngineEvent::SummaryCompleted { request_id, result });
        }
        EngineCommand::ScheduleCopyReset { generation, after } => {
            tokio::time::sleep(after).await;
            let _ = event_tx.send(EngineEvent::CopyResetDue { generation });
        }
    }
}
