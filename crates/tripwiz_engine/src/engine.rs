use std::sync::{mpsc, Arc, Mutex};
use std::thread;

use tokio_util::sync::CancellationToken;
use tripwiz_logging::trip_debug;

use crate::fetch::{FetchSettings, Fetcher, ReqwestFetcher};
use crate::{EngineEvent, FailureKind, FetchError, RequestId};

enum EngineCommand {
    Fetch {
        request_id: RequestId,
        destination: String,
    },
}

/// Owns the runtime thread that talks to the suggestion service. Commands
/// go in over a channel; completion events come back out via `try_recv`.
/// Cloning shares the same channels, so one clone can feed commands while
/// another drains events.
#[derive(Clone)]
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: Arc<Mutex<mpsc::Receiver<EngineEvent>>>,
}

impl EngineHandle {
    pub fn new(settings: FetchSettings) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let fetcher = Arc::new(ReqwestFetcher::new(settings));

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            // At most one lookup is wanted at a time; a newer command
            // cancels whatever is still in flight.
            let mut in_flight: Option<CancellationToken> = None;
            while let Ok(command) = cmd_rx.recv() {
                if let Some(token) = in_flight.take() {
                    token.cancel();
                }
                let token = CancellationToken::new();
                in_flight = Some(token.clone());

                let fetcher = fetcher.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(fetcher.as_ref(), command, token, event_tx).await;
                });
            }
        });

        Self {
            cmd_tx,
            event_rx: Arc::new(Mutex::new(event_rx)),
        }
    }

    pub fn fetch(&self, request_id: RequestId, destination: impl Into<String>) {
        let _ = self.cmd_tx.send(EngineCommand::Fetch {
            request_id,
            destination: destination.into(),
        });
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.lock().ok()?.try_recv().ok()
    }
}

async fn handle_command(
    fetcher: &dyn Fetcher,
    command: EngineCommand,
    token: CancellationToken,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::Fetch {
            request_id,
            destination,
        } => {
            let result = tokio::select! {
                _ = token.cancelled() => {
                    trip_debug!("request {request_id} superseded, dropping it");
                    Err(FetchError::new(
                        FailureKind::Cancelled,
                        "superseded by a newer query",
                    ))
                }
                result = fetcher.fetch_suggestions(&destination) => result,
            };
            let _ = event_tx.send(EngineEvent::FetchDone { request_id, result });
        }
    }
}
