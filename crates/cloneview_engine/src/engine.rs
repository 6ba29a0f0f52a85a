use std::sync::{mpsc, Arc, Mutex};
use std::thread;

use crate::service::{CloneService, HttpCloneService, ServiceSettings};
use crate::{EngineEvent, RequestId};

enum EngineCommand {
    Submit { request_id: RequestId, url: String },
}

/// Bridge between the synchronous shell and the async service client.
///
/// Commands go into a dedicated thread running a tokio runtime; each
/// submission is spawned as its own task, so overlapping requests race and
/// settle in whatever order the service answers. There is no cancellation.
#[derive(Clone)]
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: Arc<Mutex<mpsc::Receiver<EngineEvent>>>,
}

impl EngineHandle {
    pub fn new(settings: ServiceSettings) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let service = Arc::new(HttpCloneService::new(settings));

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            while let Ok(command) = cmd_rx.recv() {
                let service = service.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(service.as_ref(), command, event_tx).await;
                });
            }
        });

        Self {
            cmd_tx,
            event_rx: Arc::new(Mutex::new(event_rx)),
        }
    }

    pub fn submit(&self, request_id: RequestId, url: impl Into<String>) {
        let _ = self.cmd_tx.send(EngineCommand::Submit {
            request_id,
            url: url.into(),
        });
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx
            .lock()
            .ok()
            .and_then(|rx| rx.try_recv().ok())
    }
}

async fn handle_command(
    service: &dyn CloneService,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::Submit { request_id, url } => {
            let result = service.submit(request_id, &url).await;
            let _ = event_tx.send(EngineEvent::RequestSettled { request_id, result });
        }
    }
}
