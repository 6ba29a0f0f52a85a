use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use client_logging::{client_info, client_warn};
use cloneview_core::{Effect, Msg, RequestOutcome};
use cloneview_engine::{EngineEvent, EngineHandle, ServiceSettings};

/// Executes effects from the state machine and feeds engine events back
/// into the message channel as settlements.
pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(settings: ServiceSettings, msg_tx: mpsc::Sender<Msg>) -> Self {
        let engine = EngineHandle::new(settings);
        let runner = Self { engine };
        runner.spawn_event_loop(msg_tx);
        runner
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::SubmitClone { request_id, url } => {
                    client_info!(
                        "SubmitClone request_id={} url_len={} url={}",
                        request_id,
                        url.len(),
                        url
                    );
                    self.engine.submit(request_id, url);
                }
            }
        }
    }

    fn spawn_event_loop(&self, msg_tx: mpsc::Sender<Msg>) {
        let engine = self.engine.clone();
        thread::spawn(move || loop {
            if let Some(event) = engine.try_recv() {
                let EngineEvent::RequestSettled { request_id, result } = event;
                let outcome = match result {
                    Ok(reply) => match reply.html {
                        Some(html) => RequestOutcome::Html(html),
                        None => {
                            client_warn!("request {} returned no html field", request_id);
                            RequestOutcome::MissingHtml
                        }
                    },
                    Err(err) => {
                        client_warn!("request {} failed: {}", request_id, err);
                        RequestOutcome::TransportFailure
                    }
                };
                if msg_tx
                    .send(Msg::RequestSettled {
                        request_id,
                        outcome,
                    })
                    .is_err()
                {
                    break;
                }
            } else {
                thread::sleep(Duration::from_millis(20));
            }
        });
    }
}
