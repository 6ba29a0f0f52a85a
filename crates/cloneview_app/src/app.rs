use std::io::BufRead;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use client_logging::{client_info, client_warn};
use cloneview_core::{update, AppState, Msg, RequestPhase};
use cloneview_engine::ServiceSettings;

use crate::effects::EffectRunner;
use crate::logging::{self, LogDestination};
use crate::render;

pub fn run() -> anyhow::Result<()> {
    logging::initialize(LogDestination::File);
    client_info!("cloneview starting");

    let (msg_tx, msg_rx) = mpsc::channel::<Msg>();
    let runner = EffectRunner::new(ServiceSettings::default(), msg_tx.clone());

    let stdin_closed = Arc::new(AtomicBool::new(false));
    spawn_input_reader(msg_tx, stdin_closed.clone());

    render::print_intro();

    let mut state = AppState::new();
    loop {
        match msg_rx.recv_timeout(Duration::from_millis(50)) {
            Ok(msg) => {
                log_stale_settlement(&state, &msg);
                let (next, effects) = update(state, msg);
                state = next;
                runner.enqueue(effects);
                if state.consume_dirty() {
                    render::present(&state.view());
                }
            }
            Err(mpsc::RecvTimeoutError::Timeout) => {
                // Keep waiting for an in-flight request; a silent service can
                // hold the UI in Pending indefinitely.
                if stdin_closed.load(Ordering::Relaxed) && state.phase() != RequestPhase::Pending {
                    break;
                }
            }
            Err(mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    client_info!("cloneview exiting");
    Ok(())
}

/// One line of input maps to editing the URL box and pressing the trigger.
/// An empty line submits an empty URL, which the state machine ignores.
fn spawn_input_reader(msg_tx: mpsc::Sender<Msg>, closed: Arc<AtomicBool>) {
    thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            let url = line.trim().to_string();
            if msg_tx.send(Msg::UrlEdited(url)).is_err() {
                break;
            }
            if msg_tx.send(Msg::CloneClicked).is_err() {
                break;
            }
        }
        closed.store(true, Ordering::Relaxed);
    });
}

fn log_stale_settlement(state: &AppState, msg: &Msg) {
    if let Msg::RequestSettled { request_id, .. } = msg {
        if let Some(latest) = state.latest_request_id() {
            if *request_id < latest {
                client_warn!(
                    "stale settlement: request {} finished after request {} was issued",
                    request_id,
                    latest
                );
            }
        }
    }
}
