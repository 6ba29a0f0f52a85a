use crate::{
    AppState, Effect, Msg, RequestOutcome, MISSING_HTML_FALLBACK, TRANSPORT_ERROR_FALLBACK,
};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::UrlEdited(text) => {
            state.set_url_input(text);
            Vec::new()
        }
        Msg::CloneClicked => {
            // Empty input is a silent no-op: no network activity, no state change.
            if state.url_input().is_empty() {
                return (state, Vec::new());
            }
            let url = state.url_input().to_string();
            let request_id = state.begin_request();
            vec![Effect::SubmitClone { request_id, url }]
        }
        Msg::RequestSettled {
            request_id: _,
            outcome,
        } => {
            // No ordering is enforced between overlapping requests; whichever
            // settlement arrives last overwrites the slot. Stale completions
            // are logged at the shell boundary, not suppressed here.
            let content = match outcome {
                RequestOutcome::Html(html) => html,
                RequestOutcome::MissingHtml => MISSING_HTML_FALLBACK.to_string(),
                RequestOutcome::TransportFailure => TRANSPORT_ERROR_FALLBACK.to_string(),
            };
            state.apply_settled(content);
            Vec::new()
        }
        Msg::Tick | Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
