#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the URL input box.
    UrlEdited(String),
    /// User pressed "Clone Website".
    CloneClicked,
    /// A clone request settled, successfully or not.
    RequestSettled {
        request_id: crate::RequestId,
        outcome: RequestOutcome,
    },
    /// UI/render tick to coalesce rendering.
    Tick,
    /// Fallback for placeholder wiring.
    NoOp,
}

/// What a settled request produced, as seen by the state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestOutcome {
    /// The service replied with an `html` field; stored verbatim.
    Html(String),
    /// The service replied with well-formed JSON lacking `html`.
    MissingHtml,
    /// The request failed below the JSON layer (network, non-JSON body).
    TransportFailure,
}
