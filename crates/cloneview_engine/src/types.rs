use serde::Deserialize;

pub type RequestId = u64;

/// Decoded body of a cloning-service reply.
///
/// The service is only required to be well-formed JSON; `html` is optional.
/// Error payloads (e.g. `{"detail": "..."}`) decode to a reply without
/// `html`, which the shell maps to the missing-html fallback.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CloneReply {
    #[serde(default)]
    pub html: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    RequestSettled {
        request_id: RequestId,
        result: Result<CloneReply, ServiceError>,
    },
}

/// Transport-level failures of a clone request. Everything below the JSON
/// layer ends up here; the UI collapses all variants into one fallback.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ServiceError {
    #[error("network error: {0}")]
    Network(String),
    #[error("request timed out: {0}")]
    Timeout(String),
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}
