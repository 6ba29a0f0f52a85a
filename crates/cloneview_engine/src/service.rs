use std::time::Duration;

use client_logging::{client_debug, client_info};
use serde::Serialize;

use crate::{CloneReply, RequestId, ServiceError};

/// Where the cloning service listens by default.
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8000/clone";

#[derive(Debug, Clone)]
pub struct ServiceSettings {
    pub endpoint: String,
    pub connect_timeout: Duration,
    /// `None` waits indefinitely for the service to answer, matching the
    /// original client's lack of a local timeout.
    pub request_timeout: Option<Duration>,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: None,
        }
    }
}

#[derive(Debug, Serialize)]
struct CloneRequestBody<'a> {
    url: &'a str,
}

#[async_trait::async_trait]
pub trait CloneService: Send + Sync {
    /// Issues exactly one clone request for `url`. No retries.
    async fn submit(&self, request_id: RequestId, url: &str) -> Result<CloneReply, ServiceError>;
}

#[derive(Debug, Clone)]
pub struct HttpCloneService {
    settings: ServiceSettings,
}

impl HttpCloneService {
    pub fn new(settings: ServiceSettings) -> Self {
        Self { settings }
    }

    fn build_client(&self) -> Result<reqwest::Client, ServiceError> {
        let mut builder = reqwest::Client::builder().connect_timeout(self.settings.connect_timeout);
        if let Some(timeout) = self.settings.request_timeout {
            builder = builder.timeout(timeout);
        }
        builder
            .build()
            .map_err(|err| ServiceError::Network(err.to_string()))
    }
}

#[async_trait::async_trait]
impl CloneService for HttpCloneService {
    async fn submit(&self, request_id: RequestId, url: &str) -> Result<CloneReply, ServiceError> {
        let client = self.build_client()?;
        client_debug!(
            "request {} posting url_len={} to {}",
            request_id,
            url.len(),
            self.settings.endpoint
        );

        let response = client
            .post(&self.settings.endpoint)
            .json(&CloneRequestBody { url })
            .send()
            .await
            .map_err(map_reqwest_error)?;

        // The status code is deliberately not consulted: an error payload
        // still decodes to a reply without `html`, and the caller maps that
        // to the missing-html fallback.
        let status = response.status();
        let reply = response
            .json::<CloneReply>()
            .await
            .map_err(map_reqwest_error)?;

        client_info!(
            "request {} settled: status={} html_len={:?}",
            request_id,
            status,
            reply.html.as_ref().map(String::len)
        );
        Ok(reply)
    }
}

fn map_reqwest_error(err: reqwest::Error) -> ServiceError {
    if err.is_timeout() {
        return ServiceError::Timeout(err.to_string());
    }
    if err.is_decode() {
        return ServiceError::MalformedResponse(err.to_string());
    }
    ServiceError::Network(err.to_string())
}
