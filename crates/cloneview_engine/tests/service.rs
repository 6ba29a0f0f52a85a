use std::time::Duration;

use cloneview_engine::{CloneService, HttpCloneService, ServiceError, ServiceSettings};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn settings_for(server: &MockServer) -> ServiceSettings {
    ServiceSettings {
        endpoint: format!("{}/clone", server.uri()),
        ..ServiceSettings::default()
    }
}

#[tokio::test]
async fn submit_posts_json_and_returns_html() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/clone"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({"url": "https://example.com"})))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"html": "<h1>Example</h1>", "status": "success"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let service = HttpCloneService::new(settings_for(&server));
    let reply = service
        .submit(1, "https://example.com")
        .await
        .expect("submit ok");

    assert_eq!(reply.html.as_deref(), Some("<h1>Example</h1>"));
}

#[tokio::test]
async fn reply_without_html_field_is_well_formed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/clone"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let service = HttpCloneService::new(settings_for(&server));
    let reply = service
        .submit(2, "https://bad.test")
        .await
        .expect("submit ok");

    assert_eq!(reply.html, None);
}

#[tokio::test]
async fn error_status_with_json_body_decodes_without_html() {
    // FastAPI-style failure: HTTP 500 carrying {"detail": ...}. The client
    // ignores the status and reports a reply without html.
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/clone"))
        .respond_with(
            ResponseTemplate::new(500)
                .set_body_json(json!({"detail": "Failed to clone website: boom"})),
        )
        .mount(&server)
        .await;

    let service = HttpCloneService::new(settings_for(&server));
    let reply = service
        .submit(3, "https://broken.test")
        .await
        .expect("submit ok");

    assert_eq!(reply.html, None);
}

#[tokio::test]
async fn non_json_body_is_a_malformed_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/clone"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let service = HttpCloneService::new(settings_for(&server));
    let err = service.submit(4, "https://example.com").await.unwrap_err();

    assert!(matches!(err, ServiceError::MalformedResponse(_)));
}

#[tokio::test]
async fn slow_service_times_out_when_a_timeout_is_configured() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/clone"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_json(json!({"html": "<p>slow</p>"})),
        )
        .mount(&server)
        .await;

    let settings = ServiceSettings {
        request_timeout: Some(Duration::from_millis(50)),
        ..settings_for(&server)
    };
    let service = HttpCloneService::new(settings);
    let err = service.submit(5, "https://slow.test").await.unwrap_err();

    assert!(matches!(err, ServiceError::Timeout(_)));
}

#[tokio::test]
async fn unreachable_service_is_a_network_error() {
    let settings = ServiceSettings {
        // Discard port; nothing listens here.
        endpoint: "http://127.0.0.1:9/clone".to_string(),
        connect_timeout: Duration::from_millis(200),
        request_timeout: Some(Duration::from_millis(500)),
    };
    let service = HttpCloneService::new(settings);
    let err = service.submit(6, "https://example.com").await.unwrap_err();

    assert!(matches!(
        err,
        ServiceError::Network(_) | ServiceError::Timeout(_)
    ));
}
