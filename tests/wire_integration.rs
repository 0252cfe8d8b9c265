//! Wire-level tests: the reqwest transport against a local mock server.

use std::sync::Arc;

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};
use wykop_api::{ApiEndpoint, ApiError, Client, PromotedSort, ReqwestTransport, TransportError};

mod support;
use support::socket_guard::start_mock_server_or_skip;

fn client_for(server: &MockServer) -> Client {
    let host = server.address().to_string();
    let transport = ReqwestTransport::new().expect("transport should build");
    Client::with_transport("app", "user", Arc::new(transport))
        .with_endpoint(ApiEndpoint::custom("http", host))
}

#[tokio::test]
async fn test_promoted_over_http_uses_path_segments() {
    let Some(server) = start_mock_server_or_skip().await else {
        return;
    };

    Mock::given(method("GET"))
        .and(path("/links/promoted/page,1,sort,day,appkey,app"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(r#"[{"id": 1}, {"id": 2}]"#, "application/json"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let links = client_for(&server)
        .links()
        .promoted(1, PromotedSort::Day)
        .await
        .unwrap();

    assert_eq!(links.len(), 2);
    assert_eq!(links[0].id, 1);
    assert_eq!(links[1].id, 2);

    let received = server.received_requests().await.unwrap();
    assert_eq!(received.len(), 1);
    assert!(received[0].url.query().is_none(), "no query string expected");
    assert!(received[0].body.is_empty(), "no body expected");
}

#[tokio::test]
async fn test_index_over_http_sends_user_key() {
    let Some(server) = start_mock_server_or_skip().await else {
        return;
    };

    Mock::given(method("GET"))
        .and(path("/link/index/10/appkey,app,userkey,user"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(r#"{"id": 10}"#, "application/json"))
        .expect(1)
        .mount(&server)
        .await;

    let link = client_for(&server).link().index(10).await.unwrap();

    assert_eq!(link.id, 10);
}

#[tokio::test]
async fn test_error_status_body_is_decoded_as_is() {
    let Some(server) = start_mock_server_or_skip().await else {
        return;
    };

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Not Found"))
        .mount(&server)
        .await;

    let err = client_for(&server).link().digs(1).await.unwrap_err();

    assert!(matches!(err, ApiError::Decode(_)), "got: {err:?}");
}

#[tokio::test]
async fn test_sends_project_user_agent() {
    let Some(server) = start_mock_server_or_skip().await else {
        return;
    };

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
        .mount(&server)
        .await;

    client_for(&server).link().digs(1).await.unwrap();

    let received = server.received_requests().await.unwrap();
    let user_agent = received[0]
        .headers
        .get("user-agent")
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(user_agent.starts_with("wykop-api/"), "got: {user_agent}");
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    // Bind then drop a listener so the port is known to be closed.
    let Ok(listener) = std::net::TcpListener::bind("127.0.0.1:0") else {
        return;
    };
    let address = listener.local_addr().unwrap();
    drop(listener);

    let transport = ReqwestTransport::new().unwrap();
    let client = Client::with_transport("app", "user", Arc::new(transport))
        .with_endpoint(ApiEndpoint::custom("http", address.to_string()));

    let err = client.link().digs(1).await.unwrap_err();

    assert!(
        matches!(err, ApiError::Transport(TransportError::Http(_))),
        "got: {err:?}"
    );
}
