//! Version lookup E2E tests against a mock backend

use std::time::Duration;

use mockito::Server;

use dynamo_backend_client::backend::client::{BackendClient, VersionLookup};
use dynamo_backend_client::backend::error::BackendError;

#[tokio::test(flavor = "multi_thread")]
async fn lookup_through_trait_object_returns_full_record() {
    let mut server = Server::new_async().await;

    let mock = server
        .mock("GET", "/api/v1/dynamo_nims/llama3/versions/v1")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{
                "name": "llama3",
                "version": "v1",
                "description": "Llama 3 inference service",
                "upload_status": "success",
                "created_at": "2025-01-15T10:30:00Z",
                "updated_at": "2025-02-01T08:00:00Z",
                "image_build_status": "success",
                "bento_manifest": {"service": "llama3:Service"}
            }"#,
        )
        .expect(1)
        .create_async()
        .await;

    // Callers hold the client behind the trait, same as production wiring
    let client: Box<dyn VersionLookup> = Box::new(BackendClient::new(&server.url()));
    let record = client.lookup_version("llama3", "v1").await.unwrap();

    mock.assert_async().await;
    assert_eq!(record.name, "llama3");
    assert_eq!(record.version, "v1");
    assert_eq!(record.description.as_deref(), Some("Llama 3 inference service"));
    assert_eq!(
        record.extra.get("image_build_status").and_then(|v| v.as_str()),
        Some("success")
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn repeated_lookups_are_independent_fetches() {
    let mut server = Server::new_async().await;

    let mock = server
        .mock("GET", "/api/v1/dynamo_nims/llama3/versions/v1")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"name": "llama3", "version": "v1"}"#)
        .expect(2)
        .create_async()
        .await;

    let client = BackendClient::new(&server.url());
    client.lookup_version("llama3", "v1").await.unwrap();
    client.lookup_version("llama3", "v1").await.unwrap();

    // No caching: two invocations, two requests
    mock.assert_async().await;
}

#[tokio::test(flavor = "multi_thread")]
async fn remote_error_carries_requested_identifiers() {
    let mut server = Server::new_async().await;

    server
        .mock("GET", "/api/v1/dynamo_nims/mistral/versions/v7")
        .with_status(404)
        .with_body(r#"{"error": "record not found"}"#)
        .create_async()
        .await;

    let client = BackendClient::new(&server.url());
    let err = client.lookup_version("mistral", "v7").await.unwrap_err();

    assert_eq!(
        err.to_string(),
        "NIM version not found: mistral:v7"
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn cancelling_an_in_flight_lookup_does_not_hang() {
    // A listener that never answers; the lookup would block until the client
    // timeout without external cancellation
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();

    let client = BackendClient::new(&format!("http://{}", addr));
    let result = tokio::time::timeout(
        Duration::from_millis(200),
        client.lookup_version("llama3", "v1"),
    )
    .await;

    // The outer timeout fires and drops the future, aborting the request
    assert!(result.is_err());
}

#[tokio::test(flavor = "multi_thread")]
async fn non_json_body_is_a_decode_error_not_a_record() {
    let mut server = Server::new_async().await;

    server
        .mock("GET", "/api/v1/dynamo_nims/llama3/versions/v1")
        .with_status(200)
        .with_body("502 Bad Gateway")
        .create_async()
        .await;

    let client = BackendClient::new(&server.url());
    let result = client.lookup_version("llama3", "v1").await;

    assert!(matches!(result, Err(BackendError::Decode(_))));
}
