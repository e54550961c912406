/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for gemini-adapter tests

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use gemini_adapter::http::signature::PAYLOAD_HEADER;
use gemini_adapter::{ClientConfig, Credentials, GeminiClient, SequenceNonce};
use wiremock::MockServer;
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

pub const TEST_API_KEY: &str = "account-05nnPe2xYf7shuj1aV1D";
pub const TEST_API_SECRET: &str = "46zMDkpRJvNvkNnpnz3LVrfkrqSt";

/// Setup a mock HTTP server for testing
#[allow(dead_code)]
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

pub fn test_credentials() -> Credentials {
    Credentials::new(TEST_API_KEY, TEST_API_SECRET)
}

/// Public-only client pointed at the mock server
#[allow(dead_code)]
pub fn public_client(server: &MockServer) -> GeminiClient {
    GeminiClient::with_base_url(ClientConfig::default(), None, &server.uri()).expect("client init")
}

/// Authenticated client with deterministic nonces starting at `first_nonce`
#[allow(dead_code)]
pub fn private_client(server: &MockServer, first_nonce: i64) -> GeminiClient {
    GeminiClient::with_base_url(ClientConfig::default(), Some(test_credentials()), &server.uri())
        .expect("client init")
        .with_nonce_source(SequenceNonce::starting_at(first_nonce))
}

/// Mount a POST responder returning `body` for `route`
#[allow(dead_code)]
pub async fn mount_post(server: &MockServer, route: &str, status: u16, body: &str) {
    Mock::given(method("POST"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(status).set_body_string(body))
        .mount(server)
        .await;
}

/// Decode the JSON carried by the payload header of the `index`-th recorded request
#[allow(dead_code)]
pub async fn recorded_payload(server: &MockServer, index: usize) -> serde_json::Value {
    let requests = server.received_requests().await.expect("request recording enabled");
    let header = requests[index]
        .headers
        .get(PAYLOAD_HEADER)
        .expect("payload header")
        .to_str()
        .expect("ascii header");
    serde_json::from_slice(&BASE64.decode(header).expect("base64")).expect("json payload")
}
