use std::time::Duration;

use docify_cli::config::constants::{EMPTY_GENERATE_RESPONSE, FALLBACK_RESPONSE};
use docify_cli::enums::backend_error::BackendError;
use docify_cli::services::backend_client::BackendClient;
use docify_cli::structs::config::documentation_config::DocumentationConfig;
use mockito::Matcher;
use serde_json::json;

#[tokio::test]
async fn chat_extracts_response_field() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/chat")
        .match_header("authorization", "Bearer secret123")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"response":"It defines a CLI."}"#)
        .create_async()
        .await;

    let client = BackendClient::new(&server.url(), "secret123");
    let reply = client
        .chat("What does this do?", "print('hi')", "python")
        .await
        .unwrap();

    assert_eq!(reply, "It defines a CLI.");
    mock.assert_async().await;
}

#[tokio::test]
async fn chat_truncates_code_to_first_3000_chars() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/chat")
        .match_body(Matcher::PartialJson(json!({
            "code_content": "a".repeat(3000),
        })))
        .with_status(200)
        .with_body(r#"{"response":"A long enough response."}"#)
        .create_async()
        .await;

    let client = BackendClient::new(&server.url(), "secret123");
    let code = "a".repeat(5000);
    client.chat("What does this do?", &code, "python").await.unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn documentation_sends_full_code() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/documentation")
        .match_body(Matcher::PartialJson(json!({
            "code_content": "a".repeat(5000),
            "filename": "app.py",
            "language": "python",
        })))
        .with_status(200)
        .with_body(r#"{"documentation":"A long enough documentation text."}"#)
        .create_async()
        .await;

    let client = BackendClient::new(&server.url(), "secret123");
    let code = "a".repeat(5000);
    let response = client
        .documentation(&code, "app.py", "python", &DocumentationConfig::default())
        .await
        .unwrap();

    assert_eq!(response.documentation, "A long enough documentation text.");
    assert!(response.file_base64.is_none());
    mock.assert_async().await;
}

#[tokio::test]
async fn unauthorized_maps_to_authentication_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/chat")
        .with_status(401)
        .with_body("invalid key")
        .create_async()
        .await;

    let client = BackendClient::new(&server.url(), "wrong-key");
    let error = client
        .chat("hello", "print('hi')", "python")
        .await
        .unwrap_err();

    assert!(matches!(error, BackendError::Authentication));
}

#[tokio::test]
async fn server_error_carries_status_and_body() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/generate")
        .with_status(500)
        .with_body("boom")
        .create_async()
        .await;

    let client = BackendClient::new(&server.url(), "secret123");
    let error = client.generate("hello", 50).await.unwrap_err();

    match error {
        BackendError::Remote { status, body } => {
            assert_eq!(status, 500);
            assert_eq!(body, "boom");
        }
        other => panic!("expected Remote error, got {:?}", other),
    }
}

#[tokio::test]
async fn short_chat_reply_is_normalized_to_placeholder() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/chat")
        .with_status(200)
        .with_body(r#"{"response":"ok"}"#)
        .create_async()
        .await;

    let client = BackendClient::new(&server.url(), "secret123");
    let reply = client.chat("hello", "print('hi')", "python").await.unwrap();

    assert_eq!(reply, FALLBACK_RESPONSE);
}

#[tokio::test]
async fn short_multibyte_reply_is_normalized_by_character_count() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/chat")
        .with_status(200)
        // 9 characters but 11 bytes; still below the threshold.
        .with_body(r#"{"response":"résumé ok"}"#)
        .create_async()
        .await;

    let client = BackendClient::new(&server.url(), "secret123");
    let reply = client.chat("hello", "print('hi')", "python").await.unwrap();

    assert_eq!(reply, FALLBACK_RESPONSE);
}

#[tokio::test]
async fn stalled_backend_maps_to_timeout_error() {
    // Accepts the connection but never responds.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let url = format!("http://{}", listener.local_addr().unwrap());

    let client = BackendClient::new(&url, "secret123")
        .with_request_timeout(Duration::from_millis(200));
    let error = client.generate("hello", 50).await.unwrap_err();

    assert!(matches!(error, BackendError::Timeout));
}

#[tokio::test]
async fn empty_generate_reply_is_normalized() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/generate")
        .with_status(200)
        .with_body(r#"{"response":"   "}"#)
        .create_async()
        .await;

    let client = BackendClient::new(&server.url(), "secret123");
    let reply = client.generate("hello", 50).await.unwrap();

    assert_eq!(reply, EMPTY_GENERATE_RESPONSE);
}

#[tokio::test]
async fn refused_connection_maps_to_connection_error() {
    // Nothing listens on this port.
    let client = BackendClient::new("http://127.0.0.1:9", "secret123");
    let error = client.generate("hello", 50).await.unwrap_err();

    assert!(matches!(error, BackendError::Connection));
}

#[tokio::test]
async fn base_url_trailing_slash_is_tolerated() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/generate")
        .with_status(200)
        .with_body(r#"{"response":"Backend is alive and reachable."}"#)
        .create_async()
        .await;

    let url = format!("{}/", server.url());
    let client = BackendClient::new(&url, "secret123");
    client.generate("Hello, test connection", 50).await.unwrap();

    mock.assert_async().await;
}
