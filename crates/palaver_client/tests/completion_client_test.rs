//! Tests for the completion client against a local mock endpoint.
//!
//! These validate the full failure taxonomy without real API calls: each
//! failure class must surface as its own distinct error kind.

mod test_utils;

use palaver_client::{CompletionBody, CompletionClient};
use palaver_core::{ChatRequest, ClientConfig, CompletionDriver, Message, Role};
use palaver_error::{ClientErrorKind, PalaverError, PalaverErrorKind};
use test_utils::{serve_once, unreachable_base_url};

fn config(base_url: &str) -> ClientConfig {
    ClientConfig::builder()
        .api_key("test-key")
        .base_url(base_url)
        .build()
        .unwrap()
}

fn client_kind(err: &PalaverError) -> &ClientErrorKind {
    match err.kind() {
        PalaverErrorKind::Client(e) => e.kind(),
        other => panic!("expected client error, got: {}", other),
    }
}

fn hello_request() -> ChatRequest {
    ChatRequest::new(vec![Message::system("You are helpful."), Message::user("Hi")])
}

#[tokio::test]
async fn success_returns_first_choice_content() -> anyhow::Result<()> {
    let base = serve_once(
        200,
        "OK",
        r#"{"choices":[{"message":{"content":"Hello!","role":"assistant"}}]}"#,
    )
    .await;
    let client = CompletionClient::new(config(&base));

    let response = client.complete(&hello_request()).await?;

    assert_eq!(response.reply, "Hello!");
    Ok(())
}

#[tokio::test]
async fn first_choice_wins_when_several_returned() -> anyhow::Result<()> {
    let base = serve_once(
        200,
        "OK",
        r#"{"choices":[{"message":{"content":"first","role":"assistant"}},{"message":{"content":"second","role":"assistant"}}]}"#,
    )
    .await;
    let client = CompletionClient::new(config(&base));

    let response = client.complete(&hello_request()).await?;

    assert_eq!(response.reply, "first");
    Ok(())
}

#[tokio::test]
async fn zero_choices_fails_with_empty_response() {
    let base = serve_once(200, "OK", r#"{"choices":[]}"#).await;
    let client = CompletionClient::new(config(&base));

    let err = client.complete(&hello_request()).await.unwrap_err();

    assert_eq!(client_kind(&err), &ClientErrorKind::EmptyResponse);
}

#[tokio::test]
async fn empty_content_in_a_choice_is_still_success() -> anyhow::Result<()> {
    let base = serve_once(
        200,
        "OK",
        r#"{"choices":[{"message":{"content":"","role":"assistant"}}]}"#,
    )
    .await;
    let client = CompletionClient::new(config(&base));

    let response = client.complete(&hello_request()).await?;

    assert_eq!(response.reply, "");
    Ok(())
}

#[tokio::test]
async fn non_success_status_carries_status_and_provider_message() {
    let base = serve_once(
        429,
        "Too Many Requests",
        r#"{"error":{"message":"Rate limit reached","type":"tokens"}}"#,
    )
    .await;
    let client = CompletionClient::new(config(&base));

    let err = client.complete(&hello_request()).await.unwrap_err();

    match client_kind(&err) {
        ClientErrorKind::Api { status, message } => {
            assert_eq!(*status, 429);
            assert_eq!(message, "Rate limit reached");
        }
        other => panic!("expected Api error, got: {}", other),
    }
}

#[tokio::test]
async fn non_success_status_without_error_body_keeps_raw_text() {
    let base = serve_once(500, "Internal Server Error", "upstream exploded").await;
    let client = CompletionClient::new(config(&base));

    let err = client.complete(&hello_request()).await.unwrap_err();

    match client_kind(&err) {
        ClientErrorKind::Api { status, message } => {
            assert_eq!(*status, 500);
            assert_eq!(message, "upstream exploded");
        }
        other => panic!("expected Api error, got: {}", other),
    }
}

#[tokio::test]
async fn connection_refused_is_a_connectivity_failure() {
    let base = unreachable_base_url().await;
    let client = CompletionClient::new(config(&base));

    let err = client.complete(&hello_request()).await.unwrap_err();

    // Distinct from a provider failure: no status code exists here
    assert!(matches!(
        client_kind(&err),
        ClientErrorKind::Connectivity(_)
    ));
}

#[tokio::test]
async fn invalid_json_body_is_malformed_response() {
    let base = serve_once(200, "OK", "not json at all").await;
    let client = CompletionClient::new(config(&base));

    let err = client.complete(&hello_request()).await.unwrap_err();

    assert!(matches!(
        client_kind(&err),
        ClientErrorKind::MalformedResponse(_)
    ));
}

#[tokio::test]
async fn json_without_choices_field_is_malformed_response() {
    let base = serve_once(200, "OK", r#"{"id":"cmpl-1"}"#).await;
    let client = CompletionClient::new(config(&base));

    let err = client.complete(&hello_request()).await.unwrap_err();

    assert!(matches!(
        client_kind(&err),
        ClientErrorKind::MalformedResponse(_)
    ));
}

#[tokio::test]
async fn empty_message_list_is_rejected_before_sending() {
    let client = CompletionClient::new(config("http://127.0.0.1:1"));

    let err = client.complete(&ChatRequest::new(vec![])).await.unwrap_err();

    assert!(matches!(
        client_kind(&err),
        ClientErrorKind::InvalidRequest(_)
    ));
}

#[test]
fn request_body_round_trips_message_order() {
    let messages = vec![
        Message::system("Wrap code in triple backticks."),
        Message::user("Hi"),
        Message::assistant("Hello!"),
        Message::user("Write a sort function"),
    ];
    let body = CompletionBody {
        model: "llama-3.3-70b-versatile".to_string(),
        messages: messages.clone(),
        temperature: 0.7,
        max_tokens: 2048,
        stream: false,
    };

    let json = serde_json::to_string(&body).unwrap();
    let decoded: CompletionBody = serde_json::from_str(&json).unwrap();

    assert_eq!(decoded.messages, messages);
    assert_eq!(decoded.messages[0].role, Role::System);
    assert_eq!(decoded.messages[3].content, "Write a sort function");
    assert!(!decoded.stream);
}

#[test]
fn unset_request_parameters_fall_back_to_configuration() {
    let config = ClientConfig::builder()
        .api_key("k")
        .model("llama-3.1-8b-instant")
        .build()
        .unwrap();
    let client = CompletionClient::new(config);

    let body = client.build_body(&hello_request()).unwrap();

    assert_eq!(body.model, "llama-3.1-8b-instant");
    assert_eq!(body.temperature, 0.7);
    assert_eq!(body.max_tokens, 2048);
    assert!(!body.stream);
}
