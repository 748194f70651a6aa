use futures::TryStreamExt;
use line_bot_async::{Client, LineConfig};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(server: &MockServer) -> Client<LineConfig> {
    let config = LineConfig::new()
        .with_api_endpoint(server.uri())
        .with_channel_token("test-channel-token");
    Client::with_config(config)
}

#[tokio::test]
async fn content_fetch_exposes_length_and_mime_type() {
    let server = MockServer::start().await;

    let body = vec![0xABu8; 1024];
    Mock::given(method("GET"))
        .and(path("/v2/bot/message/M1/content"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(body, "image/jpeg"))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let content = client.messages().content("M1").await.unwrap();

    assert_eq!(content.length, 1024);
    assert_eq!(content.mime_type, "image/jpeg");
    assert_eq!(
        content
            .headers
            .get("content-type")
            .and_then(|v| v.to_str().ok()),
        Some("image/jpeg")
    );

    // Ownership of the body stream transfers to the caller.
    let mut stream = content.into_stream();
    let mut total = 0;
    while let Some(chunk) = stream.try_next().await.unwrap() {
        total += chunk.len();
    }
    assert_eq!(total, 1024);
}

#[tokio::test]
async fn into_bytes_drains_the_stream() {
    let server = MockServer::start().await;

    let body: Vec<u8> = (0..=255).collect();
    Mock::given(method("GET"))
        .and(path("/v2/bot/message/M2/content"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(body.clone(), "application/octet-stream"))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let content = client.messages().content("M2").await.unwrap();
    let bytes = content.into_bytes().await.unwrap();

    assert_eq!(bytes.as_ref(), body.as_slice());
}

#[tokio::test]
async fn missing_content_type_is_conversion_error() {
    let server = MockServer::start().await;

    // set_body_bytes writes a body without a Content-Type header
    Mock::given(method("GET"))
        .and(path("/v2/bot/message/M3/content"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![0u8; 16]))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let err = client.messages().content("M3").await.unwrap_err();

    assert_eq!(err.status_code, None);
    assert_eq!(err.raw_body, None);
    assert!(err.message.contains("Content-Type"));
}

#[tokio::test]
async fn non_2xx_content_fetch_is_remote_rejection() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/bot/message/M4/content"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Not found"))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let err = client.messages().content("M4").await.unwrap_err();

    assert_eq!(err.status_code, Some(404));
    assert_eq!(err.raw_body.as_deref(), Some("Not found"));
}
