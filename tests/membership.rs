use line_bot_async::test_support::EnvGuard;
use line_bot_async::types::common::BotApiResponse;
use line_bot_async::{Client, LineConfig};
use serial_test::serial;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(server: &MockServer) -> Client<LineConfig> {
    let config = LineConfig::new()
        .with_api_endpoint(server.uri())
        .with_channel_token("test-channel-token");
    Client::with_config(config)
}

fn profile_body() -> serde_json::Value {
    serde_json::json!({
        "displayName": "LINE taro",
        "userId": "U4af4980629",
        "pictureUrl": "https://obs.line-apps.com/abcdefghijklmn",
        "statusMessage": "Hello, LINE!"
    })
}

#[tokio::test]
async fn profile_parses() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/bot/profile/U4af4980629"))
        .respond_with(ResponseTemplate::new(200).set_body_json(profile_body()))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let profile = client.membership().profile("U4af4980629").await.unwrap();

    assert_eq!(profile.display_name, "LINE taro");
    assert_eq!(profile.user_id, "U4af4980629");
    assert_eq!(
        profile.picture_url.as_deref(),
        Some("https://obs.line-apps.com/abcdefghijklmn")
    );
    assert_eq!(profile.status_message.as_deref(), Some("Hello, LINE!"));
}

#[tokio::test]
async fn group_and_room_member_profile_share_call_shape() {
    let server = MockServer::start().await;

    // Same response either way; only the scope path segment differs.
    Mock::given(method("GET"))
        .and(path("/v2/bot/group/G1/member/U1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(profile_body()))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v2/bot/room/R1/member/U1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(profile_body()))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let from_group = client
        .membership()
        .group_member_profile("G1", "U1")
        .await
        .unwrap();
    let from_room = client
        .membership()
        .room_member_profile("R1", "U1")
        .await
        .unwrap();

    assert_eq!(from_group, from_room);
}

#[tokio::test]
async fn member_ids_pass_continuation_token() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/bot/group/G1/members/ids"))
        .and(query_param("start", "token-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "memberIds": ["U1", "U2"],
            "next": "token-2"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let page = client
        .membership()
        .group_member_ids("G1", Some("token-1"))
        .await
        .unwrap();

    assert_eq!(page.member_ids, ["U1", "U2"]);
    assert_eq!(page.next.as_deref(), Some("token-2"));
}

#[tokio::test]
async fn room_member_ids_last_page_has_no_next() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/bot/room/R1/members/ids"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"memberIds": ["U3"]})),
        )
        .mount(&server)
        .await;

    let client = test_client(&server);
    let page = client
        .membership()
        .room_member_ids("R1", None)
        .await
        .unwrap();

    assert_eq!(page.member_ids, ["U3"]);
    assert_eq!(page.next, None);
}

#[tokio::test]
async fn leave_resolves_to_sentinel_each_time() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v2/bot/group/G1/leave"))
        .respond_with(ResponseTemplate::new(200))
        .expect(2)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let first = client.membership().leave_group("G1").await.unwrap();
    let second = client.membership().leave_group("G1").await.unwrap();

    assert_eq!(first, BotApiResponse::success());
    assert_eq!(first, second);
    assert_eq!(first.message, "");
    assert!(first.details.is_empty());
}

#[tokio::test]
async fn leave_room_resolves_to_sentinel() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v2/bot/room/R1/leave"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let resp = client.membership().leave_room("R1").await.unwrap();
    assert_eq!(resp, BotApiResponse::success());
}

#[tokio::test]
async fn issue_link_token_posts_without_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v2/bot/user/U1/linkToken"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "linkToken": "NMZTNuVrPTqlr2IF8Bnymkb7rXfYv5EY"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let resp = client.membership().issue_link_token("U1").await.unwrap();

    assert_eq!(resp.link_token, "NMZTNuVrPTqlr2IF8Bnymkb7rXfYv5EY");
}

#[tokio::test]
#[serial(env)]
async fn missing_channel_token_is_synchronous_config_error() {
    let _guard = EnvGuard::remove("LINE_BOT_CHANNEL_TOKEN");

    let client =
        Client::with_config(LineConfig::new().with_api_endpoint("http://localhost:1234"));
    let err = client.membership().profile("U1").await.unwrap_err();

    assert_eq!(err.status_code, None);
    assert!(err.message.contains("LINE_BOT_CHANNEL_TOKEN"));
}
