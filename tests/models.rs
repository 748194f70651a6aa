use line_bot_async::types::common::BotApiResponse;
use line_bot_async::types::insight::FriendsDemographicsResponse;
use line_bot_async::types::message::{Message, MessageQuotaResponse, QuotaType};
use line_bot_async::types::profile::UserProfileResponse;
use line_bot_async::types::rich_menu::{Action, RichMenuListResponse};
use serde_json::json;

#[test]
fn empty_object_deserializes_into_defaults() {
    let quota: MessageQuotaResponse = serde_json::from_str("{}").unwrap();
    assert_eq!(quota.kind, QuotaType::None);
    assert_eq!(quota.value, None);

    let demographics: FriendsDemographicsResponse = serde_json::from_str("{}").unwrap();
    assert!(!demographics.available);
    assert!(demographics.genders.is_empty());
    assert!(demographics.ages.is_empty());
    assert!(demographics.areas.is_empty());
    assert!(demographics.app_types.is_empty());
    assert!(demographics.subscription_periods.is_empty());

    let list: RichMenuListResponse = serde_json::from_str("{}").unwrap();
    assert!(list.richmenus.is_empty());

    let profile: UserProfileResponse = serde_json::from_str("{}").unwrap();
    assert_eq!(profile.display_name, "");
    assert_eq!(profile.picture_url, None);
    assert_eq!(profile.status_message, None);
}

#[test]
fn acknowledgement_sentinel_is_value_equal() {
    let parsed: BotApiResponse = serde_json::from_str("{}").unwrap();
    assert_eq!(parsed, BotApiResponse::success());

    // Every call to success() yields the same value
    assert_eq!(BotApiResponse::success(), BotApiResponse::success());
    assert_eq!(BotApiResponse::success().message, "");
    assert!(BotApiResponse::success().details.is_empty());
}

#[test]
fn message_variants_carry_type_tag_and_camel_case_fields() {
    let text = serde_json::to_value(Message::text("hello")).unwrap();
    assert_eq!(text, json!({"type": "text", "text": "hello"}));

    let sticker = serde_json::to_value(Message::Sticker {
        package_id: "1".into(),
        sticker_id: "2".into(),
    })
    .unwrap();
    assert_eq!(
        sticker,
        json!({"type": "sticker", "packageId": "1", "stickerId": "2"})
    );

    let image = serde_json::to_value(Message::Image {
        original_content_url: "https://example.com/a.jpg".into(),
        preview_image_url: "https://example.com/a_s.jpg".into(),
    })
    .unwrap();
    assert_eq!(
        image,
        json!({
            "type": "image",
            "originalContentUrl": "https://example.com/a.jpg",
            "previewImageUrl": "https://example.com/a_s.jpg"
        })
    );

    let location = serde_json::to_value(Message::Location {
        title: "HQ".into(),
        address: "1 Chome".into(),
        latitude: 35.65,
        longitude: 139.74,
    })
    .unwrap();
    assert_eq!(location["type"], "location");
    assert_eq!(location["latitude"], 35.65);
}

#[test]
fn actions_omit_absent_optional_fields() {
    let postback = serde_json::to_value(Action::Postback {
        label: None,
        data: "action=buy".into(),
        display_text: None,
    })
    .unwrap();
    assert_eq!(postback, json!({"type": "postback", "data": "action=buy"}));

    let uri = serde_json::to_value(Action::Uri {
        label: Some("Open".into()),
        uri: "https://example.com".into(),
    })
    .unwrap();
    assert_eq!(
        uri,
        json!({"type": "uri", "label": "Open", "uri": "https://example.com"})
    );

    let message = serde_json::to_value(Action::Message {
        label: None,
        text: "yes".into(),
    })
    .unwrap();
    assert_eq!(message, json!({"type": "message", "text": "yes"}));
}

#[test]
fn message_wire_shape_round_trips() {
    let wire = json!({"type": "text", "text": "hi"});
    let parsed: Message = serde_json::from_value(wire.clone()).unwrap();
    assert_eq!(serde_json::to_value(&parsed).unwrap(), wire);

    let wire = json!({
        "type": "video",
        "originalContentUrl": "https://example.com/v.mp4",
        "previewImageUrl": "https://example.com/v.jpg"
    });
    let parsed: Message = serde_json::from_value(wire.clone()).unwrap();
    assert_eq!(serde_json::to_value(&parsed).unwrap(), wire);
}
