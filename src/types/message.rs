//! Types for the message-sending and message-statistics endpoints

use serde::{Deserialize, Serialize};

use super::common::DeliveryStatus;

/// A message deliverable through the LINE Messaging API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase", rename_all_fields = "camelCase")]
pub enum Message {
    /// Plain text message
    Text {
        /// Message text
        text: String,
    },
    /// Sticker message
    Sticker {
        /// Package the sticker belongs to
        package_id: String,
        /// Sticker identifier within the package
        sticker_id: String,
    },
    /// Image message
    Image {
        /// URL of the full-size image
        original_content_url: String,
        /// URL of the preview image
        preview_image_url: String,
    },
    /// Video message
    Video {
        /// URL of the video file
        original_content_url: String,
        /// URL of the preview image
        preview_image_url: String,
    },
    /// Audio message
    Audio {
        /// URL of the audio file
        original_content_url: String,
        /// Length of the audio in milliseconds
        duration: u64,
    },
    /// Location message
    Location {
        /// Title shown above the address
        title: String,
        /// Postal address
        address: String,
        /// Latitude in decimal degrees
        latitude: f64,
        /// Longitude in decimal degrees
        longitude: f64,
    },
}

impl Message {
    /// Creates a plain text message.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }
}

/// Request body for `POST /v2/bot/message/reply`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReplyMessage {
    /// Reply token received with the webhook event being answered
    pub reply_token: String,
    /// Messages to send, at most five
    pub messages: Vec<Message>,
    /// Suppress the push notification on the recipient's device
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification_disabled: Option<bool>,
}

impl ReplyMessage {
    /// Creates a reply to the given reply token.
    #[must_use]
    pub fn new(reply_token: impl Into<String>, messages: Vec<Message>) -> Self {
        Self {
            reply_token: reply_token.into(),
            messages,
            notification_disabled: None,
        }
    }
}

/// Request body for `POST /v2/bot/message/push`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PushMessage {
    /// Identifier of the target user, group, or room
    pub to: String,
    /// Messages to send, at most five
    pub messages: Vec<Message>,
    /// Suppress the push notification on the recipient's device
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification_disabled: Option<bool>,
}

impl PushMessage {
    /// Creates a push to the given recipient.
    #[must_use]
    pub fn new(to: impl Into<String>, messages: Vec<Message>) -> Self {
        Self {
            to: to.into(),
            messages,
            notification_disabled: None,
        }
    }
}

/// Request body for `POST /v2/bot/message/multicast`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Multicast {
    /// Identifiers of the target users
    pub to: Vec<String>,
    /// Messages to send, at most five
    pub messages: Vec<Message>,
    /// Suppress the push notification on the recipients' devices
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification_disabled: Option<bool>,
}

impl Multicast {
    /// Creates a multicast to the given users.
    #[must_use]
    pub fn new(to: Vec<String>, messages: Vec<Message>) -> Self {
        Self {
            to,
            messages,
            notification_disabled: None,
        }
    }
}

/// Request body for `POST /v2/bot/message/broadcast`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Broadcast {
    /// Messages to send, at most five
    pub messages: Vec<Message>,
    /// Suppress the push notification on the recipients' devices
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification_disabled: Option<bool>,
}

impl Broadcast {
    /// Creates a broadcast to all followers.
    #[must_use]
    pub const fn new(messages: Vec<Message>) -> Self {
        Self {
            messages,
            notification_disabled: None,
        }
    }
}

/// Response from the sent-message count endpoints
/// (`GET /v2/bot/message/delivery/{reply,push,multicast,broadcast}`)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct NumberOfMessagesResponse {
    /// Whether the count is ready for the requested date
    pub status: DeliveryStatus,
    /// Number of messages sent, present once the count is ready
    #[serde(default)]
    pub success: Option<u64>,
}

/// Classification of the monthly message quota.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum QuotaType {
    /// No monthly limit applies
    #[default]
    None,
    /// A monthly limit applies
    Limited,
}

/// Response from `GET /v2/bot/message/quota`
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct MessageQuotaResponse {
    /// Quota classification
    #[serde(rename = "type")]
    pub kind: QuotaType,
    /// Monthly sendable message cap, present when the quota is limited
    pub value: Option<u64>,
}

/// Response from `GET /v2/bot/message/quota/consumption`
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct QuotaConsumptionResponse {
    /// Messages sent so far this month
    pub total_usage: u64,
}
