//! Types for the rich menu endpoints

use serde::{Deserialize, Serialize};

/// Pixel dimensions of a rich menu image.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RichMenuSize {
    /// Width in pixels
    pub width: u64,
    /// Height in pixels
    pub height: u64,
}

/// Tappable rectangle within a rich menu image.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RichMenuBounds {
    /// Horizontal offset from the left edge
    pub x: u64,
    /// Vertical offset from the top edge
    pub y: u64,
    /// Width of the rectangle
    pub width: u64,
    /// Height of the rectangle
    pub height: u64,
}

/// Action triggered when a rich menu area is tapped.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "lowercase", rename_all_fields = "camelCase")]
pub enum Action {
    /// Sends a postback event to the bot server
    Postback {
        /// Label shown in supporting clients
        #[serde(skip_serializing_if = "Option::is_none")]
        label: Option<String>,
        /// Payload returned via the webhook
        data: String,
        /// Text shown in the chat as the user's message
        #[serde(skip_serializing_if = "Option::is_none")]
        display_text: Option<String>,
    },
    /// Sends a message on behalf of the user
    Message {
        /// Label shown in supporting clients
        #[serde(skip_serializing_if = "Option::is_none")]
        label: Option<String>,
        /// Text of the message to send
        text: String,
    },
    /// Opens a URI in the client
    Uri {
        /// Label shown in supporting clients
        #[serde(skip_serializing_if = "Option::is_none")]
        label: Option<String>,
        /// URI to open
        uri: String,
    },
}

/// A tappable area and the action it fires.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RichMenuArea {
    /// Rectangle the action applies to
    pub bounds: RichMenuBounds,
    /// Action fired on tap
    pub action: Action,
}

/// Request body for `POST /v2/bot/richmenu`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RichMenu {
    /// Menu image dimensions
    pub size: RichMenuSize,
    /// Whether the menu is shown by default
    pub selected: bool,
    /// Menu name, not shown to users
    pub name: String,
    /// Label on the chat bar
    pub chat_bar_text: String,
    /// Tappable areas
    pub areas: Vec<RichMenuArea>,
}

/// A rich menu as stored on the platform.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct RichMenuResponse {
    /// Rich menu identifier
    pub rich_menu_id: String,
    /// Menu image dimensions
    pub size: RichMenuSize,
    /// Whether the menu is shown by default
    pub selected: bool,
    /// Menu name
    pub name: String,
    /// Label on the chat bar
    pub chat_bar_text: String,
    /// Tappable areas
    pub areas: Vec<RichMenuArea>,
}

/// Response carrying a rich menu identifier.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct RichMenuIdResponse {
    /// Rich menu identifier
    pub rich_menu_id: String,
}

/// Response from `GET /v2/bot/richmenu/list`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RichMenuListResponse {
    /// Rich menus registered on the bot
    pub richmenus: Vec<RichMenuResponse>,
}

/// Request body for `POST /v2/bot/richmenu/bulk/link`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RichMenuBulkLinkRequest {
    /// Menu to link
    pub rich_menu_id: String,
    /// Users to link the menu to
    pub user_ids: Vec<String>,
}

/// Request body for `POST /v2/bot/richmenu/bulk/unlink`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RichMenuBulkUnlinkRequest {
    /// Users to unlink
    pub user_ids: Vec<String>,
}
