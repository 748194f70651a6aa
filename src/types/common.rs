//! Shared types used across LINE Messaging API endpoints

use serde::{Deserialize, Serialize};

/// Generic acknowledgement returned by message-sending endpoints.
///
/// Endpoints whose successful response carries no payload (leaving a chat,
/// linking or deleting a rich menu) resolve to [`BotApiResponse::success`] so
/// that every client operation yields a value of a uniform shape.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct BotApiResponse {
    /// Human-readable message, empty on success
    pub message: String,
    /// Per-field error details, empty on success
    pub details: Vec<String>,
}

impl BotApiResponse {
    /// The fixed "operation succeeded, no payload" value: an empty message
    /// and no details. Two sentinels are always value-equal.
    #[must_use]
    pub fn success() -> Self {
        Self {
            message: String::new(),
            details: Vec::new(),
        }
    }
}

/// Selects whether a member-scoped operation targets a group or a room.
///
/// Group and room variants of an endpoint share one call shape; only this
/// path segment differs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatScope {
    /// A group chat
    Group,
    /// A multi-person room
    Room,
}

impl ChatScope {
    /// Path segment used by member-scoped endpoints.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Group => "group",
            Self::Room => "room",
        }
    }
}

/// Readiness of an aggregated statistics figure.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryStatus {
    /// The figure is ready to read
    Ready,
    /// The figure is still being collected
    Unready,
    /// The requested date is outside the retention window
    OutOfService,
}
