//! Types for the insight (statistics) endpoints

use serde::{Deserialize, Serialize};

use super::common::DeliveryStatus;

/// Response from `GET /v2/bot/insight/message/delivery`
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NumberOfMessageDeliveriesResponse {
    /// Whether the figures are ready for the requested date
    pub status: DeliveryStatus,
    /// Broadcast deliveries
    #[serde(default)]
    pub broadcast: Option<u64>,
    /// Targeted/segmented deliveries
    #[serde(default)]
    pub targeting: Option<u64>,
    /// Auto-response deliveries
    #[serde(default)]
    pub auto_response: Option<u64>,
    /// Greeting-message deliveries
    #[serde(default)]
    pub welcome_response: Option<u64>,
    /// Deliveries sent from chat
    #[serde(default)]
    pub chat: Option<u64>,
    /// Broadcast deliveries sent through the API
    #[serde(default)]
    pub api_broadcast: Option<u64>,
    /// Push deliveries sent through the API
    #[serde(default)]
    pub api_push: Option<u64>,
    /// Multicast deliveries sent through the API
    #[serde(default)]
    pub api_multicast: Option<u64>,
    /// Reply deliveries sent through the API
    #[serde(default)]
    pub api_reply: Option<u64>,
}

/// Response from `GET /v2/bot/insight/followers`
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NumberOfFollowersResponse {
    /// Whether the figures are ready for the requested date
    pub status: DeliveryStatus,
    /// Number of users who have added the bot as a friend
    #[serde(default)]
    pub followers: Option<u64>,
    /// Number of followers reachable by targeted messages
    #[serde(default)]
    pub targeted_reaches: Option<u64>,
    /// Number of users who have blocked the bot
    #[serde(default)]
    pub blocks: Option<u64>,
}

/// Percentage of friends per gender.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct GenderTile {
    /// Gender label: "male", "female", or "unknown"
    pub gender: String,
    /// Share of friends, in percent
    pub percentage: f64,
}

/// Percentage of friends per age band.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct AgeTile {
    /// Age band label, e.g. "from0to14", "from50", "unknown"
    pub age: String,
    /// Share of friends, in percent
    pub percentage: f64,
}

/// Percentage of friends per area.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct AreaTile {
    /// Area label; values depend on the country
    pub area: String,
    /// Share of friends, in percent
    pub percentage: f64,
}

/// Percentage of friends per operating system.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct AppTypeTile {
    /// Operating system label: "ios", "android", or "others"
    pub app_type: String,
    /// Share of friends, in percent
    pub percentage: f64,
}

/// Percentage of friends per friendship duration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct SubscriptionPeriodTile {
    /// Duration label, e.g. "within7days", "within90days", "unknown"
    pub subscription_period: String,
    /// Share of friends, in percent
    pub percentage: f64,
}

/// Response from `GET /v2/bot/insight/demographic`
///
/// Absent breakdowns deserialize as empty sequences; tile order matches the
/// wire payload.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct FriendsDemographicsResponse {
    /// True when demographic information is available
    pub available: bool,
    /// Percentage per gender
    pub genders: Vec<GenderTile>,
    /// Percentage per age band
    pub ages: Vec<AgeTile>,
    /// Percentage per area
    pub areas: Vec<AreaTile>,
    /// Percentage per operating system
    pub app_types: Vec<AppTypeTile>,
    /// Percentage per friendship duration
    pub subscription_periods: Vec<SubscriptionPeriodTile>,
}
