//! Types for the profile, membership, and account-link endpoints

use serde::{Deserialize, Serialize};

/// Response from the profile and member-profile endpoints
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct UserProfileResponse {
    /// Display name
    pub display_name: String,
    /// User identifier
    pub user_id: String,
    /// Profile image URL, absent when the user has not set one
    pub picture_url: Option<String>,
    /// Status message, absent when the user has not set one
    pub status_message: Option<String>,
}

/// Response from the member-ids endpoints
/// (`GET /v2/bot/{group,room}/{id}/members/ids`)
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct MembersIdsResponse {
    /// User identifiers of the members in this page
    pub member_ids: Vec<String>,
    /// Continuation token for the next page, absent on the last page
    pub next: Option<String>,
}

/// Response from `POST /v2/bot/user/{userId}/linkToken`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct IssueLinkTokenResponse {
    /// Token for linking the LINE account with a service account
    pub link_token: String,
}
