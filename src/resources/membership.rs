use crate::{
    client::Client,
    config::Config,
    error::LineError,
    types::common::{BotApiResponse, ChatScope},
    types::profile::{IssueLinkTokenResponse, MembersIdsResponse, UserProfileResponse},
};

/// API resource for the profile, group, and room membership endpoints
///
/// Group- and room-scoped operations share one underlying call shape,
/// parameterized by [`ChatScope`]; the paired methods exist for caller
/// clarity only.
pub struct Membership<'c, C: Config> {
    client: &'c Client<C>,
}

impl<'c, C: Config> Membership<'c, C> {
    /// Creates a new Membership resource
    #[must_use]
    pub const fn new(client: &'c Client<C>) -> Self {
        Self { client }
    }

    /// Retrieves the profile of a user who has added the bot.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API rejects it.
    pub async fn profile(&self, user_id: &str) -> Result<UserProfileResponse, LineError> {
        self.client.get(&format!("/v2/bot/profile/{user_id}")).await
    }

    /// Retrieves the profile of a group member.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API rejects it.
    pub async fn group_member_profile(
        &self,
        group_id: &str,
        user_id: &str,
    ) -> Result<UserProfileResponse, LineError> {
        self.member_profile(ChatScope::Group, group_id, user_id).await
    }

    /// Retrieves the profile of a room member.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API rejects it.
    pub async fn room_member_profile(
        &self,
        room_id: &str,
        user_id: &str,
    ) -> Result<UserProfileResponse, LineError> {
        self.member_profile(ChatScope::Room, room_id, user_id).await
    }

    /// Retrieves one page of group member user IDs.
    ///
    /// `start` is the continuation token from the previous page.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API rejects it.
    pub async fn group_member_ids(
        &self,
        group_id: &str,
        start: Option<&str>,
    ) -> Result<MembersIdsResponse, LineError> {
        self.member_ids(ChatScope::Group, group_id, start).await
    }

    /// Retrieves one page of room member user IDs.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API rejects it.
    pub async fn room_member_ids(
        &self,
        room_id: &str,
        start: Option<&str>,
    ) -> Result<MembersIdsResponse, LineError> {
        self.member_ids(ChatScope::Room, room_id, start).await
    }

    /// Leaves a group. Resolves to the success sentinel.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API rejects it.
    pub async fn leave_group(&self, group_id: &str) -> Result<BotApiResponse, LineError> {
        self.leave(ChatScope::Group, group_id).await
    }

    /// Leaves a room. Resolves to the success sentinel.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API rejects it.
    pub async fn leave_room(&self, room_id: &str) -> Result<BotApiResponse, LineError> {
        self.leave(ChatScope::Room, room_id).await
    }

    /// Issues a token for linking a LINE account with a service account.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API rejects it.
    pub async fn issue_link_token(
        &self,
        user_id: &str,
    ) -> Result<IssueLinkTokenResponse, LineError> {
        self.client
            .post_no_body(&format!("/v2/bot/user/{user_id}/linkToken"))
            .await
    }

    async fn member_profile(
        &self,
        scope: ChatScope,
        chat_id: &str,
        user_id: &str,
    ) -> Result<UserProfileResponse, LineError> {
        self.client
            .get(&format!(
                "/v2/bot/{}/{chat_id}/member/{user_id}",
                scope.as_str()
            ))
            .await
    }

    async fn member_ids(
        &self,
        scope: ChatScope,
        chat_id: &str,
        start: Option<&str>,
    ) -> Result<MembersIdsResponse, LineError> {
        let path = format!("/v2/bot/{}/{chat_id}/members/ids", scope.as_str());
        match start {
            Some(start) => self.client.get_with_query(&path, &[("start", start)]).await,
            None => self.client.get(&path).await,
        }
    }

    async fn leave(&self, scope: ChatScope, chat_id: &str) -> Result<BotApiResponse, LineError> {
        self.client
            .post_empty(&format!("/v2/bot/{}/{chat_id}/leave", scope.as_str()))
            .await
            .map(|()| BotApiResponse::success())
    }
}

// Add accessor to client
impl<C: Config> crate::Client<C> {
    /// Returns the membership API resource
    #[must_use]
    pub const fn membership(&self) -> Membership<'_, C> {
        Membership::new(self)
    }
}
