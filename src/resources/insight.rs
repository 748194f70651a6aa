use crate::{
    client::Client,
    config::Config,
    error::LineError,
    types::insight::{
        FriendsDemographicsResponse, NumberOfFollowersResponse,
        NumberOfMessageDeliveriesResponse,
    },
};

/// API resource for the `/v2/bot/insight` endpoints
pub struct Insight<'c, C: Config> {
    client: &'c Client<C>,
}

impl<'c, C: Config> Insight<'c, C> {
    /// Creates a new Insight resource
    #[must_use]
    pub const fn new(client: &'c Client<C>) -> Self {
        Self { client }
    }

    /// Number of messages delivered on the given date (`yyyyMMdd`), broken
    /// down by delivery method.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API rejects it.
    pub async fn message_deliveries(
        &self,
        date: &str,
    ) -> Result<NumberOfMessageDeliveriesResponse, LineError> {
        self.client
            .get_with_query("/v2/bot/insight/message/delivery", &[("date", date)])
            .await
    }

    /// Number of followers as of the given date (`yyyyMMdd`).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API rejects it.
    pub async fn followers(&self, date: &str) -> Result<NumberOfFollowersResponse, LineError> {
        self.client
            .get_with_query("/v2/bot/insight/followers", &[("date", date)])
            .await
    }

    /// Demographic breakdown of the bot's friends.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API rejects it.
    pub async fn friends_demographics(&self) -> Result<FriendsDemographicsResponse, LineError> {
        self.client.get("/v2/bot/insight/demographic").await
    }
}

// Add accessor to client
impl<C: Config> crate::Client<C> {
    /// Returns the insight API resource
    #[must_use]
    pub const fn insight(&self) -> Insight<'_, C> {
        Insight::new(self)
    }
}
