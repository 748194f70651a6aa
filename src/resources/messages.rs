use crate::{
    client::Client,
    config::Config,
    error::LineError,
    types::common::BotApiResponse,
    types::content::ContentResponse,
    types::message::{
        Broadcast, MessageQuotaResponse, Multicast, NumberOfMessagesResponse, PushMessage,
        QuotaConsumptionResponse, ReplyMessage,
    },
};

/// API resource for the `/v2/bot/message` endpoints
pub struct Messages<'c, C: Config> {
    client: &'c Client<C>,
}

impl<'c, C: Config> Messages<'c, C> {
    /// Creates a new Messages resource
    #[must_use]
    pub const fn new(client: &'c Client<C>) -> Self {
        Self { client }
    }

    /// Sends a reply to a webhook event.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API rejects it.
    pub async fn reply(&self, req: ReplyMessage) -> Result<BotApiResponse, LineError> {
        self.client.post("/v2/bot/message/reply", req).await
    }

    /// Sends messages to a user, group, or room.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API rejects it.
    pub async fn push(&self, req: PushMessage) -> Result<BotApiResponse, LineError> {
        self.client.post("/v2/bot/message/push", req).await
    }

    /// Sends messages to multiple users.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API rejects it.
    pub async fn multicast(&self, req: Multicast) -> Result<BotApiResponse, LineError> {
        self.client.post("/v2/bot/message/multicast", req).await
    }

    /// Sends messages to every follower of the bot.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API rejects it.
    pub async fn broadcast(&self, req: Broadcast) -> Result<BotApiResponse, LineError> {
        self.client.post("/v2/bot/message/broadcast", req).await
    }

    /// Downloads the content (image, video, audio, file) attached to a
    /// received message. The returned body stream is owned by the caller;
    /// see [`ContentResponse`].
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the API rejects it, or the
    /// response metadata cannot be read.
    pub async fn content(&self, message_id: &str) -> Result<ContentResponse, LineError> {
        self.client
            .get_content(&format!("/v2/bot/message/{message_id}/content"))
            .await
    }

    /// Retrieves the monthly message quota.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API rejects it.
    pub async fn quota(&self) -> Result<MessageQuotaResponse, LineError> {
        self.client.get("/v2/bot/message/quota").await
    }

    /// Retrieves the number of messages sent this month.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API rejects it.
    pub async fn quota_consumption(&self) -> Result<QuotaConsumptionResponse, LineError> {
        self.client.get("/v2/bot/message/quota/consumption").await
    }

    /// Number of reply messages sent on the given date (`yyyyMMdd`).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API rejects it.
    pub async fn sent_reply_count(&self, date: &str) -> Result<NumberOfMessagesResponse, LineError> {
        self.sent_count("reply", date).await
    }

    /// Number of push messages sent on the given date (`yyyyMMdd`).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API rejects it.
    pub async fn sent_push_count(&self, date: &str) -> Result<NumberOfMessagesResponse, LineError> {
        self.sent_count("push", date).await
    }

    /// Number of multicast messages sent on the given date (`yyyyMMdd`).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API rejects it.
    pub async fn sent_multicast_count(
        &self,
        date: &str,
    ) -> Result<NumberOfMessagesResponse, LineError> {
        self.sent_count("multicast", date).await
    }

    /// Number of broadcast messages sent on the given date (`yyyyMMdd`).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API rejects it.
    pub async fn sent_broadcast_count(
        &self,
        date: &str,
    ) -> Result<NumberOfMessagesResponse, LineError> {
        self.sent_count("broadcast", date).await
    }

    async fn sent_count(
        &self,
        kind: &str,
        date: &str,
    ) -> Result<NumberOfMessagesResponse, LineError> {
        self.client
            .get_with_query(&format!("/v2/bot/message/delivery/{kind}"), &[("date", date)])
            .await
    }
}

// Add accessor to client
impl<C: Config> crate::Client<C> {
    /// Returns the message API resource
    #[must_use]
    pub const fn messages(&self) -> Messages<'_, C> {
        Messages::new(self)
    }
}
