use bytes::Bytes;

use crate::{
    client::Client,
    config::Config,
    error::LineError,
    types::common::BotApiResponse,
    types::content::ContentResponse,
    types::rich_menu::{
        RichMenu, RichMenuBulkLinkRequest, RichMenuBulkUnlinkRequest, RichMenuIdResponse,
        RichMenuListResponse, RichMenuResponse,
    },
};

/// API resource for the rich menu endpoints
pub struct RichMenus<'c, C: Config> {
    client: &'c Client<C>,
}

impl<'c, C: Config> RichMenus<'c, C> {
    /// Creates a new RichMenus resource
    #[must_use]
    pub const fn new(client: &'c Client<C>) -> Self {
        Self { client }
    }

    /// Creates a rich menu and returns its identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API rejects it.
    pub async fn create(&self, rich_menu: RichMenu) -> Result<RichMenuIdResponse, LineError> {
        self.client.post("/v2/bot/richmenu", rich_menu).await
    }

    /// Retrieves a rich menu by identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API rejects it.
    pub async fn get(&self, rich_menu_id: &str) -> Result<RichMenuResponse, LineError> {
        self.client
            .get(&format!("/v2/bot/richmenu/{rich_menu_id}"))
            .await
    }

    /// Deletes a rich menu. Resolves to the success sentinel.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API rejects it.
    pub async fn delete(&self, rich_menu_id: &str) -> Result<BotApiResponse, LineError> {
        self.client
            .delete(&format!("/v2/bot/richmenu/{rich_menu_id}"))
            .await
            .map(|()| BotApiResponse::success())
    }

    /// Lists every rich menu registered on the bot.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API rejects it.
    pub async fn list(&self) -> Result<RichMenuListResponse, LineError> {
        self.client.get("/v2/bot/richmenu/list").await
    }

    /// Retrieves the identifier of the rich menu linked to a user.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API rejects it.
    pub async fn of_user(&self, user_id: &str) -> Result<RichMenuIdResponse, LineError> {
        self.client
            .get(&format!("/v2/bot/user/{user_id}/richmenu"))
            .await
    }

    /// Links a rich menu to a user. Resolves to the success sentinel.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API rejects it.
    pub async fn link_to_user(
        &self,
        user_id: &str,
        rich_menu_id: &str,
    ) -> Result<BotApiResponse, LineError> {
        self.client
            .post_empty(&format!("/v2/bot/user/{user_id}/richmenu/{rich_menu_id}"))
            .await
            .map(|()| BotApiResponse::success())
    }

    /// Links a rich menu to multiple users. Resolves to the success sentinel.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API rejects it.
    pub async fn link_to_users(
        &self,
        user_ids: Vec<String>,
        rich_menu_id: &str,
    ) -> Result<BotApiResponse, LineError> {
        let req = RichMenuBulkLinkRequest {
            rich_menu_id: rich_menu_id.into(),
            user_ids,
        };
        self.client
            .post_json_empty("/v2/bot/richmenu/bulk/link", req)
            .await
            .map(|()| BotApiResponse::success())
    }

    /// Unlinks the rich menu from a user. Resolves to the success sentinel.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API rejects it.
    pub async fn unlink_from_user(&self, user_id: &str) -> Result<BotApiResponse, LineError> {
        self.client
            .delete(&format!("/v2/bot/user/{user_id}/richmenu"))
            .await
            .map(|()| BotApiResponse::success())
    }

    /// Unlinks rich menus from multiple users. Resolves to the success
    /// sentinel.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API rejects it.
    pub async fn unlink_from_users(
        &self,
        user_ids: Vec<String>,
    ) -> Result<BotApiResponse, LineError> {
        let req = RichMenuBulkUnlinkRequest { user_ids };
        self.client
            .post_json_empty("/v2/bot/richmenu/bulk/unlink", req)
            .await
            .map(|()| BotApiResponse::success())
    }

    /// Downloads the image attached to a rich menu. The returned body stream
    /// is owned by the caller; see [`ContentResponse`].
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the API rejects it, or the
    /// response metadata cannot be read.
    pub async fn image(&self, rich_menu_id: &str) -> Result<ContentResponse, LineError> {
        self.client
            .get_content(&format!("/v2/bot/richmenu/{rich_menu_id}/content"))
            .await
    }

    /// Uploads the image for a rich menu. Resolves to the success sentinel.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API rejects it.
    pub async fn set_image(
        &self,
        rich_menu_id: &str,
        content_type: &str,
        content: Bytes,
    ) -> Result<BotApiResponse, LineError> {
        self.client
            .post_octet(
                &format!("/v2/bot/richmenu/{rich_menu_id}/content"),
                content_type,
                content,
            )
            .await
            .map(|()| BotApiResponse::success())
    }

    /// Sets the default rich menu shown to all users. Resolves to the
    /// success sentinel.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API rejects it.
    pub async fn set_default(&self, rich_menu_id: &str) -> Result<BotApiResponse, LineError> {
        self.client
            .post_empty(&format!("/v2/bot/user/all/richmenu/{rich_menu_id}"))
            .await
            .map(|()| BotApiResponse::success())
    }

    /// Retrieves the identifier of the default rich menu.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API rejects it.
    pub async fn default_menu_id(&self) -> Result<RichMenuIdResponse, LineError> {
        self.client.get("/v2/bot/user/all/richmenu").await
    }

    /// Cancels the default rich menu. Resolves to the success sentinel.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API rejects it.
    pub async fn cancel_default(&self) -> Result<BotApiResponse, LineError> {
        self.client
            .delete("/v2/bot/user/all/richmenu")
            .await
            .map(|()| BotApiResponse::success())
    }
}

// Add accessor to client
impl<C: Config> crate::Client<C> {
    /// Returns the rich menu API resource
    #[must_use]
    pub const fn rich_menus(&self) -> RichMenus<'_, C> {
        RichMenus::new(self)
    }
}
