#![deny(warnings)]
#![deny(clippy::all)]
#![deny(missing_docs)]

//! Async LINE Messaging API client with typed requests and responses.
//!
//! Every operation issues exactly one HTTP request and resolves to a typed
//! response record, or rejects with a single normalized [`LineError`]. There
//! is no retry, rate-limiting, or caching layer in this crate.
//!
//! ```no_run
//! use line_bot_async::types::message::{Message, PushMessage};
//! use line_bot_async::{Client, LineConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = LineConfig::new().with_channel_token("channel-access-token");
//! let client = Client::with_config(config);
//!
//! let push = PushMessage::new("U4af4980629...", vec![Message::text("Hello, world!")]);
//! client.messages().push(push).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Authentication
//!
//! Requests are authenticated with a channel access token sent as a bearer
//! token. See [`LineConfig`] for configuration options.

/// HTTP client implementation
pub mod client;
/// Configuration types for the client
pub mod config;
/// Error types
pub mod error;
/// API resource implementations
pub mod resources;
/// Test support utilities (for use in tests)
#[doc(hidden)]
pub mod test_support;
/// Request and response types
pub mod types;

pub use crate::client::Client;
pub use crate::config::LineConfig;
pub use crate::error::{ErrorDetail, ErrorResponse, LineError};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::types::*;
    pub use crate::{Client, LineConfig, LineError};
}
