//! Request and response types for the LINE Messaging API

/// Shared types used across endpoints
pub mod common;
/// Binary content responses
pub mod content;
/// Insight (statistics) endpoint types
pub mod insight;
/// Message endpoint types
pub mod message;
/// Profile and membership endpoint types
pub mod profile;
/// Rich menu endpoint types
pub mod rich_menu;

pub use common::*;
pub use content::{ContentResponse, ContentStream};
pub use message::{Broadcast, Message, Multicast, PushMessage, ReplyMessage};
