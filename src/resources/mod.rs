//! API resource implementations for the LINE Messaging API client

/// Insight (statistics) resource
pub mod insight;
/// Profile, group, and room membership resource
pub mod membership;
/// Message sending and statistics resource
pub mod messages;
/// Rich menu resource
pub mod rich_menu;

pub use insight::Insight;
pub use membership::Membership;
pub use messages::Messages;
pub use rich_menu::RichMenus;
