//! PropReel Domain State
//!
//! This library holds the screen-local state controllers and the static
//! fixture data behind the PropReel client. Data flows one way: fixtures
//! into screen state at mount, screen state into derived views. Nothing
//! is persisted; every screen state lives only as long as its screen.

pub mod chat;
pub mod feed;
pub mod fixtures;
pub mod models;
pub mod profile;

pub use chat::{ChatState, ChatView};
pub use feed::FeedState;
pub use models::{
    current_timestamp_ms, AgentProfile, ChatMessage, Conversation, Listing, ListingCategory,
    PropertyInfo, Reel, ReelOwner, Sender,
};
pub use profile::{CategoryFilter, ProfileSection, ProfileState};
