//! Domain Models
//!
//! Plain in-memory entities constructed from the fixtures in
//! [`crate::fixtures`]. Reels and conversations use string ids, listings use
//! numeric ids. Media and avatar fields are static asset references resolved
//! by the hosting toolkit.
//!
//! Two entities store a counter next to the flags it summarizes
//! (`Conversation::unread_count` with the per-message `read` flags, and
//! `Reel::likes` with `is_liked`). Each pair is only ever mutated through a
//! single method so the stored halves cannot drift apart.

use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// Sender of a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    /// The local user
    User,
    /// A human property agent
    Agent,
    /// The AI assistant
    Ai,
}

impl Sender {
    /// Check if the message came from the local user
    pub fn is_user(&self) -> bool {
        matches!(self, Sender::User)
    }
}

/// A single message inside a conversation
///
/// Immutable once constructed, except for the `read` flag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: String,
    pub text: String,
    pub sender: Sender,
    /// Milliseconds since epoch
    pub timestamp: i64,
    pub read: bool,
}

/// A message thread between the user and one counterpart
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Conversation {
    pub id: String,
    pub property_id: String,
    pub property_title: String,
    pub property_image: String,
    pub agent_name: String,
    pub agent_avatar: String,
    pub is_verified: bool,
    /// Chronological, append-only; render order is storage order
    pub messages: Vec<ChatMessage>,
    /// Milliseconds since epoch
    pub last_active: i64,
    /// Count of unread counterpart messages, stored alongside the
    /// per-message `read` flags; mutate only via [`Conversation::mark_all_read`]
    pub unread_count: u32,
}

impl Conversation {
    /// Mark every message read and zero the unread counter
    ///
    /// Runs unconditionally, so calling it on an already-read conversation
    /// is a field-level no-op.
    pub fn mark_all_read(&mut self) {
        self.unread_count = 0;
        for message in &mut self.messages {
            message.read = true;
        }
    }

    /// Most recent message, if any
    pub fn last_message(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }

    /// Recount unread counterpart messages from the flags
    ///
    /// Must always agree with the stored `unread_count`; fixture tests use
    /// it to confirm the two never drift.
    pub fn computed_unread(&self) -> u32 {
        self.messages
            .iter()
            .filter(|m| !m.read && !m.sender.is_user())
            .count() as u32
    }
}

/// Poster of a reel
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReelOwner {
    pub name: String,
    pub avatar: String,
    pub is_verified: bool,
}

/// Property details attached to a reel
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertyInfo {
    pub title: String,
    pub description: String,
    pub price: String,
    pub location: String,
    pub bedrooms: u32,
    pub bathrooms: f32,
    pub area: String,
}

/// A full-screen property promotion unit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reel {
    pub id: String,
    /// Static media reference resolved by the hosting toolkit
    pub media: String,
    pub owner: ReelOwner,
    pub property: PropertyInfo,
    /// Moves in lockstep with `is_liked`; mutate only via [`Reel::toggle_like`]
    pub likes: u32,
    pub is_liked: bool,
}

impl Reel {
    /// Flip the like flag, moving the counter with it
    pub fn toggle_like(&mut self) {
        self.is_liked = !self.is_liked;
        if self.is_liked {
            self.likes += 1;
        } else {
            self.likes = self.likes.saturating_sub(1);
        }
    }
}

/// Property type tag on a listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingCategory {
    Apartments,
    Villas,
    Penthouses,
    Townhouses,
}

impl ListingCategory {
    pub fn display_name(&self) -> &'static str {
        match self {
            ListingCategory::Apartments => "Apartments",
            ListingCategory::Villas => "Villas",
            ListingCategory::Penthouses => "Penthouses",
            ListingCategory::Townhouses => "Townhouses",
        }
    }
}

/// A static property record shown on the profile screen
///
/// Read-only fixture data; nothing mutates a listing at runtime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Listing {
    pub id: u32,
    pub image: String,
    pub title: String,
    pub location: String,
    pub price: String,
    pub bedrooms: u32,
    pub bathrooms: f32,
    pub area: String,
    pub featured: bool,
    pub category: ListingCategory,
}

/// Profile header data for the signed-in agent
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentProfile {
    pub name: String,
    pub tagline: String,
    pub avatar: String,
    pub properties_sold: u32,
    pub available: u32,
    pub rating: f32,
}

/// Current UNIX timestamp in milliseconds
pub fn current_timestamp_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as i64
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn message(id: &str, sender: Sender, read: bool) -> ChatMessage {
        ChatMessage {
            id: id.to_string(),
            text: "hello".to_string(),
            sender,
            timestamp: current_timestamp_ms(),
            read,
        }
    }

    #[test]
    fn test_sender_tag_spelling() {
        assert_eq!(serde_json::to_string(&Sender::User).unwrap(), "\"user\"");
        assert_eq!(serde_json::to_string(&Sender::Agent).unwrap(), "\"agent\"");
        assert_eq!(serde_json::to_string(&Sender::Ai).unwrap(), "\"ai\"");
    }

    #[test]
    fn test_category_tag_spelling() {
        assert_eq!(
            serde_json::to_string(&ListingCategory::Apartments).unwrap(),
            "\"apartments\""
        );
        assert_eq!(
            serde_json::to_string(&ListingCategory::Townhouses).unwrap(),
            "\"townhouses\""
        );
    }

    #[test]
    fn test_mark_all_read() {
        let mut conversation = Conversation {
            id: "c1".to_string(),
            property_id: "p1".to_string(),
            property_title: "Test Property".to_string(),
            property_image: "assets/test.jpg".to_string(),
            agent_name: "Agent".to_string(),
            agent_avatar: "assets/test.jpg".to_string(),
            is_verified: true,
            messages: vec![
                message("m1", Sender::User, true),
                message("m2", Sender::Agent, false),
                message("m3", Sender::Agent, false),
            ],
            last_active: current_timestamp_ms(),
            unread_count: 2,
        };

        assert_eq!(conversation.computed_unread(), 2);

        conversation.mark_all_read();
        assert_eq!(conversation.unread_count, 0);
        assert!(conversation.messages.iter().all(|m| m.read));

        // Already read: a field-level no-op
        conversation.mark_all_read();
        assert_eq!(conversation.unread_count, 0);
        assert_eq!(conversation.computed_unread(), 0);
    }

    #[test]
    fn test_toggle_like_round_trip() {
        let mut reel = Reel {
            id: "r1".to_string(),
            media: "assets/test.jpg".to_string(),
            owner: ReelOwner {
                name: "Owner".to_string(),
                avatar: "assets/test.jpg".to_string(),
                is_verified: false,
            },
            property: PropertyInfo {
                title: "Test".to_string(),
                description: "Test".to_string(),
                price: "AED 1".to_string(),
                location: "Dubai".to_string(),
                bedrooms: 1,
                bathrooms: 1.0,
                area: "500 sqft".to_string(),
            },
            likes: 10,
            is_liked: false,
        };

        reel.toggle_like();
        assert!(reel.is_liked);
        assert_eq!(reel.likes, 11);

        reel.toggle_like();
        assert!(!reel.is_liked);
        assert_eq!(reel.likes, 10);
    }
}
