//! Static Fixture Data
//!
//! Hard-coded stand-ins for a real backend. Every screen state constructs
//! its own copy at mount, so mutations never outlive the owning screen.
//! Timestamps are built relative to the current time so relative-time
//! display stays plausible.

use crate::models::{
    current_timestamp_ms, AgentProfile, ChatMessage, Conversation, Listing, ListingCategory,
    PropertyInfo, Reel, ReelOwner, Sender,
};

/// Shared placeholder media for every property
const PROPERTY_MEDIA: &str = "assets/properties/property1.jpg";

fn minutes_ago(minutes: i64) -> i64 {
    current_timestamp_ms() - minutes * 60 * 1000
}

fn days_ago(days: i64) -> i64 {
    current_timestamp_ms() - days * 24 * 60 * 60 * 1000
}

fn message(id: &str, text: &str, sender: Sender, timestamp: i64, read: bool) -> ChatMessage {
    ChatMessage {
        id: id.to_string(),
        text: text.to_string(),
        sender,
        timestamp,
        read,
    }
}

/// Property reels for the feed screen
pub fn reels() -> Vec<Reel> {
    vec![
        Reel {
            id: "1".to_string(),
            media: PROPERTY_MEDIA.to_string(),
            owner: ReelOwner {
                name: "Dubai Luxury".to_string(),
                avatar: PROPERTY_MEDIA.to_string(),
                is_verified: true,
            },
            property: PropertyInfo {
                title: "Luxury Penthouse".to_string(),
                description: "Stunning 3BR penthouse with panoramic views of Dubai Marina"
                    .to_string(),
                price: "AED 5,200,000".to_string(),
                location: "Dubai Marina".to_string(),
                bedrooms: 3,
                bathrooms: 2.0,
                area: "2,400 sqft".to_string(),
            },
            likes: 1243,
            is_liked: false,
        },
        Reel {
            id: "2".to_string(),
            media: PROPERTY_MEDIA.to_string(),
            owner: ReelOwner {
                name: "Palm Estates".to_string(),
                avatar: PROPERTY_MEDIA.to_string(),
                is_verified: true,
            },
            property: PropertyInfo {
                title: "Beach Villa".to_string(),
                description: "Exclusive 5BR villa with private beach access on Palm Jumeirah"
                    .to_string(),
                price: "AED 15,500,000".to_string(),
                location: "Palm Jumeirah".to_string(),
                bedrooms: 5,
                bathrooms: 6.0,
                area: "7,500 sqft".to_string(),
            },
            likes: 3567,
            is_liked: true,
        },
        Reel {
            id: "3".to_string(),
            media: PROPERTY_MEDIA.to_string(),
            owner: ReelOwner {
                name: "Downtown Realty".to_string(),
                avatar: PROPERTY_MEDIA.to_string(),
                is_verified: false,
            },
            property: PropertyInfo {
                title: "Modern Apartment".to_string(),
                description: "Sleek 2BR apartment in the heart of Downtown Dubai".to_string(),
                price: "AED 2,100,000".to_string(),
                location: "Downtown Dubai".to_string(),
                bedrooms: 2,
                bathrooms: 2.5,
                area: "1,350 sqft".to_string(),
            },
            likes: 789,
            is_liked: false,
        },
    ]
}

/// The agent's own listings
pub fn my_listings() -> Vec<Listing> {
    vec![
        Listing {
            id: 1,
            image: PROPERTY_MEDIA.to_string(),
            title: "Modern Apartment".to_string(),
            location: "Downtown Dubai".to_string(),
            price: "AED 1,200,000".to_string(),
            bedrooms: 2,
            bathrooms: 2.0,
            area: "1,200 sqft".to_string(),
            featured: true,
            category: ListingCategory::Apartments,
        },
        Listing {
            id: 2,
            image: PROPERTY_MEDIA.to_string(),
            title: "Luxury Villa".to_string(),
            location: "Palm Jumeirah".to_string(),
            price: "AED 5,500,000".to_string(),
            bedrooms: 4,
            bathrooms: 5.0,
            area: "3,500 sqft".to_string(),
            featured: true,
            category: ListingCategory::Villas,
        },
        Listing {
            id: 3,
            image: PROPERTY_MEDIA.to_string(),
            title: "Penthouse Suite".to_string(),
            location: "Dubai Marina".to_string(),
            price: "AED 3,800,000".to_string(),
            bedrooms: 3,
            bathrooms: 3.0,
            area: "2,100 sqft".to_string(),
            featured: false,
            category: ListingCategory::Penthouses,
        },
        Listing {
            id: 4,
            image: PROPERTY_MEDIA.to_string(),
            title: "Studio Apartment".to_string(),
            location: "Business Bay".to_string(),
            price: "AED 750,000".to_string(),
            bedrooms: 0,
            bathrooms: 1.0,
            area: "550 sqft".to_string(),
            featured: false,
            category: ListingCategory::Apartments,
        },
    ]
}

/// Properties the agent has saved
pub fn saved_properties() -> Vec<Listing> {
    vec![
        Listing {
            id: 5,
            image: PROPERTY_MEDIA.to_string(),
            title: "Garden Apartment".to_string(),
            location: "Jumeirah Village Circle".to_string(),
            price: "AED 1,100,000".to_string(),
            bedrooms: 2,
            bathrooms: 2.0,
            area: "1,100 sqft".to_string(),
            featured: false,
            category: ListingCategory::Apartments,
        },
        Listing {
            id: 6,
            image: PROPERTY_MEDIA.to_string(),
            title: "Beachfront Condo".to_string(),
            location: "Bluewaters Island".to_string(),
            price: "AED 2,900,000".to_string(),
            bedrooms: 2,
            bathrooms: 2.5,
            area: "1,450 sqft".to_string(),
            featured: false,
            category: ListingCategory::Apartments,
        },
    ]
}

/// Properties the agent has sold
pub fn sold_properties() -> Vec<Listing> {
    vec![
        Listing {
            id: 7,
            image: PROPERTY_MEDIA.to_string(),
            title: "Corner Townhouse".to_string(),
            location: "Arabian Ranches".to_string(),
            price: "AED 2,100,000".to_string(),
            bedrooms: 3,
            bathrooms: 3.5,
            area: "2,200 sqft".to_string(),
            featured: false,
            category: ListingCategory::Townhouses,
        },
        Listing {
            id: 8,
            image: PROPERTY_MEDIA.to_string(),
            title: "Sky View Apartment".to_string(),
            location: "Downtown Dubai".to_string(),
            price: "AED 1,800,000".to_string(),
            bedrooms: 1,
            bathrooms: 1.5,
            area: "950 sqft".to_string(),
            featured: false,
            category: ListingCategory::Apartments,
        },
    ]
}

/// Conversation threads for the chat screen
pub fn conversations() -> Vec<Conversation> {
    vec![
        Conversation {
            id: "1".to_string(),
            property_id: "101".to_string(),
            property_title: "Luxury Penthouse".to_string(),
            property_image: PROPERTY_MEDIA.to_string(),
            agent_name: "Sarah Johnson".to_string(),
            agent_avatar: PROPERTY_MEDIA.to_string(),
            is_verified: true,
            last_active: minutes_ago(25),
            unread_count: 2,
            messages: vec![
                message(
                    "m1",
                    "Hello, I saw your listing for the Luxury Penthouse and I'm very interested.",
                    Sender::User,
                    minutes_ago(60),
                    true,
                ),
                message(
                    "m2",
                    "Hi there! Thank you for your interest. Would you like to schedule a viewing?",
                    Sender::Agent,
                    minutes_ago(55),
                    true,
                ),
                message(
                    "m3",
                    "Yes, I would. Is it available this weekend?",
                    Sender::User,
                    minutes_ago(40),
                    true,
                ),
                message(
                    "m4",
                    "Absolutely! We have slots available on Saturday at 10 AM or 2 PM, and Sunday at 11 AM. Which would work best for you?",
                    Sender::Agent,
                    minutes_ago(30),
                    false,
                ),
                message(
                    "m5",
                    "I can also provide more information about the neighborhood if you're interested.",
                    Sender::Agent,
                    minutes_ago(25),
                    false,
                ),
            ],
        },
        Conversation {
            id: "2".to_string(),
            property_id: "102".to_string(),
            property_title: "Modern Villa".to_string(),
            property_image: PROPERTY_MEDIA.to_string(),
            agent_name: "PropertyHelper AI".to_string(),
            agent_avatar: PROPERTY_MEDIA.to_string(),
            is_verified: true,
            last_active: minutes_ago(5),
            unread_count: 1,
            messages: vec![
                message(
                    "m1",
                    "I'm looking for a villa with at least 4 bedrooms in Palm Jumeirah.",
                    Sender::User,
                    minutes_ago(20),
                    true,
                ),
                message(
                    "m2",
                    "I found 5 properties matching your criteria. Would you like me to show you the top listings?",
                    Sender::Ai,
                    minutes_ago(18),
                    true,
                ),
                message(
                    "m3",
                    "Yes please, and what's the price range?",
                    Sender::User,
                    minutes_ago(10),
                    true,
                ),
                message(
                    "m4",
                    "The available villas range from AED 8.5M to AED 15M. The most popular one is a 5-bedroom villa with private beach access for AED 12.5M. Would you like more details about this property?",
                    Sender::Ai,
                    minutes_ago(5),
                    false,
                ),
            ],
        },
        Conversation {
            id: "3".to_string(),
            property_id: "103".to_string(),
            property_title: "Downtown Apartment".to_string(),
            property_image: PROPERTY_MEDIA.to_string(),
            agent_name: "Michael Chang".to_string(),
            agent_avatar: PROPERTY_MEDIA.to_string(),
            is_verified: false,
            last_active: days_ago(2),
            unread_count: 0,
            messages: vec![
                message(
                    "m1",
                    "Hi, is the Downtown Apartment still available?",
                    Sender::User,
                    days_ago(3),
                    true,
                ),
                message(
                    "m2",
                    "Hello! Yes, it's still available. Are you interested in viewing it?",
                    Sender::Agent,
                    days_ago(3) + 30 * 60 * 1000,
                    true,
                ),
                message(
                    "m3",
                    "I'd like to know more about the building amenities first.",
                    Sender::User,
                    days_ago(2),
                    true,
                ),
                message(
                    "m4",
                    "Of course! The building features a rooftop pool, fully equipped gym, 24/7 security, and underground parking. There's also a children's play area and a communal garden terrace.",
                    Sender::Agent,
                    days_ago(2) + 15 * 60 * 1000,
                    true,
                ),
            ],
        },
    ]
}

/// Header data for the signed-in agent
pub fn agent_profile() -> AgentProfile {
    AgentProfile {
        name: "Bairamaliev".to_string(),
        tagline: "best real estate agent in dubai".to_string(),
        avatar: PROPERTY_MEDIA.to_string(),
        properties_sold: 362,
        available: 425,
        rating: 4.9,
    }
}

/// Prompt suggestions shown on the new-chat view
pub fn suggested_queries() -> &'static [&'static str] {
    &[
        "Find me a 2 bedroom apartment in Downtown Dubai",
        "What are the best areas for families in Dubai?",
        "Show me villas with a private pool",
        "What documents do I need to rent in Dubai?",
        "Compare Marina vs Downtown for investment",
    ]
}
