//! Integration Tests for Screen State Flows
//!
//! These tests walk the documented user journeys end to end across the
//! feed, profile, and chat controllers, using the bundled fixture data.

use propreel_core::{
    CategoryFilter, ChatState, ChatView, FeedState, ListingCategory, ProfileSection, ProfileState,
};

#[test]
fn test_reading_a_conversation_from_the_list() {
    let mut chat = ChatState::new();

    // Three threads, two of them carrying unread counterpart messages
    assert_eq!(chat.conversations().len(), 3);
    assert_eq!(chat.total_unread(), 3);

    // Opening the first thread reads all five of its messages at once
    chat.open_conversation("1");
    let conversation = chat.active_conversation().expect("conversation 1 is open");
    assert_eq!(conversation.unread_count, 0);
    assert_eq!(conversation.messages.len(), 5);
    assert!(conversation.messages.iter().all(|m| m.read));

    // The list badge drops to the remaining AI thread
    assert_eq!(chat.total_unread(), 1);

    // Back to the list, open the AI thread, and the badge clears entirely
    chat.back();
    chat.open_conversation("2");
    assert_eq!(chat.total_unread(), 0);
}

#[test]
fn test_unliking_a_reel_from_the_feed() {
    let mut feed = FeedState::new();

    feed.toggle_like("2");
    let villa = feed
        .reels()
        .iter()
        .find(|r| r.id == "2")
        .expect("reel 2 exists");
    assert!(!villa.is_liked);
    assert_eq!(villa.likes, 3566);

    // Toggling back restores the starting engagement
    feed.toggle_like("2");
    let villa = feed.reels().iter().find(|r| r.id == "2").unwrap();
    assert!(villa.is_liked);
    assert_eq!(villa.likes, 3567);
}

#[test]
fn test_browsing_liked_reels_only() {
    let mut feed = FeedState::new();

    // Scroll down to the last reel, then narrow to liked reels
    feed.advance();
    feed.advance();
    assert_eq!(feed.active_index(), 2);

    feed.set_liked_filter(true);
    assert_eq!(feed.active_index(), 0);
    assert_eq!(feed.visible_count(), 1);
    assert_eq!(feed.active_reel().unwrap().id, "2");

    // Liking another reel widens the filtered view
    feed.toggle_like("1");
    assert_eq!(feed.visible_count(), 2);
    let ids: Vec<&str> = feed.visible_reels().iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "2"]);
}

#[test]
fn test_filtering_apartments_in_my_listings() {
    let mut profile = ProfileState::new();
    assert_eq!(profile.section(), ProfileSection::Listings);

    profile.set_category(CategoryFilter::Only(ListingCategory::Apartments));
    let visible = profile.visible_listings();
    assert_eq!(visible.len(), 2);
    assert_eq!(visible[0].title, "Modern Apartment");
    assert_eq!(visible[1].title, "Studio Apartment");

    // The featured spotlight is not narrowed by the category chip
    assert_eq!(profile.featured_listings().len(), 2);
}

#[test]
fn test_switching_sections_keeps_the_category_chip() {
    let mut profile = ProfileState::new();
    profile.set_category(CategoryFilter::Only(ListingCategory::Apartments));

    profile.set_section(ProfileSection::Sold);
    let visible = profile.visible_listings();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].title, "Sky View Apartment");

    profile.set_section(ProfileSection::Saved);
    assert_eq!(profile.visible_listings().len(), 2);
}

#[test]
fn test_reply_draft_lifecycle() {
    let mut chat = ChatState::new();
    chat.open_conversation("3");
    assert_eq!(chat.view(), &ChatView::Conversation("3".to_string()));

    // A whitespace draft is neither sent nor cleared
    chat.set_draft("  ".to_string());
    chat.send_draft();
    assert_eq!(chat.draft(), "  ");

    // A real draft clears on send; the thread itself is untouched
    let message_count = chat.conversation("3").unwrap().messages.len();
    chat.set_draft("Could I view it on Thursday?".to_string());
    chat.send_draft();
    assert_eq!(chat.draft(), "");
    assert_eq!(chat.conversation("3").unwrap().messages.len(), message_count);
}

#[test]
fn test_new_chat_compose_flow() {
    let mut chat = ChatState::new();

    chat.start_compose();
    assert_eq!(chat.view(), &ChatView::ComposeNew);

    // Tapping a suggestion fills the prompt input
    let suggestion = propreel_core::fixtures::suggested_queries()[2];
    chat.set_compose_query(suggestion.to_string());
    assert_eq!(chat.compose_query(), "Show me villas with a private pool");

    chat.back();
    assert_eq!(chat.view(), &ChatView::List);
}
